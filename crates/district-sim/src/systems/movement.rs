//! Player movement integration.
//!
//! Turns held movement keys and the current yaw into a displacement, adds it
//! to the player's position and clamps the result to the arena. Pitch never
//! affects translation and y is left untouched.

use glam::Vec3;
use hecs::World;

use district_core::components::Player;
use district_core::input::MoveInput;
use district_core::tuning::Tuning;
use district_core::types::{Facing, Position};

/// Run movement for the player entity.
pub fn run(world: &mut World, input: &MoveInput, dt: f32, tuning: &Tuning) {
    for (_entity, (_player, pos, facing)) in world.query_mut::<(&Player, &mut Position, &Facing)>()
    {
        pos.0 = step(pos.0, facing, input, dt, tuning);
    }
}

/// One movement step: new position from current position, facing and input.
pub fn step(position: Vec3, facing: &Facing, input: &MoveInput, dt: f32, tuning: &Tuning) -> Vec3 {
    let speed = if input.sprint {
        tuning.sprint_speed
    } else {
        tuning.walk_speed
    };

    let forward = facing.planar_forward();
    let right = facing.planar_right();

    let mut wish = Vec3::ZERO;
    if input.forward {
        wish += forward;
    }
    if input.back {
        wish -= forward;
    }
    if input.left {
        wish -= right;
    }
    if input.right {
        wish += right;
    }

    let moved = position + wish.normalize_or_zero() * speed * dt.max(0.0);
    clamp_to_arena(moved, tuning)
}

/// Clamp x and z to the arena rectangle.
pub fn clamp_to_arena(position: Vec3, tuning: &Tuning) -> Vec3 {
    Vec3::new(
        position
            .x
            .clamp(-tuning.arena_half_width_x, tuning.arena_half_width_x),
        position.y,
        position
            .z
            .clamp(-tuning.arena_half_length_z, tuning.arena_half_length_z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn held(forward: bool, back: bool, left: bool, right: bool, sprint: bool) -> MoveInput {
        MoveInput {
            forward,
            back,
            left,
            right,
            sprint,
        }
    }

    #[test]
    fn test_walk_forward() {
        let tuning = Tuning::default();
        let facing = Facing::new(0.0, 0.0);
        let pos = step(Vec3::ZERO, &facing, &held(true, false, false, false, false), 1.0, &tuning);
        assert!((pos.z - 12.0).abs() < EPS);
        assert!(pos.x.abs() < EPS);
    }

    #[test]
    fn test_sprint_speed() {
        let tuning = Tuning::default();
        let facing = Facing::new(0.0, 0.0);
        let pos = step(Vec3::ZERO, &facing, &held(true, false, false, false, true), 0.5, &tuning);
        assert!((pos.z - 10.0).abs() < EPS);
    }

    #[test]
    fn test_pitch_does_not_affect_translation() {
        let tuning = Tuning::default();
        let input = held(true, false, false, false, false);
        let level = step(Vec3::ZERO, &Facing::new(0.3, 0.0), &input, 1.0, &tuning);
        let tilted = step(Vec3::ZERO, &Facing::new(0.3, 1.0), &input, 1.0, &tuning);
        assert!(level.distance(tilted) < EPS);
        assert_eq!(tilted.y, 0.0);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let tuning = Tuning::default();
        let facing = Facing::new(0.0, 0.0);
        let pos = step(Vec3::ZERO, &facing, &held(true, false, false, true, false), 1.0, &tuning);
        assert!((pos.length() - 12.0).abs() < EPS);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let tuning = Tuning::default();
        let facing = Facing::new(1.0, 0.0);
        let start = Vec3::new(1.0, 1.7, 2.0);
        let pos = step(start, &facing, &held(true, true, true, true, true), 1.0, &tuning);
        assert_eq!(pos, start);
    }

    #[test]
    fn test_strafe_uses_right_vector() {
        let tuning = Tuning::default();
        let facing = Facing::new(0.0, 0.0);
        let pos = step(Vec3::ZERO, &facing, &held(false, false, false, true, false), 1.0, &tuning);
        // Facing +z, right is +x.
        assert!((pos.x - 12.0).abs() < EPS);
        let pos = step(Vec3::ZERO, &facing, &held(false, false, true, false, false), 1.0, &tuning);
        assert!((pos.x + 12.0).abs() < EPS);
    }

    #[test]
    fn test_clamped_to_arena_for_any_input() {
        let tuning = Tuning::default();
        let combos = (0..32u8).map(|bits| {
            held(
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
                bits & 16 != 0,
            )
        });
        for input in combos {
            for yaw in [0.0, 0.8, 2.4, -1.9] {
                for dt in [0.0, 0.016, 1.0, 50.0] {
                    let start = Vec3::new(94.0, 1.7, -204.0);
                    let pos = step(start, &Facing::new(yaw, 0.0), &input, dt, &tuning);
                    assert!(pos.x.abs() <= 95.0 && pos.z.abs() <= 205.0, "{pos:?}");
                    assert_eq!(pos.y, 1.7);
                }
            }
        }
    }

    #[test]
    fn test_run_moves_player_entity() {
        let tuning = Tuning::default();
        let mut world = World::new();
        let player = world.spawn((Player, Position::new(0.0, 1.7, 0.0), Facing::new(0.0, 0.0)));
        run(&mut world, &held(true, false, false, false, false), 0.5, &tuning);
        let pos = world.get::<&Position>(player).unwrap();
        assert!((pos.0.z - 6.0).abs() < EPS);
    }
}
