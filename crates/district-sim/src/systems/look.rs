//! Applies the frame's facing change to the player.

use hecs::World;

use district_core::components::Player;
use district_core::input::LookDelta;
use district_core::tuning::Tuning;
use district_core::types::Facing;

/// Add the look delta to the player's facing; pitch stays within the limit.
pub fn run(world: &mut World, look: &LookDelta, tuning: &Tuning) {
    for (_entity, (_player, facing)) in world.query_mut::<(&Player, &mut Facing)>() {
        facing.yaw += look.yaw;
        facing.pitch = (facing.pitch + look.pitch).clamp(-tuning.pitch_limit, tuning.pitch_limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_clamped() {
        let tuning = Tuning::default();
        let mut world = World::new();
        let player = world.spawn((Player, Facing::new(0.0, 0.0)));

        run(&mut world, &LookDelta { yaw: 0.5, pitch: 3.0 }, &tuning);
        {
            let facing = world.get::<&Facing>(player).unwrap();
            assert_eq!(facing.yaw, 0.5);
            assert_eq!(facing.pitch, 1.1);
        }

        run(&mut world, &LookDelta { yaw: 0.0, pitch: -5.0 }, &tuning);
        let facing = world.get::<&Facing>(player).unwrap();
        assert_eq!(facing.pitch, -1.1);
    }
}
