//! Scripted stand-in for a human player.
//!
//! Reads only the published snapshot, like any other presenter, and answers
//! with the input a player would give: turn toward the current goal, walk,
//! and pull the trigger when a live drone sits on the crosshair.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use district_core::enums::GamePhase;
use district_core::input::{FrameInput, LookDelta, MoveInput};
use district_core::objectives::Objective;
use district_core::state::GameStateSnapshot;
use district_core::tuning::Tuning;
use district_core::types::Facing;

/// Largest facing change per frame (radians).
const MAX_TURN: f32 = 0.1;

/// Only walk when the goal is within this angle of the facing.
const WALK_CONE: f32 = 0.5;

/// Drones closer than this are engaged before anything else.
const DEFEND_RADIUS: f32 = 12.0;

/// Stop closing on a drone at this planar distance.
const STANDOFF: f32 = 6.0;

/// Stop walking once this close to a checkpoint in the plane.
const ARRIVE: f32 = 0.75;

/// What the autopilot wants to do this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AutopilotAction {
    pub input: FrameInput,
    pub fire: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Goal {
    Checkpoint(Vec3),
    Enemy(Vec3),
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    objectives: Vec<Objective>,
    fire_range: f32,
    hit_radius: f32,
    ammo_floor: f32,
}

impl Autopilot {
    pub fn new(objectives: &[Objective], tuning: &Tuning) -> Self {
        Self {
            objectives: objectives.to_vec(),
            fire_range: tuning.fire_range,
            hit_radius: tuning.enemy_hit_radius,
            ammo_floor: tuning.ammo_floor,
        }
    }

    /// Decide the input for the frame following `snapshot`.
    pub fn plan(&self, snapshot: &GameStateSnapshot) -> AutopilotAction {
        if snapshot.phase != GamePhase::Active || !snapshot.player.alive {
            return AutopilotAction::default();
        }
        let Some(goal) = self.goal(snapshot) else {
            return AutopilotAction::default();
        };

        let eye = snapshot.camera.eye;
        let facing = Facing::new(snapshot.player.yaw, snapshot.player.pitch);
        let (target, stop_at, desired_pitch) = match goal {
            Goal::Checkpoint(position) => (position, ARRIVE, 0.0),
            Goal::Enemy(position) => {
                let planar = planar_distance(eye, position);
                (position, STANDOFF, (position.y - eye.y).atan2(planar))
            }
        };

        let yaw_error = wrap_angle(Facing::yaw_toward(eye, target) - facing.yaw);
        let look = LookDelta {
            yaw: yaw_error.clamp(-MAX_TURN, MAX_TURN),
            pitch: (desired_pitch - facing.pitch).clamp(-MAX_TURN, MAX_TURN),
        };
        let walk = yaw_error.abs() < WALK_CONE && planar_distance(eye, target) > stop_at;

        AutopilotAction {
            input: FrameInput {
                movement: MoveInput {
                    forward: walk,
                    ..Default::default()
                },
                look,
            },
            fire: matches!(goal, Goal::Enemy(_)) && self.on_crosshair(snapshot, target),
        }
    }

    fn goal(&self, snapshot: &GameStateSnapshot) -> Option<Goal> {
        let eye = snapshot.camera.eye;
        let nearest = snapshot
            .enemies
            .iter()
            .filter(|enemy| enemy.alive)
            .map(|enemy| enemy.position)
            .min_by(|a, b| a.distance(eye).total_cmp(&b.distance(eye)));

        if let Some(threat) = nearest.filter(|p| p.distance(eye) < DEFEND_RADIUS) {
            return Some(Goal::Enemy(threat));
        }

        let checkpoint = self
            .objectives
            .get(snapshot.mission.cursor)
            .and_then(|objective| objective.condition.checkpoint());
        match checkpoint {
            Some(index) => snapshot
                .checkpoints
                .iter()
                .find(|c| c.index == index)
                .map(|c| Goal::Checkpoint(c.position)),
            None => nearest.map(Goal::Enemy),
        }
    }

    /// The current look ray passes through the drone's hit volume in range.
    fn on_crosshair(&self, snapshot: &GameStateSnapshot, target: Vec3) -> bool {
        if snapshot.player.ammo <= self.ammo_floor {
            return false;
        }
        let direction = snapshot.camera.look_direction;
        let to_target = target - snapshot.camera.eye;
        let along = to_target.dot(direction);
        if along <= 0.0 || along > self.fire_range {
            return false;
        }
        (to_target - direction * along).length() < self.hit_radius * 0.8
    }
}

fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    let delta = b - a;
    Vec3::new(delta.x, 0.0, delta.z).length()
}

/// Wrap to [-PI, PI).
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use district_core::commands::PlayerCommand;
    use district_sim::config::SimConfig;
    use district_sim::scenario::{PlayerStart, Scenario};
    use district_sim::SimulationEngine;

    use district_core::objectives::ObjectiveCondition;

    use super::*;

    fn engine_with(player: Vec3, yaw: f32, enemies: Vec<Vec3>) -> SimulationEngine {
        let scenario = Scenario {
            player: PlayerStart {
                position: player,
                yaw,
                pitch: 0.0,
            },
            enemies,
            checkpoints: vec![Vec3::new(0.0, 1.7, -40.0)],
            objectives: vec![
                Objective::new(
                    "Recon",
                    "Reach the node.",
                    ObjectiveCondition::ReachCheckpoint {
                        checkpoint: 0,
                        radius: 2.5,
                    },
                ),
                Objective::new("Sweep", "Clear.", ObjectiveCondition::AllEnemiesDefeated),
            ],
        };
        let mut engine = SimulationEngine::with_scenario(SimConfig::default(), scenario).unwrap();
        engine.queue_command(PlayerCommand::StartMission);
        engine
    }

    fn pilot(engine: &SimulationEngine) -> Autopilot {
        Autopilot::new(engine.campaign().objectives(), engine.tuning())
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
        assert!((wrap_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-5);
        assert!((wrap_angle(0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_idle_before_mission_starts() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let snapshot = engine.snapshot();
        assert_eq!(pilot(&engine).plan(&snapshot), AutopilotAction::default());
    }

    #[test]
    fn test_walks_toward_checkpoint_when_facing_it() {
        let mut engine = engine_with(Vec3::new(0.0, 1.7, 0.0), PI, vec![]);
        let snapshot = engine.tick(&FrameInput::default(), 0.0);
        let action = pilot(&engine).plan(&snapshot);
        assert!(action.input.movement.forward);
        assert!(!action.fire);
        assert!(action.input.look.yaw.abs() < 1e-3);
    }

    #[test]
    fn test_turns_in_place_when_facing_away() {
        // Facing +z, node is at -z.
        let mut engine = engine_with(Vec3::new(0.0, 1.7, 0.0), 0.0, vec![]);
        let snapshot = engine.tick(&FrameInput::default(), 0.0);
        let action = pilot(&engine).plan(&snapshot);
        assert!(!action.input.movement.forward);
        assert!((action.input.look.yaw.abs() - MAX_TURN).abs() < 1e-6);
    }

    #[test]
    fn test_fires_at_aligned_threat() {
        let mut engine = engine_with(Vec3::new(0.0, 1.7, 0.0), PI, vec![Vec3::new(0.0, 1.7, -5.0)]);
        let snapshot = engine.tick(&FrameInput::default(), 0.0);
        let action = pilot(&engine).plan(&snapshot);
        assert!(action.fire);
        assert!(!action.input.movement.forward, "holds position inside standoff");
    }

    #[test]
    fn test_holds_fire_when_off_axis() {
        let mut engine = engine_with(Vec3::new(0.0, 1.7, 0.0), PI, vec![Vec3::new(8.0, 1.7, -8.0)]);
        let snapshot = engine.tick(&FrameInput::default(), 0.0);
        let action = pilot(&engine).plan(&snapshot);
        assert!(!action.fire);
        assert!(action.input.look.yaw.abs() > 0.0);
    }

    #[test]
    fn test_hunts_when_objective_has_no_checkpoint() {
        let mut engine = engine_with(
            Vec3::new(0.0, 1.7, -40.0),
            PI,
            vec![Vec3::new(0.0, 1.0, -70.0)],
        );
        // The start frame completes the recon objective.
        let snapshot = engine.tick(&FrameInput::default(), 0.0);
        assert_eq!(snapshot.mission.cursor, 1);
        let action = pilot(&engine).plan(&snapshot);
        assert!(action.input.movement.forward);
        assert!(action.input.look.pitch < 0.0, "aims down at the drone");
    }
}
