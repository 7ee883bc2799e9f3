//! Scenario definitions: where everything starts and what the campaign asks for.
//!
//! Scenarios are plain data so hosts can author their own; the built-in ones
//! reproduce the reference district.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use district_core::enums::ScenarioId;
use district_core::objectives::{Objective, ObjectiveCondition};
use district_core::tuning::Tuning;

use crate::error::SimError;

/// Player spawn pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStart {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// A complete starting layout plus its campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub player: PlayerStart,
    /// Enemy spawn positions; enemy ids follow this order.
    pub enemies: Vec<Vec3>,
    pub checkpoints: Vec<Vec3>,
    pub objectives: Vec<Objective>,
}

/// Build a built-in scenario.
pub fn build(id: ScenarioId, seed: u64, tuning: &Tuning) -> Scenario {
    match id {
        ScenarioId::District => district(tuning),
        ScenarioId::Skirmish => skirmish(seed, tuning),
    }
}

/// The reference district: four drones along the main road, three scan nodes.
pub fn district(tuning: &Tuning) -> Scenario {
    Scenario {
        player: default_player_start(),
        enemies: vec![
            Vec3::new(8.0, 1.0, -25.0),
            Vec3::new(-10.0, 1.0, -38.0),
            Vec3::new(5.0, 1.0, -58.0),
            Vec3::new(2.0, 1.0, -90.0),
        ],
        checkpoints: district_checkpoints(),
        objectives: district_objectives(tuning),
    }
}

/// Same district and campaign, drones scattered along the road from `seed`.
pub fn skirmish(seed: u64, tuning: &Tuning) -> Scenario {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let enemies = (0..4)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-12.0..12.0),
                1.0,
                rng.gen_range(-100.0..-20.0),
            )
        })
        .collect();

    Scenario {
        player: default_player_start(),
        enemies,
        checkpoints: district_checkpoints(),
        objectives: district_objectives(tuning),
    }
}

impl Scenario {
    /// Check that every objective refers to an existing checkpoint.
    pub fn validate(&self) -> Result<(), SimError> {
        for (objective, entry) in self.objectives.iter().enumerate() {
            if let Some(checkpoint) = entry.condition.checkpoint() {
                if checkpoint >= self.checkpoints.len() {
                    return Err(SimError::UnknownCheckpoint {
                        objective,
                        checkpoint,
                    });
                }
            }
        }
        Ok(())
    }
}

fn default_player_start() -> PlayerStart {
    PlayerStart {
        position: Vec3::new(0.0, 1.7, 30.0),
        yaw: std::f32::consts::PI,
        pitch: -0.04,
    }
}

fn district_checkpoints() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.2, -15.0),
        Vec3::new(-7.0, 0.2, -52.0),
        Vec3::new(4.0, 0.2, -100.0),
    ]
}

fn district_objectives(tuning: &Tuning) -> Vec<Objective> {
    let radius = tuning.checkpoint_radius;
    vec![
        Objective::new(
            "Urban Recon",
            "Reach the first scan point.",
            ObjectiveCondition::ReachCheckpoint {
                checkpoint: 0,
                radius,
            },
        ),
        Objective::new(
            "District Sweep",
            "Neutralize 3 hostile drones with your pulse weapon.",
            ObjectiveCondition::LiveEnemiesAtMost { count: 1 },
        ),
        Objective::new(
            "Data Delivery",
            "Carry the data to the last node in the district.",
            ObjectiveCondition::ReachCheckpoint {
                checkpoint: 2,
                radius,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_layout() {
        let scenario = district(&Tuning::default());
        assert_eq!(scenario.enemies.len(), 4);
        assert_eq!(scenario.checkpoints.len(), 3);
        assert_eq!(scenario.objectives.len(), 3);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_checkpoint_radius_follows_tuning() {
        let tuning = Tuning {
            checkpoint_radius: 4.0,
            ..Default::default()
        };
        let scenario = district(&tuning);
        assert_eq!(
            scenario.objectives[0].condition,
            ObjectiveCondition::ReachCheckpoint {
                checkpoint: 0,
                radius: 4.0
            }
        );
    }

    #[test]
    fn test_skirmish_is_deterministic_per_seed() {
        let tuning = Tuning::default();
        assert_eq!(skirmish(9, &tuning), skirmish(9, &tuning));
        assert_ne!(skirmish(9, &tuning).enemies, skirmish(10, &tuning).enemies);
    }

    #[test]
    fn test_skirmish_stays_on_the_road() {
        let scenario = skirmish(1234, &Tuning::default());
        for enemy in &scenario.enemies {
            assert!((-12.0..12.0).contains(&enemy.x));
            assert!((-100.0..-20.0).contains(&enemy.z));
        }
    }

    #[test]
    fn test_unknown_checkpoint_rejected() {
        let mut scenario = district(&Tuning::default());
        scenario.checkpoints.truncate(2);
        let err = scenario.validate().unwrap_err();
        assert!(matches!(
            err,
            SimError::UnknownCheckpoint {
                objective: 2,
                checkpoint: 2
            }
        ));
    }
}
