//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::components::EnemyId;
use crate::enums::GamePhase;

/// Something that happened during a tick (or while processing its commands).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Session phase changed.
    PhaseChanged { phase: GamePhase },
    /// A shot was fired (hit or miss).
    ShotFired { ammo_left: f32 },
    /// An enemy took a hit and survived.
    EnemyHit { enemy: EnemyId, health_left: i32 },
    /// An enemy's health reached zero.
    EnemyDefeated { enemy: EnemyId },
    /// The mission cursor advanced to a new objective.
    ObjectiveChanged {
        cursor: usize,
        mission: String,
        objective: String,
    },
    /// The mission cursor reached the end of the campaign.
    CampaignComplete,
    /// Player health reached zero.
    PlayerDefeated,
}
