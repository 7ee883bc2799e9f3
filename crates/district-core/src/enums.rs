//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session phase. The simulation is "running" only when `Active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start signal.
    #[default]
    Briefing,
    Active,
    Paused,
    /// Player health reached zero. Terminal for the session.
    Defeated,
}

/// What an enemy did on its latest step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyBehavior {
    /// Player outside the aggro radius.
    #[default]
    Idle,
    /// Closing in on the player.
    Pursuing,
    /// Within melee radius, dealing contact damage.
    Attacking,
    /// Health reached zero.
    Dead,
}

/// Built-in scenario selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    /// The reference district layout with fixed enemy positions.
    #[default]
    District,
    /// Same district and objectives, enemies scattered from the session seed.
    Skirmish,
}

impl GamePhase {
    /// Whether the simulation systems advance in this phase.
    pub fn is_running(self) -> bool {
        self == GamePhase::Active
    }
}
