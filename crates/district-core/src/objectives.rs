//! Mission objectives and their completion predicates.
//!
//! A predicate is a pure function of the current world state. Objectives are
//! immutable once defined; only the campaign cursor moves.

use serde::{Deserialize, Serialize};

/// Read-only world state handed to objective predicates.
#[derive(Debug, Clone, Copy)]
pub struct WorldView<'a> {
    /// Player-to-checkpoint distances as measured by the world query,
    /// indexed like the scenario's checkpoint list.
    pub checkpoint_distances: &'a [f32],
    pub live_enemies: usize,
    pub total_enemies: usize,
}

/// Completion predicate of an objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectiveCondition {
    /// Player within `radius` of checkpoint `checkpoint`.
    ReachCheckpoint { checkpoint: usize, radius: f32 },
    /// At most `count` enemies still alive.
    LiveEnemiesAtMost { count: usize },
    /// No enemy left alive.
    AllEnemiesDefeated,
}

/// One stage of the campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub name: String,
    pub description: String,
    pub condition: ObjectiveCondition,
}

impl ObjectiveCondition {
    /// Evaluate against the current world state.
    ///
    /// A checkpoint index outside the view never holds; scenarios are
    /// validated before a session starts.
    pub fn holds(&self, view: &WorldView<'_>) -> bool {
        match *self {
            ObjectiveCondition::ReachCheckpoint { checkpoint, radius } => view
                .checkpoint_distances
                .get(checkpoint)
                .is_some_and(|distance| *distance < radius),
            ObjectiveCondition::LiveEnemiesAtMost { count } => view.live_enemies <= count,
            ObjectiveCondition::AllEnemiesDefeated => view.live_enemies == 0,
        }
    }

    /// Checkpoint referenced by this condition, if any.
    pub fn checkpoint(&self) -> Option<usize> {
        match *self {
            ObjectiveCondition::ReachCheckpoint { checkpoint, .. } => Some(checkpoint),
            _ => None,
        }
    }
}

impl Objective {
    pub fn new(name: &str, description: &str, condition: ObjectiveCondition) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            condition,
        }
    }
}
