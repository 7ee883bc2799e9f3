//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, not
//! components. Positions and facing are defined in [`crate::types`].

use serde::{Deserialize, Serialize};

use crate::enums::EnemyBehavior;

/// Marks the player entity. Exactly one per world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Player health and weapon energy, both clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: f32,
    pub ammo: f32,
}

/// Marks an enemy drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Stable enemy identity, assigned in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Remaining enemy health. The enemy is alive while this is above zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hitpoints(pub i32);

/// Presentation-facing enemy status. Carries no gameplay effect.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EnemyStatus {
    pub behavior: EnemyBehavior,
    /// Set once the enemy has taken a hit.
    pub hurt: bool,
}

/// A mission landmark. `index` is its position in the scenario's checkpoint list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Checkpoint {
    pub index: usize,
}

impl Vitals {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

impl Hitpoints {
    pub fn is_alive(&self) -> bool {
        self.0 > 0
    }
}
