//! Game state snapshot: the complete visible state handed to presentation each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::EnemyId;
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete state broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub camera: CameraPose,
    pub hud: HudView,
    pub enemies: Vec<EnemyView>,
    pub checkpoints: Vec<CheckpointView>,
    pub mission: MissionView,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub ammo: f32,
    pub alive: bool,
}

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraPose {
    pub eye: Vec3,
    /// Unit look direction, pitch included.
    pub look_direction: Vec3,
}

/// HUD text lines, already formatted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub status: String,
    pub ammo: String,
    pub mission: String,
    pub objective: String,
    /// Full-screen message for the defeated state.
    pub banner: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Vec3,
    pub health: i32,
    pub alive: bool,
    pub behavior: EnemyBehavior,
    pub hurt: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointView {
    pub index: usize,
    pub position: Vec3,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionView {
    /// Index of the active objective; equals `total` once the campaign is complete.
    pub cursor: usize,
    pub total: usize,
    pub complete: bool,
}
