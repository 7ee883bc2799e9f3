//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use district_core::components::*;
use district_core::enums::GamePhase;
use district_core::events::SimEvent;
use district_core::state::*;
use district_core::types::{Facing, Position, SimTime};

use crate::campaign::Campaign;

pub const CAMPAIGN_COMPLETE_MISSION: &str = "Mission: campaign complete";
pub const CAMPAIGN_COMPLETE_OBJECTIVE: &str = "Objective: You are a legend of the district.";
pub const DEFEATED_BANNER: &str = "You have fallen. Restart the session to try again.";

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    campaign: &Campaign,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let player = build_player(world);

    GameStateSnapshot {
        time: *time,
        phase,
        camera: build_camera(world),
        hud: build_hud(&player, phase, campaign),
        player,
        enemies: build_enemies(world),
        checkpoints: build_checkpoints(world, campaign.cursor()),
        mission: MissionView {
            cursor: campaign.cursor(),
            total: campaign.len(),
            complete: campaign.is_complete(),
        },
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    super::player_state(world)
        .map(|(position, facing, vitals)| PlayerView {
            position,
            yaw: facing.yaw,
            pitch: facing.pitch,
            health: vitals.health,
            ammo: vitals.ammo,
            alive: vitals.is_alive(),
        })
        .unwrap_or_default()
}

/// Camera sits at the player's eye and looks along the full facing.
fn build_camera(world: &World) -> CameraPose {
    world
        .query::<(&Player, &Position, &Facing)>()
        .iter()
        .next()
        .map(|(_, (_, pos, facing))| CameraPose {
            eye: pos.0,
            look_direction: facing.look_direction(),
        })
        .unwrap_or_default()
}

/// Format the HUD lines.
pub fn build_hud(player: &PlayerView, phase: GamePhase, campaign: &Campaign) -> HudView {
    let status = if player.alive { "alive" } else { "down" };
    let (mission, objective) = match campaign.active() {
        Some(active) => (
            format!("Mission: {}", active.name),
            format!("Objective: {}", active.description),
        ),
        None => (
            CAMPAIGN_COMPLETE_MISSION.to_string(),
            CAMPAIGN_COMPLETE_OBJECTIVE.to_string(),
        ),
    };

    HudView {
        status: format!("Status: {status}"),
        ammo: format!("Weapon energy: {}", player.ammo.round() as i32),
        mission,
        objective,
        banner: (phase == GamePhase::Defeated).then(|| DEFEATED_BANNER.to_string()),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EnemyId, &Position, &Hitpoints, &EnemyStatus)>()
        .iter()
        .map(|(_, (_, id, pos, hp, status))| EnemyView {
            id: *id,
            position: pos.0,
            health: hp.0,
            alive: hp.is_alive(),
            behavior: status.behavior,
            hurt: status.hurt,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Completed checkpoints older than the previous one are hidden.
fn build_checkpoints(world: &World, cursor: usize) -> Vec<CheckpointView> {
    let mut checkpoints: Vec<CheckpointView> = world
        .query::<(&Checkpoint, &Position)>()
        .iter()
        .map(|(_, (checkpoint, pos))| CheckpointView {
            index: checkpoint.index,
            position: pos.0,
            visible: checkpoint.index + 1 >= cursor,
        })
        .collect();

    checkpoints.sort_by_key(|c| c.index);
    checkpoints
}
