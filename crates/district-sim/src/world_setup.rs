//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, enemy drones and checkpoint landmarks with their
//! component bundles.

use glam::Vec3;
use hecs::World;

use district_core::components::*;
use district_core::tuning::Tuning;
use district_core::types::{Facing, Position};

use crate::scenario::{PlayerStart, Scenario};

/// Populate an empty world from a scenario. Returns the player entity.
pub fn setup_scenario(world: &mut World, scenario: &Scenario, tuning: &Tuning) -> hecs::Entity {
    let player = spawn_player(world, &scenario.player, tuning);
    for (id, position) in scenario.enemies.iter().enumerate() {
        spawn_enemy(world, EnemyId(id as u32), *position, tuning);
    }
    for (index, position) in scenario.checkpoints.iter().enumerate() {
        spawn_checkpoint(world, index, *position);
    }
    player
}

/// Spawn the player at full health and full weapon energy.
pub fn spawn_player(world: &mut World, start: &PlayerStart, tuning: &Tuning) -> hecs::Entity {
    world.spawn((
        Player,
        Position(start.position),
        Facing::new(start.yaw, start.pitch),
        Vitals {
            health: tuning.max_health,
            ammo: tuning.max_ammo,
        },
    ))
}

/// Spawn a drone at full health.
pub fn spawn_enemy(world: &mut World, id: EnemyId, position: Vec3, tuning: &Tuning) -> hecs::Entity {
    world.spawn((
        Enemy,
        id,
        Position(position),
        Hitpoints(tuning.enemy_start_health),
        EnemyStatus::default(),
    ))
}

pub fn spawn_checkpoint(world: &mut World, index: usize, position: Vec3) -> hecs::Entity {
    world.spawn((Checkpoint { index }, Position(position)))
}
