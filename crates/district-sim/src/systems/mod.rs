//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or in
//! the engine.

use glam::Vec3;
use hecs::World;

use district_core::components::{Player, Vitals};
use district_core::types::{Facing, Position};

pub mod combat;
pub mod enemy_ai;
pub mod look;
pub mod mission;
pub mod movement;
pub mod regen;
pub mod snapshot;

/// Position, facing and vitals of the player, if one is spawned.
pub fn player_state(world: &World) -> Option<(Vec3, Facing, Vitals)> {
    world
        .query::<(&Player, &Position, &Facing, &Vitals)>()
        .iter()
        .next()
        .map(|(_, (_, pos, facing, vitals))| (pos.0, *facing, *vitals))
}
