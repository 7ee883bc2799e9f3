//! Combat system: hit-scan fire resolution.
//!
//! On a valid fire request: spend one shot of weapon energy, cast a ray from
//! the player along the full look direction against live enemies only, and
//! apply one unit of damage to the nearest one hit. Invalid requests are
//! silent no-ops that neither spend energy nor cast a ray.

use hecs::World;
use serde::{Deserialize, Serialize};

use district_core::components::{Enemy, EnemyId, EnemyStatus, Hitpoints, Player, Vitals};
use district_core::enums::EnemyBehavior;
use district_core::events::SimEvent;
use district_core::tuning::Tuning;
use district_core::types::{Facing, Position};

use crate::query::{Ray, Target, WorldQuery};

/// Result of one fire request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireResult {
    /// A shot was actually fired (preconditions held).
    pub fired: bool,
    /// Enemy hit by the shot, if any.
    pub hit: Option<EnemyId>,
    /// The hit enemy's health reached zero.
    pub defeated: bool,
}

/// Resolve one fire request.
pub fn fire(
    world: &mut World,
    running: bool,
    query: &dyn WorldQuery,
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) -> FireResult {
    if !running {
        return FireResult::default();
    }

    let Some(ray) = spend_shot(world, tuning, events) else {
        return FireResult::default();
    };

    let candidates = live_targets(world);
    let Some(target) = query.nearest_hit(&ray, &candidates) else {
        log::debug!("shot missed");
        return FireResult {
            fired: true,
            ..Default::default()
        };
    };

    let defeated = apply_hit(world, target, tuning.shot_damage, events);
    FireResult {
        fired: true,
        hit: Some(target),
        defeated,
    }
}

/// Check the player can fire, spend the energy and build the shot ray.
fn spend_shot(world: &mut World, tuning: &Tuning, events: &mut Vec<SimEvent>) -> Option<Ray> {
    let (_entity, (_player, pos, facing, vitals)) = world
        .query_mut::<(&Player, &Position, &Facing, &mut Vitals)>()
        .into_iter()
        .next()?;

    if !vitals.is_alive() || vitals.ammo <= tuning.ammo_floor {
        return None;
    }

    vitals.ammo = (vitals.ammo - tuning.ammo_per_shot).clamp(0.0, tuning.max_ammo);
    events.push(SimEvent::ShotFired {
        ammo_left: vitals.ammo,
    });

    Some(Ray {
        origin: pos.0,
        direction: facing.look_direction(),
        max_distance: tuning.fire_range,
    })
}

/// Live enemies, the only valid hit-scan candidates.
pub fn live_targets(world: &World) -> Vec<Target> {
    let mut targets: Vec<Target> = world
        .query::<(&Enemy, &EnemyId, &Position, &Hitpoints)>()
        .iter()
        .filter(|(_, (_, _, _, hp))| hp.is_alive())
        .map(|(_, (_, id, pos, _))| Target {
            id: *id,
            position: pos.0,
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}

/// Damage the enemy with `target` id. Returns whether it died.
fn apply_hit(world: &mut World, target: EnemyId, damage: i32, events: &mut Vec<SimEvent>) -> bool {
    for (_entity, (_enemy, id, hp, status)) in
        world.query_mut::<(&Enemy, &EnemyId, &mut Hitpoints, &mut EnemyStatus)>()
    {
        if *id != target || !hp.is_alive() {
            continue;
        }

        hp.0 = (hp.0 - damage).max(0);
        status.hurt = true;

        if hp.is_alive() {
            log::debug!("enemy {} hit, {} health left", id.0, hp.0);
            events.push(SimEvent::EnemyHit {
                enemy: *id,
                health_left: hp.0,
            });
            return false;
        }

        log::debug!("enemy {} defeated", id.0);
        status.behavior = EnemyBehavior::Dead;
        events.push(SimEvent::EnemyDefeated { enemy: *id });
        return true;
    }
    false
}
