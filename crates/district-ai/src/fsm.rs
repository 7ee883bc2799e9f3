//! Drone pursuit state machine.
//!
//! Pure functions that compute one step of a live enemy's behavior from its
//! position and the player's. No ECS dependency, operates on plain data.
//! Dead enemies never reach this module.

use glam::Vec3;

use district_core::enums::EnemyBehavior;

use crate::profiles::PursuitProfile;

/// Input to the pursuit FSM for a single live enemy.
pub struct PursuitContext {
    pub position: Vec3,
    pub player_position: Vec3,
    /// Enemy-to-player distance as measured by the host's world query.
    pub distance: f32,
    pub dt: f32,
}

/// Output from the pursuit FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitUpdate {
    pub new_position: Vec3,
    /// Health to subtract from the player this step.
    pub contact_damage: f32,
    pub behavior: EnemyBehavior,
}

/// Evaluate one step for one enemy.
///
/// Both radius checks use the distance measured before the enemy moves, so
/// an enemy that ends its step inside the melee radius only bites on the
/// next step.
pub fn evaluate(ctx: &PursuitContext, profile: &PursuitProfile) -> PursuitUpdate {
    let to_player = ctx.player_position - ctx.position;

    let mut update = PursuitUpdate {
        new_position: ctx.position,
        contact_damage: 0.0,
        behavior: EnemyBehavior::Idle,
    };

    if ctx.distance < profile.aggro_radius {
        let step = closing_step(to_player, profile.speed * ctx.dt);
        update.new_position = ctx.position + step;
        update.behavior = EnemyBehavior::Pursuing;
    }

    if ctx.distance < profile.melee_radius {
        update.contact_damage = profile.contact_dps * ctx.dt;
        update.behavior = EnemyBehavior::Attacking;
    }

    update
}

/// Displacement toward the player, never overshooting the player's position.
fn closing_step(to_player: Vec3, max_step: f32) -> Vec3 {
    let step = max_step.clamp(0.0, to_player.length());
    to_player.normalize_or_zero() * step
}
