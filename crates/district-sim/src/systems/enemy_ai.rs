//! Enemy AI system: steps every live drone toward the player and applies
//! contact damage.
//!
//! Calls the pursuit FSM from district-ai for each enemy, then writes the
//! results back to the ECS components. Contact damage from several drones in
//! the same step sums.

use hecs::World;

use district_ai::fsm::{evaluate, PursuitContext};
use district_ai::profiles::PursuitProfile;
use district_core::components::{Enemy, EnemyStatus, Hitpoints, Player, Vitals};
use district_core::types::Position;

use crate::query::WorldQuery;

/// Outcome of one AI step for the whole roster.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AiOutcome {
    /// Total contact damage dealt to the player this step.
    pub damage: f32,
    /// This step drove the player's health to zero.
    pub player_defeated: bool,
}

/// Run the enemy AI for one step.
pub fn run(
    world: &mut World,
    query: &dyn WorldQuery,
    profile: &PursuitProfile,
    dt: f32,
) -> AiOutcome {
    let player_position = match super::player_state(world) {
        Some((position, _, vitals)) if vitals.is_alive() => position,
        _ => return AiOutcome::default(),
    };

    let mut damage = 0.0;
    for (_entity, (_enemy, pos, hp, status)) in
        world.query_mut::<(&Enemy, &mut Position, &Hitpoints, &mut EnemyStatus)>()
    {
        if !hp.is_alive() {
            continue;
        }

        let ctx = PursuitContext {
            position: pos.0,
            player_position,
            distance: query.distance(pos.0, player_position),
            dt,
        };
        let update = evaluate(&ctx, profile);
        pos.0 = update.new_position;
        status.behavior = update.behavior;
        damage += update.contact_damage;
    }

    let mut outcome = AiOutcome {
        damage,
        player_defeated: false,
    };
    if damage <= 0.0 {
        return outcome;
    }

    for (_entity, (_player, vitals)) in world.query_mut::<(&Player, &mut Vitals)>() {
        vitals.health -= damage;
        if vitals.health <= 0.0 {
            vitals.health = 0.0;
            outcome.player_defeated = true;
        }
    }
    outcome
}
