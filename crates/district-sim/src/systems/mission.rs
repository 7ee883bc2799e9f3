//! Mission system: evaluates the active objective against the world and
//! advances the campaign cursor.

use glam::Vec3;
use hecs::World;

use district_core::components::{Checkpoint, Enemy, Hitpoints};
use district_core::events::SimEvent;
use district_core::objectives::WorldView;
use district_core::types::Position;

use crate::campaign::{Campaign, MissionTransition};
use crate::query::WorldQuery;

/// Run one mission step. Emits an event when the cursor moves.
///
/// Checkpoint distances are measured by `query`, so hosts with their own
/// geometry decide what "within reach" means.
pub fn run(
    world: &World,
    query: &dyn WorldQuery,
    campaign: &mut Campaign,
    events: &mut Vec<SimEvent>,
) {
    if campaign.is_complete() {
        return;
    }
    let Some((player_position, _, _)) = super::player_state(world) else {
        return;
    };

    let distances: Vec<f32> = checkpoint_positions(world)
        .into_iter()
        .map(|checkpoint| query.distance(player_position, checkpoint))
        .collect();
    let (live_enemies, total_enemies) = enemy_counts(world);
    let view = WorldView {
        checkpoint_distances: &distances,
        live_enemies,
        total_enemies,
    };

    match campaign.step(&view) {
        Some(MissionTransition::Advanced { cursor }) => {
            if let Some(objective) = campaign.active() {
                log::info!("objective {} complete, next: {}", cursor - 1, objective.name);
                events.push(SimEvent::ObjectiveChanged {
                    cursor,
                    mission: objective.name.clone(),
                    objective: objective.description.clone(),
                });
            }
        }
        Some(MissionTransition::Completed) => {
            log::info!("campaign complete");
            events.push(SimEvent::CampaignComplete);
        }
        None => {}
    }
}

/// Checkpoint positions ordered by checkpoint index.
fn checkpoint_positions(world: &World) -> Vec<Vec3> {
    let mut checkpoints: Vec<(usize, Vec3)> = world
        .query::<(&Checkpoint, &Position)>()
        .iter()
        .map(|(_, (checkpoint, pos))| (checkpoint.index, pos.0))
        .collect();
    checkpoints.sort_by_key(|(index, _)| *index);
    checkpoints.into_iter().map(|(_, pos)| pos).collect()
}

/// (live, total) enemy counts.
fn enemy_counts(world: &World) -> (usize, usize) {
    let mut query = world.query::<(&Enemy, &Hitpoints)>();
    query
        .iter()
        .fold((0, 0), |(live, total), (_, (_, hp))| {
            (live + usize::from(hp.is_alive()), total + 1)
        })
}
