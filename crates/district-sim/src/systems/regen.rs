//! Passive weapon energy regeneration.

use hecs::World;

use district_core::components::{Player, Vitals};
use district_core::tuning::Tuning;

/// Regenerate ammo at the tuned rate, never beyond the maximum.
pub fn run(world: &mut World, dt: f32, tuning: &Tuning) {
    for (_entity, (_player, vitals)) in world.query_mut::<(&Player, &mut Vitals)>() {
        vitals.ammo = (vitals.ammo + tuning.ammo_regen_per_sec * dt).clamp(0.0, tuning.max_ammo);
    }
}
