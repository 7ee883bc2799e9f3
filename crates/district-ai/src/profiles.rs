//! Behavioral profile for pursuing drones.

use district_core::tuning::Tuning;

/// Pursuit parameters for one enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitProfile {
    /// Distance within which the drone chases the player.
    pub aggro_radius: f32,
    /// Distance within which the drone deals contact damage.
    pub melee_radius: f32,
    /// Closing speed (units/s).
    pub speed: f32,
    /// Contact damage (HP/s).
    pub contact_dps: f32,
}

impl PursuitProfile {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            aggro_radius: tuning.enemy_aggro_radius,
            melee_radius: tuning.enemy_melee_radius,
            speed: tuning.enemy_speed,
            contact_dps: tuning.enemy_contact_dps,
        }
    }
}

impl Default for PursuitProfile {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}
