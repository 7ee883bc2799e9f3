//! Gameplay tuning parameters.
//!
//! Every field has a reference default from [`crate::constants`]; a config
//! document only needs to name the values it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tunable gameplay parameters read by every system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub arena_half_width_x: f32,
    pub arena_half_length_z: f32,

    pub max_health: f32,
    pub max_ammo: f32,
    pub ammo_per_shot: f32,
    pub ammo_floor: f32,
    pub ammo_regen_per_sec: f32,
    pub fire_range: f32,
    pub shot_damage: i32,

    pub look_sensitivity_yaw: f32,
    pub look_sensitivity_pitch: f32,
    pub pitch_limit: f32,

    pub enemy_start_health: i32,
    pub enemy_aggro_radius: f32,
    pub enemy_melee_radius: f32,
    pub enemy_speed: f32,
    pub enemy_contact_dps: f32,
    pub enemy_hit_radius: f32,

    pub checkpoint_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            arena_half_width_x: ARENA_HALF_WIDTH_X,
            arena_half_length_z: ARENA_HALF_LENGTH_Z,
            max_health: PLAYER_MAX_HEALTH,
            max_ammo: PLAYER_MAX_AMMO,
            ammo_per_shot: AMMO_PER_SHOT,
            ammo_floor: AMMO_FLOOR,
            ammo_regen_per_sec: AMMO_REGEN_PER_SEC,
            fire_range: FIRE_RANGE,
            shot_damage: SHOT_DAMAGE,
            look_sensitivity_yaw: LOOK_SENSITIVITY_YAW,
            look_sensitivity_pitch: LOOK_SENSITIVITY_PITCH,
            pitch_limit: PITCH_LIMIT,
            enemy_start_health: ENEMY_START_HEALTH,
            enemy_aggro_radius: ENEMY_AGGRO_RADIUS,
            enemy_melee_radius: ENEMY_MELEE_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_contact_dps: ENEMY_CONTACT_DPS,
            enemy_hit_radius: ENEMY_HIT_RADIUS,
            checkpoint_radius: CHECKPOINT_RADIUS,
        }
    }
}

impl Tuning {
    /// Check that the values describe a playable session.
    ///
    /// Returns the name of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("arena_half_width_x", self.arena_half_width_x),
            ("arena_half_length_z", self.arena_half_length_z),
            ("max_health", self.max_health),
            ("max_ammo", self.max_ammo),
            ("ammo_per_shot", self.ammo_per_shot),
            ("fire_range", self.fire_range),
            ("enemy_aggro_radius", self.enemy_aggro_radius),
            ("enemy_melee_radius", self.enemy_melee_radius),
            ("enemy_hit_radius", self.enemy_hit_radius),
            ("checkpoint_radius", self.checkpoint_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }

        let non_negative = [
            ("ammo_floor", self.ammo_floor),
            ("ammo_regen_per_sec", self.ammo_regen_per_sec),
            ("enemy_speed", self.enemy_speed),
            ("enemy_contact_dps", self.enemy_contact_dps),
            ("pitch_limit", self.pitch_limit),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must not be negative, got {value}"));
            }
        }

        if self.enemy_start_health <= 0 {
            return Err("enemy_start_health must be positive".into());
        }
        if self.shot_damage <= 0 {
            return Err("shot_damage must be positive".into());
        }
        Ok(())
    }
}
