//! Simulation constants and reference tuning values.
//!
//! These are the defaults behind [`crate::tuning::Tuning`]; systems read the
//! tuning, never these constants directly.

/// Nominal frame rate of the host loop (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

/// Largest single step a wall clock may report (seconds).
pub const MAX_FRAME_DELTA: f32 = 0.25;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_MAX_AMMO: f32 = 100.0;

/// Walking speed (units/s).
pub const WALK_SPEED: f32 = 12.0;

/// Sprinting speed (units/s).
pub const SPRINT_SPEED: f32 = 20.0;

// --- Arena bounds ---

pub const ARENA_HALF_WIDTH_X: f32 = 95.0;
pub const ARENA_HALF_LENGTH_Z: f32 = 205.0;

// --- Look ---

/// Yaw radians per pointer pixel.
pub const LOOK_SENSITIVITY_YAW: f32 = 0.0024;

/// Pitch radians per pointer pixel.
pub const LOOK_SENSITIVITY_PITCH: f32 = 0.0018;

/// Pitch is clamped to +/- this value (radians).
pub const PITCH_LIMIT: f32 = 1.1;

// --- Weapon ---

/// Hit-scan range (units).
pub const FIRE_RANGE: f32 = 120.0;

/// Ammo consumed per shot.
pub const AMMO_PER_SHOT: f32 = 1.0;

/// Firing requires ammo strictly above this floor.
pub const AMMO_FLOOR: f32 = 1.0;

/// Passive ammo regeneration (units/s).
pub const AMMO_REGEN_PER_SEC: f32 = 4.5;

/// Damage per hit, in enemy health units.
pub const SHOT_DAMAGE: i32 = 1;

// --- Enemies ---

pub const ENEMY_START_HEALTH: i32 = 3;

/// Distance within which an enemy starts pursuing the player.
pub const ENEMY_AGGRO_RADIUS: f32 = 40.0;

/// Distance within which an enemy deals contact damage.
pub const ENEMY_MELEE_RADIUS: f32 = 1.7;

/// Enemy closing speed (units/s).
pub const ENEMY_SPEED: f32 = 2.2;

/// Contact damage per enemy (HP/s).
pub const ENEMY_CONTACT_DPS: f32 = 12.0;

/// Bounding radius used for hit-scan queries (capsule radius 0.65 + half length 0.55).
pub const ENEMY_HIT_RADIUS: f32 = 1.2;

// --- Missions ---

/// Distance below which the player counts as standing on a checkpoint.
pub const CHECKPOINT_RADIUS: f32 = 2.5;
