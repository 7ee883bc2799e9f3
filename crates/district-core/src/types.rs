//! Fundamental geometric and simulation types.
//!
//! World axes: x = lateral, y = up, z = along the district's main road.
//! Facing is camera-relative: yaw rotates about +y, pitch tilts up/down.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera-relative facing of the player (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub yaw: f32,
    pub pitch: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that advanced the simulation.
    pub tick: u64,
    /// Elapsed simulated time in seconds.
    pub elapsed_secs: f64,
}

impl Facing {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Horizontal forward vector. Pitch does not affect translation.
    pub fn planar_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Horizontal right vector, perpendicular to `planar_forward`.
    pub fn planar_right(&self) -> Vec3 {
        let forward = self.planar_forward();
        Vec3::new(forward.z, 0.0, -forward.x)
    }

    /// Full look direction including pitch (unit length).
    pub fn look_direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize_or_zero()
    }

    /// Yaw that faces from `from` toward `to` in the horizontal plane.
    pub fn yaw_toward(from: Vec3, to: Vec3) -> f32 {
        let delta = to - from;
        delta.x.atan2(delta.z)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// World-space position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}
