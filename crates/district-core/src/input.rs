//! Level-state input sampled once per tick.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

/// Facing change accumulated since the previous tick (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LookDelta {
    pub yaw: f32,
    pub pitch: f32,
}

/// Everything the host samples for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub movement: MoveInput,
    pub look: LookDelta,
}

impl LookDelta {
    /// Convert pointer movement in pixels to a facing change.
    ///
    /// Pointer right decreases yaw, pointer down decreases pitch.
    pub fn from_mouse(dx: f32, dy: f32, tuning: &Tuning) -> Self {
        Self {
            yaw: -dx * tuning.look_sensitivity_yaw,
            pitch: -dy * tuning.look_sensitivity_pitch,
        }
    }

    /// Accumulate another delta (several pointer events per frame).
    pub fn accumulate(&mut self, other: LookDelta) {
        self.yaw += other.yaw;
        self.pitch += other.pitch;
    }
}
