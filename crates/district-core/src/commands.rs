//! Discrete player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so a fire
//! request never interleaves with a tick.

use serde::{Deserialize, Serialize};

/// All discrete player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the briefing and start the session.
    StartMission,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Fire the pulse weapon along the current facing.
    Fire,
}
