//! DISTRICT host application.
//!
//! Wires the simulation to a real-time loop thread, a logging presenter and
//! an autopilot that stands in for the player in headless runs.

pub mod autopilot;
pub mod error;
pub mod game_loop;
pub mod host;
pub mod options;
pub mod presenter;
pub mod session;
pub mod state;

pub use district_core as core;
