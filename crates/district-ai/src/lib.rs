//! Enemy AI for DISTRICT.
//!
//! Implements the drone pursuit state machine: idle outside the aggro
//! radius, closing in inside it, dealing contact damage inside the melee
//! radius.

pub mod fsm;
pub mod profiles;

pub use district_core as core;

#[cfg(test)]
mod tests;
