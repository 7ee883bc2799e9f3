//! Simulation engine for DISTRICT.
//!
//! Owns the hecs ECS world, runs the movement, enemy AI, combat and mission
//! systems once per frame, and produces GameStateSnapshots for presentation.

pub mod campaign;
pub mod clock;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod query;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use district_core as core;
pub use engine::SimulationEngine;
pub use error::SimError;
