//! Core types and definitions for the DISTRICT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, frame input, objectives, state snapshots, events,
//! tuning and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod objectives;
pub mod state;
pub mod tuning;
pub mod types;
