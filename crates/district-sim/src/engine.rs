//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and all session state (phase,
//! campaign, tuning, world query), processes player commands, runs all
//! systems and produces `GameStateSnapshot`s. Completely headless; the host
//! decides when to tick and with which delta time.

use std::collections::VecDeque;

use hecs::World;

use district_ai::profiles::PursuitProfile;
use district_core::commands::PlayerCommand;
use district_core::enums::GamePhase;
use district_core::events::SimEvent;
use district_core::input::FrameInput;
use district_core::state::GameStateSnapshot;
use district_core::tuning::Tuning;
use district_core::types::SimTime;

use crate::campaign::Campaign;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::query::{BoundingSphereQuery, WorldQuery};
use crate::scenario::{self, Scenario};
use crate::systems;
use crate::systems::combat::FireResult;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: Tuning,
    pursuit: PursuitProfile,
    campaign: Campaign,
    query: Box<dyn WorldQuery + Send>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine for the config's built-in scenario.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let scenario = scenario::build(config.scenario, config.seed, &config.tuning);
        Self::with_scenario(config, scenario)
    }

    /// Create an engine for a custom scenario. The config's scenario id is ignored.
    pub fn with_scenario(config: SimConfig, scenario: Scenario) -> Result<Self, SimError> {
        config.validate()?;
        scenario.validate()?;

        let mut world = World::new();
        world_setup::setup_scenario(&mut world, &scenario, &config.tuning);

        Ok(Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            pursuit: PursuitProfile::from_tuning(&config.tuning),
            query: Box::new(BoundingSphereQuery::new(config.tuning.enemy_hit_radius)),
            tuning: config.tuning,
            campaign: Campaign::new(scenario.objectives),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Replace the hit-scan collaborator.
    pub fn with_query(mut self, query: impl WorldQuery + Send + 'static) -> Self {
        self.query = Box::new(query);
        self
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// Queued commands are applied first. Systems only run while the phase
    /// is `Active`; the snapshot is produced in every phase.
    pub fn tick(&mut self, input: &FrameInput, dt: f32) -> GameStateSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.process_commands();

        if self.phase.is_running() {
            self.run_systems(input, dt);
            self.time.advance(dt);
        }

        self.snapshot()
    }

    /// Fire immediately, outside the command queue.
    ///
    /// Events produced by the shot are reported with the next snapshot.
    pub fn fire(&mut self) -> FireResult {
        systems::combat::fire(
            &mut self.world,
            self.phase.is_running(),
            self.query.as_ref(),
            &self.tuning,
            &mut self.events,
        )
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.campaign, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage a situation directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let next = match (command, self.phase) {
            (PlayerCommand::StartMission, GamePhase::Briefing) => GamePhase::Active,
            (PlayerCommand::Pause, GamePhase::Active) => GamePhase::Paused,
            (PlayerCommand::Resume, GamePhase::Paused) => GamePhase::Active,
            (PlayerCommand::Fire, _) => {
                self.fire();
                return;
            }
            (command, phase) => {
                log::debug!("ignoring {command:?} while {phase:?}");
                return;
            }
        };

        log::info!("{:?} -> {next:?} at tick {}", self.phase, self.time.tick);
        self.set_phase(next);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &FrameInput, dt: f32) {
        // 1. Facing
        systems::look::run(&mut self.world, &input.look, &self.tuning);
        // 2. Player movement
        systems::movement::run(&mut self.world, &input.movement, dt, &self.tuning);
        // 3. Enemy AI (pursuit + contact damage)
        let outcome =
            systems::enemy_ai::run(&mut self.world, self.query.as_ref(), &self.pursuit, dt);
        if outcome.player_defeated {
            // The rest of this frame still runs; later frames are frozen.
            log::info!("player defeated at tick {}", self.time.tick);
            self.events.push(SimEvent::PlayerDefeated);
            self.set_phase(GamePhase::Defeated);
        }
        // 4. Mission objectives
        systems::mission::run(
            &self.world,
            self.query.as_ref(),
            &mut self.campaign,
            &mut self.events,
        );
        // 5. Weapon energy regeneration
        systems::regen::run(&mut self.world, dt, &self.tuning);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.events.push(SimEvent::PhaseChanged { phase });
    }
}
