//! Frame driver: one full step per presented frame.
//!
//! Pulls the delta time from a [`Clock`], ticks the engine and hands the
//! snapshot to a [`Presenter`]. Scheduling the next frame is left to the host.

use district_core::events::SimEvent;
use district_core::input::FrameInput;
use district_core::state::{GameStateSnapshot, HudView};

use crate::clock::Clock;
use crate::engine::SimulationEngine;

/// Presentation collaborator. Owns all rendering and layout.
pub trait Presenter {
    /// Render one frame of the given state.
    fn present(&mut self, snapshot: &GameStateSnapshot);

    /// The active objective changed (or the campaign ended).
    fn objective_changed(&mut self, _hud: &HudView) {}
}

pub struct FrameDriver<C: Clock, P: Presenter> {
    engine: SimulationEngine,
    clock: C,
    presenter: P,
}

impl<C: Clock, P: Presenter> FrameDriver<C, P> {
    pub fn new(engine: SimulationEngine, clock: C, presenter: P) -> Self {
        Self {
            engine,
            clock,
            presenter,
        }
    }

    /// Run one frame and return its snapshot.
    pub fn run_frame(&mut self, input: &FrameInput) -> GameStateSnapshot {
        let dt = self.clock.delta_secs();
        let snapshot = self.engine.tick(input, dt);

        let objective_moved = snapshot.events.iter().any(|event| {
            matches!(
                event,
                SimEvent::ObjectiveChanged { .. } | SimEvent::CampaignComplete
            )
        });
        if objective_moved {
            self.presenter.objective_changed(&snapshot.hud);
        }

        self.presenter.present(&snapshot);
        snapshot
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_parts(self) -> (SimulationEngine, C, P) {
        (self.engine, self.clock, self.presenter)
    }
}
