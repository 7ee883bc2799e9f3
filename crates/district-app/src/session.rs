//! Whole-session runners used by the binary.
//!
//! Both start the mission, let the autopilot play and stop early on defeat.
//! The headless runner steps a fixed 60Hz clock as fast as it can; the
//! real-time runner drives the game loop thread through the host API.

use std::time::{Duration, Instant};

use district_core::commands::PlayerCommand;
use district_core::constants::{FRAME_DT, FRAME_RATE};
use district_core::enums::GamePhase;
use district_core::state::GameStateSnapshot;
use district_sim::clock::FixedClock;
use district_sim::config::SimConfig;
use district_sim::driver::FrameDriver;
use district_sim::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::error::AppError;
use crate::game_loop::FRAME_DURATION;
use crate::host;
use crate::presenter::LogPresenter;
use crate::state::AppState;

/// Run `seconds` of simulated time on a fixed clock. Returns the last snapshot.
pub fn run_headless(config: SimConfig, seconds: f32) -> Result<GameStateSnapshot, AppError> {
    let mut engine = SimulationEngine::new(config)?;
    let autopilot = Autopilot::new(engine.campaign().objectives(), engine.tuning());
    engine.queue_command(PlayerCommand::StartMission);

    let mut driver = FrameDriver::new(engine, FixedClock::new(FRAME_DT), LogPresenter::default());
    let frames = (seconds * FRAME_RATE as f32).round() as u64;

    let mut snapshot = driver.engine_mut().snapshot();
    for _ in 0..frames {
        let action = autopilot.plan(&snapshot);
        if action.fire {
            driver.engine_mut().queue_command(PlayerCommand::Fire);
        }
        snapshot = driver.run_frame(&action.input);
        if snapshot.phase == GamePhase::Defeated {
            break;
        }
    }

    log::info!(
        "headless run finished after {} frames ({} HUD updates)",
        driver.presenter().frames(),
        driver.presenter().hud_updates()
    );
    Ok(snapshot)
}

/// Run for `seconds` of wall time on the game loop thread.
///
/// Returns the last published snapshot, `None` if no frame completed.
pub fn run_realtime(config: SimConfig, seconds: f32) -> Result<Option<GameStateSnapshot>, AppError> {
    let engine = SimulationEngine::new(config)?;
    let autopilot = Autopilot::new(engine.campaign().objectives(), engine.tuning());

    let state = AppState::new();
    let handle = host::start_simulation(&state, engine, LogPresenter::default())?;
    host::send_command(&state, PlayerCommand::StartMission)?;

    let deadline = Instant::now() + Duration::from_secs_f32(seconds);
    let mut last_tick = None;
    while Instant::now() < deadline {
        if let Some(snapshot) = host::get_snapshot(&state)? {
            if snapshot.phase == GamePhase::Defeated {
                break;
            }
            // Act once per simulated frame.
            if last_tick != Some(snapshot.time.tick) {
                last_tick = Some(snapshot.time.tick);
                let action = autopilot.plan(&snapshot);
                if action.fire {
                    host::send_command(&state, PlayerCommand::Fire)?;
                }
                host::send_input(&state, action.input)?;
            }
        }
        std::thread::sleep(FRAME_DURATION / 2);
    }

    host::stop_simulation(&state)?;
    let presenter = handle.join().map_err(|_| AppError::LoopPanicked)?;
    log::info!("real-time run finished after {} frames", presenter.frames());

    host::get_snapshot(&state)
}
