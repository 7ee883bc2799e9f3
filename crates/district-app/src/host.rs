//! Host entry points.
//!
//! The embedding platform calls these to start the loop, forward commands
//! and input, and poll the latest state. They bridge to the game loop thread
//! via channels.

use std::thread::JoinHandle;

use district_core::commands::PlayerCommand;
use district_core::input::FrameInput;
use district_core::state::GameStateSnapshot;
use district_sim::driver::Presenter;
use district_sim::SimulationEngine;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation<P>(
    state: &AppState,
    engine: SimulationEngine,
    presenter: P,
) -> Result<JoinHandle<P>, AppError>
where
    P: Presenter + Send + 'static,
{
    let mut running = state.running.lock().map_err(|e| AppError::Channel(e.to_string()))?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(engine, presenter, state.latest_snapshot.clone())?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| AppError::Channel(e.to_string()))?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    log::info!("game loop started");
    Ok(handle)
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    send(state, GameLoopCommand::Player(command))
}

/// Send the latest sampled input.
pub fn send_input(state: &AppState, input: FrameInput) -> Result<(), AppError> {
    send(state, GameLoopCommand::Input(input))
}

/// Get the latest snapshot, `None` before the first frame.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|e| AppError::Channel(e.to_string()))?;
    Ok(lock.clone())
}

/// Ask the game loop to stop. The thread handle reports when it has.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|e| AppError::Channel(e.to_string()))?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| AppError::Channel(e.to_string()))?;

    let tx = tx_lock.take().ok_or(AppError::NotStarted)?;
    // A loop that already exited has nothing left to stop.
    let _ = tx.send(GameLoopCommand::Shutdown);
    *running = false;

    log::info!("game loop stopping");
    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|e| AppError::Channel(e.to_string()))?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| AppError::Channel(format!("failed to send command: {e}"))),
        None => Err(AppError::NotStarted),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use district_core::enums::GamePhase;
    use district_sim::config::SimConfig;

    use super::*;
    use crate::presenter::LogPresenter;

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::StartMission),
            Err(AppError::NotStarted)
        ));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let handle = start_simulation(&state, engine, LogPresenter::default()).unwrap();

        let again = SimulationEngine::new(SimConfig::default()).unwrap();
        assert!(matches!(
            start_simulation(&state, again, LogPresenter::default()),
            Err(AppError::AlreadyRunning)
        ));

        stop_simulation(&state).unwrap();
        handle.join().unwrap();
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_pause_resume_via_host() {
        let state = AppState::new();
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let handle = start_simulation(&state, engine, LogPresenter::default()).unwrap();

        send_command(&state, PlayerCommand::StartMission).unwrap();
        send_command(&state, PlayerCommand::Pause).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Paused);

        stop_simulation(&state).unwrap();
        let presenter = handle.join().unwrap();
        assert!(presenter.frames() > 0);
    }
}
