//! Game loop thread: runs the simulation at 60Hz against the wall clock.
//!
//! The engine is built by the caller, so configuration errors surface before
//! the thread starts. Commands and input arrive via `mpsc` channel. Snapshots
//! go to the presenter and are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use district_core::constants::FRAME_RATE;
use district_core::input::FrameInput;
use district_core::state::GameStateSnapshot;
use district_sim::clock::WallClock;
use district_sim::driver::{FrameDriver, Presenter};
use district_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the presenter back
/// once the loop exits.
pub fn spawn_game_loop<P>(
    engine: SimulationEngine,
    presenter: P,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<P>)>
where
    P: Presenter + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("district-game-loop".into())
        .spawn(move || {
            let driver = FrameDriver::new(engine, WallClock::new(), presenter);
            run_game_loop(driver, cmd_rx, &latest_snapshot)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<P: Presenter>(
    mut driver: FrameDriver<WallClock, P>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> P {
    let mut input = FrameInput::default();
    let mut next_frame_time = Instant::now();

    'frames: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    driver.engine_mut().queue_command(cmd);
                }
                Ok(GameLoopCommand::Input(sampled)) => merge_input(&mut input, sampled),
                Ok(GameLoopCommand::Shutdown) => break 'frames,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames,
            }
        }

        // 2. Advance one frame (engine handles pause semantics internally)
        let snapshot = driver.run_frame(&input);
        input.look = Default::default();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }

    log::debug!("game loop stopped at tick {}", driver.engine().time().tick);
    let (_, _, presenter) = driver.into_parts();
    presenter
}

/// Held keys are level state; look deltas are edge state and accumulate.
fn merge_input(held: &mut FrameInput, sampled: FrameInput) {
    held.movement = sampled.movement;
    held.look.accumulate(sampled.look);
}
