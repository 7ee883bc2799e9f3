use env_logger::Env;

use district_app::error::AppError;
use district_app::options::{RunOptions, USAGE};
use district_app::session;
use district_sim::config::SimConfig;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let options = RunOptions::from_args(std::env::args().skip(1))?;
    if options.help {
        eprintln!("{USAGE}");
        return Ok(());
    }

    let config = match &options.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    log::info!(
        "DISTRICT: scenario {:?}, seed {}, {}s{}",
        config.scenario,
        config.seed,
        options.seconds,
        if options.realtime { " (real time)" } else { "" }
    );

    let last = if options.realtime {
        session::run_realtime(config, options.seconds)?
    } else {
        Some(session::run_headless(config, options.seconds)?)
    };

    match last {
        Some(snapshot) => {
            log::info!(
                "final: {:?} at t={:.1}s, {} | {} | objectives {}/{}",
                snapshot.phase,
                snapshot.time.elapsed_secs,
                snapshot.hud.status,
                snapshot.hud.ammo,
                snapshot.mission.cursor,
                snapshot.mission.total
            );
            println!("{}", serde_json::to_string_pretty(&snapshot.mission).unwrap_or_default());
        }
        None => log::warn!("no frame completed"),
    }
    Ok(())
}
