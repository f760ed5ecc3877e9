use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use tracing::{error, info};

use tilestrike_app::autopilot;
use tilestrike_app::config::RunConfig;
use tilestrike_app::error::AppError;
use tilestrike_app::game_loop::{self, TICK_DURATION};
use tilestrike_app::state::{LoopCommand, Outcome, SharedFrame};
use tilestrike_sim::{load_level, SimConfig};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn run(config: &RunConfig) -> Result<Outcome, AppError> {
    let level = config.load_level()?;
    let sim_config = SimConfig {
        seed: config.seed,
        tuning: config.load_tuning()?,
        ..Default::default()
    };
    info!(
        level = %config.level_path.display(),
        seed = config.seed,
        realtime = config.realtime,
        "starting run"
    );

    if !config.realtime {
        let mut sim = load_level(&level, sim_config)?;
        return Ok(game_loop::run_headless(
            &mut sim,
            config.max_steps,
            autopilot::drive,
        )?);
    }

    let latest: SharedFrame = Arc::new(Mutex::new(None));
    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(level, sim_config, latest.clone(), config.max_steps)?;

    // Feed the autopilot from the latest published frame until the loop ends.
    while !handle.is_finished() {
        std::thread::sleep(TICK_DURATION);
        let intent = match latest.lock() {
            Ok(frame) => frame.as_ref().map(autopilot::drive),
            Err(_) => None,
        };
        if let Some(intent) = intent {
            if cmd_tx.send(LoopCommand::Intent(intent)).is_err() {
                break;
            }
        }
    }

    handle.join().map_err(|_| AppError::LoopPanicked)?
}

fn main() -> ExitCode {
    init_tracing();

    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(outcome) => {
            println!(
                "{:?} after {} steps: {} kills, {} shots, {} health left",
                outcome.run_state, outcome.steps, outcome.kills, outcome.shots, outcome.health
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}
