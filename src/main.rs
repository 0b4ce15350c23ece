//! JyotiScan - light-seeking scan daemon
//!
//! Runs scan-and-seek trials against the simulated platform rig until
//! shutdown. Each trial performs one full sweep and re-orients the platform
//! onto the brightest bearing found.

use jyoti_scan::config::AppConfig;
use jyoti_scan::devices::mock::MockRig;
use jyoti_scan::drivers::Clock;
use jyoti_scan::error::{Error, Result};
use jyoti_scan::scan::events::LogSink;
use jyoti_scan::scan::ScanController;
use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `jyoti-scan <path>` (positional)
/// - `jyoti-scan --config <path>` (flag-based)
/// - `jyoti-scan -c <path>` (short flag)
///
/// Defaults to `/etc/jyotiscan.toml` if not specified.
fn parse_config_path() -> String {
    let args: Vec<String> = env::args().collect();

    // Look for --config or -c flag
    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }

    // Fall back to first positional argument (if it doesn't start with -)
    if args.len() > 1 && !args[1].starts_with('-') {
        return args[1].clone();
    }

    // Default path
    "/etc/jyotiscan.toml".to_string()
}

fn main() -> Result<()> {
    let config_path = parse_config_path();
    let config = if Path::new(&config_path).exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    // Initialize logger; RUST_LOG overrides the configured level
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.clone()),
    );
    match config.logging.output.as_str() {
        "stdout" => builder.target(env_logger::Target::Stdout),
        _ => builder.target(env_logger::Target::Stderr),
    };
    builder.init();

    log::info!("JyotiScan v0.1.0 starting...");
    log::info!("Using config: {}", config_path);

    // Set up shutdown signal handler
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);

    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    // Build the simulated platform
    let rig = MockRig::new(&config.platform, &config.simulation);
    let mut motor = rig.motor();
    let mut sensor = rig.sensor();
    let mut clock = rig.clock();
    let mut controller = ScanController::new(&config.platform).with_sink(Box::new(LogSink));

    log::info!(
        "Simulated light source at {:.0}deg (seed {}, noise stddev {})",
        config.simulation.light_bearing_degrees,
        config.simulation.random_seed,
        config.simulation.noise_stddev
    );
    log::info!("JyotiScan running. Press Ctrl-C to stop.");

    let mut trials: u32 = 0;
    while running.load(Ordering::Relaxed) {
        let outcome = controller.run(&mut motor, &mut sensor, &mut clock)?;
        trials += 1;

        log::info!(
            "trial {}: best reading {} at {}deg, heading now {:.1}deg",
            trials,
            outcome.best.reading,
            outcome.best.angle_degrees,
            rig.heading_degrees()
        );

        if config.trial.max_trials != 0 && trials >= config.trial.max_trials {
            break;
        }
        clock.pause(config.trial.pause_units)?;
    }

    log::info!("JyotiScan stopped after {} trials", trials);
    Ok(())
}
