//! Configuration for the JyotiScan daemon
//!
//! Loads configuration from a TOML file. Every parameter has a default
//! matching the reference platform, so a minimal file (or none at all) is
//! enough to run against the mock rig.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub trial: TrialConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Platform timing calibration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformConfig {
    /// Clock units the motor runs to rotate one 2-degree step
    ///
    /// Calibration constant measured empirically on the physical platform:
    /// the duration of a rotation command that yields a 2-degree turn.
    #[serde(default = "default_step_duration_units")]
    pub step_duration_units: u32,

    /// Settling delay after each halt before sampling (units)
    #[serde(default = "default_settle_units")]
    pub settle_units: u32,
}

fn default_step_duration_units() -> u32 {
    28
}
fn default_settle_units() -> u32 {
    5
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            step_duration_units: default_step_duration_units(),
            settle_units: default_settle_units(),
        }
    }
}

/// Mock rig simulation parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Bearing of the simulated light source (degrees, CCW from the start
    /// heading)
    #[serde(default = "default_light_bearing")]
    pub light_bearing_degrees: f32,

    /// Peak directional response at the source bearing (ADC counts
    /// subtracted from the ambient floor)
    #[serde(default = "default_light_strength")]
    pub light_strength: f32,

    /// Sensor output with no directional light (ADC counts)
    #[serde(default = "default_ambient_level")]
    pub ambient_level: f32,

    /// Gaussian read-noise standard deviation (ADC counts)
    #[serde(default = "default_noise_stddev")]
    pub noise_stddev: f32,

    /// ADC width in bits
    #[serde(default = "default_sensor_bits")]
    pub sensor_bits: u8,

    /// Random seed for reproducible noise (0 = random each run)
    #[serde(default)]
    pub random_seed: u64,

    /// Wall-clock microseconds per duration unit (0 = run at full speed)
    #[serde(default = "default_unit_micros")]
    pub unit_micros: u64,

    /// Simulation speed multiplier (1.0 = real-time)
    #[serde(default = "default_speed_factor")]
    pub speed_factor: f32,
}

fn default_light_bearing() -> f32 {
    120.0
}
fn default_light_strength() -> f32 {
    850.0
}
fn default_ambient_level() -> f32 {
    900.0
}
fn default_noise_stddev() -> f32 {
    4.0
}
fn default_sensor_bits() -> u8 {
    10
}
fn default_unit_micros() -> u64 {
    1000
}
fn default_speed_factor() -> f32 {
    1.0
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            light_bearing_degrees: default_light_bearing(),
            light_strength: default_light_strength(),
            ambient_level: default_ambient_level(),
            noise_stddev: default_noise_stddev(),
            sensor_bits: default_sensor_bits(),
            random_seed: 0,
            unit_micros: default_unit_micros(),
            speed_factor: default_speed_factor(),
        }
    }
}

/// Trial pacing for the daemon loop
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrialConfig {
    /// Pause between trials (units)
    #[serde(default = "default_trial_pause_units")]
    pub pause_units: u32,

    /// Stop after this many trials (0 = run until shutdown)
    #[serde(default)]
    pub max_trials: u32,
}

fn default_trial_pause_units() -> u32 {
    5000
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            pause_units: default_trial_pause_units(),
            max_trials: 0,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output (stdout or stderr)
    #[serde(default = "default_log_output")]
    pub output: String,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_output() -> String {
    "stdout".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            output: default_log_output(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if self.platform.step_duration_units == 0 {
            return Err(Error::InvalidParameter(
                "platform.step_duration_units must be positive".to_string(),
            ));
        }
        if self.simulation.sensor_bits == 0 || self.simulation.sensor_bits > 16 {
            return Err(Error::InvalidParameter(format!(
                "simulation.sensor_bits must be 1-16, got {}",
                self.simulation.sensor_bits
            )));
        }
        Ok(())
    }
}
