//! Mock platform for hardware-free scanning
//!
//! Simulates the rotation actuator, clock and light sensor of the platform
//! behind the standard driver traits, so the scan controller runs unchanged
//! against simulation.
//!
//! | Component | Simulation method |
//! |-----------|-------------------|
//! | Motor | Running flag; heading advances while paused with the motor on |
//! | Clock | Unit counter, optionally mapped to scaled wall time |
//! | Light sensor | Directional light field sampled at the current heading |
//!
//! Physics: the actuator rotates at a fixed rate of one step (2 degrees)
//! per `step_duration_units` clock units. Pauses issued while the motor
//! runs advance the heading; pauses after a halt only advance time. Every
//! pause, turn and halt is recorded for inspection.
//!
//! # Module structure
//!
//! - [`light_sim`]: directional light-field simulation
//! - [`noise`]: seedable Gaussian noise generator
//! - [`scripted`]: scripted-sequence sensor for deterministic tests

pub mod light_sim;
pub mod noise;
pub mod scripted;

pub use light_sim::LightFieldSimulator;
pub use noise::NoiseGenerator;
pub use scripted::ScriptedSensor;

use crate::config::{PlatformConfig, SimulationConfig};
use crate::drivers::{Clock, LightSensorDriver, MotorDriver};
use crate::error::Result;
use crate::scan::controller::STEP_DEGREES;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Shared rig state updated through the driver handles
#[derive(Debug)]
struct RigState {
    /// Cumulative rotation since construction (degrees, CCW positive)
    rotation_degrees: f32,
    motor_running: bool,
    elapsed_units: u64,
    /// Recorded pause durations, in issue order
    pauses: Vec<u32>,
    turn_commands: u32,
    halt_commands: u32,
}

/// Mock platform rig
///
/// Owns the shared state and hands out [`MockMotor`], [`MockClock`] and
/// [`SimulatedLightSensor`] handles implementing the driver traits.
pub struct MockRig {
    state: Arc<Mutex<RigState>>,
    field: Arc<Mutex<LightFieldSimulator>>,
    degrees_per_unit: f32,
    unit_duration: Duration,
}

impl MockRig {
    /// Create a rig from platform calibration and simulation parameters
    pub fn new(platform: &PlatformConfig, simulation: &SimulationConfig) -> Self {
        let state = RigState {
            rotation_degrees: 0.0,
            motor_running: false,
            elapsed_units: 0,
            pauses: Vec::new(),
            turn_commands: 0,
            halt_commands: 0,
        };

        let wall_micros = if simulation.speed_factor > 0.0 {
            (simulation.unit_micros as f32 / simulation.speed_factor) as u64
        } else {
            0
        };

        Self {
            state: Arc::new(Mutex::new(state)),
            field: Arc::new(Mutex::new(LightFieldSimulator::new(simulation))),
            degrees_per_unit: STEP_DEGREES as f32 / platform.step_duration_units as f32,
            unit_duration: Duration::from_micros(wall_micros),
        }
    }

    /// Motor driver handle
    pub fn motor(&self) -> MockMotor {
        MockMotor {
            state: Arc::clone(&self.state),
        }
    }

    /// Clock handle
    pub fn clock(&self) -> MockClock {
        MockClock {
            state: Arc::clone(&self.state),
            degrees_per_unit: self.degrees_per_unit,
            unit_duration: self.unit_duration,
        }
    }

    /// Light sensor handle
    pub fn sensor(&self) -> SimulatedLightSensor {
        SimulatedLightSensor {
            state: Arc::clone(&self.state),
            field: Arc::clone(&self.field),
        }
    }

    /// Current heading, wrapped to [0, 360)
    pub fn heading_degrees(&self) -> f32 {
        self.state.lock().rotation_degrees.rem_euclid(360.0)
    }

    /// Cumulative rotation since construction (degrees, unwrapped)
    pub fn total_rotation_degrees(&self) -> f32 {
        self.state.lock().rotation_degrees
    }

    /// Total clock units elapsed
    pub fn elapsed_units(&self) -> u64 {
        self.state.lock().elapsed_units
    }

    /// Recorded pause durations, in issue order
    pub fn pauses(&self) -> Vec<u32> {
        self.state.lock().pauses.clone()
    }

    /// Issued (turn, halt) command counts
    pub fn command_counts(&self) -> (u32, u32) {
        let state = self.state.lock();
        (state.turn_commands, state.halt_commands)
    }
}

/// Mock rotation motor
pub struct MockMotor {
    state: Arc<Mutex<RigState>>,
}

impl MotorDriver for MockMotor {
    fn turn_left(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        state.motor_running = true;
        state.turn_commands += 1;
        Ok(())
    }

    fn halt(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        state.motor_running = false;
        state.halt_commands += 1;
        Ok(())
    }
}

/// Mock clock driving the rig physics
pub struct MockClock {
    state: Arc<Mutex<RigState>>,
    degrees_per_unit: f32,
    unit_duration: Duration,
}

impl Clock for MockClock {
    fn pause(&mut self, units: u32) -> Result<()> {
        {
            let mut state = self.state.lock();
            state.pauses.push(units);
            state.elapsed_units += u64::from(units);
            if state.motor_running {
                state.rotation_degrees += units as f32 * self.degrees_per_unit;
            }
        }

        // Map units to scaled wall time; zero-length units run the rig as
        // fast as the simulation can go.
        let wall = self.unit_duration * units;
        if !wall.is_zero() {
            std::thread::sleep(wall);
        }
        Ok(())
    }
}

/// Simulated directional light sensor
pub struct SimulatedLightSensor {
    state: Arc<Mutex<RigState>>,
    field: Arc<Mutex<LightFieldSimulator>>,
}

impl LightSensorDriver for SimulatedLightSensor {
    fn read(&mut self) -> Result<u16> {
        let heading = self.state.lock().rotation_degrees;
        Ok(self.field.lock().reading(heading))
    }
}
