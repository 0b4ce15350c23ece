//! Light-seeking scan controller
//!
//! Drives the rotation actuator through a full revolution in fixed 2-degree
//! steps, samples the light sensor after each step, and keeps the smallest
//! (brightest) sample. Once the sweep completes the motor turns on in the
//! same direction until the best angle comes around again, then halts.

use crate::config::PlatformConfig;
use crate::drivers::{Clock, LightSensorDriver, MotorDriver};
use crate::error::Result;
use crate::scan::events::{EventSink, ScanEvent};
use crate::scan::state::{BestSample, ScanOutcome, ScanPhase};

/// Angular increment per step (degrees)
pub const STEP_DEGREES: u32 = 2;

/// Full sweep span (degrees)
pub const FULL_REVOLUTION_DEGREES: u32 = 360;

/// Light-seeking scan controller
///
/// Holds the platform timing calibration and an optional event sink. Each
/// [`run`](ScanController::run) pass is self-contained; no scan state is
/// carried between passes.
pub struct ScanController {
    /// Duration units the motor runs to rotate one step
    step_units: u32,
    /// Settling delay after each halt before sampling (units)
    settle_units: u32,
    /// Optional structured event sink
    sink: Option<Box<dyn EventSink>>,
}

impl ScanController {
    /// Create a controller from platform timing calibration
    pub fn new(platform: &PlatformConfig) -> Self {
        Self {
            step_units: platform.step_duration_units,
            settle_units: platform.settle_units,
            sink: None,
        }
    }

    /// Attach a structured event sink
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    fn emit(&mut self, event: ScanEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink.record(&event);
        }
    }

    /// Perform one full scan-and-seek pass
    ///
    /// Reads a baseline sample before moving, sweeps a full revolution in
    /// fixed steps keeping the smallest sample seen (strict comparison, so
    /// the earliest angle wins ties), then turns onward to the best angle
    /// and halts there. Driver errors propagate unchanged; there are no
    /// retries and no recovery.
    pub fn run<M, S, C>(&mut self, motor: &mut M, sensor: &mut S, clock: &mut C) -> Result<ScanOutcome>
    where
        M: MotorDriver,
        S: LightSensorDriver,
        C: Clock,
    {
        self.emit(ScanEvent::PhaseChanged {
            phase: ScanPhase::Scanning,
        });

        let mut degrees_rotated: u32 = 0;
        let baseline = sensor.read()?;
        let mut best = BestSample {
            reading: baseline,
            angle_degrees: 0,
        };
        self.emit(ScanEvent::Baseline { reading: baseline });
        log::debug!("baseline reading {}", baseline);

        let mut steps: u32 = 0;
        while degrees_rotated < FULL_REVOLUTION_DEGREES {
            motor.turn_left()?;
            clock.pause(self.step_units)?;
            motor.halt()?;
            clock.pause(self.settle_units)?;
            degrees_rotated += STEP_DEGREES;
            steps += 1;

            let reading = sensor.read()?;
            self.emit(ScanEvent::Reading {
                angle_degrees: degrees_rotated,
                reading,
            });
            if reading < best.reading {
                self.emit(ScanEvent::NewBest {
                    angle_degrees: degrees_rotated,
                    reading,
                    previous: best.reading,
                });
                log::debug!(
                    "new best reading {} at {}deg (previous {})",
                    reading,
                    degrees_rotated,
                    best.reading
                );
                best = BestSample {
                    reading,
                    angle_degrees: degrees_rotated,
                };
            }
        }

        self.emit(ScanEvent::PhaseChanged {
            phase: ScanPhase::Returning,
        });

        // The best angle divided by the step size is the number of steps to
        // re-reach it; the motor keeps turning the same direction past the
        // wrap point.
        let return_units = (best.angle_degrees / STEP_DEGREES) * self.step_units;
        motor.turn_left()?;
        clock.pause(return_units)?;
        motor.halt()?;

        let outcome = ScanOutcome {
            best,
            degrees_rotated,
            steps,
            return_units,
        };
        self.emit(ScanEvent::Complete {
            best_angle_degrees: best.angle_degrees,
            best_reading: best.reading,
            degrees_rotated,
            return_units,
        });
        log::info!(
            "scan complete: best reading {} at {}deg, rotated {}deg, return move {} units",
            best.reading,
            best.angle_degrees,
            degrees_rotated,
            return_units
        );

        Ok(outcome)
    }
}
