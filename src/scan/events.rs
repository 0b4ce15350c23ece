//! Structured scan events and sinks
//!
//! The original firmware printed readings on a serial channel that only
//! existed in debug builds. The same information is emitted here as
//! structured events through a runtime-configurable sink, so a harness can
//! observe a scan without recompiling. Sinks never affect control flow.

use crate::scan::state::ScanPhase;
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

/// Structured events emitted during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ScanEvent {
    /// Baseline sample taken before any rotation
    Baseline {
        /// Raw sensor value at angle 0
        reading: u16,
    },
    /// Sample taken after a step
    Reading {
        /// Cumulative scan angle (degrees)
        angle_degrees: u32,
        /// Raw sensor value
        reading: u16,
    },
    /// A sample strictly beat the previous best
    NewBest {
        /// Angle of the new best (degrees)
        angle_degrees: u32,
        /// New best reading
        reading: u16,
        /// Reading it replaced
        previous: u16,
    },
    /// Phase transition
    PhaseChanged {
        /// Phase being entered
        phase: ScanPhase,
    },
    /// Scan finished; final rotate-on move was issued
    Complete {
        /// Angle of the best sample (degrees)
        best_angle_degrees: u32,
        /// Best reading of the sweep
        best_reading: u16,
        /// Total angle traversed (degrees)
        degrees_rotated: u32,
        /// Duration units of the return move
        return_units: u32,
    },
}

/// Sink receiving scan events
pub trait EventSink: Send {
    /// Record one event
    fn record(&mut self, event: &ScanEvent);
}

/// Sink forwarding events to the log facade at debug level
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: &ScanEvent) {
        match event {
            ScanEvent::Baseline { reading } => {
                log::debug!("baseline reading = {}", reading);
            }
            ScanEvent::Reading {
                angle_degrees,
                reading,
            } => {
                log::debug!("reading at {}deg = {}", angle_degrees, reading);
            }
            ScanEvent::NewBest {
                angle_degrees,
                reading,
                previous,
            } => {
                log::debug!(
                    "new best reading {} at {}deg (previous {})",
                    reading,
                    angle_degrees,
                    previous
                );
            }
            ScanEvent::PhaseChanged { phase } => {
                log::debug!("phase: {:?}", phase);
            }
            ScanEvent::Complete {
                best_angle_degrees,
                best_reading,
                degrees_rotated,
                return_units,
            } => {
                log::debug!(
                    "complete: best {} at {}deg, rotated {}deg, return {} units",
                    best_reading,
                    best_angle_degrees,
                    degrees_rotated,
                    return_units
                );
            }
        }
    }
}

/// Sink pushing events onto a bounded channel
///
/// Non-blocking: when the channel is full the event is dropped. Event
/// streaming is best-effort.
pub struct ChannelSink {
    tx: Sender<ScanEvent>,
}

impl ChannelSink {
    /// Create a sink with the given capacity, returning the receiving end
    pub fn new(capacity: usize) -> (Self, Receiver<ScanEvent>) {
        let (tx, rx) = bounded(capacity);
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn record(&mut self, event: &ScanEvent) {
        if self.tx.try_send(*event).is_err() && log::log_enabled!(log::Level::Trace) {
            log::trace!("event channel full, dropped {:?}", event);
        }
    }
}
