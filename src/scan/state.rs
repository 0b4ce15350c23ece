//! Scan controller state types

use serde::Serialize;

/// Phase of one scan invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanPhase {
    /// Stepping through the sweep, sampling after each step
    Scanning,
    /// Final rotate-on move toward the best-found angle
    Returning,
}

/// Smallest sensor value seen so far and the angle it was recorded at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestSample {
    /// Raw sensor value (lower = brighter)
    pub reading: u16,
    /// Cumulative scan angle at sample time (degrees)
    pub angle_degrees: u32,
}

/// Result of one complete scan-and-seek pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    /// Best sample of the sweep (baseline included at angle 0)
    pub best: BestSample,
    /// Total angle traversed during the sweep (degrees)
    pub degrees_rotated: u32,
    /// Number of step iterations performed
    pub steps: u32,
    /// Duration units issued for the final return move
    pub return_units: u32,
}
