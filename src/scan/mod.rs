//! Scan-and-seek control

pub mod controller;
pub mod events;
pub mod state;

pub use controller::ScanController;
pub use events::{ChannelSink, EventSink, LogSink, ScanEvent};
pub use state::{BestSample, ScanOutcome, ScanPhase};
