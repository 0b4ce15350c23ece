//! Device implementations
//!
//! Physical drivers live outside this crate; what ships here is the mock
//! platform used for hardware-free development and testing.

pub mod mock;
