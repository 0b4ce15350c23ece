//! Rotation motor driver trait

use crate::error::Result;

/// Rotation actuator driver trait
///
/// The platform has a single continuous-rotation actuator. Rotation runs
/// until [`halt`](MotorDriver::halt) is issued; step granularity comes from
/// timing the command, not from the motor itself.
pub trait MotorDriver: Send {
    /// Start continuous counter-clockwise rotation
    fn turn_left(&mut self) -> Result<()>;

    /// Stop rotation immediately
    fn halt(&mut self) -> Result<()>;
}
