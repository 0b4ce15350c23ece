//! Blocking delay primitive

use crate::error::Result;

/// Blocking delay provider, in platform duration units
///
/// One unit is the tick the rotation calibration is expressed in: the
/// per-step rotation duration and the post-halt settling delay are both
/// given in these units.
pub trait Clock: Send {
    /// Block for the given number of duration units
    fn pause(&mut self, units: u32) -> Result<()>;
}
