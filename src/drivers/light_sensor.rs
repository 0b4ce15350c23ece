//! Navigation light sensor driver trait

use crate::error::Result;

/// Directional light sensor driver trait
///
/// Readings are raw ADC counts. A lower value means more light falling on
/// the sensor.
pub trait LightSensorDriver: Send {
    /// Take one brightness sample
    fn read(&mut self) -> Result<u16>;
}
