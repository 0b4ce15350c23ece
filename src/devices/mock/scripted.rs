//! Scripted light sensor for deterministic tests

use crate::drivers::LightSensorDriver;
use crate::error::Result;

/// Sensor replaying a fixed sequence of readings
///
/// The first value is consumed by the baseline read; subsequent values are
/// consumed one per step. When the script runs out, the final value
/// repeats.
pub struct ScriptedSensor {
    script: Vec<u16>,
    index: usize,
}

impl ScriptedSensor {
    /// Create a sensor from a non-empty reading script
    pub fn new(script: Vec<u16>) -> Self {
        assert!(!script.is_empty(), "reading script must not be empty");
        Self { script, index: 0 }
    }
}

impl LightSensorDriver for ScriptedSensor {
    fn read(&mut self) -> Result<u16> {
        let i = self.index.min(self.script.len() - 1);
        self.index += 1;
        Ok(self.script[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_then_repeats_last() {
        let mut sensor = ScriptedSensor::new(vec![100, 90, 80]);

        assert_eq!(sensor.read().unwrap(), 100);
        assert_eq!(sensor.read().unwrap(), 90);
        assert_eq!(sensor.read().unwrap(), 80);
        assert_eq!(sensor.read().unwrap(), 80);
        assert_eq!(sensor.read().unwrap(), 80);
    }
}
