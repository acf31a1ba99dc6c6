//! Battery Monitor Interface
//!
//! The battery voltage is sampled by a board-specific ADC channel outside this
//! crate; drivers and diagnostics consume it only through [`BatteryMonitor`].

use crate::platform::Result;

/// Battery voltage source
pub trait BatteryMonitor {
    /// Bring up the measurement channel
    fn init(&mut self) -> Result<()>;

    /// Most recent battery voltage in millivolts
    fn voltage_mv(&mut self) -> u32;
}

/// Mock battery monitor for testing
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct MockBattery {
    voltage_mv: u32,
    fail_init: bool,
    initialized: bool,
}

#[cfg(any(test, feature = "mock"))]
impl MockBattery {
    /// Monitor reporting a fixed voltage
    pub fn new(voltage_mv: u32) -> Self {
        Self {
            voltage_mv,
            ..Default::default()
        }
    }

    /// Make `init` fail
    pub fn fail_init(&mut self) {
        self.fail_init = true;
    }

    /// Change the reported voltage
    pub fn set_voltage_mv(&mut self, voltage_mv: u32) {
        self.voltage_mv = voltage_mv;
    }

    /// Whether `init` has succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(any(test, feature = "mock"))]
impl BatteryMonitor for MockBattery {
    fn init(&mut self) -> Result<()> {
        if self.fail_init {
            return Err(crate::platform::PlatformError::InvalidConfig);
        }
        self.initialized = true;
        Ok(())
    }

    fn voltage_mv(&mut self) -> u32 {
        self.voltage_mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_battery() {
        let mut battery = MockBattery::new(3700);
        assert!(!battery.is_initialized());
        battery.init().unwrap();
        assert!(battery.is_initialized());
        assert_eq!(battery.voltage_mv(), 3700);

        battery.set_voltage_mv(3300);
        assert_eq!(battery.voltage_mv(), 3300);
    }

    #[test]
    fn test_mock_battery_init_failure() {
        let mut battery = MockBattery::new(3700);
        battery.fail_init();
        assert!(battery.init().is_err());
        assert!(!battery.is_initialized());
    }
}
