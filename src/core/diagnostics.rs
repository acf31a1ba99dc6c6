//! Startup Diagnostics
//!
//! Boot-time health checks run before sampling starts: ADC presence, recovery of
//! the persisted buffer cursors, and the battery reading. Checks never abort
//! each other; every outcome lands in the [`StartupReport`].

use crate::devices::ads1219::Ads1219;
use crate::devices::battery::BatteryMonitor;
use crate::devices::fram::{BufferState, Fram, StorageStatus};
use crate::platform::{GpioInterface, I2cInterface, TimerInterface};

/// Outcome of the startup checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupReport {
    /// ADC acknowledged its address
    pub adc_present: bool,
    /// Status of the buffer-state recovery
    pub storage_status: StorageStatus,
    /// Recovered buffer cursors, if the read succeeded
    pub buffer_state: Option<BufferState>,
    /// Battery voltage, if the monitor came up
    pub battery_mv: Option<u32>,
}

impl StartupReport {
    /// All checks passed
    pub fn is_healthy(&self) -> bool {
        self.adc_present && self.storage_status == StorageStatus::Ok && self.battery_mv.is_some()
    }
}

/// Run the startup checks
pub fn run_startup_checks<A, D, T, F, B>(
    adc: &mut Ads1219<A, D, T>,
    fram: &mut Fram<F>,
    battery: &mut B,
) -> StartupReport
where
    A: I2cInterface,
    D: GpioInterface,
    T: TimerInterface,
    F: I2cInterface,
    B: BatteryMonitor,
{
    let adc_present = adc.probe();

    let recovered = fram.load_buffer_state();
    let storage_status = StorageStatus::from(&recovered);
    let buffer_state = recovered.ok();

    let battery_mv = match battery.init() {
        Ok(()) => Some(battery.voltage_mv()),
        Err(_) => {
            crate::log_warn!("Battery monitor init failed");
            None
        }
    };

    let report = StartupReport {
        adc_present,
        storage_status,
        buffer_state,
        battery_mv,
    };

    if report.is_healthy() {
        crate::log_info!(
            "Startup checks passed (battery {} mV)",
            battery_mv.unwrap_or(0)
        );
    } else {
        crate::log_warn!(
            "Startup checks: adc={}, storage={}, battery={}",
            adc_present,
            storage_status.code(),
            battery_mv.is_some()
        );
    }

    report
}
