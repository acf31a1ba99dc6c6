//! Device drivers
//!
//! Drivers are written against the platform abstraction traits and carry no
//! board-specific code.
//!
//! ## Modules
//!
//! - `ads1219`: ADS1219 24-bit ADC (cell voltage and current)
//! - `battery`: Battery monitor interface
//! - `fram`: Paged I2C FRAM storage and its persisted records

pub mod ads1219;
pub mod battery;
pub mod fram;

pub use battery::BatteryMonitor;

#[cfg(any(test, feature = "mock"))]
pub use battery::MockBattery;
