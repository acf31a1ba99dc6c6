#![cfg_attr(not(test), no_std)]

//! soil_power_sensor - storage and acquisition drivers for the soil power sensor node
//!
//! This library provides the platform abstraction, the FRAM persistence driver and
//! the ADS1219 acquisition driver used by the sensing node firmware.

#[cfg(all(feature = "mock", not(test)))]
extern crate std;

// Platform abstraction layer (bus, pins, timing)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging macros and startup diagnostics
pub mod core;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
