//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use soil_power_sensor::platform::mock::MockI2c;
//! use soil_power_sensor::platform::traits::I2cInterface;
//!
//! let mut i2c = MockI2c::default();
//! i2c.write(0x50, &[0x00, 0xAB])?;
//! assert_eq!(i2c.transaction_count(), 1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod i2c;
mod timer;

pub use gpio::MockGpio;
pub use i2c::{I2cTransaction, MockI2c};
pub use timer::MockTimer;
