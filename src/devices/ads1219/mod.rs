//! ADS1219 Delta-Sigma ADC Driver
//!
//! 24-bit, 4-channel converter on I2C, used here for the cell voltage
//! (AIN0-AIN1) and current (AIN2-AIN3) channels.
//!
//! ## Usage
//!
//! ```ignore
//! use soil_power_sensor::devices::ads1219::{Ads1219, Ads1219Config};
//!
//! let mut adc = Ads1219::new(i2c, drdy_pin, timer, Ads1219Config::default());
//! adc.init(&mut power_pin)?;
//! let voltage_raw = adc.read_voltage()?;
//! let current_raw = adc.read_current()?;
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod registers;

pub use config::{
    Ads1219Config, ControlRegister, ConversionMode, DataRate, Gain, Mux, VoltageReference,
    CURRENT_CHANNEL, VOLTAGE_CHANNEL,
};
pub use driver::{assemble_sample, Ads1219};
pub use error::AdcError;
pub use registers::ADS1219_ADDR;
