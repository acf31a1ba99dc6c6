//! Platform error types
//!
//! This module defines error types for platform operations, plus the
//! normalized bus status code reported in diagnostics.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// I2C operation failed
    I2c(I2cError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Timer operation failed
    Timer(TimerError),
    /// Invalid configuration provided
    InvalidConfig,
}

/// I2C-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Bus error occurred
    BusError,
    /// No acknowledgment received
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Timeout occurred
    Timeout,
    /// Invalid address
    InvalidAddress,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Invalid mode for operation
    InvalidMode,
    /// Pin driver reported a fault
    PinFault,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Timer overflow
    Overflow,
    /// Invalid duration
    InvalidDuration,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::I2c(e) => write!(f, "I2C error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Timer(e) => write!(f, "Timer error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

impl From<I2cError> for PlatformError {
    fn from(e: I2cError) -> Self {
        PlatformError::I2c(e)
    }
}

/// Normalized outcome of a bus transaction
///
/// Collapses platform results into the small integer set used in logs and
/// startup reports: `0 = ok`, `1 = error`, `2 = busy`, `3 = unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BusStatus {
    /// Transaction completed
    Ok = 0,
    /// Device or bus rejected the transaction
    Error = 1,
    /// Bus held by another master
    Busy = 2,
    /// Timeout or anything not otherwise classified
    Unknown = 3,
}

impl BusStatus {
    /// Integer code of this status
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Classify a platform error
    pub fn from_error(error: &PlatformError) -> Self {
        match error {
            PlatformError::I2c(I2cError::BusError)
            | PlatformError::I2c(I2cError::Nack)
            | PlatformError::I2c(I2cError::InvalidAddress) => BusStatus::Error,
            PlatformError::I2c(I2cError::ArbitrationLost) => BusStatus::Busy,
            _ => BusStatus::Unknown,
        }
    }
}

impl<T> From<&Result<T>> for BusStatus {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => BusStatus::Ok,
            Err(e) => BusStatus::from_error(e),
        }
    }
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusStatus::Ok => "ok",
            BusStatus::Error => "error",
            BusStatus::Busy => "busy",
            BusStatus::Unknown => "unknown",
        };
        write!(f, "{} ({})", name, self.code())
    }
}
