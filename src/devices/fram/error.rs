//! FRAM storage error types

use crate::platform::BusStatus;
use core::fmt;

/// Errors from FRAM storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Logical address maps to a page beyond device capacity (no bus access made)
    OutOfRange,
    /// A bus transaction did not complete; earlier bytes of the operation stay written
    TransportFailure(BusStatus),
    /// Stored record failed its magic or CRC check
    Corrupted,
    /// Stored record has a format version this firmware cannot read
    UnsupportedVersion(u16),
    /// Requested length exceeds the caller's buffer capacity
    BufferTooSmall,
}

impl StorageError {
    /// Status code reported for this error (`1 = error`, `2 = out of range`)
    pub fn status(&self) -> StorageStatus {
        match self {
            StorageError::OutOfRange => StorageStatus::OutOfRange,
            _ => StorageStatus::Error,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::OutOfRange => write!(f, "FRAM address out of range"),
            StorageError::TransportFailure(status) => {
                write!(f, "FRAM transaction failed: bus status {}", status)
            }
            StorageError::Corrupted => write!(f, "FRAM record corrupted"),
            StorageError::UnsupportedVersion(v) => {
                write!(f, "unsupported FRAM record version {}", v)
            }
            StorageError::BufferTooSmall => write!(f, "buffer too small for requested read"),
        }
    }
}

/// Storage status code: `0 = ok`, `1 = error`, `2 = out of range`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageStatus {
    /// Operation completed
    Ok = 0,
    /// Transport or record failure
    Error = 1,
    /// Address beyond device capacity
    OutOfRange = 2,
}

impl StorageStatus {
    /// Integer code of this status
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl<T> From<&Result<T, StorageError>> for StorageStatus {
    fn from(result: &Result<T, StorageError>) -> Self {
        match result {
            Ok(_) => StorageStatus::Ok,
            Err(e) => e.status(),
        }
    }
}
