//! Circular-buffer state persistence
//!
//! The buffer layer owns the ring buffer; this module only marshals its
//! cursors and occupancy to a fixed 6-byte slot so they survive a reset:
//!
//! ```text
//! BUFFER_STATE_ADDR + 0  read_addr   u16 LE
//! BUFFER_STATE_ADDR + 2  write_addr  u16 LE
//! BUFFER_STATE_ADDR + 4  length      u16 LE
//! ```

use super::driver::Fram;
use super::error::StorageError;
use super::layout::BUFFER_STATE_ADDR;
use crate::platform::I2cInterface;

/// Persisted cursors and occupancy of the sample ring buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufferState {
    /// Logical address of the next record to read
    pub read_addr: u16,
    /// Logical address of the next record to write
    pub write_addr: u16,
    /// Number of bytes currently held
    pub length: u16,
}

impl BufferState {
    /// Size of the serialized record in bytes
    pub const SIZE: usize = 6;

    /// Create a state record
    pub fn new(read_addr: u16, write_addr: u16, length: u16) -> Self {
        Self {
            read_addr,
            write_addr,
            length,
        }
    }

    /// Serialize to bytes (little-endian)
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..2].copy_from_slice(&self.read_addr.to_le_bytes());
        buf[2..4].copy_from_slice(&self.write_addr.to_le_bytes());
        buf[4..6].copy_from_slice(&self.length.to_le_bytes());
        buf
    }

    /// Deserialize from bytes (little-endian)
    pub fn from_bytes(buf: &[u8; Self::SIZE]) -> Self {
        Self {
            read_addr: u16::from_le_bytes([buf[0], buf[1]]),
            write_addr: u16::from_le_bytes([buf[2], buf[3]]),
            length: u16::from_le_bytes([buf[4], buf[5]]),
        }
    }
}

impl<I2C: I2cInterface> Fram<I2C> {
    /// Persist the ring buffer state at [`BUFFER_STATE_ADDR`]
    ///
    /// Not atomic: a failure mid-way leaves the earlier bytes of the new state
    /// next to the later bytes of the old one.
    pub fn save_buffer_state(&mut self, state: BufferState) -> Result<(), StorageError> {
        crate::log_debug!(
            "Saving buffer state: read={}, write={}, len={}",
            state.read_addr,
            state.write_addr,
            state.length
        );
        self.write(BUFFER_STATE_ADDR, &state.to_bytes())
    }

    /// Load the ring buffer state from [`BUFFER_STATE_ADDR`]
    pub fn load_buffer_state(&mut self) -> Result<BufferState, StorageError> {
        let mut buf = [0u8; BufferState::SIZE];
        if let Err(e) = self.read(BUFFER_STATE_ADDR, &mut buf) {
            crate::log_warn!("Failed to load buffer state: status {}", e.status().code());
            return Err(e);
        }

        let state = BufferState::from_bytes(&buf);
        crate::log_debug!(
            "Loaded buffer state: read={}, write={}, len={}",
            state.read_addr,
            state.write_addr,
            state.length
        );
        Ok(state)
    }
}
