//! Mock FRAM device for testing
//!
//! An `I2cInterface` that behaves like a paged I2C FRAM: it answers on
//! `0x50..=0x57` (page in the low address bits), takes the first written byte
//! as the segment pointer and auto-increments within the page.
//!
//! ## Usage
//!
//! ```ignore
//! use soil_power_sensor::devices::fram::{Fram, FramGeometry, MockFramDevice};
//!
//! let mut fram = Fram::new(MockFramDevice::new(), FramGeometry::DEFAULT);
//! fram.write(0x0100, &[1, 2, 3])?;
//! assert_eq!(fram.bus().byte_at(1, 0), 1);
//! ```

use super::address::{FRAM_DEVICE_ID, FRAM_PAGES, FRAM_SEG_SIZE};
use crate::platform::{
    error::{I2cError, PlatformError},
    I2cInterface, Result,
};

const PAGES: usize = FRAM_PAGES as usize;
const SEG_SIZE: usize = FRAM_SEG_SIZE as usize;

/// In-memory paged FRAM device
///
/// Memory starts zeroed. Supports failure injection at a given transaction
/// index (counting every attempt, failed ones included).
#[derive(Debug)]
pub struct MockFramDevice {
    memory: [[u8; SEG_SIZE]; PAGES],
    pointer: usize,
    transactions: usize,
    fail_at: Option<(usize, I2cError)>,
}

impl MockFramDevice {
    /// Create a zero-filled device
    pub fn new() -> Self {
        Self {
            memory: [[0; SEG_SIZE]; PAGES],
            pointer: 0,
            transactions: 0,
            fail_at: None,
        }
    }

    /// Byte stored at a physical coordinate
    pub fn byte_at(&self, page: usize, segment: usize) -> u8 {
        self.memory[page][segment]
    }

    /// Overwrite a byte directly, bypassing the bus
    pub fn poke(&mut self, page: usize, segment: usize, value: u8) {
        self.memory[page][segment] = value;
    }

    /// Number of attempted transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions
    }

    /// Fail the transaction with zero-based index `index` with `error`
    pub fn fail_at(&mut self, index: usize, error: I2cError) {
        self.fail_at = Some((index, error));
    }

    /// Count the attempt, apply injected failures, and decode the page
    fn select(&mut self, addr: u8) -> Result<usize> {
        let index = self.transactions;
        self.transactions += 1;

        if let Some((fail_index, error)) = self.fail_at {
            if fail_index == index {
                return Err(PlatformError::I2c(error));
            }
        }

        let base = FRAM_DEVICE_ID >> 1;
        if addr & !0x07 != base {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        Ok((addr & 0x07) as usize)
    }

    fn read_from(&mut self, page: usize, buffer: &mut [u8]) {
        for slot in buffer.iter_mut() {
            *slot = self.memory[page][self.pointer];
            self.pointer = (self.pointer + 1) % SEG_SIZE;
        }
    }
}

impl Default for MockFramDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl I2cInterface for MockFramDevice {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        let page = self.select(addr)?;
        if let Some((&segment, payload)) = data.split_first() {
            self.pointer = segment as usize;
            for byte in payload {
                self.memory[page][self.pointer] = *byte;
                self.pointer = (self.pointer + 1) % SEG_SIZE;
            }
        }
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        let page = self.select(addr)?;
        self.read_from(page, buffer);
        Ok(())
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        let page = self.select(addr)?;
        if let Some(&segment) = write_data.first() {
            self.pointer = segment as usize;
        }
        self.read_from(page, read_buffer);
        Ok(())
    }

    fn set_frequency(&mut self, _frequency: u32) -> Result<()> {
        Ok(())
    }
}
