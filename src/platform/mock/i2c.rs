//! Mock I2C implementation for testing

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::{I2cConfig, I2cInterface},
    Result,
};
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
    /// Address acknowledge check
    Probe { addr: u8 },
}

/// Mock I2C implementation
///
/// Records all transaction attempts (including failed ones) for test
/// verification, returns pre-programmed read data, and can inject a bus
/// failure at a chosen transaction or NACK a chosen address.
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: Vec<I2cTransaction>,
    read_data: Vec<u8>,
    fail_at: Option<(usize, I2cError)>,
    absent: Vec<u8>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: Vec::new(),
            read_data: Vec::new(),
            fail_at: None,
            absent: Vec::new(),
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    /// Number of attempted transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Set data to return for read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data = data.to_vec();
    }

    /// Fail the transaction with zero-based index `index` with `error`
    pub fn fail_at(&mut self, index: usize, error: I2cError) {
        self.fail_at = Some((index, error));
    }

    /// Make every transaction to `addr` fail with a NACK
    pub fn remove_device(&mut self, addr: u8) {
        self.absent.push(addr);
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    /// Log the attempt and decide whether it fails
    fn attempt(&mut self, addr: u8, transaction: I2cTransaction) -> Result<()> {
        let index = self.transactions.len();
        self.transactions.push(transaction);

        if let Some((fail_index, error)) = self.fail_at {
            if fail_index == index {
                return Err(PlatformError::I2c(error));
            }
        }
        if self.absent.contains(&addr) {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        Ok(())
    }

    fn fill(&mut self, buffer: &mut [u8]) {
        let to_read = core::cmp::min(buffer.len(), self.read_data.len());
        buffer[..to_read].copy_from_slice(&self.read_data[..to_read]);
        self.read_data.drain(..to_read);
    }
}

impl Default for MockI2c {
    fn default() -> Self {
        Self::new(I2cConfig::default())
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.attempt(
            addr,
            I2cTransaction::Write {
                addr,
                data: data.to_vec(),
            },
        )
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.attempt(
            addr,
            I2cTransaction::Read {
                addr,
                len: buffer.len(),
            },
        )?;
        self.fill(buffer);
        Ok(())
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.attempt(
            addr,
            I2cTransaction::WriteRead {
                addr,
                write_data: write_data.to_vec(),
                read_len: read_buffer.len(),
            },
        )?;
        self.fill(read_buffer);
        Ok(())
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        self.config.frequency = frequency;
        Ok(())
    }

    fn probe(&mut self, addr: u8) -> Result<()> {
        self.attempt(addr, I2cTransaction::Probe { addr })
    }
}
