//! FRAM byte-serial transport
//!
//! Every byte is its own bus transaction: translate, range-check, address the
//! page through the device address, then write or read one byte at the
//! segment sub-address. Burst transfers would have to track page crossings
//! (the page lives in the device address), so they are not used.

use super::address::{Direction, FramGeometry, LogicalAddress, PhysicalAddress};
use super::error::StorageError;
use crate::platform::{BusStatus, I2cInterface, PlatformError};

/// FRAM driver over an injected I2C bus
pub struct Fram<I2C> {
    i2c: I2C,
    geometry: FramGeometry,
}

impl<I2C: I2cInterface> Fram<I2C> {
    /// Create a driver for a device with the given geometry
    pub fn new(i2c: I2C, geometry: FramGeometry) -> Self {
        Self { i2c, geometry }
    }

    /// Device geometry
    pub fn geometry(&self) -> FramGeometry {
        self.geometry
    }

    /// Borrow the bus (for inspection in tests and diagnostics)
    pub fn bus(&self) -> &I2C {
        &self.i2c
    }

    /// Mutably borrow the bus
    pub fn bus_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Write `data` starting at logical address `base`
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if any byte falls past the device; nothing is written.
    /// - `TransportFailure` on the first failed transaction. Bytes before it
    ///   remain written and no further bytes are attempted.
    pub fn write(&mut self, base: LogicalAddress, data: &[u8]) -> Result<(), StorageError> {
        self.geometry.check_span(base, data.len())?;

        for (logical, byte) in addresses(base, data.len()).zip(data.iter()) {
            let physical = self.geometry.resolve(logical)?;
            let device = physical.bus_address(Direction::Write) >> 1;
            self.i2c
                .write(device, &[physical.segment, *byte])
                .map_err(|e| transport_failure(logical, physical, Direction::Write, e))?;
        }

        crate::log_trace!("FRAM: wrote {} bytes at {}", data.len(), base);
        Ok(())
    }

    /// Fill `buffer` from logical address `base`
    ///
    /// # Errors
    ///
    /// Same as [`Fram::write`]; on failure the buffer contents are unspecified.
    pub fn read(&mut self, base: LogicalAddress, buffer: &mut [u8]) -> Result<(), StorageError> {
        self.geometry.check_span(base, buffer.len())?;

        let len = buffer.len();
        for (logical, slot) in addresses(base, len).zip(buffer.iter_mut()) {
            let physical = self.geometry.resolve(logical)?;
            let device = physical.bus_address(Direction::Read) >> 1;
            self.i2c
                .write_read(device, &[physical.segment], core::slice::from_mut(slot))
                .map_err(|e| transport_failure(logical, physical, Direction::Read, e))?;
        }

        crate::log_trace!("FRAM: read {} bytes at {}", len, base);
        Ok(())
    }

    /// Read `len` bytes from `base` into an owned buffer of capacity `N`
    ///
    /// # Errors
    ///
    /// `BufferTooSmall` if `len > N`, otherwise as [`Fram::read`].
    pub fn read_vec<const N: usize>(
        &mut self,
        base: LogicalAddress,
        len: usize,
    ) -> Result<heapless::Vec<u8, N>, StorageError> {
        let mut bytes = heapless::Vec::new();
        bytes
            .resize(len, 0)
            .map_err(|_| StorageError::BufferTooSmall)?;
        self.read(base, &mut bytes)?;
        Ok(bytes)
    }
}

/// Consecutive logical addresses of an already span-checked range
fn addresses(base: LogicalAddress, len: usize) -> impl Iterator<Item = LogicalAddress> {
    (0..len).map(move |i| base.wrapping_add(i as u16))
}

fn transport_failure(
    logical: LogicalAddress,
    physical: PhysicalAddress,
    direction: Direction,
    error: PlatformError,
) -> StorageError {
    let status = BusStatus::from_error(&error);
    crate::log_error!(
        "FRAM: {:?} failed at {} (page {}, segment {}, bus {:#x}): status {}",
        direction,
        logical,
        physical.page,
        physical.segment,
        physical.bus_address(direction),
        status.code()
    );
    StorageError::TransportFailure(status)
}
