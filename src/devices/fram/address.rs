//! FRAM address model
//!
//! The device exposes its memory as pages of fixed-size segments. A page is
//! selected through the low bits of the I2C device address, a segment offset
//! through the 8-bit memory sub-address. Callers work in a flat logical space
//! `[0, pages * segment_size)` that is translated per byte.

use super::error::StorageError;
use crate::platform::PlatformError;

/// Flat byte address as seen by callers
pub type LogicalAddress = u16;

/// Number of pages on the fitted device
pub const FRAM_PAGES: u16 = 8;

/// Bytes per page
pub const FRAM_SEG_SIZE: u16 = 256;

/// Fixed high-order bits of the device address, in 8-bit (R/W included) form
pub const FRAM_DEVICE_ID: u8 = 0b1010_0000;

/// Largest page count the 3 page-select address bits can express
const MAX_PAGES: u16 = 8;

/// Largest segment size the 8-bit sub-address can express
const MAX_SEG_SIZE: u16 = 256;

/// Transfer direction, encoded in bit 0 of the 8-bit device address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// Master writes to the device
    Write = 0,
    /// Master reads from the device
    Read = 1,
}

/// Physical coordinate of one byte on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhysicalAddress {
    /// Page index (may exceed the device; check before use)
    pub page: u16,
    /// Byte offset within the page
    pub segment: u8,
}

impl PhysicalAddress {
    /// 8-bit bus address: device id | page bits | direction bit
    ///
    /// Only meaningful once the page has been checked against the geometry.
    pub fn bus_address(&self, direction: Direction) -> u8 {
        FRAM_DEVICE_ID | (((self.page & 0x07) as u8) << 1) | direction as u8
    }

    /// 7-bit form of the bus address, as the platform I2C layer expects it
    pub fn device_address(&self) -> u8 {
        self.bus_address(Direction::Write) >> 1
    }
}

/// Page/segment geometry of a FRAM device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramGeometry {
    pages: u16,
    segment_size: u16,
}

impl FramGeometry {
    /// Geometry of the fitted 2 KiB part: 8 pages of 256 bytes
    pub const DEFAULT: Self = Self {
        pages: FRAM_PAGES,
        segment_size: FRAM_SEG_SIZE,
    };

    /// Create a geometry
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if `pages` is not in `1..=8` or
    /// `segment_size` is not in `1..=256`.
    pub fn new(pages: u16, segment_size: u16) -> Result<Self, PlatformError> {
        if pages == 0 || pages > MAX_PAGES || segment_size == 0 || segment_size > MAX_SEG_SIZE {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(Self {
            pages,
            segment_size,
        })
    }

    /// Number of pages
    pub fn pages(&self) -> u16 {
        self.pages
    }

    /// Bytes per page
    pub fn segment_size(&self) -> u16 {
        self.segment_size
    }

    /// Total addressable bytes
    pub fn capacity(&self) -> u32 {
        self.pages as u32 * self.segment_size as u32
    }

    /// Translate a logical address into its page/segment coordinate
    ///
    /// Total: addresses past the device yield a page `>= pages()`, which
    /// [`FramGeometry::check`] rejects.
    pub fn translate(&self, logical: LogicalAddress) -> PhysicalAddress {
        PhysicalAddress {
            page: logical / self.segment_size,
            segment: (logical % self.segment_size) as u8,
        }
    }

    /// Reject coordinates on pages the device does not have
    pub fn check(&self, physical: PhysicalAddress) -> Result<PhysicalAddress, StorageError> {
        if physical.page >= self.pages {
            return Err(StorageError::OutOfRange);
        }
        Ok(physical)
    }

    /// Translate and range-check in one step
    pub fn resolve(&self, logical: LogicalAddress) -> Result<PhysicalAddress, StorageError> {
        self.check(self.translate(logical))
    }

    /// Check that `len` bytes starting at `base` all lie on the device
    pub fn check_span(&self, base: LogicalAddress, len: usize) -> Result<(), StorageError> {
        if len == 0 {
            return Ok(());
        }
        let len = u32::try_from(len).map_err(|_| StorageError::OutOfRange)?;
        let last = base as u64 + len as u64 - 1;
        if last >= self.capacity() as u64 {
            return Err(StorageError::OutOfRange);
        }
        Ok(())
    }
}

impl Default for FramGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_matches_div_mod() {
        let geometry = FramGeometry::DEFAULT;
        for logical in 0..geometry.capacity() as u16 {
            let physical = geometry.translate(logical);
            assert_eq!(physical.page, logical / FRAM_SEG_SIZE);
            assert_eq!(physical.segment as u16, logical % FRAM_SEG_SIZE);
            assert!(physical.page < FRAM_PAGES);
        }
    }

    #[test]
    fn test_translate_known_addresses() {
        let geometry = FramGeometry::DEFAULT;

        assert_eq!(
            geometry.translate(2000),
            PhysicalAddress {
                page: 7,
                segment: 208
            }
        );
        assert_eq!(
            geometry.translate(255),
            PhysicalAddress {
                page: 0,
                segment: 255
            }
        );
        assert_eq!(
            geometry.translate(256),
            PhysicalAddress {
                page: 1,
                segment: 0
            }
        );
    }

    #[test]
    fn test_resolve_past_end_is_out_of_range() {
        let geometry = FramGeometry::DEFAULT;
        assert_eq!(geometry.translate(2048).page, 8);
        assert_eq!(geometry.resolve(2048), Err(StorageError::OutOfRange));
        assert!(geometry.resolve(2047).is_ok());
    }

    #[test]
    fn test_bus_address_encoding() {
        let physical = PhysicalAddress {
            page: 7,
            segment: 0,
        };
        assert_eq!(physical.bus_address(Direction::Write), 0b1010_1110);
        assert_eq!(physical.bus_address(Direction::Read), 0b1010_1111);
        assert_eq!(physical.device_address(), 0x57);

        let first = PhysicalAddress {
            page: 0,
            segment: 12,
        };
        assert_eq!(first.device_address(), 0x50);
    }

    #[test]
    fn test_geometry_validation() {
        assert!(FramGeometry::new(8, 256).is_ok());
        assert!(FramGeometry::new(4, 128).is_ok());
        assert_eq!(FramGeometry::new(0, 256), Err(PlatformError::InvalidConfig));
        assert_eq!(FramGeometry::new(9, 256), Err(PlatformError::InvalidConfig));
        assert_eq!(FramGeometry::new(8, 257), Err(PlatformError::InvalidConfig));
    }

    #[test]
    fn test_check_span() {
        let geometry = FramGeometry::DEFAULT;
        assert!(geometry.check_span(2042, 6).is_ok());
        assert_eq!(geometry.check_span(2043, 6), Err(StorageError::OutOfRange));
        assert!(geometry.check_span(5000, 0).is_ok());
    }

    #[test]
    fn test_check_span_huge_length() {
        let geometry = FramGeometry::DEFAULT;
        assert_eq!(
            geometry.check_span(0, usize::MAX),
            Err(StorageError::OutOfRange)
        );
        assert_eq!(
            geometry.check_span(u16::MAX, u32::MAX as usize),
            Err(StorageError::OutOfRange)
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_check_span_length_past_u32() {
        // Truncated to 32 bits this length would be 6 and pass
        let geometry = FramGeometry::DEFAULT;
        let len = (1usize << 32) + 6;
        assert_eq!(geometry.check_span(0, len), Err(StorageError::OutOfRange));
    }
}
