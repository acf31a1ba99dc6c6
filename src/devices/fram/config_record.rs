//! Versioned user-configuration record
//!
//! Node settings are stored at [`USER_CONFIG_ADDR`] in a self-describing
//! record so that firmware updates can detect blank, foreign or older data:
//!
//! ```text
//! offset  size  field
//!      0     4  magic "SPSC" (ASCII, in order)
//!      4     2  format version
//!      6     2  payload length
//!      8     4  logger_id
//!     12     4  cell_id
//!     16     2  sample_interval_s
//!     18     2  flags
//!     20     4  CRC-32 (ISO-HDLC) of bytes 0..20
//! ```

use super::driver::Fram;
use super::error::StorageError;
use super::layout::{USER_CONFIG_ADDR, USER_CONFIG_RESERVED};
use crate::platform::I2cInterface;
use bitflags::bitflags;
use crc::{Crc, CRC_32_ISO_HDLC};

/// Record magic, stored as-is so a memory dump reads "SPSC"
pub const CONFIG_MAGIC: [u8; 4] = *b"SPSC";

/// Record format version
pub const CONFIG_VERSION: u16 = 1;

/// CRC32 algorithm (ISO HDLC / Ethernet / ZIP)
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

const HEADER_SIZE: usize = 8;
const PAYLOAD_SIZE: usize = 12;
const CRC_OFFSET: usize = HEADER_SIZE + PAYLOAD_SIZE;

const _: () = assert!(NodeConfig::SIZE <= USER_CONFIG_RESERVED);

bitflags! {
    /// Acquisition options
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConfigFlags: u16 {
        /// Sample the voltage channel
        const VOLTAGE = 0b0001;
        /// Sample the current channel
        const CURRENT = 0b0010;
        /// Record battery voltage with each sample
        const BATTERY = 0b0100;
    }
}

/// User configuration of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeConfig {
    /// Identifier of the logger this node reports as
    pub logger_id: u32,
    /// Identifier of the measured cell
    pub cell_id: u32,
    /// Seconds between acquisitions
    pub sample_interval_s: u16,
    /// Acquisition options
    pub flags: ConfigFlags,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            logger_id: 0,
            cell_id: 0,
            sample_interval_s: 60,
            flags: ConfigFlags::VOLTAGE | ConfigFlags::CURRENT,
        }
    }
}

impl NodeConfig {
    /// Size of the serialized record in bytes
    pub const SIZE: usize = CRC_OFFSET + 4;

    /// Serialize to a record (little-endian, CRC appended)
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&CONFIG_MAGIC);
        buf[4..6].copy_from_slice(&CONFIG_VERSION.to_le_bytes());
        buf[6..8].copy_from_slice(&(PAYLOAD_SIZE as u16).to_le_bytes());
        buf[8..12].copy_from_slice(&self.logger_id.to_le_bytes());
        buf[12..16].copy_from_slice(&self.cell_id.to_le_bytes());
        buf[16..18].copy_from_slice(&self.sample_interval_s.to_le_bytes());
        buf[18..20].copy_from_slice(&self.flags.bits().to_le_bytes());
        let crc = CRC32.checksum(&buf[..CRC_OFFSET]);
        buf[CRC_OFFSET..].copy_from_slice(&crc.to_le_bytes());
        buf
    }

    /// Deserialize and validate a record
    ///
    /// # Errors
    ///
    /// - `Corrupted` on a magic, length or CRC mismatch (blank memory included)
    /// - `UnsupportedVersion` if the record was written by another format version
    pub fn from_bytes(buf: &[u8; Self::SIZE]) -> Result<Self, StorageError> {
        if buf[0..4] != CONFIG_MAGIC {
            return Err(StorageError::Corrupted);
        }

        let version = u16::from_le_bytes([buf[4], buf[5]]);
        if version != CONFIG_VERSION {
            return Err(StorageError::UnsupportedVersion(version));
        }

        let payload_len = u16::from_le_bytes([buf[6], buf[7]]);
        if payload_len as usize != PAYLOAD_SIZE {
            return Err(StorageError::Corrupted);
        }

        let stored_crc = u32::from_le_bytes([
            buf[CRC_OFFSET],
            buf[CRC_OFFSET + 1],
            buf[CRC_OFFSET + 2],
            buf[CRC_OFFSET + 3],
        ]);
        if CRC32.checksum(&buf[..CRC_OFFSET]) != stored_crc {
            return Err(StorageError::Corrupted);
        }

        Ok(Self {
            logger_id: u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
            cell_id: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            sample_interval_s: u16::from_le_bytes([buf[16], buf[17]]),
            flags: ConfigFlags::from_bits_truncate(u16::from_le_bytes([buf[18], buf[19]])),
        })
    }
}

impl<I2C: I2cInterface> Fram<I2C> {
    /// Persist the user configuration at [`USER_CONFIG_ADDR`]
    pub fn save_config(&mut self, config: &NodeConfig) -> Result<(), StorageError> {
        self.write(USER_CONFIG_ADDR, &config.to_bytes())?;
        crate::log_info!(
            "Saved node config: logger={}, cell={}, interval={}s",
            config.logger_id,
            config.cell_id,
            config.sample_interval_s
        );
        Ok(())
    }

    /// Load and validate the user configuration
    pub fn load_config(&mut self) -> Result<NodeConfig, StorageError> {
        let mut buf = [0u8; NodeConfig::SIZE];
        self.read(USER_CONFIG_ADDR, &mut buf)?;
        NodeConfig::from_bytes(&buf)
    }
}
