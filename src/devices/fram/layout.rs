//! Reserved regions of the FRAM logical address space

use super::address::LogicalAddress;

/// Versioned user-configuration record
pub const USER_CONFIG_ADDR: LogicalAddress = 0x0000;

/// Bytes reserved for the user-configuration record
pub const USER_CONFIG_RESERVED: usize = 32;

/// Circular-buffer state slot (6 bytes used, 16 reserved)
pub const BUFFER_STATE_ADDR: LogicalAddress = 0x0020;

/// First byte available to the sample ring buffer
pub const DATA_START_ADDR: LogicalAddress = 0x0030;

// Regions must not overlap
const _: () = assert!(USER_CONFIG_ADDR as usize + USER_CONFIG_RESERVED <= BUFFER_STATE_ADDR as usize);
const _: () = assert!(BUFFER_STATE_ADDR as usize + 6 <= DATA_START_ADDR as usize);
