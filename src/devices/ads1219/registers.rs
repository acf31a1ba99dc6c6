//! ADS1219 Command and Register Definitions
//!
//! Based on the ADS1219 datasheet (SBAS924).

// ============================================================================
// I2C Address
// ============================================================================

/// Device address with A0 = A1 = DGND
pub const ADS1219_ADDR: u8 = 0x40;

// ============================================================================
// Commands
// ============================================================================

/// Reset the device to its power-on state
pub const CMD_RESET: u8 = 0x06;

/// Start or restart conversions
pub const CMD_START_SYNC: u8 = 0x08;

/// Enter power-down mode
pub const CMD_POWERDOWN: u8 = 0x02;

/// Read conversion data (3 bytes, MSB first)
pub const CMD_RDATA: u8 = 0x10;

/// Read the configuration register
pub const CMD_RREG_CONFIG: u8 = 0x20;

/// Read the status register
pub const CMD_RREG_STATUS: u8 = 0x24;

/// Write the configuration register (followed by the register byte)
pub const CMD_WREG: u8 = 0x40;

// ============================================================================
// Configuration register fields
// ============================================================================

/// Input multiplexer, bits 7:5
pub const MUX_SHIFT: u8 = 5;
pub const MUX_MASK: u8 = 0b1110_0000;

/// PGA gain, bit 4
pub const GAIN_SHIFT: u8 = 4;
pub const GAIN_MASK: u8 = 0b0001_0000;

/// Data rate, bits 3:2
pub const DR_SHIFT: u8 = 2;
pub const DR_MASK: u8 = 0b0000_1100;

/// Conversion mode, bit 1
pub const CM_SHIFT: u8 = 1;
pub const CM_MASK: u8 = 0b0000_0010;

/// Voltage reference, bit 0
pub const VREF_MASK: u8 = 0b0000_0001;

// ============================================================================
// Status register fields
// ============================================================================

/// Conversion result ready
pub const STATUS_DRDY: u8 = 0b1000_0000;

/// Device ID field
pub const STATUS_ID_MASK: u8 = 0b0111_1111;

/// Bytes per conversion result
pub const SAMPLE_BYTES: usize = 3;
