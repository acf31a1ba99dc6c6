//! ADS1219 Configuration
//!
//! Typed view of the control register and driver timing settings.

use super::registers;

/// Input multiplexer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mux {
    /// AINP = AIN0, AINN = AIN1 (voltage sense)
    #[default]
    Ain0Ain1,
    /// AINP = AIN2, AINN = AIN3 (current sense)
    Ain2Ain3,
    /// AINP = AIN1, AINN = AIN2
    Ain1Ain2,
    /// AIN0 against AGND
    Ain0,
    /// AIN1 against AGND
    Ain1,
    /// AIN2 against AGND
    Ain2,
    /// AIN3 against AGND
    Ain3,
    /// Inputs shorted to AVDD / 2 (offset calibration)
    Shorted,
}

impl Mux {
    fn bits(self) -> u8 {
        match self {
            Mux::Ain0Ain1 => 0b000,
            Mux::Ain2Ain3 => 0b001,
            Mux::Ain1Ain2 => 0b010,
            Mux::Ain0 => 0b011,
            Mux::Ain1 => 0b100,
            Mux::Ain2 => 0b101,
            Mux::Ain3 => 0b110,
            Mux::Shorted => 0b111,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Mux::Ain0Ain1,
            0b001 => Mux::Ain2Ain3,
            0b010 => Mux::Ain1Ain2,
            0b011 => Mux::Ain0,
            0b100 => Mux::Ain1,
            0b101 => Mux::Ain2,
            0b110 => Mux::Ain3,
            _ => Mux::Shorted,
        }
    }
}

/// PGA gain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    /// Gain 1
    #[default]
    One,
    /// Gain 4
    Four,
}

/// Output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// 20 samples per second
    #[default]
    Sps20,
    /// 90 samples per second
    Sps90,
    /// 330 samples per second
    Sps330,
    /// 1000 samples per second
    Sps1000,
}

impl DataRate {
    fn bits(self) -> u8 {
        match self {
            DataRate::Sps20 => 0b00,
            DataRate::Sps90 => 0b01,
            DataRate::Sps330 => 0b10,
            DataRate::Sps1000 => 0b11,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => DataRate::Sps20,
            0b01 => DataRate::Sps90,
            0b10 => DataRate::Sps330,
            _ => DataRate::Sps1000,
        }
    }

    /// Samples per second
    pub fn samples_per_second(self) -> u16 {
        match self {
            DataRate::Sps20 => 20,
            DataRate::Sps90 => 90,
            DataRate::Sps330 => 330,
            DataRate::Sps1000 => 1000,
        }
    }
}

/// Conversion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionMode {
    /// One conversion per START/SYNC
    #[default]
    SingleShot,
    /// Convert continuously after START/SYNC
    Continuous,
}

/// Voltage reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VoltageReference {
    /// Internal 2.048 V reference
    #[default]
    Internal,
    /// External reference on REFP/REFN (3.3 V on this board)
    External,
}

/// ADS1219 control (configuration) register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlRegister {
    pub mux: Mux,
    pub gain: Gain,
    pub data_rate: DataRate,
    pub mode: ConversionMode,
    pub vref: VoltageReference,
}

/// Voltage-sense channel: AIN0-AIN1, gain 1, 20 SPS, continuous, external reference (`0x03`)
pub const VOLTAGE_CHANNEL: ControlRegister = ControlRegister {
    mux: Mux::Ain0Ain1,
    gain: Gain::One,
    data_rate: DataRate::Sps20,
    mode: ConversionMode::Continuous,
    vref: VoltageReference::External,
};

/// Current-sense channel: same as the voltage channel on AIN2-AIN3 (`0x23`)
pub const CURRENT_CHANNEL: ControlRegister = ControlRegister {
    mux: Mux::Ain2Ain3,
    ..VOLTAGE_CHANNEL
};

impl ControlRegister {
    /// Encode to the register byte
    pub fn bits(&self) -> u8 {
        let gain = match self.gain {
            Gain::One => 0,
            Gain::Four => registers::GAIN_MASK,
        };
        let mode = match self.mode {
            ConversionMode::SingleShot => 0,
            ConversionMode::Continuous => registers::CM_MASK,
        };
        let vref = match self.vref {
            VoltageReference::Internal => 0,
            VoltageReference::External => registers::VREF_MASK,
        };

        (self.mux.bits() << registers::MUX_SHIFT)
            | gain
            | (self.data_rate.bits() << registers::DR_SHIFT)
            | mode
            | vref
    }

    /// Decode a register byte
    pub fn from_bits(bits: u8) -> Self {
        Self {
            mux: Mux::from_bits((bits & registers::MUX_MASK) >> registers::MUX_SHIFT),
            gain: if bits & registers::GAIN_MASK != 0 {
                Gain::Four
            } else {
                Gain::One
            },
            data_rate: DataRate::from_bits((bits & registers::DR_MASK) >> registers::DR_SHIFT),
            mode: if bits & registers::CM_MASK != 0 {
                ConversionMode::Continuous
            } else {
                ConversionMode::SingleShot
            },
            vref: if bits & registers::VREF_MASK != 0 {
                VoltageReference::External
            } else {
                VoltageReference::Internal
            },
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ads1219Config {
    /// 7-bit I2C address
    pub address: u8,
    /// Delay after START/SYNC before polling for data-ready
    pub settle_ms: u32,
    /// Longest wait for data-ready before giving up
    pub ready_timeout_ms: u32,
    /// Interval between data-ready samples
    pub poll_interval_us: u32,
}

impl Default for Ads1219Config {
    fn default() -> Self {
        Self {
            address: registers::ADS1219_ADDR,
            settle_ms: 10,
            // 20 SPS conversions take 50 ms; leave ample margin
            ready_timeout_ms: 1000,
            poll_interval_us: 100,
        }
    }
}
