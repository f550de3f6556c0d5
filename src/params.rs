//! Strongly typed parameter enumerations for the H3LIS200DL driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//! Every enum also implements `TryFrom<u8>` for callers holding a raw field value;
//! encodings outside the datasheet table are rejected with [`InvalidArgument`].
//!
//! # Examples
//!
//! ```rust
//! use h3lis200dl::params::{DataRate, PowerMode, Range};
//!
//! let range = Range::G200;
//! let rate = DataRate::Hz400;
//! let mode = PowerMode::Normal;
//! assert_eq!(range.mg_per_digit(), 1_560);
//! assert_eq!(Range::try_from(0b1), Ok(Range::G200));
//! let _ = (rate, mode);
//! ```

use modular_bitfield::prelude::Specifier;

use crate::error::InvalidArgument;

/// Operating modes encoded in `CTRL_REG1.PM[2:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum PowerMode {
    /// Power-down (datasheet reset state).
    PowerDown = 0b000,
    /// Normal mode; output rate follows [`DataRate`].
    Normal = 0b001,
    /// Low-power mode, 0.5 Hz output rate.
    LowPower0_5Hz = 0b010,
    /// Low-power mode, 1 Hz output rate.
    LowPower1Hz = 0b011,
    /// Low-power mode, 2 Hz output rate.
    LowPower2Hz = 0b100,
    /// Low-power mode, 5 Hz output rate.
    LowPower5Hz = 0b101,
    /// Low-power mode, 10 Hz output rate.
    LowPower10Hz = 0b110,
}

impl PowerMode {
    /// Output data rate in millihertz for this mode, given the `DR` selection.
    ///
    /// Returns `0` in power-down. In low-power modes `DR` only selects the
    /// low-pass cutoff, so the rate is fixed by the mode itself.
    pub const fn output_rate_mhz(self, rate: DataRate) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Normal => rate.hz() as u32 * 1_000,
            Self::LowPower0_5Hz => 500,
            Self::LowPower1Hz => 1_000,
            Self::LowPower2Hz => 2_000,
            Self::LowPower5Hz => 5_000,
            Self::LowPower10Hz => 10_000,
        }
    }

    /// Returns `true` for any of the low-power modes.
    pub const fn is_low_power(self) -> bool {
        !matches!(self, Self::PowerDown | Self::Normal)
    }
}

impl TryFrom<u8> for PowerMode {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b000 => Ok(Self::PowerDown),
            0b001 => Ok(Self::Normal),
            0b010 => Ok(Self::LowPower0_5Hz),
            0b011 => Ok(Self::LowPower1Hz),
            0b100 => Ok(Self::LowPower2Hz),
            0b101 => Ok(Self::LowPower5Hz),
            0b110 => Ok(Self::LowPower10Hz),
            _ => Err(InvalidArgument),
        }
    }
}

/// Normal-mode output data rate selections encoded in `CTRL_REG1.DR[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum DataRate {
    /// 50 Hz output data rate.
    Hz50 = 0b00,
    /// 100 Hz output data rate.
    Hz100 = 0b01,
    /// 400 Hz output data rate.
    Hz400 = 0b10,
    /// 1000 Hz output data rate.
    Hz1000 = 0b11,
}

impl DataRate {
    /// Returns the ODR in hertz as an integer value.
    pub const fn hz(self) -> u16 {
        match self {
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz400 => 400,
            Self::Hz1000 => 1_000,
        }
    }

    /// Low-pass filter cutoff in hertz applied to the output at this rate.
    pub const fn low_pass_cutoff_hz(self) -> u16 {
        match self {
            Self::Hz50 => 37,
            Self::Hz100 => 74,
            Self::Hz400 => 292,
            Self::Hz1000 => 780,
        }
    }
}

impl TryFrom<u8> for DataRate {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b00 => Ok(Self::Hz50),
            0b01 => Ok(Self::Hz100),
            0b10 => Ok(Self::Hz400),
            0b11 => Ok(Self::Hz1000),
            _ => Err(InvalidArgument),
        }
    }
}

/// Full-scale measurement ranges encoded in `CTRL_REG4.FS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum Range {
    /// ±100 g.
    G100 = 0b0,
    /// ±200 g.
    G200 = 0b1,
}

impl Range {
    /// Sensitivity in milli-g per LSB of the 8-bit output registers.
    pub const fn mg_per_digit(self) -> u16 {
        match self {
            Self::G100 => 780,
            Self::G200 => 1_560,
        }
    }

    /// Sensitivity in g per LSB.
    pub const fn g_per_digit(self) -> f32 {
        match self {
            Self::G100 => 0.780,
            Self::G200 => 1.560,
        }
    }

    /// Nominal full-scale magnitude in g.
    pub const fn full_scale_g(self) -> u16 {
        match self {
            Self::G100 => 100,
            Self::G200 => 200,
        }
    }
}

impl TryFrom<u8> for Range {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b0 => Ok(Self::G100),
            0b1 => Ok(Self::G200),
            _ => Err(InvalidArgument),
        }
    }
}

/// High-pass filter modes encoded in `CTRL_REG2.HPM[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum HighPassMode {
    /// Normal mode; the filter is reset by reading `HP_FILTER_RESET`.
    Normal = 0b00,
    /// Reference mode; output is relative to the `REFERENCE` register.
    Reference = 0b01,
    /// Normal mode, alternate encoding; behaves like [`HighPassMode::Normal`].
    NormalAlt = 0b10,
}

impl TryFrom<u8> for HighPassMode {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b00 => Ok(Self::Normal),
            0b01 => Ok(Self::Reference),
            0b10 => Ok(Self::NormalAlt),
            _ => Err(InvalidArgument),
        }
    }
}

/// High-pass cutoff selections encoded in `CTRL_REG2.HPCF[1:0]`.
///
/// The cutoff scales with the output data rate: `f_cut = ODR / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum HighPassCutoff {
    /// ODR / 50.
    OdrDiv50 = 0b00,
    /// ODR / 100.
    OdrDiv100 = 0b01,
    /// ODR / 200.
    OdrDiv200 = 0b10,
    /// ODR / 400.
    OdrDiv400 = 0b11,
}

impl HighPassCutoff {
    /// Divisor applied to the output data rate.
    pub const fn divisor(self) -> u16 {
        match self {
            Self::OdrDiv50 => 50,
            Self::OdrDiv100 => 100,
            Self::OdrDiv200 => 200,
            Self::OdrDiv400 => 400,
        }
    }

    /// Returns the cutoff frequency in hertz for the supplied data rate.
    pub fn hz(self, rate: DataRate) -> f32 {
        rate.hz() as f32 / self.divisor() as f32
    }
}

impl TryFrom<u8> for HighPassCutoff {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b00 => Ok(Self::OdrDiv50),
            0b01 => Ok(Self::OdrDiv100),
            0b10 => Ok(Self::OdrDiv200),
            0b11 => Ok(Self::OdrDiv400),
            _ => Err(InvalidArgument),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_sensitivity_matches_datasheet() {
        assert_eq!(Range::G100.mg_per_digit(), 780);
        assert_eq!(Range::G200.mg_per_digit(), 1_560);
        assert_eq!(Range::G100.full_scale_g(), 100);
        assert_eq!(Range::G200.full_scale_g(), 200);
    }

    #[test]
    fn raw_values_outside_the_table_are_rejected() {
        assert_eq!(Range::try_from(2), Err(InvalidArgument));
        assert_eq!(DataRate::try_from(4), Err(InvalidArgument));
        assert_eq!(PowerMode::try_from(0b111), Err(InvalidArgument));
        assert_eq!(HighPassMode::try_from(0b11), Err(InvalidArgument));
        assert_eq!(HighPassCutoff::try_from(0x10), Err(InvalidArgument));
    }

    #[test]
    fn raw_values_map_to_variants() {
        assert_eq!(PowerMode::try_from(0b001), Ok(PowerMode::Normal));
        assert_eq!(PowerMode::try_from(0b110), Ok(PowerMode::LowPower10Hz));
        assert_eq!(DataRate::try_from(0b10), Ok(DataRate::Hz400));
        assert_eq!(HighPassCutoff::try_from(0b11), Ok(HighPassCutoff::OdrDiv400));
        assert_eq!(HighPassMode::try_from(0b10), Ok(HighPassMode::NormalAlt));
    }

    #[test]
    fn output_rate_depends_on_mode() {
        assert_eq!(PowerMode::PowerDown.output_rate_mhz(DataRate::Hz1000), 0);
        assert_eq!(PowerMode::Normal.output_rate_mhz(DataRate::Hz400), 400_000);
        assert_eq!(PowerMode::LowPower0_5Hz.output_rate_mhz(DataRate::Hz1000), 500);
        assert!(PowerMode::LowPower5Hz.is_low_power());
        assert!(!PowerMode::Normal.is_low_power());
    }

    #[test]
    fn high_pass_cutoff_scales_with_rate() {
        assert_eq!(HighPassCutoff::OdrDiv50.hz(DataRate::Hz50), 1.0);
        assert_eq!(HighPassCutoff::OdrDiv400.hz(DataRate::Hz400), 1.0);
        assert_eq!(HighPassCutoff::OdrDiv100.hz(DataRate::Hz1000), 10.0);
    }
}
