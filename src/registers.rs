//! Register map definitions for the H3LIS200DL accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{DataRate, HighPassCutoff, HighPassMode, PowerMode, Range};

/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL_REG1: u8 = 0x20;
/// Register address of `CTRL_REG2`.
pub const REG_CTRL_REG2: u8 = 0x21;
/// Register address of `CTRL_REG3`.
pub const REG_CTRL_REG3: u8 = 0x22;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL_REG4: u8 = 0x23;
/// Register address of `CTRL_REG5`.
pub const REG_CTRL_REG5: u8 = 0x24;
/// Register address of `HP_FILTER_RESET`.
pub const REG_HP_FILTER_RESET: u8 = 0x25;
/// Register address of `REFERENCE`.
pub const REG_REFERENCE: u8 = 0x26;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X`.
pub const REG_OUT_X: u8 = 0x29;
/// Register address of `OUT_Y`.
pub const REG_OUT_Y: u8 = 0x2B;
/// Register address of `OUT_Z`.
pub const REG_OUT_Z: u8 = 0x2D;

/// Value reported by `WHO_AM_I`.
pub const EXPECTED_WHO_AM_I: u8 = 0x32;

/// Bytes covered by a burst read from `OUT_X` through `OUT_Z`.
pub const OUTPUT_BURST_LEN: usize = (REG_OUT_Z - REG_OUT_X + 1) as usize;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Reset/default value defined by the datasheet.
    const RESET_VALUE: Self::Raw;
}

/// Returns the register as it reads right after power-up.
pub fn reset_value<R>() -> R
where
    R: Register<Raw = u8> + From<u8>,
{
    R::from(R::RESET_VALUE)
}

/// Bitfield representation of `CTRL_REG1` (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1 {
    // X-axis enable (bit 0).
    pub x_enable: bool,
    // Y-axis enable (bit 1).
    pub y_enable: bool,
    // Z-axis enable (bit 2).
    pub z_enable: bool,
    // Normal-mode data rate (bits 4:3).
    pub data_rate: DataRate,
    // Power mode (bits 7:5).
    pub power_mode: PowerMode,
}

impl From<u8> for CtrlReg1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg1> for u8 {
    fn from(value: CtrlReg1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG2` (address `0x21`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg2 {
    // High-pass cutoff selection (bits 1:0).
    pub cutoff: HighPassCutoff,
    // High-pass filter on interrupt 1 source (bit 2).
    pub hp_int1: bool,
    // High-pass filter on interrupt 2 source (bit 3).
    pub hp_int2: bool,
    // Filtered data selection for the output registers (bit 4).
    pub filtered_data: bool,
    // High-pass filter mode (bits 6:5).
    pub mode: HighPassMode,
    // Reboot memory content (bit 7, self-clearing).
    pub boot: bool,
}

impl From<u8> for CtrlReg2 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg2> for u8 {
    fn from(value: CtrlReg2) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG4` (address `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4 {
    // SPI 3-wire interface selection (bit 0).
    pub spi_3wire: bool,
    #[skip]
    __: B3,
    // Full-scale selection (bit 4).
    pub range: Range,
    #[skip]
    __: B2,
    // Block data update (bit 7).
    pub block_data_update: bool,
}

impl From<u8> for CtrlReg4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg4> for u8 {
    fn from(value: CtrlReg4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `STATUS_REG` (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New X-axis data available (bit 0).
    pub x_available: bool,
    // New Y-axis data available (bit 1).
    pub y_available: bool,
    // New Z-axis data available (bit 2).
    pub z_available: bool,
    // New data available on all axes (bit 3).
    pub xyz_available: bool,
    // X-axis data overrun (bit 4).
    pub x_overrun: bool,
    // Y-axis data overrun (bit 5).
    pub y_overrun: bool,
    // Z-axis data overrun (bit 6).
    pub z_overrun: bool,
    // Overrun on any axis (bit 7).
    pub xyz_overrun: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for CtrlReg1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Self::Raw = 0x07;
}

impl Register for CtrlReg2 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG2;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Self::Raw = 0x00;
}

impl Register for CtrlReg4 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Self::Raw = 0x00;
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Self::Raw = 0x00;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// CTRL_REG1 fields land on the datasheet bit positions.
    #[test]
    fn ctrl_reg1_layout_matches_datasheet() {
        let reg = CtrlReg1::new()
            .with_x_enable(true)
            .with_y_enable(false)
            .with_z_enable(true)
            .with_data_rate(DataRate::Hz400)
            .with_power_mode(PowerMode::Normal);

        assert_eq!(u8::from(reg), 0b001_10_1_0_1);
    }

    #[test]
    fn ctrl_reg1_reset_value_is_power_down_with_all_axes() {
        let reg = reset_value::<CtrlReg1>();
        assert!(reg.x_enable());
        assert!(reg.y_enable());
        assert!(reg.z_enable());
        assert_eq!(reg.data_rate(), DataRate::Hz50);
        assert_eq!(reg.power_mode(), PowerMode::PowerDown);
    }

    #[test]
    fn ctrl_reg2_layout_matches_datasheet() {
        let reg = CtrlReg2::new()
            .with_cutoff(HighPassCutoff::OdrDiv200)
            .with_filtered_data(true)
            .with_mode(HighPassMode::Reference)
            .with_boot(true);

        assert_eq!(u8::from(reg), 0b1_01_1_0_0_10);
    }

    #[test]
    fn ctrl_reg2_decodes_alternate_normal_mode() {
        let reg = CtrlReg2::from(0b0100_0000);
        assert_eq!(reg.mode_or_err().ok(), Some(HighPassMode::NormalAlt));
        assert!(CtrlReg2::from(0b0110_0000).mode_or_err().is_err());
    }

    /// Setting FS must preserve the reserved and SIM bits around it.
    #[test]
    fn ctrl_reg4_range_update_preserves_other_bits() {
        let mut reg = CtrlReg4::from(0b0100_0001);
        reg.set_range(Range::G200);
        reg.set_block_data_update(true);

        assert_eq!(u8::from(reg), 0b1101_0001);
        assert!(reg.spi_3wire());
    }

    #[test]
    fn status_layout_matches_datasheet() {
        let status = Status::from(0b1000_1000);
        assert!(status.xyz_available());
        assert!(status.xyz_overrun());
        assert!(!status.x_available());
        assert!(!status.z_overrun());
    }

    #[test]
    fn output_burst_spans_out_x_to_out_z() {
        assert_eq!(OUTPUT_BURST_LEN, 5);
        assert_eq!((REG_OUT_Y - REG_OUT_X) as usize, 2);
    }
}
