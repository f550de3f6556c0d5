//! Configuration primitives for the H3LIS200DL driver.

use crate::error::InvalidArgument;
use crate::params::{DataRate, HighPassCutoff, HighPassMode, PowerMode, Range};
use crate::registers::{CtrlReg1, CtrlReg2, CtrlReg4};

/// Per-axis enable flags (`CTRL_REG1.Xen/Yen/Zen`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axes {
    /// X-axis enabled.
    pub x: bool,
    /// Y-axis enabled.
    pub y: bool,
    /// Z-axis enabled.
    pub z: bool,
}

impl Axes {
    /// All three axes enabled.
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };
}

impl Default for Axes {
    fn default() -> Self {
        Self::ALL
    }
}

/// High-pass filter settings held in `CTRL_REG2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HighPassFilter {
    /// Filter mode.
    pub mode: HighPassMode,
    /// Cutoff selection relative to the output data rate.
    pub cutoff: HighPassCutoff,
    /// Route filtered data to the output registers.
    pub filtered_data: bool,
}

impl Default for HighPassFilter {
    fn default() -> Self {
        Self {
            mode: HighPassMode::Normal,
            cutoff: HighPassCutoff::OdrDiv50,
            filtered_data: false,
        }
    }
}

/// User-facing configuration for the H3LIS200DL sensor.
///
/// The driver keeps a copy of the last configuration written to the device and
/// uses [`Config::range`] to scale every acceleration read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Operating mode.
    pub power_mode: PowerMode,
    /// Normal-mode output data rate.
    pub data_rate: DataRate,
    /// Axis enables.
    pub axes: Axes,
    /// Full-scale measurement range.
    pub range: Range,
    /// Block data update: output registers are not refreshed until read.
    pub block_data_update: bool,
    /// High-pass filter settings.
    pub high_pass: HighPassFilter,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Decodes the configuration held in the control registers.
    ///
    /// Reserved bit patterns (e.g. `PM = 0b111`) are rejected instead of panicking.
    pub fn from_registers(
        ctrl1: CtrlReg1,
        ctrl2: CtrlReg2,
        ctrl4: CtrlReg4,
    ) -> Result<Self, InvalidArgument> {
        Ok(Self {
            power_mode: ctrl1.power_mode_or_err().map_err(|_| InvalidArgument)?,
            data_rate: ctrl1.data_rate_or_err().map_err(|_| InvalidArgument)?,
            axes: Axes {
                x: ctrl1.x_enable(),
                y: ctrl1.y_enable(),
                z: ctrl1.z_enable(),
            },
            range: ctrl4.range_or_err().map_err(|_| InvalidArgument)?,
            block_data_update: ctrl4.block_data_update(),
            high_pass: HighPassFilter {
                mode: ctrl2.mode_or_err().map_err(|_| InvalidArgument)?,
                cutoff: ctrl2.cutoff_or_err().map_err(|_| InvalidArgument)?,
                filtered_data: ctrl2.filtered_data(),
            },
        })
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the operating mode.
    pub fn power_mode(mut self, power_mode: PowerMode) -> Self {
        self.config.power_mode = power_mode;
        self
    }

    /// Overrides the output data rate.
    pub fn data_rate(mut self, data_rate: DataRate) -> Self {
        self.config.data_rate = data_rate;
        self
    }

    /// Selects which axes are measured.
    pub fn axes(mut self, x: bool, y: bool, z: bool) -> Self {
        self.config.axes = Axes { x, y, z };
        self
    }

    /// Overrides the full-scale range.
    pub fn range(mut self, range: Range) -> Self {
        self.config.range = range;
        self
    }

    /// Enables or disables block data update.
    pub fn block_data_update(mut self, enabled: bool) -> Self {
        self.config.block_data_update = enabled;
        self
    }

    /// Sets the high-pass filter settings.
    pub fn high_pass(mut self, high_pass: HighPassFilter) -> Self {
        self.config.high_pass = high_pass;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            power_mode: PowerMode::Normal,
            data_rate: DataRate::Hz50,
            axes: Axes::ALL,
            range: Range::G100,
            block_data_update: false,
            high_pass: HighPassFilter::default(),
        }
    }
}
