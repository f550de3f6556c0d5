//! High-level H3LIS200DL device driver implementation.

use crate::config::{Axes, Config, HighPassFilter};
use crate::error::{Error, InitResult, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::spi::SpiInterface;
use crate::interface::H3lis200dlInterface;
use crate::log::{debug, info, warn};
use crate::params::{DataRate, PowerMode, Range};
use crate::registers::{
    CtrlReg1,
    CtrlReg2,
    CtrlReg4,
    reset_value,
    Register,
    RegisterAccess,
    Status,
    EXPECTED_WHO_AM_I,
    OUTPUT_BURST_LEN,
    REG_HP_FILTER_RESET,
    REG_OUT_X,
    REG_REFERENCE,
    REG_STATUS,
    REG_WHO_AM_I,
};
use crate::sample::{Acceleration, RawSample};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

// Datasheet boot time after setting CTRL_REG2.BOOT (milliseconds).
const BOOT_DELAY_MS: u32 = 5;

/// High-level synchronous driver for the H3LIS200DL accelerometer.
///
/// A handle only exists once `WHO_AM_I` has been verified. The cached [`Config`]
/// always mirrors the last register values written successfully.
pub struct H3lis200dl<IFACE> {
    interface: IFACE,
    config: Config,
}

/// Decoded view of `STATUS_REG` with explicit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    /// STATUS_REG[7] ZYXOR.
    pub xyz_overrun: bool,
    /// STATUS_REG[6] ZOR.
    pub z_overrun: bool,
    /// STATUS_REG[5] YOR.
    pub y_overrun: bool,
    /// STATUS_REG[4] XOR.
    pub x_overrun: bool,
    /// STATUS_REG[3] ZYXDA.
    pub xyz_available: bool,
    /// STATUS_REG[2] ZDA.
    pub z_available: bool,
    /// STATUS_REG[1] YDA.
    pub y_available: bool,
    /// STATUS_REG[0] XDA.
    pub x_available: bool,
}

impl From<Status> for StatusSnapshot {
    fn from(status: Status) -> Self {
        Self {
            xyz_overrun: status.xyz_overrun(),
            z_overrun: status.z_overrun(),
            y_overrun: status.y_overrun(),
            x_overrun: status.x_overrun(),
            xyz_available: status.xyz_available(),
            z_available: status.z_available(),
            y_available: status.y_available(),
            x_available: status.x_available(),
        }
    }
}

impl<IFACE> H3lis200dl<IFACE> {
    // ==================================================================
    // == Driver Ownership ==============================================
    // ==================================================================
    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the configuration last written to the device.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<I2C> H3lis200dl<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Identifies the device at `address` on the I²C bus and applies `config`.
    ///
    /// On failure the bus is returned alongside the error, so the caller can retry
    /// at [`ALTERNATE_ADDRESS`](crate::interface::i2c::ALTERNATE_ADDRESS).
    pub fn new_i2c(i2c: I2C, address: u8, config: Config) -> InitResult<Self, I2C::Error, I2C> {
        Self::new(I2cInterface::new(i2c, address), config)
            .map_err(|(err, iface)| (err, iface.release()))
    }

    /// Releases the driver, returning the I²C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<SPI> H3lis200dl<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Identifies the device over SPI and applies `config`.
    pub fn new_spi(spi: SPI, config: Config) -> InitResult<Self, SPI::Error, SPI> {
        Self::new(SpiInterface::new(spi), config)
            .map_err(|(err, iface)| (err, iface.release()))
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<IFACE, CommE> H3lis200dl<IFACE>
where
    IFACE: H3lis200dlInterface<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Verifies the device identity and applies `config`.
    ///
    /// Any failure while reading `WHO_AM_I`, or an unexpected identifier, yields
    /// [`Error::DeviceNotFound`] and no handle. Every error path returns the
    /// interface to the caller.
    pub fn new(mut interface: IFACE, config: Config) -> InitResult<Self, CommE, IFACE> {
        match interface.read_register(REG_WHO_AM_I) {
            Ok(EXPECTED_WHO_AM_I) => {}
            Ok(id) => {
                warn!("unexpected WHO_AM_I {=u8:#x}", id);
                return Err((Error::DeviceNotFound, interface));
            }
            Err(_) => {
                warn!("WHO_AM_I read failed");
                return Err((Error::DeviceNotFound, interface));
            }
        }

        // Seed with the datasheet reset state until each register is written.
        let seed = Config::from_registers(reset_value(), reset_value(), reset_value())
            .unwrap_or_default();
        let mut device = Self {
            interface,
            config: seed,
        };
        if let Err(err) = device.configure(config) {
            return Err((err, device.interface));
        }
        info!("H3LIS200DL ready");
        Ok(device)
    }

    /// Applies a full configuration, one control register at a time.
    ///
    /// Fields belonging to registers written before a failure keep their new
    /// values; the rest of the cache is untouched.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        self.modify::<CtrlReg1, _>(|reg| {
            reg.set_power_mode(config.power_mode);
            reg.set_data_rate(config.data_rate);
            reg.set_x_enable(config.axes.x);
            reg.set_y_enable(config.axes.y);
            reg.set_z_enable(config.axes.z);
        })?;
        self.config.power_mode = config.power_mode;
        self.config.data_rate = config.data_rate;
        self.config.axes = config.axes;

        self.configure_high_pass(config.high_pass)?;

        self.modify::<CtrlReg4, _>(|reg| {
            reg.set_range(config.range);
            reg.set_block_data_update(config.block_data_update);
        })?;
        self.config.range = config.range;
        self.config.block_data_update = config.block_data_update;

        Ok(())
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the raw `WHO_AM_I` register.
    pub fn who_am_i(&mut self) -> Result<u8, CommE> {
        self
            .interface
            .read_register(REG_WHO_AM_I)
            .map_err(Error::BusRead)
    }

    /// Reads the control registers back and decodes the live configuration.
    ///
    /// Unlike [`config`](Self::config) this reflects the device, including changes
    /// made behind the driver's back. A reserved bit pattern yields
    /// [`Error::InvalidArgument`].
    pub fn read_config(&mut self) -> Result<Config, CommE> {
        let ctrl1 = self.read_reg::<CtrlReg1>()?;
        let ctrl2 = self.read_reg::<CtrlReg2>()?;
        let ctrl4 = self.read_reg::<CtrlReg4>()?;

        Ok(Config::from_registers(ctrl1, ctrl2, ctrl4)?)
    }

    /// Returns a snapshot of `STATUS_REG`.
    pub fn read_status(&mut self) -> Result<StatusSnapshot, CommE> {
        let raw = self
            .interface
            .read_register(REG_STATUS)
            .map_err(Error::BusRead)?;

        Ok(StatusSnapshot::from(Status::from(raw)))
    }

    /// Returns `true` when a new sample is available on all three axes.
    pub fn data_ready(&mut self) -> Result<bool, CommE> {
        Ok(self.read_status()?.xyz_available)
    }

    // ==================================================================
    // == Measurement Configuration =====================================
    // ==================================================================
    /// Selects the full-scale range used for subsequent reads.
    pub fn set_range(&mut self, range: Range) -> Result<(), CommE> {
        self.modify::<CtrlReg4, _>(|reg| reg.set_range(range))?;
        self.config.range = range;
        Ok(())
    }

    /// Selects the normal-mode output data rate.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), CommE> {
        self.modify::<CtrlReg1, _>(|reg| reg.set_data_rate(rate))?;
        self.config.data_rate = rate;
        Ok(())
    }

    /// Selects the operating mode.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), CommE> {
        self.modify::<CtrlReg1, _>(|reg| reg.set_power_mode(mode))?;
        self.config.power_mode = mode;
        Ok(())
    }

    /// Enables or disables data evaluation per axis.
    pub fn set_axes(&mut self, x: bool, y: bool, z: bool) -> Result<(), CommE> {
        self.modify::<CtrlReg1, _>(|reg| {
            reg.set_x_enable(x);
            reg.set_y_enable(y);
            reg.set_z_enable(z);
        })?;
        self.config.axes = Axes { x, y, z };
        Ok(())
    }

    /// Enables or disables block data update.
    pub fn set_block_data_update(&mut self, enabled: bool) -> Result<(), CommE> {
        self.modify::<CtrlReg4, _>(|reg| reg.set_block_data_update(enabled))?;
        self.config.block_data_update = enabled;
        Ok(())
    }

    /// Updates the high-pass filter mode, cutoff and output routing.
    pub fn configure_high_pass(&mut self, high_pass: HighPassFilter) -> Result<(), CommE> {
        self.modify::<CtrlReg2, _>(|reg| {
            reg.set_mode(high_pass.mode);
            reg.set_cutoff(high_pass.cutoff);
            reg.set_filtered_data(high_pass.filtered_data);
        })?;
        self.config.high_pass = high_pass;
        Ok(())
    }

    /// Resets the high-pass filter by reading `HP_FILTER_RESET`.
    pub fn reset_high_pass_filter(&mut self) -> Result<(), CommE> {
        self
            .interface
            .read_register(REG_HP_FILTER_RESET)
            .map_err(Error::BusRead)?;
        Ok(())
    }

    /// Writes the high-pass reference value used in reference mode.
    pub fn set_reference(&mut self, reference: u8) -> Result<(), CommE> {
        self
            .interface
            .write_register(REG_REFERENCE, reference)
            .map_err(Error::BusWrite)
    }

    /// Reloads the trimming parameters from internal memory.
    ///
    /// `BOOT` clears itself once the reload finishes; the call blocks for the
    /// datasheet boot time.
    pub fn reboot_memory(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.modify::<CtrlReg2, _>(|reg| reg.set_boot(true))?;
        delay.delay_ms(BOOT_DELAY_MS);
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads a raw acceleration triplet in a single burst.
    pub fn read_raw(&mut self) -> Result<RawSample, CommE> {
        let mut raw = [0u8; OUTPUT_BURST_LEN];
        self
            .interface
            .read_many(REG_OUT_X, &mut raw)
            .map_err(Error::BusRead)?;

        Ok(RawSample::from_burst(&raw))
    }

    /// Returns acceleration in g, scaled for the configured range.
    pub fn read_acceleration(&mut self) -> Result<Acceleration, CommE> {
        let range = self.config.range;
        Ok(self.read_raw()?.to_acceleration(range))
    }

    /// Returns acceleration scaled in milli-g.
    pub fn read_acceleration_mg(&mut self) -> Result<[i32; 3], CommE> {
        let range = self.config.range;
        Ok(self.read_raw()?.to_mg(range))
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================
    fn read_reg<R>(&mut self) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8>,
    {
        self
            .interface
            .read_register(R::ADDRESS)
            .map(R::from)
            .map_err(Error::BusRead)
    }

    fn modify<R, F>(&mut self, mutate: F) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8> + Into<u8> + Copy,
        F: FnOnce(&mut R),
    {
        debug_assert!(R::ACCESS == RegisterAccess::ReadWrite);

        let current = self
            .interface
            .read_register(R::ADDRESS)
            .map_err(Error::BusRead)?;

        let mut reg = R::from(current);
        mutate(&mut reg);

        let updated: u8 = reg.into();
        if updated != current {
            self
                .interface
                .write_register(R::ADDRESS, updated)
                .map_err(Error::BusWrite)?;
            debug!("write {=u8:#x} = {=u8:#x}", R::ADDRESS, updated);
        }

        Ok(reg)
    }
}
