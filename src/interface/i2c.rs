//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::H3lis200dlInterface;

/// Default 7-bit address (SA0 pulled high).
pub const DEFAULT_ADDRESS: u8 = 0x19;
/// Alternate 7-bit address (SA0 pulled low).
pub const ALTERNATE_ADDRESS: u8 = 0x18;

// Sub-address MSB requests register auto-increment on multi-byte reads.
const AUTO_INCREMENT: u8 = 0x80;

/// I²C-based interface implementation for the H3LIS200DL driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface addressing the device at `address`.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit device address in use.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I²C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> H3lis200dlInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c.write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        match buf.len() {
            0 => Ok(()),
            1 => self.i2c.write_read(self.address, &[register], buf),
            _ => self
                .i2c
                .write_read(self.address, &[register | AUTO_INCREMENT], buf),
        }
    }
}
