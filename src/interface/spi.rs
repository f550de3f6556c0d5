//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::H3lis200dlInterface;

const READ: u8 = 0x80;
const AUTO_INCREMENT: u8 = 0x40;
const ADDRESS_MASK: u8 = 0x3F;

/// SPI-based interface implementation for the H3LIS200DL driver (4-wire mode).
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte: `RW` in bit 7, `MS` in bit 6, address in bits 5:0.
    fn command_byte(register: u8, is_read: bool, auto_increment: bool) -> u8 {
        let mut command = register & ADDRESS_MASK;
        if is_read {
            command |= READ;
        }
        if auto_increment {
            command |= AUTO_INCREMENT;
        }
        command
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> H3lis200dlInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let command = [Self::command_byte(register, false, false)];
        let payload = [value];
        let mut operations = [Operation::Write(&command), Operation::Write(&payload)];
        self.spi.transaction(&mut operations)
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [Self::command_byte(register, true, buf.len() > 1)];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)
    }
}
