//! Bus interface abstraction for the H3LIS200DL driver.

pub mod i2c;
pub mod spi;

/// Abstraction over the low-level bus access required by the driver.
pub trait H3lis200dlInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads consecutive registers into the provided buffer using address auto-increment.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;
}
