//! Error handling primitives for the H3LIS200DL driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Result of driver construction: on failure the bus is handed back with the error.
pub type InitResult<T, E, BUS> = core::result::Result<T, (Error<E>, BUS)>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// `WHO_AM_I` could not be read or did not match the H3LIS200DL identifier.
    DeviceNotFound,
    /// The bus reported an error while reading a register.
    BusRead(E),
    /// The bus reported an error while writing a register.
    BusWrite(E),
    /// A raw value does not map to any supported setting.
    InvalidArgument,
}

/// Rejection returned when converting a raw field value into a parameter enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidArgument;

impl<E> From<InvalidArgument> for Error<E> {
    fn from(_: InvalidArgument) -> Self {
        Self::InvalidArgument
    }
}
