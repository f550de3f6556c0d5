#![no_std]

mod error;

pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::config::Config;
pub use crate::device::H3lis200dl;
pub use crate::error::{Error, InitResult, InvalidArgument, Result};
pub use crate::sample::{Acceleration, RawSample};
