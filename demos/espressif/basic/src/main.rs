#![no_std]
#![no_main]

use defmt::{info, warn};
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::main;
use esp_hal::time::Rate;
use h3lis200dl::interface::i2c::{ALTERNATE_ADDRESS, DEFAULT_ADDRESS};
use h3lis200dl::params::{DataRate, Range};
use h3lis200dl::{Config, H3lis200dl};
use panic_rtt_target as _;

esp_bootloader_esp_idf::esp_app_desc!();

#[main]
fn main() -> ! {
    rtt_target::rtt_init_defmt!();

    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));
    let delay = Delay::new();

    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(400)),
    )
    .unwrap()
    .with_sda(peripherals.GPIO4)
    .with_scl(peripherals.GPIO5);

    let config = Config::new()
        .range(Range::G200)
        .data_rate(DataRate::Hz100)
        .block_data_update(true)
        .build();

    // SA0 may be strapped either way; try 0x19 first, then 0x18.
    let mut accel = match H3lis200dl::new_i2c(i2c, DEFAULT_ADDRESS, config) {
        Ok(accel) => accel,
        Err((err, i2c)) => {
            warn!("no H3LIS200DL at {=u8:#x}: {}", DEFAULT_ADDRESS, err);
            match H3lis200dl::new_i2c(i2c, ALTERNATE_ADDRESS, config) {
                Ok(accel) => accel,
                Err((err, _)) => defmt::panic!("no H3LIS200DL on the bus: {}", err),
            }
        }
    };
    info!("config {}", accel.config());

    loop {
        match accel.data_ready() {
            Ok(true) => match accel.read_acceleration() {
                Ok(g) => info!("x={} y={} z={} g", g.x, g.y, g.z),
                Err(err) => warn!("read failed: {}", err),
            },
            Ok(false) => {}
            Err(err) => warn!("status failed: {}", err),
        }
        delay.delay_millis(10);
    }
}
