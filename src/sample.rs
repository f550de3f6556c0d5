//! Acceleration sample types and output-register decoding.

use crate::params::Range;
use crate::registers::OUTPUT_BURST_LEN;

/// Standard gravity in m/s² used for unit conversion.
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Raw two's complement counts from `OUT_X`, `OUT_Y` and `OUT_Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// X-axis counts.
    pub x: i8,
    /// Y-axis counts.
    pub y: i8,
    /// Z-axis counts.
    pub z: i8,
}

impl RawSample {
    /// Decodes a burst read that started at `OUT_X`.
    ///
    /// The axis registers are interleaved with reserved addresses, so the
    /// samples sit at offsets 0, 2 and 4.
    pub const fn from_burst(raw: &[u8; OUTPUT_BURST_LEN]) -> Self {
        Self {
            x: raw[0] as i8,
            y: raw[2] as i8,
            z: raw[4] as i8,
        }
    }

    /// Scales the counts into milli-g for the given range.
    pub const fn to_mg(self, range: Range) -> [i32; 3] {
        let mg = range.mg_per_digit() as i32;
        [self.x as i32 * mg, self.y as i32 * mg, self.z as i32 * mg]
    }

    /// Scales the counts into g for the given range.
    pub fn to_acceleration(self, range: Range) -> Acceleration {
        let scale = range.g_per_digit();
        Acceleration {
            x: self.x as f32 * scale,
            y: self.y as f32 * scale,
            z: self.z as f32 * scale,
        }
    }
}

/// Acceleration expressed in g.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X-axis acceleration in g.
    pub x: f32,
    /// Y-axis acceleration in g.
    pub y: f32,
    /// Z-axis acceleration in g.
    pub z: f32,
}

impl Acceleration {
    /// Converts to m/s².
    pub fn to_meters_per_second_squared(self) -> [f32; 3] {
        [
            self.x * STANDARD_GRAVITY,
            self.y * STANDARD_GRAVITY,
            self.z * STANDARD_GRAVITY,
        ]
    }
}
