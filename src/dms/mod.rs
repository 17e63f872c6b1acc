//! Sexagesimal (degrees, minutes, seconds) angles and positions.
//!
//! Arithmetic happens on signed total seconds so carries between fields never need handling.

pub use angle::*;
pub use position::*;

mod angle;
pub mod autostar;
mod position;

use crate::astro_math::Degrees;
use serde::{Deserialize, Serialize};

/// Latitude/longitude as signed decimal degrees, positive North and East
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct DecimalDegrees {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl DecimalDegrees {
    pub fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&DmsPosition> for DecimalDegrees {
    fn from(pos: &DmsPosition) -> Self {
        Self {
            latitude: pos.latitude.to_decimal_degrees(),
            longitude: pos.longitude.to_decimal_degrees(),
        }
    }
}
