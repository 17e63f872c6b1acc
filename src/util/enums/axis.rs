use crate::astro_math::Degrees;
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest magnitude a decimal position may have on this axis
    pub fn limit(&self) -> Degrees {
        match self {
            Axis::Latitude => 90.,
            Axis::Longitude => 180.,
        }
    }

    pub fn contains(&self, value: Degrees) -> bool {
        let limit = self.limit();
        (-limit..=limit).contains(&value)
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}
