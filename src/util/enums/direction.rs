use super::Axis;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// The two directions an angle on one axis can point.
/// A `DmsAngle` stores an unsigned magnitude, so the direction carries the sign.
pub trait Hemisphere: Copy + Eq + Debug + Display {
    const AXIS: Axis;
    /// North or East
    const POSITIVE: Self;
    /// South or West
    const NEGATIVE: Self;

    fn is_negative(self) -> bool {
        self == Self::NEGATIVE
    }

    fn sign(self) -> f64 {
        if self.is_negative() {
            -1.
        } else {
            1.
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum LatitudeDirection {
    North,
    South,
}

impl Hemisphere for LatitudeDirection {
    const AXIS: Axis = Axis::Latitude;
    const POSITIVE: Self = LatitudeDirection::North;
    const NEGATIVE: Self = LatitudeDirection::South;
}

impl Display for LatitudeDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LatitudeDirection::North => write!(f, "N"),
            LatitudeDirection::South => write!(f, "S"),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum LongitudeDirection {
    East,
    West,
}

impl Hemisphere for LongitudeDirection {
    const AXIS: Axis = Axis::Longitude;
    const POSITIVE: Self = LongitudeDirection::East;
    const NEGATIVE: Self = LongitudeDirection::West;
}

impl Display for LongitudeDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LongitudeDirection::East => write!(f, "E"),
            LongitudeDirection::West => write!(f, "W"),
        }
    }
}
