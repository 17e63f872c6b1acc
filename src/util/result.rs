use super::Axis;
use crate::astro_math::Degrees;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::{fmt, result};

pub type Result<T> = result::Result<T, RangeError>;

/// A decimal position that falls outside the valid range of its axis
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RangeError {
    pub axis: Axis,
    pub value: Degrees,
}

impl RangeError {
    pub fn new(axis: Axis, value: Degrees) -> Self {
        Self { axis, value }
    }
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let limit = self.axis.limit();
        write!(
            f,
            "{} must be in range of -{} and {}, found {}",
            self.axis, limit, limit, self.value
        )
    }
}

impl Error for RangeError {}

/// Rejects values outside `[-limit, limit]` for the axis, NaN included
pub fn check_range(axis: Axis, value: Degrees) -> Result<()> {
    if axis.contains(value) {
        Ok(())
    } else {
        Err(RangeError::new(axis, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(Axis::Latitude, 45.).is_ok());
        assert_eq!(
            check_range(Axis::Latitude, -91.),
            Err(RangeError::new(Axis::Latitude, -91.))
        );
        assert!(check_range(Axis::Longitude, f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RangeError::new(Axis::Latitude, 91.).to_string(),
            "latitude must be in range of -90 and 90, found 91"
        );
        assert_eq!(
            RangeError::new(Axis::Longitude, -180.5).to_string(),
            "longitude must be in range of -180 and 180, found -180.5"
        );
    }
}
