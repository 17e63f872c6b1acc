use super::{DecimalDegrees, LatitudeAngle, LongitudeAngle};
use crate::util::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};
use tracing::debug;

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct DmsPosition {
    pub latitude: LatitudeAngle,
    pub longitude: LongitudeAngle,
}

impl DmsPosition {
    /// Converts a decimal position, rejecting a latitude outside [-90, 90]
    /// or a longitude outside [-180, 180]. Latitude is checked first.
    pub fn new(latlon: DecimalDegrees) -> Result<Self> {
        let DecimalDegrees {
            latitude,
            longitude,
        } = latlon;

        let latitude = LatitudeAngle::checked_from_decimal_degrees(latitude);
        let longitude = LongitudeAngle::checked_from_decimal_degrees(longitude);

        match (latitude, longitude) {
            (Ok(latitude), Ok(longitude)) => Ok(Self {
                latitude,
                longitude,
            }),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Rejected position: {}", e);
                Err(e)
            }
        }
    }
}

impl TryFrom<DecimalDegrees> for DmsPosition {
    type Error = crate::util::RangeError;

    fn try_from(latlon: DecimalDegrees) -> Result<Self> {
        Self::new(latlon)
    }
}

impl Add for DmsPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            latitude: self.latitude + rhs.latitude,
            longitude: self.longitude + rhs.longitude,
        }
    }
}

impl Sub for DmsPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            latitude: self.latitude - rhs.latitude,
            longitude: self.longitude - rhs.longitude,
        }
    }
}

impl Display for DmsPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::LatitudeDirection::*;
    use crate::util::LongitudeDirection::*;
    use crate::util::{Axis, RangeError};

    #[test]
    fn test_new() {
        let dms = DmsPosition::new(DecimalDegrees::new(23.33, 42.55)).unwrap();
        assert_eq!(
            dms.latitude,
            LatitudeAngle::new(23, 19, 47.99999999999392, North)
        );
        assert_eq!(
            dms.longitude,
            LongitudeAngle::new(42, 32, 59.9999999999898, East)
        );
        assert_eq!(
            dms.to_string(),
            "23°19'47.99999999999392\" N 42°32'59.9999999999898\" E"
        );
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(
            DmsPosition::new(DecimalDegrees::new(91., 0.)),
            Err(RangeError::new(Axis::Latitude, 91.))
        );
        assert_eq!(
            DmsPosition::new(DecimalDegrees::new(0., 181.)),
            Err(RangeError::new(Axis::Longitude, 181.))
        );
        // both out of range reports latitude
        assert_eq!(
            DmsPosition::new(DecimalDegrees::new(-90.5, -200.)),
            Err(RangeError::new(Axis::Latitude, -90.5))
        );
        assert!(DmsPosition::try_from(DecimalDegrees::new(f64::NAN, 0.)).is_err());
    }

    #[test]
    fn test_new_bounds() {
        let dms = DmsPosition::new(DecimalDegrees::new(-90., -180.)).unwrap();
        assert_eq!(dms.latitude, LatitudeAngle::new(90, 0, 0., South));
        assert_eq!(dms.longitude, LongitudeAngle::new(180, 0, 0., West));

        let dms = DmsPosition::new(DecimalDegrees::new(90., 180.)).unwrap();
        assert_eq!(dms.latitude.direction, North);
        assert_eq!(dms.longitude.direction, East);
    }

    #[test]
    fn test_new_origin_is_south_west() {
        let dms = DmsPosition::new(DecimalDegrees::new(0., 0.)).unwrap();
        assert_eq!(dms.to_string(), "0°0'0\" S 0°0'0\" W");
    }

    #[test]
    fn test_add() {
        let a = DmsPosition {
            latitude: LatitudeAngle::new(10, 30, 0., North),
            longitude: LongitudeAngle::new(170, 0, 0., East),
        };
        let b = DmsPosition {
            latitude: LatitudeAngle::new(5, 45, 0., South),
            longitude: LongitudeAngle::new(20, 30, 15.5, East),
        };
        assert_eq!(
            a + b,
            DmsPosition {
                latitude: LatitudeAngle::new(4, 45, 0., North),
                longitude: LongitudeAngle::new(190, 30, 15.5, East),
            }
        );
    }

    #[test]
    fn test_sub() {
        let a = DmsPosition {
            latitude: LatitudeAngle::new(10, 0, 0., South),
            longitude: LongitudeAngle::new(0, 0, 30., West),
        };
        let b = DmsPosition {
            latitude: LatitudeAngle::new(10, 0, 0., North),
            longitude: LongitudeAngle::new(0, 1, 0., West),
        };
        assert_eq!(
            a - b,
            DmsPosition {
                latitude: LatitudeAngle::new(20, 0, 0., South),
                longitude: LongitudeAngle::new(0, 0, 30., East),
            }
        );
    }

    #[test]
    fn test_decimal_round_trip() {
        let dms = DmsPosition::new(DecimalDegrees::new(-66.434323, -115.25)).unwrap();
        let latlon = DecimalDegrees::from(&dms);
        assert_float_absolute_eq!(latlon.latitude, -66.434323, 1E-12);
        assert_float_absolute_eq!(latlon.longitude, -115.25, 1E-12);
    }
}
