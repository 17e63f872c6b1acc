//! Angle encodings for the Meade Autostar / LX200 serial protocol.
//!
//! Longitude is sent as `DDD*MM` measured westward through 360, latitude as `sDD*MM`.

use super::{LatitudeAngle, LongitudeAngle};
use crate::util::{LatitudeDirection, LongitudeDirection};

/// Prepends `0` until `s` is `width` characters long. A leading `-` counts towards the width.
pub fn pad_left(s: &str, width: usize) -> String {
    let mut padded = String::with_capacity(width.max(s.len()));
    for _ in s.len()..width {
        padded.push('0');
    }
    padded.push_str(s);
    padded
}

pub fn autostar_longitude(angle: &LongitudeAngle) -> String {
    let (degrees, minutes) = match angle.direction {
        LongitudeDirection::East => (angle.degrees as i64, angle.minutes as i64),
        // minutes are complemented on their own, so 12°26' W becomes 348°34'
        LongitudeDirection::West => (
            360 - angle.degrees as i64,
            if angle.minutes == 0 {
                0
            } else {
                60 - angle.minutes as i64
            },
        ),
    };

    format!(
        "{}*{}",
        pad_left(&degrees.to_string(), 3),
        pad_left(&minutes.to_string(), 2)
    )
}

pub fn autostar_latitude(angle: &LatitudeAngle) -> String {
    let degrees = match angle.direction {
        LatitudeDirection::North => angle.degrees as i64,
        LatitudeDirection::South => -(angle.degrees as i64),
    };

    format!(
        "{}*{}",
        pad_left(&degrees.to_string(), 2),
        pad_left(&angle.minutes.to_string(), 2)
    )
}

/// `:St` command setting the site latitude
pub fn site_latitude_command(angle: &LatitudeAngle) -> String {
    format!(":St{}#", autostar_latitude(angle))
}

/// `:Sg` command setting the site longitude
pub fn site_longitude_command(angle: &LongitudeAngle) -> String {
    format!(":Sg{}#", autostar_longitude(angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dms::{DecimalDegrees, DmsPosition};
    use crate::util::LatitudeDirection::*;
    use crate::util::LongitudeDirection::*;

    fn rome() -> DmsPosition {
        DmsPosition::new(DecimalDegrees::new(41.82326, 12.44474)).unwrap()
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("7", 3), "007");
        assert_eq!(pad_left("42", 2), "42");
        assert_eq!(pad_left("1234", 3), "1234");
        assert_eq!(pad_left("-5", 2), "-5");
        assert_eq!(pad_left("-5", 3), "0-5");
        assert_eq!(pad_left("", 2), "00");
    }

    #[test]
    fn test_autostar_longitude() {
        let mut longitude = rome().longitude;
        assert_eq!(autostar_longitude(&longitude), "012*26");

        longitude.direction = West;
        assert_eq!(autostar_longitude(&longitude), "348*34");

        let cases = [
            (LongitudeAngle::new(0, 0, 0., East), "000*00"),
            (LongitudeAngle::new(180, 0, 0., West), "180*00"),
            (LongitudeAngle::new(90, 0, 0., East), "090*00"),
            (LongitudeAngle::new(90, 0, 0., West), "270*00"),
            (LongitudeAngle::new(180, 0, 0., East), "180*00"),
            (LongitudeAngle::new(1, 0, 0., West), "359*00"),
            (LongitudeAngle::new(1, 59, 0., West), "359*01"),
        ];
        for (angle, expected) in cases {
            assert_eq!(autostar_longitude(&angle), expected);
        }
    }

    #[test]
    fn test_autostar_latitude() {
        let mut latitude = rome().latitude;
        assert_eq!(autostar_latitude(&latitude), "41*49");

        latitude.direction = South;
        assert_eq!(autostar_latitude(&latitude), "-41*49");

        let cases = [
            (LatitudeAngle::new(0, 0, 0., North), "00*00"),
            (LatitudeAngle::new(90, 0, 0., North), "90*00"),
            (LatitudeAngle::new(90, 0, 0., South), "-90*00"),
            (LatitudeAngle::new(5, 7, 0., South), "-5*07"),
            (LatitudeAngle::new(5, 7, 0., North), "05*07"),
        ];
        for (angle, expected) in cases {
            assert_eq!(autostar_latitude(&angle), expected);
        }
    }

    #[test]
    fn test_site_commands() {
        let site = rome();
        assert_eq!(site_latitude_command(&site.latitude), ":St41*49#");
        assert_eq!(site_longitude_command(&site.longitude), ":Sg012*26#");
    }
}
