use crate::astro_math::{ms_to_dec, Degrees};
use crate::util::{check_range, Hemisphere, LatitudeDirection, LongitudeDirection, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

/// An unsigned sexagesimal magnitude together with the direction it points in.
///
/// Minutes and seconds are not range checked. Angles built by hand should keep them
/// in `[0, 60)`; sums produced by arithmetic may have more than 180 or 360 degrees.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct DmsAngle<D> {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub direction: D,
}

pub type LatitudeAngle = DmsAngle<LatitudeDirection>;
pub type LongitudeAngle = DmsAngle<LongitudeDirection>;

impl<D: Hemisphere> DmsAngle<D> {
    pub fn new(degrees: u32, minutes: u32, seconds: f64, direction: D) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            direction,
        }
    }

    /// Splits a decimal angle into degrees, minutes and seconds.
    ///
    /// Only strictly positive values point North or East, so 0 is South or West.
    /// The seconds keep whatever floating point residue the subtraction leaves.
    pub fn from_decimal_degrees(value: Degrees) -> Self {
        let direction = if value > 0. { D::POSITIVE } else { D::NEGATIVE };

        let value = value.abs();
        let degrees = value.floor() as u32;
        let minutes = ((value - degrees as f64) * 60.).floor() as u32;
        let seconds = (value - degrees as f64 - minutes as f64 / 60.) * 3600.;

        Self::new(degrees, minutes, seconds, direction)
    }

    /// [`DmsAngle::from_decimal_degrees`] after checking the value against the range of `D`'s axis
    pub fn checked_from_decimal_degrees(value: Degrees) -> Result<Self> {
        check_range(D::AXIS, value)?;
        Ok(Self::from_decimal_degrees(value))
    }

    /// Rebuilds an angle from signed total seconds.
    ///
    /// Unlike [`DmsAngle::from_decimal_degrees`], 0 points North or East.
    /// No upper bound is applied, and non-finite totals saturate the `u32` fields.
    pub fn from_total_seconds(total: f64) -> Self {
        let direction = if total < 0. { D::NEGATIVE } else { D::POSITIVE };

        let total = total.abs();
        let degrees = (total / 3600.).floor();
        let remainder = total - degrees * 3600.;
        let minutes = (remainder / 60.).floor();
        let seconds = remainder - minutes * 60.;

        Self::new(degrees as u32, minutes as u32, seconds, direction)
    }

    /// Signed seconds of arc, negative for South and West
    pub fn to_total_seconds(&self) -> f64 {
        let magnitude = self.degrees as f64 * 3600. + self.minutes as f64 * 60. + self.seconds;
        self.direction.sign() * magnitude
    }

    /// Signed decimal degrees, negative for South and West
    pub fn to_decimal_degrees(&self) -> Degrees {
        self.direction.sign() * ms_to_dec(self.degrees, self.minutes, self.seconds)
    }

    /// The angle that takes `self` to `to`
    pub fn delta(&self, to: &Self) -> Self {
        *to - *self
    }
}

impl<D: Hemisphere> Add for DmsAngle<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_total_seconds(self.to_total_seconds() + rhs.to_total_seconds())
    }
}

impl<D: Hemisphere> Sub for DmsAngle<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_total_seconds(self.to_total_seconds() - rhs.to_total_seconds())
    }
}

impl<D: Display> Display for DmsAngle<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}°{}'{}\" {}",
            self.degrees, self.minutes, self.seconds, self.direction
        )
    }
}
