//! Julian Date and sidereal time after Meeus, *Astronomical Algorithms*, ch. 7 and 12.

use super::{deg_to_rad, modulo, Degrees, Radians};
use chrono::{DateTime, Datelike, Timelike, Utc};
use polynomials::poly;
use std::f64::consts::TAU;
use tracing::trace;

/// Julian Date of the J2000.0 epoch
pub const J2000: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Calculates the Julian Date of a time, including the fraction of the day
pub fn calc_jd(time: DateTime<Utc>) -> f64 {
    let day_fraction = (time.hour() as f64
        + time.minute() as f64 / 60.
        + (time.second() as f64 + time.nanosecond() as f64 / 1e9) / 3600.)
        / 24.;

    let (mut y, mut m) = (time.year(), time.month() as i32);
    let d = time.day() as f64 + day_fraction;

    // January and February count as months 13 and 14 of the previous year
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    // Gregorian calendar correction
    let a = f64::floor(y as f64 / 100.);
    let b = 2. - a + f64::floor(a / 4.);

    f64::floor(365.25 * (y + 4716) as f64) + f64::floor(30.6001 * (m + 1) as f64) + d + b - 1524.5
}

/// Greenwich mean sidereal time in degrees, `[0, 360)`
pub fn calculate_greenwich_sidereal_time(time: DateTime<Utc>) -> Degrees {
    let jd = calc_jd(time);
    let d = jd - J2000;
    let t = d / DAYS_PER_JULIAN_CENTURY;

    // Terms in Julian centuries; the daily rotation term is added separately
    let century_terms = poly![280.46061837, 0., 0.000387933, -1. / 38_710_000.];
    let gst = 360.98564736629 * d + century_terms.eval(t).unwrap_or(f64::NAN);

    trace!(jd, gst, "greenwich sidereal time");
    modulo(gst, 360.)
}

/// longitude in degrees, positive East
/// returns radians in `[0, 2π)`
pub fn calculate_local_sidereal_time(longitude: Degrees, time: DateTime<Utc>) -> Radians {
    let lst = modulo(calculate_greenwich_sidereal_time(time) + longitude, 360.);
    modulo(deg_to_rad(lst), TAU)
}
