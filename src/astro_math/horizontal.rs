use super::{
    calculate_local_sidereal_time, deg_to_hours, deg_to_rad, hours_to_deg, modulo, rad_to_deg,
    Degrees, Hours, Radians,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Azimuth is measured from North, increasing towards East
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct HorizontalCoordinate {
    pub altitude: Degrees,
    pub azimuth: Degrees,
}

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    pub right_ascension: Hours,
    pub declination: Degrees,
}

/// Where and when a coordinate is observed from
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ObserverFrame {
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub time: DateTime<Utc>,
}

impl ObserverFrame {
    pub fn new(latitude: Degrees, longitude: Degrees, time: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            time,
        }
    }

    pub fn local_sidereal_time(&self) -> Radians {
        calculate_local_sidereal_time(self.longitude, self.time)
    }

    pub fn horizontal_from_equatorial(&self, eq: EquatorialCoordinate) -> HorizontalCoordinate {
        calculate_alt_az_from_ra_dec(
            eq.right_ascension,
            eq.declination,
            self.latitude,
            self.longitude,
            self.time,
        )
    }

    pub fn equatorial_from_horizontal(&self, hz: HorizontalCoordinate) -> EquatorialCoordinate {
        calculate_ra_dec_from_alt_az(
            hz.altitude,
            hz.azimuth,
            self.latitude,
            self.longitude,
            self.time,
        )
    }
}

/// ra in hours, everything else in degrees
///
/// Azimuth is meaningless at the zenith, the nadir and on a pole, where it may be NaN.
pub fn calculate_alt_az_from_ra_dec(
    ra: Hours,
    dec: Degrees,
    lat: Degrees,
    lon: Degrees,
    time: DateTime<Utc>,
) -> HorizontalCoordinate {
    let ra = deg_to_rad(hours_to_deg(ra));
    let dec = deg_to_rad(dec);
    let lat = deg_to_rad(lat);

    let ha = calculate_local_sidereal_time(lon, time) - ra;

    let alt = (dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos()).asin();
    let az = rad_to_deg(((dec.sin() - alt.sin() * lat.sin()) / (alt.cos() * lat.cos())).acos());

    HorizontalCoordinate {
        altitude: rad_to_deg(alt),
        azimuth: if 0. < ha.sin() { 360. - az } else { az },
    }
}

/// Inverse of [`calculate_alt_az_from_ra_dec`]. Right ascension is returned in hours, `[0, 24)`.
///
/// An observer on a pole has no hour angle, so right ascension comes back NaN there.
pub fn calculate_ra_dec_from_alt_az(
    alt: Degrees,
    az: Degrees,
    lat: Degrees,
    lon: Degrees,
    time: DateTime<Utc>,
) -> EquatorialCoordinate {
    let alt = deg_to_rad(alt);
    let az = deg_to_rad(az);
    let lat = deg_to_rad(lat);

    let dec = (alt.sin() * lat.sin() + alt.cos() * lat.cos() * az.cos()).asin();

    let ha = ((alt.sin() - dec.sin() * lat.sin()) / (dec.cos() * lat.cos())).acos();
    let ha = if 0. < az.sin() { TAU - ha } else { ha };

    let ra = modulo(calculate_local_sidereal_time(lon, time) - ha, TAU);

    EquatorialCoordinate {
        right_ascension: deg_to_hours(rad_to_deg(ra)),
        declination: rad_to_deg(dec),
    }
}
