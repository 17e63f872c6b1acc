use std::f64::consts::PI;

pub use horizontal::*;
pub use sidereal::*;

mod horizontal;
mod sidereal;

pub type Hours = f64;
pub type Degrees = f64;
pub type Radians = f64;

pub fn deg_to_rad(degrees: Degrees) -> Radians {
    PI * degrees / 180.
}

pub fn rad_to_deg(rad: Radians) -> Degrees {
    180. * rad / PI
}

pub fn rad_to_hours(rad: Radians) -> Hours {
    12. * rad / PI
}

pub fn deg_to_hours(deg: Degrees) -> Hours {
    deg / 15.
}

pub fn hours_to_deg(hours: Hours) -> Degrees {
    hours * 15.
}

// Convert hms to hours or dms to degrees
pub fn ms_to_dec(d: u32, minutes: u32, seconds: f64) -> f64 {
    (d as f64) + (minutes as f64) / 60. + seconds / 3600.
}

/// Remainder of `val / base` folded into `[0, base)`
pub fn modulo(val: f64, base: f64) -> f64 {
    ((val % base) + base) % base
}
