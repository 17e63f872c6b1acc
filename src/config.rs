use crate::astro_math::{Degrees, EquatorialCoordinate, Hours};
use crate::dms::DecimalDegrees;
use serde::{Deserialize, Serialize};

/* Config */
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub observation_location: ObservingLocation,
    pub target: TargetSettings,
}

/* Location */
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct ObservingLocation {
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub elevation: f64,
}

impl Default for ObservingLocation {
    fn default() -> Self {
        Self {
            latitude: 51.47,
            longitude: 0.0,
            elevation: 15.0,
        }
    }
}

impl From<ObservingLocation> for DecimalDegrees {
    fn from(location: ObservingLocation) -> Self {
        DecimalDegrees::new(location.latitude, location.longitude)
    }
}

/* Target */
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct TargetSettings {
    pub right_ascension: Hours,
    pub declination: Degrees,
}

impl Default for TargetSettings {
    // Polaris
    fn default() -> Self {
        Self {
            right_ascension: 2.530301,
            declination: 89.264109,
        }
    }
}

impl From<TargetSettings> for EquatorialCoordinate {
    fn from(target: TargetSettings) -> Self {
        EquatorialCoordinate {
            right_ascension: target.right_ascension,
            declination: target.declination,
        }
    }
}
