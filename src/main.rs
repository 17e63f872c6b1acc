use autostar_coords::astro_math::{rad_to_hours, ObserverFrame};
use autostar_coords::config::Config;
use autostar_coords::dms::{autostar, DmsPosition};
use chrono::Utc;
use tracing::info;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();

    let config: Config = confy::load_path("config.toml")?;
    let location = config.observation_location;

    let site = DmsPosition::new(location.into())?;
    info!("Observing site: {} at {} m", site, location.elevation);
    info!(
        "Autostar site: {} {}",
        autostar::site_latitude_command(&site.latitude),
        autostar::site_longitude_command(&site.longitude)
    );

    let frame = ObserverFrame::new(location.latitude, location.longitude, Utc::now());
    info!(
        "Local sidereal time at {}: {:.6}h",
        frame.time,
        rad_to_hours(frame.local_sidereal_time())
    );

    let target = config.target.into();
    let horizontal = frame.horizontal_from_equatorial(target);
    info!(
        "Target RA {:.6}h Dec {:.6}° is at Alt {:.6}° Az {:.6}°",
        config.target.right_ascension,
        config.target.declination,
        horizontal.altitude,
        horizontal.azimuth
    );

    let equatorial = frame.equatorial_from_horizontal(horizontal);
    info!(
        "Back to RA {:.6}h Dec {:.6}°",
        equatorial.right_ascension, equatorial.declination
    );

    Ok(())
}
