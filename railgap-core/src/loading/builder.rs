use log::info;

use super::bus::load_bus_stops;
use super::config::GapAnalysisConfig;
use super::rail::load_rail_usage;
use crate::analysis::{aggregate_bus_stops, cluster_hotspots, find_candidates, locate_stations};
use crate::model::GapModel;
use crate::Error;

/// Runs the full gap analysis based on the provided configuration.
///
/// # Errors
///
/// Returns an error if there are problems reading or processing data,
/// or if no rail station could be located.
pub fn create_gap_model(config: &GapAnalysisConfig) -> Result<GapModel, Error> {
    validate_config(config)?;

    info!("Processing rail ridership data ({} files)", config.rail_paths.len());
    let usage = load_rail_usage(&config.rail_paths)?;

    info!("Processing bus ridership data: {}", config.bus_path.display());
    let bus_records = load_bus_stops(&config.bus_path)?;

    let bus_stops = aggregate_bus_stops(&bus_records);
    let rail_stations = locate_stations(&usage, &bus_stops);
    if rail_stations.is_empty() {
        return Err(Error::NoStationsLocated);
    }

    let hotspots = cluster_hotspots(
        &bus_records,
        config.hotspot_min_boardings,
        config.hotspot_precision,
    );
    let candidates = find_candidates(
        &rail_stations,
        &hotspots,
        config.candidate_min_boardings,
        config.min_distance_miles,
    );

    info!(
        "Gap model created: {} stations, {} hotspots, {} candidates",
        rail_stations.len(),
        hotspots.len(),
        candidates.len()
    );
    Ok(GapModel {
        rail_stations,
        hotspots,
        candidates,
    })
}

fn validate_config(config: &GapAnalysisConfig) -> Result<(), Error> {
    if config.rail_paths.is_empty() {
        return Err(Error::InvalidData(
            "No rail ridership files provided in the configuration".to_string(),
        ));
    }

    for path in &config.rail_paths {
        if !path.exists() {
            return Err(Error::InvalidData(format!(
                "Rail ridership file not found: {}",
                path.display()
            )));
        }
    }

    if !config.bus_path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Bus ridership file not found: {}", config.bus_path.display()),
        )));
    }

    Ok(())
}
