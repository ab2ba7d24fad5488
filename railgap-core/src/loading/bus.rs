//! Loading of the bus stop ridership file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use geo::Point;
use log::{info, warn};

use super::columns::{parse_number, resolve_column};
use crate::model::BusStopRecord;
use crate::Error;

const STOP_COLUMNS: &[&str] = &["stop", "stop_name", "stoplabel"];
const LAT_COLUMNS: &[&str] = &["lat", "latitude"];
const LON_COLUMNS: &[&str] = &["lon", "lng", "longitude", "long"];
const BOARDING_COLUMNS: &[&str] = &[
    "sum_passengers_on",
    "sum_on",
    "passengers_on",
    "sum_boardings",
    "sum_passengers",
];
const ROUTE_COLUMNS: &[&str] = &["route_name", "route", "rte_name"];

/// Load bus stop records, dropping rows without usable coordinates.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if the
/// stop, coordinate or boardings columns cannot be resolved.
pub fn load_bus_stops(path: &Path) -> Result<Vec<BusStopRecord>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let records = read_bus_records(file)?;
    info!("Loaded {} bus stop records", records.len());
    Ok(records)
}

fn read_bus_records<R: Read>(reader: R) -> Result<Vec<BusStopRecord>, Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let stop_col = resolve_column(&headers, STOP_COLUMNS)
        .ok_or_else(|| Error::InvalidData("Bus dataset has no stop name column".to_string()))?;
    let lat_col = resolve_column(&headers, LAT_COLUMNS)
        .ok_or_else(|| Error::InvalidData("Bus dataset has no latitude column".to_string()))?;
    let lon_col = resolve_column(&headers, LON_COLUMNS)
        .ok_or_else(|| Error::InvalidData("Bus dataset has no longitude column".to_string()))?;
    let board_col = resolve_column(&headers, BOARDING_COLUMNS)
        .ok_or_else(|| Error::InvalidData("Bus dataset has no boardings column".to_string()))?;
    let route_col = resolve_column(&headers, ROUTE_COLUMNS);
    if route_col.is_none() {
        warn!("Bus dataset has no route column - route lists will be empty");
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for record in rdr.records() {
        let record = record?;

        let coords = record
            .get(lat_col)
            .and_then(parse_number)
            .zip(record.get(lon_col).and_then(parse_number));
        let Some((lat, lon)) = coords.filter(|(lat, lon)| lat.is_finite() && lon.is_finite())
        else {
            dropped += 1;
            continue;
        };

        let stop = record.get(stop_col).unwrap_or_default().trim();
        if stop.is_empty() {
            dropped += 1;
            continue;
        }
        let boardings = record.get(board_col).and_then(parse_number).unwrap_or(0.0);
        let route = route_col
            .and_then(|idx| record.get(idx))
            .unwrap_or_default()
            .trim()
            .to_string();

        records.push(BusStopRecord {
            stop: stop.to_string(),
            geometry: Point::new(lon, lat),
            boardings,
            route,
        });
    }

    if dropped > 0 {
        warn!("Dropped {dropped} bus rows without stop name or coordinates");
    }
    Ok(records)
}
