//! Types produced by the pipeline stages

use chrono::NaiveDate;
use geo::Point;

use crate::Boardings;

/// One row of a rail ridership summary file after column resolution.
#[derive(Debug, Clone)]
pub struct RailRide {
    /// Service day, `None` when the file has no usable date column
    pub service_date: Option<NaiveDate>,
    pub stop_id: String,
    pub boardings: Boardings,
}

/// One row of the bus ridership file after column resolution.
#[derive(Debug, Clone)]
pub struct BusStopRecord {
    pub stop: String,
    pub geometry: Point<f64>,
    pub boardings: Boardings,
    pub route: String,
}

/// Multi-year average daily boardings for a named rail station.
#[derive(Debug, Clone)]
pub struct StationUsage {
    pub stop_id: String,
    pub name: String,
    pub avg_boardings: Boardings,
}

/// A rail station with coordinates inferred from the bus stop it matched.
#[derive(Debug, Clone)]
pub struct RailStation {
    pub stop_id: String,
    pub name: String,
    pub avg_boardings: Boardings,
    pub geometry: Point<f64>,
    /// Bus stop name the station was matched against
    pub matched_stop: String,
    /// Similarity score of the match, 0..=1
    pub match_score: f64,
}

/// Bus stop records grouped by exact stop name.
#[derive(Debug, Clone)]
pub struct AggregatedBusStop {
    pub name: String,
    pub geometry: Point<f64>,
    pub boardings: Boardings,
}

/// A cluster of nearby bus boardings.
#[derive(Debug, Clone)]
pub struct BusHotspot {
    /// Cell center (coordinates rounded to the configured precision)
    pub geometry: Point<f64>,
    pub boardings: Boardings,
    /// Most frequent stop name within the cell
    pub rep_stop: String,
    /// Up to five distinct routes serving the cell
    pub routes: Vec<String>,
}

/// Closest located rail station to a hotspot.
#[derive(Debug, Clone)]
pub struct NearestRail {
    pub name: String,
    pub distance_miles: f64,
}

/// A hotspot proposed as a new rail station site.
#[derive(Debug, Clone)]
pub struct StationCandidate {
    pub name: String,
    pub geometry: Point<f64>,
    pub bus_boardings: Boardings,
    pub nearest_rail: Option<NearestRail>,
    pub routes: Vec<String>,
}

/// Output of the full gap analysis.
#[derive(Debug, Clone)]
pub struct GapModel {
    pub rail_stations: Vec<RailStation>,
    pub hotspots: Vec<BusHotspot>,
    pub candidates: Vec<StationCandidate>,
}
