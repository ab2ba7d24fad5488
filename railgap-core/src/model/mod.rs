//! Data model for the ridership gap analysis
//!
//! Contains the built-in WMATA station reference data and the types
//! produced by the pipeline stages.

pub mod stations;
pub mod types;

pub use stations::{RAIL_LINES, RailLine, STATION_IDS, station_name};
pub use types::{
    AggregatedBusStop, BusHotspot, BusStopRecord, GapModel, NearestRail, RailRide, RailStation,
    StationCandidate, StationUsage,
};
