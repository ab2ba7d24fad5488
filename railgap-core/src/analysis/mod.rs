//! Analysis stages: station location, hotspot clustering, gap detection.

pub mod gaps;
pub mod hotspots;
pub mod matching;

pub use gaps::find_candidates;
pub use hotspots::cluster_hotspots;
pub use matching::{aggregate_bus_stops, locate_stations};
