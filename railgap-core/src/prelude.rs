pub use crate::MAX_CANDIDATES;

// Re-export key components
pub use crate::analysis::gaps::find_candidates;
pub use crate::analysis::hotspots::cluster_hotspots;
pub use crate::analysis::matching::{aggregate_bus_stops, locate_stations};
pub use crate::loading::{GapAnalysisConfig, create_gap_model};
pub use crate::model::{BusHotspot, GapModel, RailStation, StationCandidate};
pub use crate::report::{render_map, to_geojson};

// Core scalar types
pub use crate::Boardings;
