//! Rail/bus ridership gap analysis for the WMATA network.
//!
//! The crate ingests WMATA rail ridership summaries and bus stop ridership
//! from CSV files, locates rail stations by matching them against bus stop
//! names, clusters bus boardings into hotspots and flags heavily used
//! hotspots that are far from any existing rail station as candidates for
//! new stations.

pub mod analysis;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod report;

pub use error::Error;
pub use loading::{GapAnalysisConfig, create_gap_model};
pub use model::{
    AggregatedBusStop, BusHotspot, GapModel, NearestRail, RailStation, StationCandidate,
    StationUsage,
};

/// Daily passenger boardings, averaged or summed depending on context.
pub type Boardings = f64;

/// Upper bound on the number of candidate stations reported by the gap
/// analysis.
pub const MAX_CANDIDATES: usize = 50;
