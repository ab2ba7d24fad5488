use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for building a [`crate::GapModel`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GapAnalysisConfig {
    /// Rail ridership summary files, typically one per calendar year
    pub rail_paths: Vec<PathBuf>,
    /// Bus stop ridership file
    pub bus_path: PathBuf,
    /// Minimum aggregated boardings for a cell to count as a hotspot
    pub hotspot_min_boardings: f64,
    /// Minimum hotspot boardings to be proposed as a station candidate
    pub candidate_min_boardings: f64,
    /// Minimum distance from the nearest rail station, in miles
    pub min_distance_miles: f64,
    /// Decimal places used to cluster bus stops (4 is roughly 11 m)
    pub hotspot_precision: u8,
}

impl Default for GapAnalysisConfig {
    fn default() -> Self {
        Self {
            rail_paths: Vec::new(),
            bus_path: PathBuf::new(),
            hotspot_min_boardings: 100.0,
            candidate_min_boardings: 500.0,
            min_distance_miles: 1.0,
            hotspot_precision: 4,
        }
    }
}
