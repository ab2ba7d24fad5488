//! This module is responsible for loading rail and bus ridership CSV files
//! and building the gap analysis model.

mod builder;
pub mod bus;
pub mod columns;
mod config;
pub mod rail;

pub use builder::create_gap_model;
pub use config::GapAnalysisConfig;
