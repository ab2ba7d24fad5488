use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "railgap", version, about = "WMATA rail/bus ridership gap analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the gap analysis and write the map report
    Analyze(AnalyzeArgs),
    /// Print the built-in WMATA station reference data
    Stations(StationsArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Rail ridership summary CSV, repeatable (one file per year)
    #[arg(long = "rail", value_name = "CSV")]
    pub rail: Vec<PathBuf>,

    /// Bus stop ridership CSV
    #[arg(long, value_name = "CSV")]
    pub bus: Option<PathBuf>,

    /// TOML config file providing defaults for the other options
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Directory the report files are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Minimum aggregated boardings for a bus hotspot
    #[arg(long)]
    pub hotspot_min_boardings: Option<f64>,

    /// Minimum hotspot boardings to propose a station
    #[arg(long)]
    pub candidate_min_boardings: Option<f64>,

    /// Minimum distance from existing rail, in miles
    #[arg(long)]
    pub min_distance_miles: Option<f64>,

    /// Decimal places for hotspot clustering
    #[arg(long)]
    pub hotspot_precision: Option<u8>,

    /// Also write the GeoJSON layers next to the map
    #[arg(long)]
    pub geojson: bool,

    /// Print the candidate list as GeoJSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Rows shown in the candidate table
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

#[derive(Args, Debug)]
pub struct StationsArgs {
    /// Restrict the listing to one line (e.g. "red")
    #[arg(long)]
    pub line: Option<String>,
}
