//! Merging of the TOML config file with command line overrides.

use std::fs;

use anyhow::Context;
use railgap_core::GapAnalysisConfig;

use crate::cli::AnalyzeArgs;

/// Build the analysis configuration: config file values first,
/// command line flags win.
pub fn resolve(args: &AnalyzeArgs) -> anyhow::Result<GapAnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => GapAnalysisConfig::default(),
    };

    if !args.rail.is_empty() {
        config.rail_paths = args.rail.clone();
    }
    if let Some(bus) = &args.bus {
        config.bus_path = bus.clone();
    }
    if let Some(v) = args.hotspot_min_boardings {
        config.hotspot_min_boardings = v;
    }
    if let Some(v) = args.candidate_min_boardings {
        config.candidate_min_boardings = v;
    }
    if let Some(v) = args.min_distance_miles {
        config.min_distance_miles = v;
    }
    if let Some(v) = args.hotspot_precision {
        config.hotspot_precision = v;
    }

    if config.rail_paths.is_empty() {
        anyhow::bail!("no rail ridership files given (use --rail or the config file)");
    }
    if config.bus_path.as_os_str().is_empty() {
        anyhow::bail!("no bus ridership file given (use --bus or the config file)");
    }
    Ok(config)
}
