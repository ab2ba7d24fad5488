use std::fs;

use anyhow::Context;
use railgap_core::model::{RAIL_LINES, STATION_IDS, station_name};
use railgap_core::{create_gap_model, report};
use tracing::info;

use crate::cli::{AnalyzeArgs, StationsArgs};
use crate::config;

pub fn analyze(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let analysis = config::resolve(args)?;
    let model = create_gap_model(&analysis)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    let map_path = args.out_dir.join("proposal_map.html");
    fs::write(&map_path, report::render_map(&model)?)?;
    info!("Map written to {}", map_path.display());

    if args.geojson || args.json {
        let layers = report::to_geojson(&model)?;
        if args.geojson {
            let named = [
                ("rail_stations", &layers.rail_stations),
                ("rail_lines", &layers.rail_lines),
                ("bus_hotspots", &layers.hotspots),
                ("candidates", &layers.candidates),
            ];
            for (name, collection) in named {
                let path = args.out_dir.join(format!("{name}.geojson"));
                fs::write(&path, serde_json::to_string_pretty(collection)?)?;
                info!("Layer written to {}", path.display());
            }
        }
        if args.json {
            println!("{}", serde_json::to_string_pretty(&layers.candidates)?);
        }
    }

    if !args.json {
        print!("{}", report::candidate_table(&model, args.top));
    }
    Ok(())
}

pub fn stations(args: &StationsArgs) -> anyhow::Result<()> {
    match &args.line {
        Some(wanted) => {
            let line = RAIL_LINES
                .iter()
                .find(|line| line.name.eq_ignore_ascii_case(wanted))
                .ok_or_else(|| anyhow::anyhow!("unknown line: {wanted}"))?;
            println!("{} line ({})", line.name, line.color);
            for id in line.stations {
                println!("{id}\t{}", station_name(id).unwrap_or("?"));
            }
        }
        None => {
            for (id, name) in STATION_IDS {
                println!("{id}\t{name}");
            }
        }
    }
    Ok(())
}
