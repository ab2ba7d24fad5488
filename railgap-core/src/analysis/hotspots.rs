//! Clustering of bus boardings into spatial hotspots.
//!
//! Stops are bucketed by rounding their coordinates, which merges bus bays
//! on opposite curbs of the same intersection without pulling in stops a
//! block away.

use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;
use log::info;

use crate::Boardings;
use crate::model::{BusHotspot, BusStopRecord};

/// Maximum number of distinct routes reported per hotspot.
const MAX_ROUTES_PER_HOTSPOT: usize = 5;

#[derive(Default)]
struct Cell {
    boardings: Boardings,
    stop_counts: HashMap<String, usize>,
    routes: Vec<String>,
}

/// Cluster bus records into hotspots with at least `min_boardings`
/// aggregated boardings. `precision` is the number of decimal places the
/// coordinates are rounded to (4 is roughly an 11 m cell).
pub fn cluster_hotspots(
    records: &[BusStopRecord],
    min_boardings: Boardings,
    precision: u8,
) -> Vec<BusHotspot> {
    let scale = 10f64.powi(i32::from(precision));

    let mut cells: HashMap<(i64, i64), Cell> = HashMap::new();
    for record in records {
        let key = (
            (record.geometry.x() * scale).round() as i64,
            (record.geometry.y() * scale).round() as i64,
        );
        let cell = cells.entry(key).or_default();
        cell.boardings += record.boardings;
        *cell.stop_counts.entry(record.stop.clone()).or_default() += 1;
        if !record.route.is_empty() {
            cell.routes.push(record.route.clone());
        }
    }

    let mut hotspots: Vec<BusHotspot> = cells
        .into_iter()
        .filter(|(_, cell)| cell.boardings >= min_boardings)
        .map(|((x, y), cell)| BusHotspot {
            geometry: Point::new(x as f64 / scale, y as f64 / scale),
            boardings: cell.boardings,
            rep_stop: representative_stop(&cell.stop_counts),
            routes: cell
                .routes
                .iter()
                .unique()
                .take(MAX_ROUTES_PER_HOTSPOT)
                .cloned()
                .collect(),
        })
        .collect();

    hotspots.sort_by(|a, b| {
        b.boardings
            .total_cmp(&a.boardings)
            .then_with(|| a.rep_stop.cmp(&b.rep_stop))
    });

    info!(
        "Found {} bus hotspots with boardings >= {min_boardings}",
        hotspots.len()
    );
    hotspots
}

/// Most frequent stop name in the cell; ties resolve to the
/// lexicographically smallest name.
fn representative_stop(counts: &HashMap<String, usize>) -> String {
    counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(name, _)| name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stop: &str, x: f64, y: f64, boardings: f64, route: &str) -> BusStopRecord {
        BusStopRecord {
            stop: stop.to_string(),
            geometry: Point::new(x, y),
            boardings,
            route: route.to_string(),
        }
    }

    #[test]
    fn nearby_stops_share_a_cell() {
        let records = vec![
            record("MAIN ST NB", -77.00001, 38.90002, 80.0, "A1"),
            record("MAIN ST SB", -77.00003, 38.89998, 40.0, "A1"),
            record("ELM ST", -77.1, 38.9, 200.0, "B2"),
        ];
        let hotspots = cluster_hotspots(&records, 100.0, 4);
        assert_eq!(hotspots.len(), 2);
        // sorted by boardings descending
        assert_eq!(hotspots[0].rep_stop, "ELM ST");
        assert_eq!(hotspots[1].boardings, 120.0);
    }

    #[test]
    fn threshold_filters_quiet_cells() {
        let records = vec![record("QUIET", -77.0, 38.9, 50.0, "A1")];
        assert!(cluster_hotspots(&records, 100.0, 4).is_empty());
    }

    #[test]
    fn representative_stop_is_the_mode() {
        let records = vec![
            record("BUSY STOP", -77.0, 38.9, 10.0, "A1"),
            record("BUSY STOP", -77.0, 38.9, 10.0, "A2"),
            record("OTHER STOP", -77.0, 38.9, 500.0, "A3"),
        ];
        let hotspots = cluster_hotspots(&records, 100.0, 4);
        assert_eq!(hotspots[0].rep_stop, "BUSY STOP");
    }

    #[test]
    fn representative_stop_tie_picks_the_smallest_name() {
        let records = vec![
            record("ZEBRA ST", -77.0, 38.9, 300.0, "A1"),
            record("APPLE AVE", -77.0, 38.9, 300.0, "A2"),
        ];
        let hotspots = cluster_hotspots(&records, 100.0, 4);
        assert_eq!(hotspots[0].rep_stop, "APPLE AVE");
    }

    #[test]
    fn routes_are_distinct_and_capped() {
        let records: Vec<_> = ["A1", "A1", "B2", "C3", "D4", "E5", "F6", "G7"]
            .iter()
            .map(|r| record("STOP", -77.0, 38.9, 100.0, r))
            .collect();
        let hotspots = cluster_hotspots(&records, 100.0, 4);
        assert_eq!(hotspots[0].routes, vec!["A1", "B2", "C3", "D4", "E5"]);
    }
}
