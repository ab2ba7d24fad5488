//! Locating rail stations by fuzzy-matching their names against bus stops.
//!
//! The rail ridership files carry no coordinates, but most stations have a
//! bus bay whose stop name contains the station name. Matching against the
//! aggregated bus stops therefore yields a usable coordinate for almost
//! every station without any external geocoding.

use geo::Point;
use hashbrown::HashMap;
use log::info;
use rayon::prelude::*;
use strsim::normalized_levenshtein;

use crate::model::{AggregatedBusStop, BusStopRecord, RailStation, StationUsage};

/// Minimum similarity when the names share at least one token.
const TOKEN_MATCH_MIN_SCORE: f64 = 0.6;
/// Minimum similarity when the names share no token.
const NAME_ONLY_MIN_SCORE: f64 = 0.78;

/// Group bus records by exact stop name: mean coordinates, summed boardings.
pub fn aggregate_bus_stops(records: &[BusStopRecord]) -> Vec<AggregatedBusStop> {
    let mut groups: HashMap<&str, (f64, f64, f64, usize)> = HashMap::new();
    for record in records {
        let entry = groups.entry(record.stop.as_str()).or_default();
        entry.0 += record.geometry.x();
        entry.1 += record.geometry.y();
        entry.2 += record.boardings;
        entry.3 += 1;
    }

    let mut stops: Vec<AggregatedBusStop> = groups
        .into_iter()
        .map(|(name, (x, y, boardings, n))| AggregatedBusStop {
            name: name.to_string(),
            geometry: Point::new(x / n as f64, y / n as f64),
            boardings,
        })
        .collect();
    stops.sort_by(|a, b| a.name.cmp(&b.name));
    stops
}

/// Infer coordinates for each rail station from the best-matching bus stop.
///
/// Stations without a sufficiently close match are skipped rather than
/// placed by weaker heuristics.
pub fn locate_stations(
    usage: &[StationUsage],
    bus_stops: &[AggregatedBusStop],
) -> Vec<RailStation> {
    let located: Vec<RailStation> = usage
        .par_iter()
        .filter_map(|station| {
            let (stop, score) = best_match(&station.name, bus_stops)?;
            Some(RailStation {
                stop_id: station.stop_id.clone(),
                name: station.name.clone(),
                avg_boardings: station.avg_boardings,
                geometry: stop.geometry,
                matched_stop: stop.name.clone(),
                match_score: score,
            })
        })
        .collect();

    info!(
        "Located {} of {} rail stations via bus stop matching",
        located.len(),
        usage.len()
    );
    located
}

fn best_match<'a>(
    station_name: &str,
    bus_stops: &'a [AggregatedBusStop],
) -> Option<(&'a AggregatedBusStop, f64)> {
    let station_tokens = tokens(station_name);

    let mut best: Option<(&AggregatedBusStop, f64)> = None;
    for stop in bus_stops {
        let score = similarity(station_name, &stop.name);
        if best.is_some_and(|(_, b)| score <= b) {
            continue;
        }

        let overlap = tokens(&stop.name)
            .iter()
            .any(|t| station_tokens.contains(t));
        if (overlap && score > TOKEN_MATCH_MIN_SCORE) || score > NAME_ONLY_MIN_SCORE {
            best = Some((stop, score));
        }
    }
    best
}

/// Lowercased alphanumeric runs longer than one character.
fn tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1)
        .map(str::to_string)
        .collect()
}

fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BusStopRecord;

    fn bus_stop(name: &str, x: f64, y: f64) -> AggregatedBusStop {
        AggregatedBusStop {
            name: name.to_string(),
            geometry: Point::new(x, y),
            boardings: 100.0,
        }
    }

    #[test]
    fn aggregation_averages_coordinates_and_sums_boardings() {
        let records = vec![
            BusStopRecord {
                stop: "UNION STATION".to_string(),
                geometry: Point::new(-77.0, 38.75),
                boardings: 100.0,
                route: "X1".to_string(),
            },
            BusStopRecord {
                stop: "UNION STATION".to_string(),
                geometry: Point::new(-77.5, 39.25),
                boardings: 50.0,
                route: "X2".to_string(),
            },
        ];
        let stops = aggregate_bus_stops(&records);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].geometry, Point::new(-77.25, 39.0));
        assert_eq!(stops[0].boardings, 150.0);
    }

    #[test]
    fn shared_token_lowers_the_similarity_bar() {
        let stops = [bus_stop("DUPONT CIRCLE STATION", -77.04, 38.91)];
        let (stop, score) = best_match("Dupont Circle", &stops).unwrap();
        assert_eq!(stop.name, "DUPONT CIRCLE STATION");
        assert!(score > TOKEN_MATCH_MIN_SCORE);
    }

    #[test]
    fn near_identical_name_matches_without_token_overlap_requirement() {
        let stops = [bus_stop("Union Stations", -77.0, 38.9)];
        let (_, score) = best_match("Union Station", &stops).unwrap();
        assert!(score > NAME_ONLY_MIN_SCORE);
    }

    #[test]
    fn unrelated_names_do_not_match() {
        let stops = [bus_stop("GEORGIA AVE & KENNEDY ST", -77.03, 38.95)];
        assert!(best_match("Huntington", &stops).is_none());
    }

    #[test]
    fn best_scoring_stop_wins() {
        let stops = [
            bus_stop("VIENNA METRO BAY A", -77.27, 38.88),
            bus_stop("VIENNA", -77.26, 38.9),
        ];
        let (stop, _) = best_match("Vienna", &stops).unwrap();
        assert_eq!(stop.name, "VIENNA");
    }
}
