//! Gap analysis: heavily used bus hotspots far from any rail station.

use geo::{Distance, Haversine, Point};
use log::info;
use rayon::prelude::*;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::model::{BusHotspot, NearestRail, RailStation, StationCandidate};
use crate::{Boardings, MAX_CANDIDATES};

const METERS_PER_MILE: f64 = 1609.344;

/// Tree neighbors checked per hotspot. The tree ranks by Euclidean
/// distance in degrees, where a degree of longitude spans ~0.78 of a
/// degree of latitude around Washington, so several latitude-offset
/// stations can outrank the true nearest one. The window is re-ranked
/// with the haversine distance, and is wide enough to absorb that skew.
const NEAREST_PREFILTER: usize = 8;

type StationTree = RTree<GeomWithData<[f64; 2], usize>>;

/// Propose hotspots with at least `min_boardings` boardings that are
/// farther than `min_distance_miles` from every located rail station,
/// sorted by boardings and capped at [`MAX_CANDIDATES`].
pub fn find_candidates(
    rail_stations: &[RailStation],
    hotspots: &[BusHotspot],
    min_boardings: Boardings,
    min_distance_miles: f64,
) -> Vec<StationCandidate> {
    let tree: StationTree = RTree::bulk_load(
        rail_stations
            .iter()
            .enumerate()
            .map(|(idx, station)| {
                GeomWithData::new([station.geometry.x(), station.geometry.y()], idx)
            })
            .collect(),
    );

    let mut candidates: Vec<StationCandidate> = hotspots
        .par_iter()
        .filter(|hotspot| hotspot.boardings >= min_boardings)
        .filter_map(|hotspot| {
            let nearest = nearest_station(&tree, rail_stations, &hotspot.geometry);
            let is_gap = nearest
                .as_ref()
                .is_none_or(|n| n.distance_miles > min_distance_miles);
            if !is_gap {
                return None;
            }
            Some(StationCandidate {
                name: hotspot.rep_stop.clone(),
                geometry: hotspot.geometry,
                bus_boardings: hotspot.boardings,
                nearest_rail: nearest,
                routes: hotspot.routes.clone(),
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.bus_boardings
            .total_cmp(&a.bus_boardings)
            .then_with(|| a.name.cmp(&b.name))
    });
    candidates.truncate(MAX_CANDIDATES);

    info!("{} candidate hotspots pass the thresholds", candidates.len());
    candidates
}

fn nearest_station(
    tree: &StationTree,
    rail_stations: &[RailStation],
    point: &Point<f64>,
) -> Option<NearestRail> {
    tree.nearest_neighbor_iter(&[point.x(), point.y()])
        .take(NEAREST_PREFILTER)
        .map(|neighbor| {
            let station = &rail_stations[neighbor.data];
            let meters = Haversine.distance(*point, station.geometry);
            (station, meters / METERS_PER_MILE)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(station, distance_miles)| NearestRail {
            name: station.name.clone(),
            distance_miles,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, x: f64, y: f64) -> RailStation {
        RailStation {
            stop_id: "A00".to_string(),
            name: name.to_string(),
            avg_boardings: 1000.0,
            geometry: Point::new(x, y),
            matched_stop: name.to_string(),
            match_score: 1.0,
        }
    }

    fn hotspot(rep: &str, x: f64, y: f64, boardings: f64) -> BusHotspot {
        BusHotspot {
            geometry: Point::new(x, y),
            boardings,
            rep_stop: rep.to_string(),
            routes: vec!["A1".to_string()],
        }
    }

    #[test]
    fn distant_busy_hotspot_becomes_a_candidate() {
        let stations = vec![
            station("Dupont Circle", -77.0434, 38.9097),
            station("Union Station", -77.0063, 38.8977),
        ];
        // ~3 miles north of Dupont Circle
        let hotspots = vec![hotspot("GEORGIA AVE & MISSOURI AVE", -77.0434, 38.9530, 900.0)];

        let candidates = find_candidates(&stations, &hotspots, 500.0, 1.0);
        assert_eq!(candidates.len(), 1);
        let nearest = candidates[0].nearest_rail.as_ref().unwrap();
        assert_eq!(nearest.name, "Dupont Circle");
        assert!(nearest.distance_miles > 1.0 && nearest.distance_miles < 5.0);
    }

    #[test]
    fn nearest_station_survives_longitude_skew() {
        // Six stations sit closer in raw degrees (latitude offsets just
        // under 0.1), but the longitude-offset one is nearer in miles
        // because a degree of longitude is shorter at this latitude.
        let mut stations: Vec<RailStation> = [0.092, 0.094, 0.096, 0.097, 0.098, 0.099]
            .iter()
            .enumerate()
            .map(|(i, dy)| station(&format!("North {i}"), -77.0, 38.9 + dy))
            .collect();
        stations.push(station("East Side", -76.9, 38.9));
        let hotspots = vec![hotspot("FAR CORNER", -77.0, 38.9, 900.0)];

        let candidates = find_candidates(&stations, &hotspots, 500.0, 1.0);
        assert_eq!(candidates.len(), 1);
        let nearest = candidates[0].nearest_rail.as_ref().unwrap();
        assert_eq!(nearest.name, "East Side");
        assert!(nearest.distance_miles > 5.2 && nearest.distance_miles < 5.6);
    }

    #[test]
    fn hotspot_at_a_station_is_excluded() {
        let stations = vec![station("Dupont Circle", -77.0434, 38.9097)];
        let hotspots = vec![hotspot("DUPONT CIRCLE BAY A", -77.0434, 38.9097, 5000.0)];
        assert!(find_candidates(&stations, &hotspots, 500.0, 1.0).is_empty());
    }

    #[test]
    fn quiet_hotspot_is_excluded() {
        let stations = vec![station("Dupont Circle", -77.0434, 38.9097)];
        let hotspots = vec![hotspot("QUIET CORNER", -76.9, 38.8, 100.0)];
        assert!(find_candidates(&stations, &hotspots, 500.0, 1.0).is_empty());
    }

    #[test]
    fn without_located_stations_every_busy_hotspot_is_a_gap() {
        let hotspots = vec![hotspot("ANYWHERE", -77.0, 38.9, 900.0)];
        let candidates = find_candidates(&[], &hotspots, 500.0, 1.0);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].nearest_rail.is_none());
    }

    #[test]
    fn candidates_are_sorted_by_boardings() {
        let hotspots = vec![
            hotspot("SMALL", -77.0, 38.9, 600.0),
            hotspot("BIG", -77.1, 38.9, 2000.0),
        ];
        let candidates = find_candidates(&[], &hotspots, 500.0, 1.0);
        assert_eq!(candidates[0].name, "BIG");
        assert_eq!(candidates[1].name, "SMALL");
    }
}
