//! GeoJSON rendering of the gap model.

use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use hashbrown::HashMap;
use serde_json::json;

use crate::model::{GapModel, RAIL_LINES};
use crate::Error;

/// The gap model rendered as one feature collection per map layer.
#[derive(Debug, Clone)]
pub struct GeoJsonLayers {
    pub rail_stations: FeatureCollection,
    pub rail_lines: FeatureCollection,
    pub hotspots: FeatureCollection,
    pub candidates: FeatureCollection,
}

/// Converts the gap model to GeoJSON feature collections.
pub fn to_geojson(model: &GapModel) -> Result<GeoJsonLayers, Error> {
    Ok(GeoJsonLayers {
        rail_stations: rail_stations_collection(model)?,
        rail_lines: rail_lines_collection(model)?,
        hotspots: hotspots_collection(model)?,
        candidates: candidates_collection(model)?,
    })
}

fn rail_stations_collection(model: &GapModel) -> Result<FeatureCollection, Error> {
    let features = model
        .rail_stations
        .iter()
        .map(|station| {
            let geometry = Geometry::new(GeoJsonValue::from(&station.geometry));
            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "stop_id": station.stop_id,
                    "name": station.name,
                    "avg_boardings": station.avg_boardings.round(),
                    "matched_stop": station.matched_stop,
                    "match_score": station.match_score,
                }
            });
            Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(collection(features))
}

fn rail_lines_collection(model: &GapModel) -> Result<FeatureCollection, Error> {
    let locations: HashMap<&str, Point<f64>> = model
        .rail_stations
        .iter()
        .map(|station| (station.stop_id.as_str(), station.geometry))
        .collect();

    let mut features = Vec::new();
    for line in RAIL_LINES {
        // Draw through the stations that were located, in line order
        let coords: Vec<_> = line
            .stations
            .iter()
            .filter_map(|id| locations.get(id).map(|p| (*p).into()))
            .collect();
        if coords.len() < 2 {
            continue;
        }

        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));
        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "line": line.name,
                "color": line.color,
            }
        });
        features.push(Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?);
    }

    Ok(collection(features))
}

fn hotspots_collection(model: &GapModel) -> Result<FeatureCollection, Error> {
    let features = model
        .hotspots
        .iter()
        .map(|hotspot| {
            let geometry = Geometry::new(GeoJsonValue::from(&hotspot.geometry));
            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "rep_stop": hotspot.rep_stop,
                    "boardings": hotspot.boardings.round(),
                    "routes": hotspot.routes,
                }
            });
            Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(collection(features))
}

fn candidates_collection(model: &GapModel) -> Result<FeatureCollection, Error> {
    let features = model
        .candidates
        .iter()
        .map(|candidate| {
            let geometry = Geometry::new(GeoJsonValue::from(&candidate.geometry));
            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "name": candidate.name,
                    "bus_boardings": candidate.bus_boardings.round(),
                    "nearest_rail": candidate.nearest_rail.as_ref().map(|n| n.name.clone()),
                    "distance_miles": candidate
                        .nearest_rail
                        .as_ref()
                        .map(|n| (n.distance_miles * 100.0).round() / 100.0),
                    "routes": candidate.routes,
                }
            });
            Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(collection(features))
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }
}
