//! Rendering of the self-contained Leaflet map page.

use crate::model::GapModel;
use crate::Error;

use super::geojson::to_geojson;

const TEMPLATE: &str = include_str!("map_template.html");

/// Fallback map center: downtown Washington DC.
const DEFAULT_CENTER: (f64, f64) = (38.8951, -77.0364);

/// Renders the gap model as a standalone HTML map with toggleable layers
/// for rail stations, rail lines, bus hotspots and proposed stations.
pub fn render_map(model: &GapModel) -> Result<String, Error> {
    let layers = to_geojson(model)?;
    let (center_lat, center_lon) = map_center(model);

    let html = TEMPLATE
        .replace("__RAIL_STATIONS__", &layer_json(&layers.rail_stations)?)
        .replace("__RAIL_LINES__", &layer_json(&layers.rail_lines)?)
        .replace("__HOTSPOTS__", &layer_json(&layers.hotspots)?)
        .replace("__CANDIDATES__", &layer_json(&layers.candidates)?)
        .replace("__CENTER_LAT__", &center_lat.to_string())
        .replace("__CENTER_LON__", &center_lon.to_string());
    Ok(html)
}

fn layer_json(collection: &geojson::FeatureCollection) -> Result<String, Error> {
    serde_json::to_string(collection).map_err(|e| Error::GeoJsonError(e.to_string()))
}

/// Mean hotspot coordinate, or downtown DC when there are no hotspots.
fn map_center(model: &GapModel) -> (f64, f64) {
    if model.hotspots.is_empty() {
        return DEFAULT_CENTER;
    }
    let n = model.hotspots.len() as f64;
    let (lat, lon) = model
        .hotspots
        .iter()
        .fold((0.0, 0.0), |(lat, lon), hotspot| {
            (lat + hotspot.geometry.y(), lon + hotspot.geometry.x())
        });
    (lat / n, lon / n)
}
