//! Report artifacts: GeoJSON layers, the interactive map and the
//! plain-text candidate table.

pub mod geojson;
pub mod map;
pub mod table;

pub use geojson::{GeoJsonLayers, to_geojson};
pub use map::render_map;
pub use table::candidate_table;
