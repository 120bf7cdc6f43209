//! Built-in sample campus, used when no `--data` file is given.
//!
//! A small GeoJSON map around the default index centre: an L-shaped walkway
//! (both directions), two buildings, a food court, and a gate that lands on
//! the walkway junction.

use std::io::Cursor;

use anyhow::Result;

use cn_core::PreprocessConfig;
use cn_dataset::{Dataset, preprocess_geojson};

const SAMPLE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {},
     "geometry": {"type": "LineString", "coordinates": [[77.4970, 12.9230], [77.4980, 12.9230], [77.4990, 12.9230]]}},
    {"type": "Feature", "properties": {},
     "geometry": {"type": "LineString", "coordinates": [[77.4990, 12.9230], [77.4980, 12.9230], [77.4970, 12.9230]]}},
    {"type": "Feature", "properties": {},
     "geometry": {"type": "LineString", "coordinates": [[77.4980, 12.9230], [77.4980, 12.9245]]}},
    {"type": "Feature", "properties": {},
     "geometry": {"type": "LineString", "coordinates": [[77.4980, 12.9245], [77.4980, 12.9230]]}},
    {"type": "Feature", "properties": {"name": "Main Library"},
     "geometry": {"type": "Polygon", "coordinates": [[
       [77.4968, 12.9233], [77.4972, 12.9233], [77.4972, 12.9236], [77.4968, 12.9236], [77.4968, 12.9233]
     ]]}},
    {"type": "Feature", "properties": {"name": "Sports Complex"},
     "geometry": {"type": "Polygon", "coordinates": [[
       [77.4988, 12.9233], [77.4992, 12.9233], [77.4992, 12.9236], [77.4988, 12.9236], [77.4988, 12.9233]
     ]]}},
    {"type": "Feature", "properties": {"name": "Food Court"},
     "geometry": {"type": "Point", "coordinates": [77.4981, 12.9246]}},
    {"type": "Feature", "properties": {"name": "Main Gate"},
     "geometry": {"type": "Point", "coordinates": [77.4980, 12.9230]}}
  ]
}"#;

pub fn sample_dataset(config: &PreprocessConfig) -> Result<Dataset> {
    Ok(preprocess_geojson(Cursor::new(SAMPLE_GEOJSON), config)?)
}
