//! Minimal GeoJSON types for the feature collections handed to the map
//! renderer.
//!
//! Only the geometry kinds the generators emit are modeled: LineString,
//! Polygon, and Point. Properties are an open bag so each layer can carry
//! its own time/style/popup sub-objects.

use serde::Serialize;
use serde_json::{Map, Value};

/// Geometry in GeoJSON coordinate order (longitude, latitude).
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<[f64; 2]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    Point { coordinates: [f64; 2] },
}

impl Geometry {
    pub fn line(points: &[(f64, f64)]) -> Self {
        Self::LineString {
            coordinates: points.iter().map(|&(lon, lat)| [lon, lat]).collect(),
        }
    }

    /// Polygon from a single closed exterior ring.
    pub fn polygon(ring: &[(f64, f64)]) -> Self {
        Self::Polygon {
            coordinates: vec![ring.iter().map(|&(lon, lat)| [lon, lat]).collect()],
        }
    }

    pub fn point(lon: f64, lat: f64) -> Self {
        Self::Point {
            coordinates: [lon, lat],
        }
    }

    /// Number of coordinate pairs in this geometry.
    pub fn point_count(&self) -> usize {
        match self {
            Self::LineString { coordinates } => coordinates.len(),
            Self::Polygon { coordinates } => coordinates.iter().map(Vec::len).sum(),
            Self::Point { .. } => 1,
        }
    }
}

/// A geometry plus its property bag.
#[derive(Clone, Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties: Map::new(),
        }
    }

    /// Set one property, builder style.
    pub fn prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            kind: "FeatureCollection",
            features: Vec::new(),
        }
    }

    pub fn from_features(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_serializes_with_geojson_tags() {
        let feature = Feature::new(Geometry::point(-86.85, 21.16)).prop("name", "Cancún");
        let value = serde_json::to_value(&feature).unwrap();

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Point");
        assert_eq!(value["geometry"]["coordinates"], json!([-86.85, 21.16]));
        assert_eq!(value["properties"]["name"], "Cancún");
    }

    #[test]
    fn test_collection_wraps_features() {
        let mut fc = FeatureCollection::new();
        fc.push(Feature::new(Geometry::line(&[(-90.4, 21.6), (-90.2, 21.65)])));

        let value = serde_json::to_value(&fc).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 1);
        assert_eq!(value["features"][0]["geometry"]["type"], "LineString");
    }

    #[test]
    fn test_polygon_wraps_ring() {
        let ring = [
            (-86.90, 21.40),
            (-86.80, 21.40),
            (-86.80, 21.00),
            (-86.90, 21.00),
            (-86.90, 21.40),
        ];
        let geometry = Geometry::polygon(&ring);
        assert_eq!(geometry.point_count(), 5);

        let value = serde_json::to_value(&geometry).unwrap();
        assert_eq!(value["coordinates"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_same_collection_serializes_identically() {
        let build = || {
            FeatureCollection::from_features(vec![Feature::new(Geometry::point(
                -89.66, 21.30,
            ))
            .prop("year", 2000)])
        };
        assert_eq!(build().to_json().unwrap(), build().to_json().unwrap());
    }
}
