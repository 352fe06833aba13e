//! Standalone interactive map document assembly.
//!
//! This is the rendering boundary: it accepts feature collections with
//! constant or per-feature styles, marker specs, an optional time-animated
//! layer, and chrome HTML, and emits a self-contained Leaflet document.
//! Everything here is packaging for the external renderer; the computed
//! properties come from the generator modules.

use std::error::Error;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::geojson::FeatureCollection;

/// Base tile layer for the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileProvider {
    CartoDbPositron,
}

impl TileProvider {
    pub fn url_template(&self) -> &'static str {
        match self {
            Self::CartoDbPositron => {
                "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png"
            }
        }
    }

    pub fn attribution(&self) -> &'static str {
        match self {
            Self::CartoDbPositron => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
            }
        }
    }

    pub fn subdomains(&self) -> &'static str {
        match self {
            Self::CartoDbPositron => "abcd",
        }
    }
}

/// Initial view configuration.
#[derive(Clone, Copy, Debug)]
pub struct MapConfig {
    /// (latitude, longitude) of the initial center.
    pub center: (f64, f64),
    pub zoom: u32,
    pub tiles: TileProvider,
}

/// Constant stroke style for a whole layer. Features carrying their own
/// `style` property override this per feature.
#[derive(Clone, Debug, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

/// A toggleable GeoJSON overlay.
#[derive(Clone, Debug)]
pub struct GeoJsonLayer {
    pub name: String,
    pub collection: FeatureCollection,
    pub style: LineStyle,
    /// (property key, display alias) pairs rendered in the tooltip.
    pub tooltip_fields: Vec<(String, String)>,
}

/// Time-animated GeoJSON layer configuration.
#[derive(Clone, Debug)]
pub struct TimeLayer {
    pub collection: FeatureCollection,
    /// ISO 8601 step between animation frames, e.g. `"P1Y"`.
    pub period: String,
    /// ISO 8601 window each feature stays visible, e.g. `"P10Y"`.
    pub duration: String,
    pub auto_play: bool,
    pub loop_playback: bool,
    pub max_speed: u32,
    /// Date label format shown on the slider, e.g. `"YYYY"`.
    pub date_format: String,
}

/// A severity-colored point marker with popup and tooltip text.
#[derive(Clone, Debug)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub color: String,
    pub popup: String,
    pub tooltip: String,
}

/// A complete map document ready to serialize to HTML.
#[derive(Clone, Debug)]
pub struct MapDocument {
    title: String,
    config: MapConfig,
    layers: Vec<GeoJsonLayer>,
    time_layer: Option<TimeLayer>,
    markers: Vec<Marker>,
    layer_control: bool,
    chrome: Vec<String>,
}

impl MapDocument {
    pub fn new(title: &str, config: MapConfig) -> Self {
        Self {
            title: title.to_string(),
            config,
            layers: Vec::new(),
            time_layer: None,
            markers: Vec::new(),
            layer_control: false,
            chrome: Vec::new(),
        }
    }

    pub fn add_layer(&mut self, layer: GeoJsonLayer) {
        self.layers.push(layer);
    }

    pub fn set_time_layer(&mut self, layer: TimeLayer) {
        self.time_layer = Some(layer);
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Show a toggle control listing every named overlay.
    pub fn enable_layer_control(&mut self) {
        self.layer_control = true;
    }

    /// Attach a fixed-position HTML fragment (legend, title banner).
    pub fn add_chrome(&mut self, html: &str) {
        self.chrome.push(html.to_string());
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Render the full standalone HTML document.
    pub fn render(&self) -> Result<String, Box<dyn Error>> {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        writeln!(html, "<title>{}</title>", self.title)?;
        html.push_str(
            "<link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.css\">\n",
        );
        html.push_str("<script src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"></script>\n");
        if self.time_layer.is_some() {
            html.push_str("<link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet-timedimension@1.1.1/dist/leaflet.timedimension.control.css\">\n");
            html.push_str("<script src=\"https://unpkg.com/iso8601-js-period@0.2.1/iso8601.min.js\"></script>\n");
            html.push_str("<script src=\"https://unpkg.com/leaflet-timedimension@1.1.1/dist/leaflet.timedimension.min.js\"></script>\n");
        }
        html.push_str("<style>html, body, #map { height: 100%; margin: 0; padding: 0; }</style>\n");
        html.push_str("</head>\n<body>\n");
        writeln!(
            html,
            "<!-- generado {} -->",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        html.push_str("<div id=\"map\"></div>\n");

        for fragment in &self.chrome {
            html.push_str(fragment);
            html.push('\n');
        }

        html.push_str("<script>\n");
        self.write_map_setup(&mut html)?;
        self.write_layers(&mut html)?;
        self.write_time_layer(&mut html)?;
        self.write_markers(&mut html)?;
        if self.layer_control {
            html.push_str("L.control.layers(null, overlays).addTo(map);\n");
        }
        html.push_str("</script>\n</body>\n</html>\n");

        Ok(html)
    }

    fn write_map_setup(&self, html: &mut String) -> Result<(), Box<dyn Error>> {
        let (lat, lon) = self.config.center;
        writeln!(html, "var map = L.map(\"map\", {{")?;
        writeln!(html, "    center: [{}, {}],", lat, lon)?;
        write!(html, "    zoom: {}", self.config.zoom)?;
        if let Some(time) = &self.time_layer {
            html.push_str(",\n    timeDimension: true,\n");
            writeln!(
                html,
                "    timeDimensionOptions: {{ period: {} }},",
                serde_json::to_string(&time.period)?
            )?;
            html.push_str("    timeDimensionControl: true,\n");
            writeln!(
                html,
                "    timeDimensionControlOptions: {{ autoPlay: {}, loopButton: true, maxSpeed: {}, timeSliderDragUpdate: true, dateFormat: {}, playerOptions: {{ loop: {}, transitionTime: 1000 }} }}",
                time.auto_play,
                time.max_speed,
                serde_json::to_string(&time.date_format)?,
                time.loop_playback,
            )?;
        } else {
            html.push('\n');
        }
        html.push_str("});\n");

        let tiles = self.config.tiles;
        writeln!(
            html,
            "L.tileLayer(\"{}\", {{ attribution: {}, subdomains: \"{}\", maxZoom: 20 }}).addTo(map);",
            tiles.url_template(),
            serde_json::to_string(tiles.attribution())?,
            tiles.subdomains(),
        )?;
        html.push_str("var overlays = {};\n");
        Ok(())
    }

    fn write_layers(&self, html: &mut String) -> Result<(), Box<dyn Error>> {
        for (i, layer) in self.layers.iter().enumerate() {
            writeln!(html, "var data_{} = {};", i, layer.collection.to_json()?)?;
            writeln!(
                html,
                "var style_{} = {};",
                i,
                serde_json::to_string(&layer.style)?
            )?;
            writeln!(
                html,
                "var fields_{} = {};",
                i,
                serde_json::to_string(&layer.tooltip_fields)?
            )?;
            writeln!(html, "var layer_{i} = L.geoJson(data_{i}, {{")?;
            writeln!(
                html,
                "    style: function (feature) {{ return (feature.properties && feature.properties.style) || style_{}; }},",
                i
            )?;
            writeln!(
                html,
                "    onEachFeature: function (feature, layer) {{\n        if (!fields_{i}.length) {{ return; }}\n        var rows = fields_{i}.map(function (pair) {{\n            return \"<b>\" + pair[1] + \"</b> \" + feature.properties[pair[0]];\n        }});\n        layer.bindTooltip(rows.join(\"<br>\"));\n    }}"
            )?;
            writeln!(html, "}}).addTo(map);")?;
            writeln!(
                html,
                "overlays[{}] = layer_{};",
                serde_json::to_string(&layer.name)?,
                i
            )?;
        }
        Ok(())
    }

    fn write_time_layer(&self, html: &mut String) -> Result<(), Box<dyn Error>> {
        let Some(time) = &self.time_layer else {
            return Ok(());
        };
        writeln!(html, "var timeData = {};", time.collection.to_json()?)?;
        html.push_str(
            "var timeGeoJson = L.geoJson(timeData, {\n    style: function (feature) { return feature.properties.style; },\n    onEachFeature: function (feature, layer) {\n        if (feature.properties.popup) { layer.bindPopup(feature.properties.popup); }\n    }\n});\n",
        );
        writeln!(
            html,
            "var timeLayer = L.timeDimension.layer.geoJson(timeGeoJson, {{ updateTimeDimension: true, duration: {}, addlastPoint: true }});",
            serde_json::to_string(&time.duration)?
        )?;
        html.push_str("timeLayer.addTo(map);\n");
        Ok(())
    }

    fn write_markers(&self, html: &mut String) -> Result<(), Box<dyn Error>> {
        for (i, marker) in self.markers.iter().enumerate() {
            writeln!(
                html,
                "var marker_{} = L.circleMarker([{}, {}], {{ radius: 8, color: {color}, fillColor: {color}, fillOpacity: 0.9, weight: 2 }}).addTo(map);",
                i,
                marker.lat,
                marker.lon,
                color = serde_json::to_string(&marker.color)?,
            )?;
            writeln!(
                html,
                "marker_{}.bindPopup({});",
                i,
                serde_json::to_string(&marker.popup)?
            )?;
            writeln!(
                html,
                "marker_{}.bindTooltip({});",
                i,
                serde_json::to_string(&marker.tooltip)?
            )?;
        }
        Ok(())
    }

    /// Render and write the document, creating the parent directory if it
    /// does not exist yet. Write failures are fatal to the run.
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let html = self.render()?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(html.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::{Feature, FeatureCollection, Geometry};

    fn test_config() -> MapConfig {
        MapConfig {
            center: (20.5, -88.5),
            zoom: 7,
            tiles: TileProvider::CartoDbPositron,
        }
    }

    fn line_collection() -> FeatureCollection {
        FeatureCollection::from_features(vec![Feature::new(Geometry::line(&[
            (-90.4, 21.6),
            (-90.2, 21.65),
        ]))
        .prop("year", 2000)])
    }

    #[test]
    fn test_render_is_standalone_document() {
        let doc = MapDocument::new("Prueba", test_config());
        let html = doc.render().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div id=\"map\">"));
        assert!(html.contains("leaflet@1.9.4/dist/leaflet.js"));
        assert!(html.contains("basemaps.cartocdn.com"));
        // No animation stack unless a time layer is attached
        assert!(!html.contains("timedimension"));
    }

    #[test]
    fn test_named_layers_feed_the_layer_control() {
        let mut doc = MapDocument::new("Prueba", test_config());
        doc.add_layer(GeoJsonLayer {
            name: "Línea Costera 2000".to_string(),
            collection: line_collection(),
            style: LineStyle {
                color: "#3b82f6".to_string(),
                weight: 3,
                opacity: 0.9,
            },
            tooltip_fields: vec![("year".to_string(), "Año:".to_string())],
        });
        doc.enable_layer_control();

        let html = doc.render().unwrap();
        assert!(html.contains("overlays[\"Línea Costera 2000\"] = layer_0;"));
        assert!(html.contains("L.control.layers(null, overlays)"));
        assert!(html.contains("\"color\":\"#3b82f6\""));
    }

    #[test]
    fn test_time_layer_pulls_in_animation_stack() {
        let mut doc = MapDocument::new("Prueba", test_config());
        doc.set_time_layer(TimeLayer {
            collection: line_collection(),
            period: "P1Y".to_string(),
            duration: "P10Y".to_string(),
            auto_play: true,
            loop_playback: true,
            max_speed: 2,
            date_format: "YYYY".to_string(),
        });

        let html = doc.render().unwrap();
        assert!(html.contains("leaflet.timedimension.min.js"));
        assert!(html.contains("period: \"P1Y\""));
        assert!(html.contains("duration: \"P10Y\""));
        assert!(html.contains("autoPlay: true"));
        assert!(html.contains("L.timeDimension.layer.geoJson"));
    }

    #[test]
    fn test_markers_render_with_color_and_popup() {
        let mut doc = MapDocument::new("Prueba", test_config());
        doc.add_marker(Marker {
            lat: 21.1619,
            lon: -86.8515,
            color: "#ef4444".to_string(),
            popup: "<b>Cancún</b><br>Erosión: 30-50m".to_string(),
            tooltip: "Cancún - Erosión: 30-50m".to_string(),
        });

        let html = doc.render().unwrap();
        assert!(html.contains("L.circleMarker([21.1619, -86.8515]"));
        assert!(html.contains("marker_0.bindPopup"));
        assert!(html.contains("Erosión: 30-50m"));
    }

    #[test]
    fn test_save_writes_file_and_creates_parent() {
        let dir = std::env::temp_dir().join("coastal_mapgen_test_save");
        let path = dir.join("out.html");
        let _ = fs::remove_dir_all(&dir);

        let doc = MapDocument::new("Prueba", test_config());
        doc.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<div id=\"map\">"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
