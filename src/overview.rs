//! Static multi-layer overview map assembly.
//!
//! Folds the fixed 2000/2020 coastlines, the erosion-risk polygons, and the
//! monitored locations into toggleable layers with tooltips, markers, and a
//! title box. All styling decisions come from the pure mappings in
//! [`crate::risk`]; this module only packages them.

use serde_json::json;

use crate::geojson::{Feature, FeatureCollection, Geometry};
use crate::map::{GeoJsonLayer, LineStyle, MapConfig, MapDocument, Marker, TileProvider};
use crate::risk::zone_style;
use crate::yucatan::{self, LocationDef, ZoneDef};

/// Wrap a surveyed coastline in a single-feature collection.
pub fn coastline_collection(year: i32, name: &str, coords: &[(f64, f64)]) -> FeatureCollection {
    FeatureCollection::from_features(vec![Feature::new(Geometry::line(coords))
        .prop("year", year)
        .prop("name", name)])
}

/// Build the erosion-zone collection with risk-conditional fill styles
/// embedded per feature.
pub fn zone_collection(zones: &[ZoneDef]) -> FeatureCollection {
    let mut collection = FeatureCollection::new();
    for zone in zones {
        let style = zone_style(zone.risk);
        collection.push(
            Feature::new(Geometry::polygon(zone.ring))
                .prop("name", zone.name)
                .prop("erosion_rate", zone.erosion_rate)
                .prop("risk", zone.risk.label())
                .prop(
                    "style",
                    json!({
                        "fillColor": style.fill_color,
                        "color": style.line_color,
                        "weight": style.weight,
                        "fillOpacity": style.fill_opacity
                    }),
                ),
        );
    }
    collection
}

/// Build a severity-colored marker for one monitored location.
pub fn location_marker(location: &LocationDef) -> Marker {
    let erosion = location.erosion_label();
    Marker {
        lat: location.lat,
        lon: location.lon,
        color: location.severity().marker_color().to_string(),
        popup: format!("<b>{}</b><br>Erosión: {}", location.name, erosion),
        tooltip: format!("{} - Erosión: {}", location.name, erosion),
    }
}

/// Assemble the complete overview map document.
pub fn build_document() -> MapDocument {
    let config = MapConfig {
        center: (21.0, -88.0),
        zoom: 8,
        tiles: TileProvider::CartoDbPositron,
    };
    let mut doc = MapDocument::new("Cambios Costeros - Península de Yucatán", config);

    doc.add_layer(GeoJsonLayer {
        name: "Zonas de Erosión".to_string(),
        collection: zone_collection(yucatan::EROSION_ZONES),
        // Fallback only; each zone carries its own risk-conditional style
        style: LineStyle {
            color: "#000000".to_string(),
            weight: 1,
            opacity: 0.5,
        },
        tooltip_fields: vec![
            ("name".to_string(), "Zona:".to_string()),
            ("erosion_rate".to_string(), "Tasa de Erosión:".to_string()),
            ("risk".to_string(), "Nivel de Riesgo:".to_string()),
        ],
    });

    doc.add_layer(GeoJsonLayer {
        name: "Línea Costera 2000".to_string(),
        collection: coastline_collection(2000, "Línea Costera 2000", yucatan::COASTLINE_2000),
        style: LineStyle {
            color: "#3b82f6".to_string(),
            weight: 3,
            opacity: 0.9,
        },
        tooltip_fields: vec![
            ("year".to_string(), "Año:".to_string()),
            ("name".to_string(), "Nombre:".to_string()),
        ],
    });

    doc.add_layer(GeoJsonLayer {
        name: "Línea Costera 2020".to_string(),
        collection: coastline_collection(
            2020,
            "Línea Costera 2020 (Avance del Mar)",
            yucatan::COASTLINE_2020,
        ),
        style: LineStyle {
            color: "#ef4444".to_string(),
            weight: 3,
            opacity: 0.9,
        },
        tooltip_fields: vec![
            ("year".to_string(), "Año:".to_string()),
            ("name".to_string(), "Nombre:".to_string()),
        ],
    });

    for location in yucatan::LOCATIONS {
        doc.add_marker(location_marker(location));
    }

    doc.enable_layer_control();
    doc.add_chrome(title_html());
    doc
}

fn title_html() -> &'static str {
    r#"<div style="position: fixed;
     top: 10px; left: 50px; width: 350px; height: 90px;
     background-color: white; border: 2px solid grey; z-index: 9999;
     font-size: 14px; padding: 12px; border-radius: 5px; box-shadow: 0 2px 4px rgba(0,0,0,0.2);">
     <b style="font-size:16px;">Cambios Costeros - Península de Yucatán</b><br>
     <span style="font-size:12px; color: #3b82f6;">&#9473;&#9473;&#9473; Línea Costera 2000</span><br>
     <span style="font-size:12px; color: #ef4444;">&#9473;&#9473;&#9473; Línea Costera 2020 (Avance del Mar)</span><br>
     <span style="font-size:11px; color: #666;">Datos SAR multitemporales 2000-2020</span>
</div>"#
}
