//! Synthetic time-series generator for the animated coastline map.
//!
//! Produces one feature per (segment, year) pair: the height comes from the
//! decay model, the stroke color from the height gradient, and the popup
//! carries the Spanish-language summary shown on click.

use rand::Rng;
use serde_json::json;

use crate::color::color_from_height;
use crate::decay;
use crate::geojson::{Feature, FeatureCollection, Geometry};
use crate::map::{MapConfig, MapDocument, TileProvider, TimeLayer};
use crate::yucatan;

/// Build the feature for one coastline segment in one year.
pub fn segment_feature(
    coords: &[(f64, f64)],
    year: i32,
    segment_id: &str,
    rng: &mut impl Rng,
) -> Feature {
    let height = round2(decay::sample_height(year, rng));
    let color = color_from_height(height).hex();

    Feature::new(Geometry::line(coords))
        .prop("time", format!("{}-01-01", year))
        .prop("year", year)
        .prop("height", height)
        .prop("segment_id", segment_id)
        .prop(
            "style",
            json!({
                "color": color,
                "weight": 6,
                "opacity": 0.8
            }),
        )
        .prop(
            "popup",
            format!(
                "<b>Año:</b> {}<br><b>Altura:</b> {}m<br><b>Segmento:</b> {}",
                year, height, segment_id
            ),
        )
}

/// Generate the full (segment x year) collection.
///
/// Deterministic for a fixed random source: the same seed yields a
/// byte-identical serialized collection.
pub fn generate_features(
    segments: &[&[(f64, f64)]],
    years: &[i32],
    rng: &mut impl Rng,
) -> FeatureCollection {
    let mut collection = FeatureCollection::new();
    for &year in years {
        for (idx, &coords) in segments.iter().enumerate() {
            let segment_id = format!("Segmento {}", idx + 1);
            collection.push(segment_feature(coords, year, &segment_id, rng));
        }
    }
    collection
}

/// Assemble the animated map document around a generated collection.
pub fn build_document(collection: FeatureCollection) -> MapDocument {
    let config = MapConfig {
        center: (20.5, -88.5),
        zoom: 7,
        tiles: TileProvider::CartoDbPositron,
    };
    let mut doc = MapDocument::new("Cambios Costeros - Península de Yucatán", config);

    doc.set_time_layer(TimeLayer {
        collection,
        period: "P1Y".to_string(),
        duration: "P10Y".to_string(),
        auto_play: true,
        loop_playback: true,
        max_speed: 2,
        date_format: "YYYY".to_string(),
    });

    doc.add_chrome(legend_html());
    doc.add_chrome(title_html());
    doc
}

/// Fixed legend explaining the height gradient bands.
fn legend_html() -> &'static str {
    r#"<div style="position: fixed;
            bottom: 50px; left: 50px; width: 200px; height: 140px;
            background-color: white; border: 2px solid grey; z-index: 9999;
            font-size: 14px; padding: 10px">
    <p style="margin: 0 0 10px 0; font-weight: bold;">Altura de Costa (m)</p>
    <div style="display: flex; align-items: center; margin: 5px 0;">
        <div style="width: 30px; height: 15px; background: #00ff00; margin-right: 10px;"></div>
        <span>4.0-5.0m (Seguro)</span>
    </div>
    <div style="display: flex; align-items: center; margin: 5px 0;">
        <div style="width: 30px; height: 15px; background: #ffff00; margin-right: 10px;"></div>
        <span>2.5-4.0m (Moderado)</span>
    </div>
    <div style="display: flex; align-items: center; margin: 5px 0;">
        <div style="width: 30px; height: 15px; background: #ff0000; margin-right: 10px;"></div>
        <span>0.5-2.5m (Crítico)</span>
    </div>
</div>"#
}

fn title_html() -> &'static str {
    r#"<div style="position: fixed;
            top: 10px; left: 50%; transform: translateX(-50%);
            background-color: white; border: 2px solid grey; z-index: 9999;
            font-size: 18px; padding: 10px 20px; font-weight: bold;">
    Cambios Costeros - Península de Yucatán (2000-2030)
</div>"#
}

/// Round to two decimals for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_feature_count_is_segments_times_years() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let fc = generate_features(yucatan::ANIMATED_SEGMENTS, yucatan::YEARS, &mut rng);
        assert_eq!(fc.len(), 17 * 5);
    }

    #[test]
    fn test_fixed_seed_regenerates_identical_collection() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let fc_a = generate_features(yucatan::ANIMATED_SEGMENTS, yucatan::YEARS, &mut a);
        let fc_b = generate_features(yucatan::ANIMATED_SEGMENTS, yucatan::YEARS, &mut b);
        assert_eq!(fc_a.to_json().unwrap(), fc_b.to_json().unwrap());
    }

    #[test]
    fn test_feature_carries_time_style_and_popup() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let feature = segment_feature(yucatan::ANIMATED_SEGMENTS[0], 2020, "Segmento 1", &mut rng);

        assert_eq!(feature.properties["time"], "2020-01-01");
        assert_eq!(feature.properties["year"], 2020);
        assert_eq!(feature.properties["segment_id"], "Segmento 1");

        let style = &feature.properties["style"];
        assert_eq!(style["weight"], 6);
        let color = style["color"].as_str().unwrap();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));

        let popup = feature.properties["popup"].as_str().unwrap();
        assert!(popup.contains("Año:"));
        assert!(popup.contains("Segmento 1"));
    }

    #[test]
    fn test_heights_respect_the_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let fc = generate_features(yucatan::ANIMATED_SEGMENTS, yucatan::YEARS, &mut rng);
        for feature in &fc.features {
            let height = feature.properties["height"].as_f64().unwrap();
            assert!(height >= 0.5, "height {} below floor", height);
        }
    }

    #[test]
    fn test_document_is_animated() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let fc = generate_features(yucatan::ANIMATED_SEGMENTS, yucatan::YEARS, &mut rng);
        let html = build_document(fc).render().unwrap();

        assert!(html.contains("timeDimension"));
        assert!(html.contains("Altura de Costa (m)"));
        assert!(html.contains("Cambios Costeros - Península de Yucatán (2000-2030)"));
    }
}
