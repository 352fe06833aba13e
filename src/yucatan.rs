//! Static Yucatán Peninsula geometry and survey tables.
//!
//! Plain constant data, no behavior: coastline segment polylines for the
//! animated map, the detailed 2000/2020 coastlines for the overview map,
//! named erosion-risk zones, and the monitored locations with their
//! erosion ranges. Coordinates are (longitude, latitude) pairs.

use crate::risk::{RiskLevel, Severity};

/// Years rendered by the animated coastline map.
pub const YEARS: &[i32] = &[2000, 2010, 2020, 2025, 2030];

/// Coastline segments for the animated map, ordered northwest to south.
pub const ANIMATED_SEGMENTS: &[&[(f64, f64)]] = &[
    // Northwest coast (Celestún area)
    &[(-90.4, 21.6), (-90.2, 21.65), (-90.0, 21.7)],
    &[(-90.0, 21.7), (-89.8, 21.72), (-89.6, 21.73)],
    // North coast (Progreso area)
    &[(-89.6, 21.73), (-89.4, 21.75), (-89.2, 21.76)],
    &[(-89.2, 21.76), (-89.0, 21.77), (-88.8, 21.78)],
    &[(-88.8, 21.78), (-88.6, 21.79), (-88.4, 21.8)],
    // North-central coast (Telchac area)
    &[(-88.4, 21.8), (-88.2, 21.82), (-88.0, 21.83)],
    &[(-88.0, 21.83), (-87.8, 21.84), (-87.6, 21.85)],
    // Northeast coast (Holbox area)
    &[(-87.6, 21.85), (-87.5, 21.8), (-87.4, 21.7)],
    &[(-87.4, 21.7), (-87.3, 21.6), (-87.2, 21.5)],
    // East coast - Caribbean (Cancún area)
    &[(-87.2, 21.5), (-87.1, 21.3), (-87.0, 21.1)],
    &[(-87.0, 21.1), (-86.95, 20.9), (-86.9, 20.7)],
    // East coast - Caribbean (Playa del Carmen area)
    &[(-86.9, 20.7), (-86.85, 20.5), (-86.8, 20.3)],
    &[(-86.8, 20.3), (-86.75, 20.1), (-86.7, 19.9)],
    // Southeast coast (Tulum area)
    &[(-86.7, 19.9), (-86.8, 19.7), (-86.9, 19.5)],
    &[(-86.9, 19.5), (-87.0, 19.3), (-87.1, 19.1)],
    // South coast
    &[(-87.1, 19.1), (-87.3, 19.0), (-87.5, 18.9)],
    &[(-87.5, 18.9), (-87.7, 18.85), (-87.9, 18.8)],
];

/// Detailed coastline surveyed position, year 2000.
pub const COASTLINE_2000: &[(f64, f64)] = &[
    // Progreso area (northwest coast)
    (-89.66, 21.30),
    (-89.60, 21.29),
    (-89.50, 21.28),
    (-89.40, 21.27),
    (-89.30, 21.26),
    // Telchac Puerto area
    (-89.20, 21.25),
    (-89.10, 21.24),
    (-89.00, 21.23),
    // Dzilam de Bravo area
    (-88.90, 21.22),
    (-88.80, 21.23),
    (-88.70, 21.24),
    (-88.60, 21.25),
    // San Felipe area
    (-88.50, 21.27),
    (-88.40, 21.29),
    (-88.30, 21.31),
    (-88.20, 21.33),
    // Río Lagartos area
    (-88.10, 21.35),
    (-88.00, 21.38),
    (-87.90, 21.41),
    (-87.80, 21.44),
    // El Cuyo area
    (-87.70, 21.47),
    (-87.60, 21.50),
    (-87.50, 21.53),
    // Holbox area (northeast)
    (-87.40, 21.55),
    (-87.30, 21.56),
    (-87.20, 21.55),
    (-87.10, 21.53),
    // Chiquilá area
    (-87.00, 21.50),
    (-86.95, 21.47),
    (-86.92, 21.43),
    // Cancún area (east coast begins)
    (-86.90, 21.38),
    (-86.88, 21.30),
    (-86.86, 21.20),
    (-86.85, 21.16),
    (-86.84, 21.10),
    (-86.83, 21.05),
    // Puerto Morelos area
    (-86.85, 20.95),
    (-86.87, 20.85),
    (-86.90, 20.75),
    // Playa del Carmen area
    (-87.00, 20.65),
    (-87.05, 20.63),
    (-87.08, 20.61),
    (-87.10, 20.59),
    // Puerto Aventuras area
    (-87.15, 20.50),
    (-87.20, 20.42),
    (-87.25, 20.35),
    // Tulum area
    (-87.30, 20.28),
    (-87.35, 20.23),
    (-87.40, 20.21),
    (-87.45, 20.20),
    (-87.46, 20.21),
    // Sian Ka'an area (south)
    (-87.48, 20.15),
    (-87.50, 20.10),
    (-87.52, 20.05),
    (-87.54, 20.00),
];

/// Detailed coastline in 2020, shifted inland by the simulated advance of
/// the sea. Same point count and ordering as [`COASTLINE_2000`].
pub const COASTLINE_2020: &[(f64, f64)] = &[
    // Progreso area - significant advancement
    (-89.64, 21.28),
    (-89.58, 21.27),
    (-89.48, 21.26),
    (-89.38, 21.25),
    (-89.28, 21.24),
    // Telchac Puerto - moderate advancement
    (-89.18, 21.23),
    (-89.08, 21.22),
    (-88.98, 21.21),
    // Dzilam de Bravo - heavy advancement
    (-88.88, 21.20),
    (-88.78, 21.21),
    (-88.68, 21.22),
    (-88.58, 21.23),
    // San Felipe - moderate advancement
    (-88.48, 21.25),
    (-88.38, 21.27),
    (-88.28, 21.29),
    (-88.18, 21.31),
    // Río Lagartos - slight advancement
    (-88.08, 21.33),
    (-87.98, 21.36),
    (-87.88, 21.39),
    (-87.78, 21.42),
    // El Cuyo - moderate advancement
    (-87.68, 21.45),
    (-87.58, 21.48),
    (-87.48, 21.51),
    // Holbox - significant advancement after storm seasons
    (-87.38, 21.53),
    (-87.28, 21.54),
    (-87.18, 21.53),
    (-87.08, 21.51),
    // Chiquilá - heavy advancement
    (-86.98, 21.48),
    (-86.93, 21.45),
    (-86.90, 21.41),
    // Cancún - critical advancement
    (-86.88, 21.36),
    (-86.86, 21.28),
    (-86.84, 21.18),
    (-86.83, 21.14),
    (-86.82, 21.08),
    (-86.81, 21.03),
    // Puerto Morelos - significant advancement
    (-86.83, 20.93),
    (-86.85, 20.83),
    (-86.88, 20.73),
    // Playa del Carmen - heavy advancement
    (-86.98, 20.63),
    (-87.03, 20.61),
    (-87.06, 20.59),
    (-87.08, 20.57),
    // Puerto Aventuras - moderate advancement
    (-87.13, 20.48),
    (-87.18, 20.40),
    (-87.23, 20.33),
    // Tulum - significant advancement
    (-87.28, 20.26),
    (-87.33, 20.21),
    (-87.38, 20.19),
    (-87.43, 20.18),
    (-87.44, 20.19),
    // Sian Ka'an - moderate advancement
    (-87.46, 20.13),
    (-87.48, 20.08),
    (-87.50, 20.03),
    (-87.52, 19.98),
];

/// A named erosion-risk polygon with its observed rate.
#[derive(Clone, Copy, Debug)]
pub struct ZoneDef {
    pub name: &'static str,
    pub erosion_rate: &'static str,
    pub risk: RiskLevel,
    /// Closed exterior ring, first point repeated last.
    pub ring: &'static [(f64, f64)],
}

pub const EROSION_ZONES: &[ZoneDef] = &[
    ZoneDef {
        name: "Zona Crítica - Cancún",
        erosion_rate: "Alta (30-50m)",
        risk: RiskLevel::Critico,
        ring: &[
            (-86.90, 21.40),
            (-86.80, 21.40),
            (-86.80, 21.00),
            (-86.90, 21.00),
            (-86.90, 21.40),
        ],
    },
    ZoneDef {
        name: "Zona Crítica - Playa del Carmen",
        erosion_rate: "Alta (25-40m)",
        risk: RiskLevel::Critico,
        ring: &[
            (-87.15, 20.70),
            (-87.00, 20.70),
            (-87.00, 20.55),
            (-87.15, 20.55),
            (-87.15, 20.70),
        ],
    },
    ZoneDef {
        name: "Zona Moderada - Progreso",
        erosion_rate: "Media (15-25m)",
        risk: RiskLevel::Moderado,
        ring: &[
            (-89.70, 21.32),
            (-89.25, 21.32),
            (-89.25, 21.24),
            (-89.70, 21.24),
            (-89.70, 21.32),
        ],
    },
];

/// A monitored coastal location with its observed erosion range.
#[derive(Clone, Copy, Debug)]
pub struct LocationDef {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Observed erosion range in meters, inclusive bounds.
    pub erosion_min_m: u32,
    pub erosion_max_m: u32,
}

impl LocationDef {
    /// Range string as rendered in popups, e.g. `"15-25m"`.
    pub fn erosion_label(&self) -> String {
        format!("{}-{}m", self.erosion_min_m, self.erosion_max_m)
    }

    /// Severity bucket derived from the range's upper bound.
    pub fn severity(&self) -> Severity {
        Severity::from_upper_bound(self.erosion_max_m)
    }
}

pub const LOCATIONS: &[LocationDef] = &[
    LocationDef {
        name: "Progreso",
        lat: 21.2833,
        lon: -89.6667,
        erosion_min_m: 15,
        erosion_max_m: 25,
    },
    LocationDef {
        name: "Telchac Puerto",
        lat: 21.3333,
        lon: -89.2667,
        erosion_min_m: 10,
        erosion_max_m: 20,
    },
    LocationDef {
        name: "Dzilam de Bravo",
        lat: 21.3833,
        lon: -88.9167,
        erosion_min_m: 20,
        erosion_max_m: 30,
    },
    LocationDef {
        name: "Río Lagartos",
        lat: 21.5972,
        lon: -88.1597,
        erosion_min_m: 5,
        erosion_max_m: 15,
    },
    LocationDef {
        name: "Holbox",
        lat: 21.5208,
        lon: -87.3761,
        erosion_min_m: 25,
        erosion_max_m: 35,
    },
    LocationDef {
        name: "Cancún",
        lat: 21.1619,
        lon: -86.8515,
        erosion_min_m: 30,
        erosion_max_m: 50,
    },
    LocationDef {
        name: "Puerto Morelos",
        lat: 20.8509,
        lon: -86.8764,
        erosion_min_m: 20,
        erosion_max_m: 30,
    },
    LocationDef {
        name: "Playa del Carmen",
        lat: 20.6296,
        lon: -87.0739,
        erosion_min_m: 25,
        erosion_max_m: 40,
    },
    LocationDef {
        name: "Tulum",
        lat: 20.2114,
        lon: -87.4654,
        erosion_min_m: 15,
        erosion_max_m: 30,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(ANIMATED_SEGMENTS.len(), 17);
        assert_eq!(YEARS.len(), 5);
        assert_eq!(COASTLINE_2000.len(), 55);
        assert_eq!(COASTLINE_2020.len(), 55);
        assert_eq!(EROSION_ZONES.len(), 3);
        assert_eq!(LOCATIONS.len(), 9);
    }

    #[test]
    fn test_zone_rings_are_closed() {
        for zone in EROSION_ZONES {
            assert!(zone.ring.len() >= 4, "{} ring too short", zone.name);
            assert_eq!(
                zone.ring.first(),
                zone.ring.last(),
                "{} ring not closed",
                zone.name
            );
        }
    }

    #[test]
    fn test_segments_form_continuous_chains() {
        // Adjacent segments along the same stretch share an endpoint
        let first = ANIMATED_SEGMENTS[0];
        let second = ANIMATED_SEGMENTS[1];
        assert_eq!(first.last(), second.first());
    }

    #[test]
    fn test_location_labels_and_severity() {
        let cancun = LOCATIONS.iter().find(|l| l.name == "Cancún").unwrap();
        assert_eq!(cancun.erosion_label(), "30-50m");
        assert_eq!(cancun.severity(), Severity::Red);

        let lagartos = LOCATIONS.iter().find(|l| l.name == "Río Lagartos").unwrap();
        assert_eq!(lagartos.severity(), Severity::Blue);
    }

    #[test]
    fn test_coordinates_stay_within_peninsula_bounds() {
        for &(lon, lat) in COASTLINE_2000.iter().chain(COASTLINE_2020.iter()) {
            assert!((-91.0..=-86.0).contains(&lon));
            assert!((18.5..=22.0).contains(&lat));
        }
    }
}
