//! Risk categories for erosion zones and severity buckets for markers.

/// Risk category assigned to an erosion zone polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Moderado,
    Critico,
}

impl RiskLevel {
    /// Spanish label as rendered in tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Moderado => "Moderado",
            Self::Critico => "Crítico",
        }
    }
}

/// Polygon fill/outline style for a zone layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneStyle {
    pub fill_color: &'static str,
    pub line_color: &'static str,
    pub weight: u32,
    pub fill_opacity: f64,
}

/// Map a risk category to its polygon style.
///
/// Kept as a standalone mapping so layer styling stays testable without
/// touching the rendering boundary.
pub fn zone_style(risk: RiskLevel) -> ZoneStyle {
    let fill_color = match risk {
        RiskLevel::Moderado => "#fbbf24",
        RiskLevel::Critico => "#ef4444",
    };
    ZoneStyle {
        fill_color,
        line_color: "#000000",
        weight: 1,
        fill_opacity: 0.2,
    }
}

/// Coarse three-level marker severity derived from an erosion range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Blue,
    Orange,
    Red,
}

impl Severity {
    /// Bucket a location by the upper bound of its erosion range, in
    /// meters. Thresholds are inclusive and checked in descending order.
    pub fn from_upper_bound(meters: u32) -> Self {
        if meters >= 40 {
            Self::Red
        } else if meters >= 25 {
            Self::Orange
        } else {
            Self::Blue
        }
    }

    /// Marker fill color on the overview map.
    pub fn marker_color(&self) -> &'static str {
        match self {
            Self::Blue => "#3b82f6",
            Self::Orange => "#f97316",
            Self::Red => "#ef4444",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(Severity::from_upper_bound(50), Severity::Red);
        assert_eq!(Severity::from_upper_bound(40), Severity::Red);
        assert_eq!(Severity::from_upper_bound(39), Severity::Orange);
        assert_eq!(Severity::from_upper_bound(25), Severity::Orange);
        assert_eq!(Severity::from_upper_bound(24), Severity::Blue);
        assert_eq!(Severity::from_upper_bound(0), Severity::Blue);
    }

    #[test]
    fn test_zone_style_fill_follows_risk() {
        assert_eq!(zone_style(RiskLevel::Moderado).fill_color, "#fbbf24");
        assert_eq!(zone_style(RiskLevel::Critico).fill_color, "#ef4444");
    }

    #[test]
    fn test_zone_outline_is_constant() {
        for risk in [RiskLevel::Moderado, RiskLevel::Critico] {
            let style = zone_style(risk);
            assert_eq!(style.line_color, "#000000");
            assert_eq!(style.weight, 1);
            assert!((style.fill_opacity - 0.2).abs() < 1e-12);
        }
    }
}
