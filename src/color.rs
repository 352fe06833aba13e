//! Height-to-color gradient for coastline rendering.
//!
//! Maps segment heights onto a red -> yellow -> green gradient so that
//! low (eroded) coastline renders as danger and high coastline as safe.

/// Lowest displayable height in meters (critical erosion).
pub const HEIGHT_MIN: f64 = 0.5;
/// Highest displayable height in meters (safe coastline).
pub const HEIGHT_MAX: f64 = 5.0;

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Lowercase `#rrggbb` form, as embedded in feature styles.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Map a coastline height to a gradient color.
///
/// The height is normalized over [`HEIGHT_MIN`, `HEIGHT_MAX`]; out-of-range
/// inputs clamp to the nearest boundary. The lower half of the gradient
/// interpolates red to yellow, the upper half yellow to green. Pure and
/// deterministic.
pub fn color_from_height(height: f64) -> Rgb {
    let normalized = ((height - HEIGHT_MIN) / (HEIGHT_MAX - HEIGHT_MIN)).clamp(0.0, 1.0);

    let (r, g) = if normalized < 0.5 {
        // Red to yellow
        (255.0, 255.0 * (normalized * 2.0))
    } else {
        // Yellow to green
        (255.0 * (1.0 - (normalized - 0.5) * 2.0), 255.0)
    };

    Rgb {
        r: channel(r),
        g: channel(g),
        b: 0,
    }
}

/// Clamp a channel value to [0, 255] and truncate to an integer.
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_anchors() {
        assert_eq!(color_from_height(5.0).hex(), "#00ff00");
        assert_eq!(color_from_height(0.5).hex(), "#ff0000");
        // Midpoint of the domain sits exactly on the yellow boundary
        assert_eq!(color_from_height(2.75).hex(), "#ffff00");
    }

    #[test]
    fn test_out_of_range_clamps_to_boundary() {
        assert_eq!(color_from_height(-3.0), color_from_height(0.5));
        assert_eq!(color_from_height(99.0), color_from_height(5.0));
    }

    #[test]
    fn test_hex_is_always_six_digits() {
        let mut h = 0.5;
        while h <= 5.0 {
            let hex = color_from_height(h).hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
            h += 0.05;
        }
    }

    #[test]
    fn test_lower_half_holds_red_upper_half_holds_green() {
        let low = color_from_height(1.5);
        assert_eq!(low.r, 255);
        assert_eq!(low.b, 0);

        let high = color_from_height(4.0);
        assert_eq!(high.g, 255);
        assert_eq!(high.b, 0);
    }
}
