use std::fmt;

/// Display color for sprites and gradient stops.
///
/// Stored in the form it was created with, so Canvas2D receives exactly
/// the CSS color string the sprite was spawned with. RGB components are
/// sRGB-encoded, matching CSS `rgb()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { hue: f32, saturation: f32, lightness: f32 },
    /// RGB components (0.0 - 1.0).
    Rgb { r: f32, g: f32, b: f32 },
}

impl Color {
    pub const WHITE: Color = Color::Rgb { r: 1.0, g: 1.0, b: 1.0 };
    pub const BLACK: Color = Color::Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Color::Hsl { hue, saturation, lightness }
    }
}

impl fmt::Display for Color {
    /// CSS color syntax, accepted by Canvas2D fill styles and gradient stops.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsl { hue, saturation, lightness } => {
                write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness)
            }
            Color::Rgb { r, g, b } => {
                let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                write!(f, "rgb({}, {}, {})", to_u8(r), to_u8(g), to_u8(b))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        assert_eq!(Color::hsl(120.0, 70.0, 50.0).to_string(), "hsl(120, 70%, 50%)");
        assert_eq!(Color::WHITE.to_string(), "rgb(255, 255, 255)");
        assert_eq!(Color::BLACK.to_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn rgb_components_clamp_to_byte_range() {
        let c = Color::Rgb { r: 1.5, g: -0.2, b: 0.5 };
        assert_eq!(c.to_string(), "rgb(255, 0, 128)");
    }
}
