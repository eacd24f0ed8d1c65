//! Color types and gamma/linear conversion
//!
//! Gradient keys are authored as float RGBA in gamma (sRGB) encoding. The LUT
//! and the vertex color buffer store 8-bit RGBA.

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color (vertex color buffer and LUT element)
pub type Rgba8 = [u8; 4];

/// Encoding the baked gradient is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Sampled colors are converted from gamma to linear before storing
    #[default]
    Linear,
    /// Sampled colors are stored as authored
    Gamma,
}

/// Float RGBA color
///
/// Deserializes from `[r, g, b]` (opaque) or `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "ColorRepr")]
pub struct Color(pub Vec4);

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Rgb([f32; 3]),
    Rgba([f32; 4]),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Rgb([r, g, b]) => Self::rgb(r, g, b),
            ColorRepr::Rgba([r, g, b, a]) => Self::rgba(r, g, b, a),
        }
    }
}

impl Color {
    pub const WHITE: Self = Self(Vec4::ONE);
    pub const BLACK: Self = Self(Vec4::new(0.0, 0.0, 0.0, 1.0));

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(Vec4::new(r, g, b, a))
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Linear interpolation of all four channels
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self(self.0.lerp(other.0, t))
    }

    /// Gamma-encoded color to linear encoding (alpha untouched)
    pub fn to_linear(self) -> Self {
        let c = self.0;
        Self::rgba(
            gamma_to_linear(c.x),
            gamma_to_linear(c.y),
            gamma_to_linear(c.z),
            c.w,
        )
    }

    /// Quantize to 8 bits per channel, rounding to nearest
    #[inline]
    pub fn to_rgba8(self) -> Rgba8 {
        let c = self.0;
        [
            f32_to_unorm8(c.x),
            f32_to_unorm8(c.y),
            f32_to_unorm8(c.z),
            f32_to_unorm8(c.w),
        ]
    }

    #[inline]
    pub fn from_rgba8(c: Rgba8) -> Self {
        Self(Vec4::new(c[0] as f32, c[1] as f32, c[2] as f32, c[3] as f32) / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// sRGB transfer curve, gamma to linear
#[inline]
pub fn gamma_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer curve, linear to gamma
#[inline]
pub fn linear_to_gamma(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Clamp to [0, 1] and round to the nearest 8-bit step. NaN maps to 0.
#[inline]
pub fn f32_to_unorm8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_to_unorm8_rounds() {
        assert_eq!(f32_to_unorm8(0.0), 0);
        assert_eq!(f32_to_unorm8(0.5), 128);
        assert_eq!(f32_to_unorm8(1.0), 255);
        assert_eq!(f32_to_unorm8(-3.0), 0);
        assert_eq!(f32_to_unorm8(7.0), 255);
        assert_eq!(f32_to_unorm8(f32::NAN), 0);
    }

    #[test]
    fn test_gamma_linear_endpoints() {
        assert_eq!(gamma_to_linear(0.0), 0.0);
        assert!((gamma_to_linear(1.0) - 1.0).abs() < 1e-6);
        // Mid-grey is darker in linear space
        assert!((gamma_to_linear(0.5) - 0.214).abs() < 0.001);
    }

    #[test]
    fn test_gamma_linear_roundtrip() {
        for i in 0..=20 {
            let c = i as f32 / 20.0;
            let back = linear_to_gamma(gamma_to_linear(c));
            assert!((back - c).abs() < 1e-4, "{c} -> {back}");
        }
    }

    #[test]
    fn test_to_linear_keeps_alpha() {
        let c = Color::rgba(0.5, 0.5, 0.5, 0.5).to_linear();
        assert_eq!(c.0.w, 0.5);
        assert!(c.0.x < 0.5);
    }

    #[test]
    fn test_rgba8_roundtrip() {
        let c: Rgba8 = [12, 200, 255, 0];
        assert_eq!(Color::from_rgba8(c).to_rgba8(), c);
    }

    #[test]
    fn test_color_deserialize_rgb_and_rgba() {
        #[derive(Deserialize)]
        struct Holder {
            a: Color,
            b: Color,
        }

        let holder: Holder = toml::from_str("a = [1.0, 0.0, 0.0]\nb = [0.0, 1.0, 0.0, 0.25]").unwrap();
        assert_eq!(holder.a, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(holder.b, Color::rgba(0.0, 1.0, 0.0, 0.25));
    }
}
