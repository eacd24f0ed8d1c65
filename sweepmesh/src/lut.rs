//! Baked gradient lookup table
//!
//! The gradient is sampled once per generation at 256 evenly spaced positions;
//! the geometry kernel then reads colors back with its own linear blend between
//! neighbouring entries instead of re-evaluating the gradient per vertex.

use crate::color::{Color, ColorSpace, Rgba8};
use crate::gradient::Gradient;

/// Number of LUT entries
pub const LUT_SIZE: usize = 256;

/// Distance in `t` between neighbouring entries
pub const LUT_STEP: f32 = 1.0 / (LUT_SIZE - 1) as f32;

/// 256-entry 8-bit color table sampled at `t = i / 255`
#[derive(Clone, PartialEq, Eq)]
pub struct GradientLut {
    entries: [Rgba8; LUT_SIZE],
}

impl GradientLut {
    /// Bake `gradient`, converting each sample to linear encoding when asked
    pub fn build(gradient: &Gradient, color_space: ColorSpace) -> Self {
        let mut entries = [[0u8; 4]; LUT_SIZE];

        for (i, entry) in entries.iter_mut().enumerate() {
            let t = i as f32 / (LUT_SIZE - 1) as f32;
            let color = gradient.evaluate(t);
            let color = match color_space {
                ColorSpace::Linear => color.to_linear(),
                ColorSpace::Gamma => color,
            };
            *entry = color.to_rgba8();
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[Rgba8; LUT_SIZE] {
        &self.entries
    }

    /// Color at `value`, blended between the two nearest entries
    ///
    /// `value` is clamped to [0, 1]; NaN reads entry 0.
    pub fn sample(&self, value: f32) -> Rgba8 {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };

        let idx_flt = value / LUT_STEP;
        let idx = (idx_flt.floor() as usize).min(LUT_SIZE - 1);
        let left = self.entries[idx];

        if idx + 1 >= LUT_SIZE {
            return left;
        }

        let right = self.entries[idx + 1];
        let right_weight = idx_flt - idx_flt.floor();
        let left_weight = 1.0 - right_weight;

        let blended = Color::from_rgba8(left).0 * left_weight + Color::from_rgba8(right).0 * right_weight;
        Color(blended).to_rgba8()
    }
}

impl std::fmt::Debug for GradientLut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientLut")
            .field("first", &self.entries[0])
            .field("last", &self.entries[LUT_SIZE - 1])
            .finish()
    }
}
