//! Continuous color gradient defined by ordered keys

use serde::Deserialize;

use crate::color::Color;

/// Gradient control point
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GradientKey {
    /// Position along the gradient, normally in [0, 1]
    pub position: f32,
    pub color: Color,
}

impl GradientKey {
    pub const fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

/// Piecewise-linear color gradient
///
/// Keys are kept sorted by position. Outside the key range the boundary color
/// is held. A gradient without keys is opaque white everywhere.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<GradientKey>")]
pub struct Gradient {
    keys: Vec<GradientKey>,
}

impl From<Vec<GradientKey>> for Gradient {
    fn from(keys: Vec<GradientKey>) -> Self {
        Self::new(keys)
    }
}

impl Gradient {
    /// Build a gradient; keys may be given in any order
    ///
    /// Keys with a NaN or infinite position are dropped.
    pub fn new(mut keys: Vec<GradientKey>) -> Self {
        let count = keys.len();
        keys.retain(|k| k.position.is_finite());
        if keys.len() != count {
            tracing::warn!(
                "Dropped {} gradient key(s) with a non-finite position",
                count - keys.len()
            );
        }

        // Stable, so keys sharing a position keep their authored order
        keys.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { keys }
    }

    /// Two-key gradient from `start` at 0 to `end` at 1
    pub fn linear(start: Color, end: Color) -> Self {
        Self::new(vec![GradientKey::new(0.0, start), GradientKey::new(1.0, end)])
    }

    pub fn keys(&self) -> &[GradientKey] {
        &self.keys
    }

    /// Color at `t`
    pub fn evaluate(&self, t: f32) -> Color {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return Color::WHITE;
        };

        if t.is_nan() || t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        // Positions are finite and first.position < t < last.position, so
        // both neighbours exist and lo.position <= t < hi.position
        let upper = self.keys.partition_point(|k| k.position <= t);
        let lo = &self.keys[upper - 1];
        let hi = &self.keys[upper];

        let weight = (t - lo.position) / (hi.position - lo.position);
        lo.color.lerp(hi.color, weight)
    }
}
