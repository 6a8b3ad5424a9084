//! Wave height function for the gradient bar background.
//!
//! Each bar's height is a blend of three sinusoids sampled at the bar's
//! position across the field and phase-shifted by the animation offset.
//!
//! | Wave | Spatial freq | Temporal freq | Range |
//! |------|--------------|---------------|-------|
//! | primary | 1.2 | +2.0 | [-0.2, 1.0] |
//! | secondary | 2.1 | -1.5 | [0.5, 1.0] |
//! | tertiary | 0.7 | +0.8 | [0.7, 1.0] |
//!
//! With weights 0.6 / 0.3 / 0.1 the blend stays inside [0.1, 1.0], so the
//! clamp in [`blend`] never changes a finite result.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Shortest bar height, in percent of the field height.
pub const DEFAULT_MIN_HEIGHT: f64 = 15.0;

/// Tallest bar height, in percent of the field height.
pub const DEFAULT_MAX_HEIGHT: f64 = 160.0;

/// Angular span covered by the bars, left edge to right edge.
pub const DEFAULT_SPAN: f64 = PI * 3.0;

const PRIMARY_WEIGHT: f64 = 0.6;
const SECONDARY_WEIGHT: f64 = 0.3;
const TERTIARY_WEIGHT: f64 = 0.1;

/// Output range and spatial span of the wave function.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveGeometry {
    pub min_height: f64,
    pub max_height: f64,
    pub span: f64,
}

impl Default for WaveGeometry {
    fn default() -> Self {
        Self {
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            span: DEFAULT_SPAN,
        }
    }
}

impl WaveGeometry {
    /// Angular position of bar `index` out of `total`.
    ///
    /// A field with fewer than two bars has a single bar at position 0.
    pub fn position(&self, index: usize, total: usize) -> f64 {
        if total < 2 {
            return 0.0;
        }
        (index as f64 / (total - 1) as f64) * self.span
    }

    /// Height of bar `index` out of `total` at animation `offset`.
    pub fn height(&self, index: usize, total: usize, offset: f64) -> f64 {
        let blend = blend(self.position(index, total), offset);
        if !blend.is_finite() {
            return self.min_height;
        }
        self.min_height + (self.max_height - self.min_height) * blend
    }
}

/// Weighted blend of the three waves at `position`, clamped to [0, 1].
///
/// Returns NaN when `offset` is not finite.
pub fn blend(position: f64, offset: f64) -> f64 {
    let primary = (position * 1.2 + offset * 2.0).sin() * 0.6 + 0.4;
    let secondary = (position * 2.1 - offset * 1.5).sin() * 0.25 + 0.75;
    let tertiary = (position * 0.7 + offset * 0.8).sin() * 0.15 + 0.85;

    let combined =
        primary * PRIMARY_WEIGHT + secondary * SECONDARY_WEIGHT + tertiary * TERTIARY_WEIGHT;
    combined.clamp(0.0, 1.0)
}

/// Height of bar `index` out of `total` at `offset`, using the default geometry.
pub fn wave_height(index: usize, total: usize, offset: f64) -> f64 {
    WaveGeometry::default().height(index, total, offset)
}
