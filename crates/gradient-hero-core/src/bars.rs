//! Bar field projection.
//!
//! Maps (bar index, animation offset) to the vertical scale applied to each
//! gradient bar. The field itself holds nothing but the bar count and the
//! wave geometry.

use crate::wave::WaveGeometry;

/// Number of bars in the hero background.
pub const DEFAULT_BAR_COUNT: usize = 15;

/// One bar's rendered shape at a given offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub index: usize,
    /// Height in percent of the field (15..=160 with default geometry)
    pub height: f64,
}

impl Bar {
    /// Vertical scale factor for a `scaleY` transform anchored at the bottom.
    pub fn scale_y(&self) -> f64 {
        self.height / 100.0
    }

    /// Inline CSS transform for this bar.
    pub fn transform(&self) -> String {
        format!("scaleY({:.4})", self.scale_y())
    }
}

/// A fixed row of bars driven by the wave function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarField {
    count: usize,
    geometry: WaveGeometry,
}

impl Default for BarField {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_COUNT, WaveGeometry::default())
    }
}

impl BarField {
    pub fn new(count: usize, geometry: WaveGeometry) -> Self {
        Self { count, geometry }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn geometry(&self) -> &WaveGeometry {
        &self.geometry
    }

    /// Width share of a single bar, as a CSS percentage.
    pub fn bar_width_percent(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        100.0 / self.count as f64
    }

    /// All bars at `offset`, left to right.
    pub fn bars(&self, offset: f64) -> impl Iterator<Item = Bar> + '_ {
        (0..self.count).map(move |index| Bar {
            index,
            height: self.geometry.height(index, self.count, offset),
        })
    }
}
