use serde::{Deserialize, Serialize};

/// Visible window in fractional sample indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub from: f64,
    pub to: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Window covering every sample of a series with `sample_count` points.
    #[must_use]
    pub fn full(sample_count: usize) -> Self {
        Self::new(0.0, sample_count.saturating_sub(1) as f64)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.from.is_finite() && self.to.is_finite() && self.from <= self.to
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.to - self.from
    }
}

/// Per-layout-pass scale parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleParameters {
    /// Pixel length of one sample interval.
    pub pixel_per_sample: f64,
    /// Sub-pixel offset for the fractional part of `Viewport::from`.
    pub axial_shift: f64,
    /// Show every Nth axis label; always a power of two.
    pub label_divider: u64,
}
