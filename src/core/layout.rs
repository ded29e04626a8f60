use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::numeric::{clamp, next_power_of_two_at_least};
use crate::core::series::SeriesRecord;

/// Largest label divider handed out; `2^63` still fits `u64`.
const MAX_LABEL_DIVIDER: f64 = 9_223_372_036_854_775_808.0;

/// How the container width is split across sample intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Whole-pixel share plus the spread remainder, so intervals exactly fill
    /// the container.
    #[default]
    Redistribute,
    /// Plain `width / intervals`.
    Plain,
}

impl RemainderPolicy {
    #[must_use]
    pub fn from_redistribute(redistribute: bool) -> Self {
        if redistribute {
            Self::Redistribute
        } else {
            Self::Plain
        }
    }
}

/// Longest `values` length across all records.
#[must_use]
pub fn sample_count(series: &[SeriesRecord]) -> usize {
    series
        .iter()
        .map(|record| record.values.len())
        .max()
        .unwrap_or(0)
}

/// Pixel length of one sample interval for a container `container_width` wide.
///
/// Returns `0.0` when there are fewer than two samples or the width is
/// negative or not finite.
#[must_use]
pub fn pixel_per_sample(
    series: &[SeriesRecord],
    container_width: f64,
    policy: RemainderPolicy,
) -> f64 {
    let samples = sample_count(series);
    if samples < 2 || !container_width.is_finite() || container_width < 0.0 {
        debug!(
            samples,
            container_width, "degenerate layout input, pixel per sample is zero"
        );
        return 0.0;
    }

    let intervals = (samples - 1) as f64;
    match policy {
        RemainderPolicy::Redistribute => {
            let remainder = container_width % intervals;
            (container_width / intervals).floor() + remainder / intervals
        }
        RemainderPolicy::Plain => container_width / intervals,
    }
}

/// Sub-pixel offset for the fractional part of `from`, always in
/// `[0, pixel_per_sample)`.
#[must_use]
pub fn axial_shift(pixel_per_sample: f64, from: f64) -> f64 {
    if !from.is_finite() || !pixel_per_sample.is_finite() {
        return 0.0;
    }

    let fraction = from - from.floor();
    // `from - floor(from)` rounds up to 1.0 for tiny negative inputs.
    if fraction >= 1.0 {
        return 0.0;
    }
    pixel_per_sample * fraction
}

/// Stride between rendered axis labels for labels `label_width` pixels wide.
///
/// The result is the smallest power of two covering `ceil(label_width /
/// pixel_per_sample)` samples, and at least 1.
#[must_use]
pub fn label_divider(label_width: f64, pixel_per_sample: f64) -> u64 {
    if !pixel_per_sample.is_finite() || pixel_per_sample <= 0.0 || !label_width.is_finite() {
        debug!(
            label_width,
            pixel_per_sample, "degenerate label spacing input, divider is one"
        );
        return 1;
    }

    let diff = clamp((label_width / pixel_per_sample).ceil(), 1.0, f64::INFINITY);
    next_power_of_two_at_least(diff).min(MAX_LABEL_DIVIDER) as u64
}
