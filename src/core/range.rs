use crate::core::numeric::{RoundingMode, round_to_precision};
use crate::core::series::SeriesRecord;

/// Maximum value of all line series inside the `[from, to]` sample window,
/// rounded up to a gridline-friendly bound.
///
/// Each line series is scanned from `floor(from)` up to and including
/// `ceil(to)`. When `ceil(to)` lies before the start index or is not finite
/// the scan runs to the end of the series. Bar, area, and untyped series are
/// ignored. Non-finite samples are skipped. Returns `0.0` when nothing
/// positive is visible.
#[must_use]
pub fn max_value_in_window(series: &[SeriesRecord], from: f64, to: f64) -> f64 {
    let start = if from.is_finite() && from > 0.0 {
        from.floor() as usize
    } else {
        0
    };
    let stop = to.ceil();
    let last = if stop.is_finite() && stop >= start as f64 {
        Some(stop as usize)
    } else {
        None
    };

    let mut max = 0.0_f64;
    for record in series.iter().filter(|record| record.is_line()) {
        let end = match last {
            Some(last) => last.min(record.values.len().saturating_sub(1)),
            None => record.values.len().saturating_sub(1),
        };
        if start >= record.values.len() {
            continue;
        }

        for &value in &record.values[start..=end] {
            if value.is_finite() && value > max {
                max = value;
            }
        }
    }

    nice_upper_bound(max)
}

/// Rounds `max` up so that only its two leading digits are kept, then to an
/// integer.
///
/// `8734 -> 8800`, `55 -> 55`, `0.4 -> 1`. Zero, negative, and non-finite
/// inputs yield `0.0`.
#[must_use]
pub fn nice_upper_bound(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 0.0;
    }

    let digits = (max + 1.0).log10().ceil() as i32;
    round_to_precision(max, RoundingMode::Ceil, 2 - digits).ceil()
}
