//! Numeric primitives shared by the range and layout calculators.

/// Rounding function applied by [`round_to_precision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    Ceil,
    Floor,
    Nearest,
}

impl RoundingMode {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Ceil => value.ceil(),
            Self::Floor => value.floor(),
            Self::Nearest => value.round(),
        }
    }
}

/// Rounds `value` to `precision` decimal digits using `mode`.
///
/// A negative precision `-k` rounds to a multiple of `10^k`. NaN and
/// infinities propagate unchanged.
///
/// For negative precision the value is divided by the exact integer power of
/// ten instead of multiplied by its inexact reciprocal, so `8734` rounded up at
/// precision `-2` yields exactly `8800.0`.
#[must_use]
pub fn round_to_precision(value: f64, mode: RoundingMode, precision: i32) -> f64 {
    if precision >= 0 {
        let factor = 10f64.powi(precision);
        mode.apply(value * factor) / factor
    } else {
        let factor = 10f64.powi(-precision);
        mode.apply(value / factor) * factor
    }
}

/// Returns `n` limited to `[min, max]`.
///
/// Callers must pass `min <= max`. Unlike [`f64::clamp`] this never panics;
/// with inverted bounds the lower bound wins.
#[must_use]
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    if n < min {
        min
    } else if n > max {
        max
    } else {
        n
    }
}

/// Alias kept for call sites that think of the bound as a rate limit.
#[must_use]
pub fn rate_limit(n: f64, min: f64, max: f64) -> f64 {
    clamp(n, min, max)
}

/// Smallest power of two `>= n`, computed as `2^ceil(log2(n))`.
///
/// Values `<= 1` and NaN map to `1.0`.
#[must_use]
pub fn next_power_of_two_at_least(n: f64) -> f64 {
    if n.is_nan() || n <= 1.0 {
        return 1.0;
    }
    2f64.powf(n.log2().ceil())
}

#[must_use]
pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}
