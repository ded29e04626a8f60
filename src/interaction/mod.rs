//! Pointer-side helpers that stay free of platform event types.

mod throttle;

pub use hit_test::HitRect;
pub use throttle::{Throttle, ThrottleDecision};
