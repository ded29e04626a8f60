pub mod labels;
pub mod layout;
pub mod numeric;
pub mod range;
pub mod series;
pub mod types;

pub use labels::{format_day_month, format_day_month_local, format_with_spaces};
pub use layout::{RemainderPolicy, axial_shift, label_divider, pixel_per_sample, sample_count};
pub use numeric::{
    RoundingMode, clamp, ease_in_quad, linear, next_power_of_two_at_least, rate_limit,
    round_to_precision,
};
pub use range::{max_value_in_window, nice_upper_bound};
pub use series::{
    RawChartInput, RawColumn, SeriesKind, SeriesPayload, SeriesRecord, TIME_AXIS_KEY, normalize,
    normalize_with_offset,
};
pub use types::{ScaleParameters, Viewport};
