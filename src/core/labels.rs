use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Formats an epoch-millisecond timestamp as `"<day> <Mon>"` in `zone`, e.g.
/// `"2 Jan"`.
///
/// Day-of-month has no padding; the month uses the English three-letter
/// abbreviation. Non-finite or out-of-range timestamps produce an empty label.
#[must_use]
pub fn format_day_month<Tz>(timestamp_ms: f64, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match timestamp_to_datetime(timestamp_ms) {
        Some(utc) => utc.with_timezone(zone).format("%-d %b").to_string(),
        None => String::new(),
    }
}

/// [`format_day_month`] in the host's local time zone.
#[must_use]
pub fn format_day_month_local(timestamp_ms: f64) -> String {
    format_day_month(timestamp_ms, &Local)
}

fn timestamp_to_datetime(timestamp_ms: f64) -> Option<DateTime<Utc>> {
    if !timestamp_ms.is_finite() || timestamp_ms.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(timestamp_ms.trunc() as i64)
}

/// Groups the integer digits of `value` in threes separated by spaces.
///
/// `1234567.0 -> "1 234 567"`, `-98765.25 -> "-98 765.25"`. The fractional
/// part is left untouched. Magnitudes of `1e21` and above are written out in
/// full positional notation and grouped like any other integer, never in
/// exponent form.
#[must_use]
pub fn format_with_spaces(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
