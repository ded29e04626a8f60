use dovelet::core::{RawChartInput, SeriesRecord, max_value_in_window, normalize};

fn series_with(lines: &[(&str, &str, Vec<f64>)]) -> Vec<SeriesRecord> {
    let mut input = RawChartInput::default();
    for (key, kind, values) in lines {
        input = input.with_column(*key, values.clone()).with_type(*key, *kind);
    }
    normalize(&input)
}

#[test]
fn scenario_rounds_up_to_two_leading_digits() {
    let series = series_with(&[
        ("x", "x", vec![0.0, 86_400_000.0, 172_800_000.0]),
        ("y", "line", vec![10.0, 55.0, 8734.0]),
    ]);

    assert_eq!(max_value_in_window(&series, 0.0, 2.0), 8800.0);
    assert_eq!(max_value_in_window(&series, 0.0, 1.0), 55.0);
}

#[test]
fn window_end_is_inclusive_of_ceiled_index() {
    let series = series_with(&[("y0", "line", vec![1.0, 2.0, 30.0, 4000.0])]);

    assert_eq!(max_value_in_window(&series, 0.0, 1.2), 30.0);
    assert_eq!(max_value_in_window(&series, 0.0, 2.0), 30.0);
    assert_eq!(max_value_in_window(&series, 0.7, 0.3), 2.0);
}

#[test]
fn window_start_is_floored() {
    let series = series_with(&[("y0", "line", vec![90.0, 2.0, 3.0, 4.0])]);

    assert_eq!(max_value_in_window(&series, 0.9, 3.0), 90.0);
    assert_eq!(max_value_in_window(&series, 1.0, 3.0), 4.0);
}

#[test]
fn bar_series_do_not_affect_bound() {
    let series = series_with(&[
        ("y0", "bar", vec![1_000_000.0, 2_000_000.0]),
        ("y1", "line", vec![10.0, 20.0]),
    ]);
    assert_eq!(max_value_in_window(&series, 0.0, 1.0), 20.0);
}

#[test]
fn no_line_series_returns_zero() {
    let series = series_with(&[
        ("x", "x", vec![0.0, 1.0]),
        ("y0", "bar", vec![5.0, 6.0]),
    ]);
    assert_eq!(max_value_in_window(&series, 0.0, 1.0), 0.0);
    assert_eq!(max_value_in_window(&[], 0.0, 10.0), 0.0);
}

#[test]
fn all_zero_lines_return_zero_without_nan() {
    let series = series_with(&[("y0", "line", vec![0.0, 0.0, 0.0])]);
    let max = max_value_in_window(&series, 0.0, 2.0);
    assert_eq!(max, 0.0);
}

#[test]
fn degenerate_window_bounds_are_tolerated() {
    let series = series_with(&[("y0", "line", vec![5.0, 70.0, 3.0])]);

    assert_eq!(max_value_in_window(&series, -4.0, 0.0), 5.0);
    assert_eq!(max_value_in_window(&series, 0.0, 99.0), 70.0);
    assert_eq!(max_value_in_window(&series, 0.0, f64::INFINITY), 70.0);
    assert_eq!(max_value_in_window(&series, f64::NAN, 0.0), 5.0);
    assert_eq!(max_value_in_window(&series, 10.0, 12.0), 0.0);
}

#[test]
fn reversed_window_scans_to_series_end() {
    let series = series_with(&[("y0", "line", vec![5.0, 6.0, 7.0, 88.0])]);
    assert_eq!(max_value_in_window(&series, 2.0, 0.0), 88.0);
}

#[test]
fn non_finite_samples_are_skipped() {
    let series = series_with(&[("y0", "line", vec![f64::NAN, 12.0, f64::INFINITY])]);
    assert_eq!(max_value_in_window(&series, 0.0, 2.0), 12.0);
}

#[test]
fn lines_of_different_length_share_the_window() {
    let series = series_with(&[
        ("y0", "line", vec![1.0, 2.0]),
        ("y1", "line", vec![1.0, 2.0, 3.0, 640.0]),
    ]);
    assert_eq!(max_value_in_window(&series, 1.0, 3.0), 640.0);
    assert_eq!(max_value_in_window(&series, 1.0, 2.0), 3.0);
}
