use dovelet::core::{RawChartInput, normalize};
use dovelet::render::{
    Color, PathCommand, RoundedRect, hex_to_css, is_pixel_buffer_blank, is_rgba_buffer_blank,
    rounded_rect_path,
};

#[test]
fn series_colors_convert_to_css() {
    let series = normalize(
        &RawChartInput::default()
            .with_column("y0", vec![1.0])
            .with_column("y1", vec![2.0])
            .with_color("y0", "#F34C44"),
    );

    let css: Vec<Option<String>> = series
        .iter()
        .map(|record| record.color().and_then(|hex| hex_to_css(hex, Some(0.2))))
        .collect();
    assert_eq!(css, vec![Some("rgba(243, 76, 68, 0.2)".to_owned()), None]);
}

#[test]
fn color_alpha_can_be_overridden() {
    let color = Color::from_hex("#000000")
        .expect("valid hex")
        .with_alpha(0.25);
    assert_eq!(color, Color::rgba(0.0, 0.0, 0.0, 0.25));
    assert!(Color::rgb(0.0, 0.0, 2.0).validate().is_err());
}

#[test]
fn rounded_rect_outline_visits_every_corner() {
    let path = rounded_rect_path(RoundedRect::new(10.0, 20.0, 100.0, 40.0, 8.0));

    assert_eq!(path[0], PathCommand::MoveTo { x: 18.0, y: 20.0 });
    assert_eq!(
        path[1],
        PathCommand::ArcTo {
            x1: 110.0,
            y1: 20.0,
            x2: 110.0,
            y2: 60.0,
            radius: 8.0
        }
    );
    assert_eq!(
        path[4],
        PathCommand::ArcTo {
            x1: 10.0,
            y1: 20.0,
            x2: 110.0,
            y2: 20.0,
            radius: 8.0
        }
    );
    assert_eq!(path[5], PathCommand::Close);
}

#[test]
fn rounded_rect_radius_is_clamped_to_half_size() {
    assert_eq!(RoundedRect::new(0.0, 0.0, 10.0, 40.0, 8.0).effective_radius(), 5.0);
    assert_eq!(RoundedRect::new(0.0, 0.0, 40.0, 6.0, 8.0).effective_radius(), 3.0);
    assert_eq!(RoundedRect::new(0.0, 0.0, 4.0, 6.0, 8.0).effective_radius(), 2.0);
}

#[test]
fn blank_surface_detection() {
    assert!(is_pixel_buffer_blank(&[]));
    assert!(is_pixel_buffer_blank(&[0, 0, 0]));
    assert!(!is_pixel_buffer_blank(&[0, 0xff00_0000, 0]));
    assert!(is_rgba_buffer_blank(&[0; 16]));
    assert!(!is_rgba_buffer_blank(&[0, 0, 0, 1]));
}
