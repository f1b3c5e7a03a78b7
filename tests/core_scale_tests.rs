use bubblechart_rs::core::{LinearScale, SqrtScale, VerticalScale, nice_ticks, snap_value};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(0.0, 500.0, 700.0).expect("valid scale");

    let original = 231.5;
    let px = scale.to_pixel(original);
    let recovered = scale.invert(px);

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn linear_scale_maps_domain_ends_to_range_ends() {
    let scale = LinearScale::new(0.0, 50.0, 700.0).expect("valid scale");

    assert_eq!(scale.to_pixel(0.0), 0.0);
    assert_eq!(scale.to_pixel(50.0), 700.0);
    assert!((scale.to_pixel(25.0) - 350.0).abs() <= 1e-9);
}

#[test]
fn vertical_scale_uses_inverted_y_axis() {
    let scale = VerticalScale::new(0.0, 100.0, 370.0).expect("valid scale");

    assert_eq!(scale.to_pixel(100.0), 0.0);
    assert_eq!(scale.to_pixel(0.0), 370.0);
    assert!((scale.to_pixel(50.0) - 185.0).abs() <= 1e-9);
}

#[test]
fn vertical_scale_round_trip_within_tolerance() {
    let scale = VerticalScale::new(0.0, 400.0, 370.0).expect("valid scale");

    let original = 123.25;
    let px = scale.to_pixel(original);
    let recovered = scale.invert(px);

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn degenerate_domain_is_rejected() {
    assert!(LinearScale::new(5.0, 5.0, 700.0).is_err());
    assert!(VerticalScale::new(f64::NAN, 1.0, 370.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 0.0).is_err());
}

#[test]
fn sqrt_scale_maps_extent_to_radius_range() {
    let scale = SqrtScale::new(1.0, 9.0, 8.0, 30.0).expect("valid scale");

    assert!((scale.to_radius(1.0) - 8.0).abs() <= 1e-9);
    assert!((scale.to_radius(9.0) - 30.0).abs() <= 1e-9);

    // sqrt(4) is halfway between sqrt(1) and sqrt(9).
    assert!((scale.to_radius(4.0) - 19.0).abs() <= 1e-9);
}

#[test]
fn sqrt_scale_degenerate_domain_maps_to_mid_radius() {
    let scale = SqrtScale::new(5.0, 5.0, 8.0, 30.0).expect("valid scale");
    assert!((scale.to_radius(5.0) - 19.0).abs() <= 1e-9);
}

#[test]
fn sqrt_scale_clamps_out_of_domain_values() {
    let scale = SqrtScale::new(1.0, 9.0, 8.0, 30.0).expect("valid scale");
    assert!((scale.to_radius(0.5) - 8.0).abs() <= 1e-9);
    assert!((scale.to_radius(100.0) - 30.0).abs() <= 1e-9);
}

#[test]
fn nice_ticks_picks_round_steps() {
    let ticks = nice_ticks(0.0, 50.0, 10);
    assert_eq!(ticks.len(), 11);
    assert!((ticks[1] - 5.0).abs() <= 1e-9);

    let ticks = nice_ticks(0.0, 100.0, 10);
    assert_eq!(ticks.len(), 11);
    assert!((ticks[1] - 10.0).abs() <= 1e-9);

    let ticks = nice_ticks(0.0, 400.0, 10);
    assert_eq!(ticks.len(), 9);
    assert!((ticks[1] - 50.0).abs() <= 1e-9);
}

#[test]
fn nice_ticks_empty_for_degenerate_input() {
    assert!(nice_ticks(10.0, 10.0, 10).is_empty());
    assert!(nice_ticks(0.0, f64::NAN, 10).is_empty());
    assert!(nice_ticks(0.0, 100.0, 0).is_empty());
}

#[test]
fn snap_rounds_to_nearest_interval() {
    assert_eq!(snap_value(47.0, 10.0), 50.0);
    assert_eq!(snap_value(44.9, 10.0), 40.0);
    assert_eq!(snap_value(45.0, 10.0), 50.0);
    assert_eq!(snap_value(0.0, 10.0), 0.0);
    assert_eq!(snap_value(-12.0, 10.0), -10.0);
}

#[test]
fn snap_with_invalid_interval_is_identity() {
    assert_eq!(snap_value(47.3, 0.0), 47.3);
    assert_eq!(snap_value(47.3, f64::NAN), 47.3);
}
