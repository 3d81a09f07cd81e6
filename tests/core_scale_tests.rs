use approx::assert_relative_eq;
use scatter_marginals::core::{LinearScale, PLACEHOLDER_DOMAIN, nice_domain, ticks};

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (100.0, 600.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.to_pixel(original).expect("to pixel");
    let recovered = scale.to_domain(px).expect("from pixel");

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn inverted_range_maps_maximum_to_top() {
    let scale = LinearScale::new((0.0, 2.0), (620.0, 120.0)).expect("valid scale");

    assert_eq!(scale.to_pixel(2.0).expect("top"), 120.0);
    assert_eq!(scale.to_pixel(0.0).expect("bottom"), 620.0);
    assert_eq!(scale.to_pixel(1.0).expect("middle"), 370.0);
}

#[test]
fn zero_width_domain_is_rejected() {
    assert!(LinearScale::new((3.0, 3.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((f64::NAN, 3.0), (0.0, 100.0)).is_err());
}

#[test]
fn non_finite_value_is_rejected() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    assert!(scale.to_pixel(f64::INFINITY).is_err());
}

#[test]
fn extent_scale_is_rounded_outward() {
    let scale = LinearScale::from_extent([1.13, 2.87, 1.9], (0.0, 500.0), 10).expect("fit");
    let (lo, hi) = scale.domain();
    assert_relative_eq!(lo, 1.0, epsilon = 1e-12);
    assert_relative_eq!(hi, 3.0, epsilon = 1e-12);
}

#[test]
fn empty_input_uses_placeholder_domain() {
    let scale = LinearScale::from_extent(std::iter::empty(), (0.0, 500.0), 10).expect("fit");
    assert_eq!(scale.domain(), PLACEHOLDER_DOMAIN);
    assert_eq!(scale.to_pixel(0.5).expect("middle"), 250.0);
}

#[test]
fn single_value_input_is_widened() {
    let scale = LinearScale::from_extent([4.2, 4.2], (0.0, 100.0), 10).expect("fit");
    let (lo, hi) = scale.domain();
    assert!(lo < 4.2 && hi > 4.2);
    assert!(scale.to_pixel(4.2).expect("pixel").is_finite());
}

#[test]
fn non_finite_values_do_not_affect_extent() {
    let scale =
        LinearScale::from_extent([f64::NAN, 2.0, f64::INFINITY, 8.0], (0.0, 100.0), 10).expect("fit");
    assert_eq!(scale.domain(), (2.0, 8.0));
}

#[test]
fn nice_domain_expands_negative_ranges() {
    assert_eq!(nice_domain(-7.3, 12.1, 10), (-8.0, 14.0));
}

#[test]
fn scale_ticks_stay_inside_domain() {
    let scale = LinearScale::new((0.0, 3.0), (0.0, 500.0)).expect("valid scale");
    let values = scale.ticks(5);
    assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
    assert!(values.iter().all(|value| scale.contains(*value)));
}

#[test]
fn ticks_of_degenerate_interval_collapse_to_single_value() {
    assert_eq!(ticks(5.0, 5.0, 5), vec![5.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
}

#[test]
fn single_value_beyond_half_unit_precision_is_widened() {
    for value in [1e16, -3.5e17, 9.007_199_254_740_993e15, f64::MAX, -f64::MAX] {
        let scale = LinearScale::from_extent([value, value], (0.0, 500.0), 10).expect("fit");
        let (lo, hi) = scale.domain();
        assert!(lo < hi, "empty domain for {value}");
        assert!(lo <= value && value <= hi, "{value} outside [{lo}, {hi}]");
        let px = scale.to_pixel(value).expect("pixel");
        assert!((0.0..=500.0).contains(&px));
    }
}

#[test]
fn extent_spanning_the_f64_range_maps_to_finite_pixels() {
    let scale = LinearScale::from_extent([-1e308, 1e308], (0.0, 500.0), 10).expect("fit");
    assert_eq!(scale.domain(), (-1e308, 1e308));
    assert_eq!(scale.to_pixel(1e308).expect("max"), 500.0);
    assert_eq!(scale.to_pixel(0.0).expect("zero"), 250.0);
    assert_eq!(scale.to_domain(250.0).expect("inverse"), 0.0);
    assert!(scale.ticks(5).iter().all(|tick| tick.is_finite()));
}
