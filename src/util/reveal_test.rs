use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// RootMargin
// =============================================================

#[test]
fn default_margin_matches_configured_shorthand() {
    let parsed: RootMargin = crate::consts::REVEAL_ROOT_MARGIN.parse().unwrap();
    assert_eq!(parsed, RootMargin::default());
}

#[test]
fn margin_single_value_applies_to_all_sides() {
    let margin: RootMargin = "10px".parse().unwrap();
    assert_eq!(margin.top, MarginLength::Px(10.0));
    assert_eq!(margin.right, MarginLength::Px(10.0));
    assert_eq!(margin.bottom, MarginLength::Px(10.0));
    assert_eq!(margin.left, MarginLength::Px(10.0));
}

#[test]
fn margin_two_and_three_values_follow_css_shorthand() {
    let two: RootMargin = "5px 10%".parse().unwrap();
    assert_eq!(two.top, MarginLength::Px(5.0));
    assert_eq!(two.bottom, MarginLength::Px(5.0));
    assert_eq!(two.left, MarginLength::Percent(10.0));
    assert_eq!(two.right, MarginLength::Percent(10.0));

    let three: RootMargin = "1px 2px 3px".parse().unwrap();
    assert_eq!(three.top, MarginLength::Px(1.0));
    assert_eq!(three.right, MarginLength::Px(2.0));
    assert_eq!(three.bottom, MarginLength::Px(3.0));
    assert_eq!(three.left, MarginLength::Px(2.0));
}

#[test]
fn margin_accepts_bare_zero() {
    let margin: RootMargin = "0 0 -20px 0".parse().unwrap();
    assert_eq!(margin.top, MarginLength::Px(0.0));
    assert_eq!(margin.bottom, MarginLength::Px(-20.0));
}

#[test]
fn margin_rejects_bad_input() {
    assert_eq!("".parse::<RootMargin>(), Err(RootMarginError::Empty));
    assert_eq!("1px 2px 3px 4px 5px".parse::<RootMargin>(), Err(RootMarginError::TooManyValues(5)));
    assert_eq!("12em".parse::<RootMargin>(), Err(RootMarginError::InvalidLength("12em".to_owned())));
    assert_eq!("7".parse::<RootMargin>(), Err(RootMarginError::InvalidLength("7".to_owned())));
}

#[test]
fn margin_display_round_trips_for_observer_init() {
    assert_eq!(RootMargin::default().to_string(), "0px 0px -50px 0px");
    let margin: RootMargin = "10% 0px".parse().unwrap();
    assert_eq!(margin.to_string(), "10% 0px 10% 0px");
}

#[test]
fn margin_expand_resolves_percentages_per_axis() {
    let margin: RootMargin = "10% 5%".parse().unwrap();
    let root = Rect::new(0.0, 0.0, 200.0, 100.0);
    let expanded = margin.expand(root);
    assert!(approx(expanded.top, -10.0));
    assert!(approx(expanded.bottom, 110.0));
    assert!(approx(expanded.left, -10.0));
    assert!(approx(expanded.right, 210.0));
}

#[test]
fn default_margin_shrinks_viewport_bottom() {
    let expanded = RootMargin::default().expand(Rect::new(0.0, 0.0, 400.0, 800.0));
    assert!(approx(expanded.bottom, 750.0));
    assert!(approx(expanded.top, 0.0));
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn visible_fraction_of_partially_visible_box() {
    let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
    let element = Rect::new(0.0, 80.0, 100.0, 40.0);
    assert!(approx(element.visible_fraction(&viewport), 0.5));
}

#[test]
fn visible_fraction_outside_is_zero() {
    let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
    let element = Rect::new(0.0, 200.0, 100.0, 40.0);
    assert!(approx(element.visible_fraction(&viewport), 0.0));
    assert!(element.intersection(&viewport).is_none());
}

#[test]
fn edge_adjacent_boxes_intersect_with_zero_area() {
    let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
    let element = Rect::new(0.0, 100.0, 100.0, 40.0);
    let overlap = element.intersection(&viewport).unwrap();
    assert!(approx(overlap.area(), 0.0));
    assert!(approx(element.visible_fraction(&viewport), 0.0));
}

#[test]
fn sample_from_geometry_uses_margin() {
    let viewport = Rect::new(0.0, 0.0, 400.0, 800.0);
    // Top 40px of a 100px card peeks above the fold, but the -50px margin hides it.
    let element = Rect::new(0.0, 760.0, 400.0, 100.0);
    let sample = IntersectionSample::from_geometry(element, viewport, &RootMargin::default());
    assert!(!sample.is_intersecting);
    assert!(!sample.meets(0.1));

    let element = Rect::new(0.0, 700.0, 400.0, 100.0);
    let sample = IntersectionSample::from_geometry(element, viewport, &RootMargin::default());
    assert!(sample.is_intersecting);
    assert!(approx(sample.ratio, 0.5));
    assert!(sample.meets(0.1));
}

#[test]
fn zero_threshold_accepts_any_intersection() {
    let touching = IntersectionSample { is_intersecting: true, ratio: 0.0 };
    assert!(touching.meets(0.0));
    assert!(!touching.meets(0.1));
    let outside = IntersectionSample { is_intersecting: false, ratio: 0.0 };
    assert!(!outside.meets(0.0));
}

#[test]
fn below_threshold_while_intersecting_does_not_meet() {
    let sliver = IntersectionSample { is_intersecting: true, ratio: 0.05 };
    assert!(!sliver.meets(0.1));
    let enough = IntersectionSample { is_intersecting: true, ratio: 0.1 };
    assert!(enough.meets(0.1));
}

// =============================================================
// Options
// =============================================================

#[test]
fn options_defaults() {
    let options = RevealOptions::default();
    assert!(approx(options.threshold, 0.1));
    assert_eq!(options.root_margin, RootMargin::default());
    assert!(options.trigger_once);
}

#[test]
fn options_builders() {
    let options = RevealOptions::default()
        .with_threshold(1.5)
        .with_root_margin("20px")
        .restartable();
    assert!(approx(options.threshold, 1.0));
    assert_eq!(options.root_margin.top, MarginLength::Px(20.0));
    assert!(!options.trigger_once);
}

#[test]
fn options_keep_margin_on_invalid_input() {
    let options = RevealOptions::default().with_root_margin("lots");
    assert_eq!(options.root_margin, RootMargin::default());
}

// =============================================================
// RevealTracker
// =============================================================

#[test]
fn trigger_once_latches_and_unobserves() {
    let mut tracker = RevealTracker::new(true);
    assert_eq!(tracker.observe(false), RevealUpdate::default());
    assert_eq!(tracker.observe(true), RevealUpdate { visible: Some(true), unobserve: true });
    assert!(tracker.is_visible());
    assert!(tracker.is_detached());

    // Leaving the viewport never reverts a latched reveal.
    assert_eq!(tracker.observe(false), RevealUpdate::default());
    assert!(tracker.is_visible());
}

#[test]
fn restartable_toggles_with_viewport() {
    let mut tracker = RevealTracker::new(false);
    assert_eq!(tracker.observe(true), RevealUpdate { visible: Some(true), unobserve: false });
    assert_eq!(tracker.observe(true), RevealUpdate::default());
    assert_eq!(tracker.observe(false), RevealUpdate { visible: Some(false), unobserve: false });
    assert!(!tracker.is_visible());
    assert_eq!(tracker.observe(false), RevealUpdate::default());
    assert_eq!(tracker.observe(true).visible, Some(true));
}

#[test]
fn detached_tracker_ignores_readings() {
    let mut tracker = RevealTracker::new(false);
    tracker.detach();
    assert_eq!(tracker.observe(true), RevealUpdate::default());
    assert!(!tracker.is_visible());
}

#[test]
fn detach_after_reveal_freezes_state() {
    let mut tracker = RevealTracker::new(false);
    tracker.observe(true);
    tracker.detach();
    assert_eq!(tracker.observe(false), RevealUpdate::default());
    assert!(tracker.is_visible());
}
