use shader_view::{Smoothed, ViewConfig, ViewState};

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn starts_at_rest_with_stock_view() {
    let view = ViewState::default();
    assert_eq!(view.zoom(), 1.0);
    assert_eq!(view.target_zoom(), 1.0);
    assert_eq!(view.pan(), (0.5, 0.9));
    assert_eq!(view.target_pan(), (0.5, 0.9));
    assert!(view.is_settled(0.0));
}

#[test]
fn one_step_toward_zoom_target() {
    let mut view = ViewState::default();
    view.set_target_zoom(2.0);
    view.advance();
    assert!(close(view.zoom(), 1.15, 1e-12), "zoom={}", view.zoom());
    // pan had no new target
    assert_eq!(view.pan(), (0.5, 0.9));
}

#[test]
fn pan_eases_slower_than_zoom() {
    let mut view = ViewState::default();
    view.set_target_zoom(2.0);
    view.set_target_pan(1.5, 1.9);
    view.advance();
    let (x, y) = view.pan();
    assert!(close(x, 0.6, 1e-12));
    assert!(close(y, 1.0, 1e-12));
    assert!(view.zoom() - 1.0 > x - 0.5);
}

#[test]
fn advance_at_rest_is_a_fixed_point() {
    let mut view = ViewState::default();
    for _ in 0..10 {
        view.advance();
    }
    assert_eq!(view.zoom(), 1.0);
    assert_eq!(view.pan(), (0.5, 0.9));
}

#[test]
fn converges_monotonically_without_overshoot() {
    for &(start, target) in &[(1.0, 2.0), (3.0, 0.25), (-4.0, 7.5), (0.5, -0.5)] {
        let mut s = Smoothed::new(start, 0.10);
        s.set_target(target);
        let mut prev = s.current();
        for _ in 0..200 {
            s.advance();
            let cur = s.current();
            if prev != target {
                let (lo, hi) = if prev < target { (prev, target) } else { (target, prev) };
                assert!(cur > lo && cur < hi || cur == target, "{prev} -> {cur} toward {target}");
                assert!((target - cur).abs() < (target - prev).abs());
            }
            prev = cur;
        }
    }
}

#[test]
fn hundred_steps_reach_zoom_target() {
    let mut view = ViewState::default();
    view.set_target_zoom(2.0);
    for _ in 0..100 {
        view.advance();
    }
    assert!(close(view.zoom(), 2.0, 1e-6), "zoom={}", view.zoom());
}

#[test]
fn pan_decays_geometrically() {
    let mut view = ViewState::default();
    view.set_target_pan(0.51, 0.89);
    for _ in 0..100 {
        view.advance();
    }
    let (x, y) = view.pan();
    let bound = 0.01 * 0.9f64.powi(100) + 1e-12;
    assert!((x - 0.51).abs() <= bound);
    assert!((y - 0.89).abs() <= bound);
    assert!(close(x, 0.51, 1e-6) && close(y, 0.89, 1e-6));
}

#[test]
fn invalid_zoom_targets_are_ignored() {
    let mut view = ViewState::default();
    view.set_target_zoom(3.0);
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        view.set_target_zoom(bad);
        assert_eq!(view.target_zoom(), 3.0);
    }
}

#[test]
fn zoom_and_pan_are_not_clamped() {
    let mut view = ViewState::default();
    view.set_target_zoom(1e-9);
    view.set_target_pan(-1e6, 1e6);
    assert_eq!(view.target_zoom(), 1e-9);
    assert_eq!(view.target_pan(), (-1e6, 1e6));
}

#[test]
fn rates_come_from_config() {
    let config = ViewConfig {
        zoom_rate: 0.5,
        pan_rate: 1.0,
        initial_zoom: 2.0,
        initial_pan: (0.0, 0.0),
        ..ViewConfig::default()
    };
    let mut view = ViewState::new(&config);
    view.set_target_zoom(4.0);
    view.set_target_pan(1.0, -1.0);
    view.advance();
    assert_eq!(view.zoom(), 3.0);
    assert_eq!(view.pan(), (1.0, -1.0));
}
