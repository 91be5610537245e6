// Host-side tests for the progress spring and cursor transitions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod ease {
        include!("../src/core/ease.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
}

use folio::constants::*;
use folio::ease::*;
use folio::spring::*;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn default_config_matches_constants() {
    let cfg = SpringConfig::default();
    assert_eq!(cfg.stiffness, SPRING_STIFFNESS);
    assert_eq!(cfg.damping, SPRING_DAMPING);
    assert_eq!(cfg.rest_delta, SPRING_REST_DELTA);
}

#[test]
fn spring_starts_at_rest() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    assert!(s.is_at_rest());
    assert_eq!(s.step(FRAME), 0.0);
}

#[test]
fn spring_lags_then_settles_exactly_on_target() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    s.set_target(1.0);
    let first = s.step(FRAME);
    assert!(first > 0.0 && first < 0.5, "first step {}", first);

    let mut frames = 0;
    while !s.is_at_rest() && frames < 600 {
        let v = s.step(FRAME);
        assert!(v <= 1.0 + 1e-6, "overshoot {}", v);
        frames += 1;
    }
    assert!(frames < 600, "spring never came to rest");
    assert_eq!(s.step(FRAME), 1.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn spring_is_stable_across_long_frame_gaps() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    s.set_target(1.0);
    for _ in 0..100 {
        let v = s.step(5.0);
        assert!(v.is_finite());
        assert!((0.0..=1.0 + 1e-6).contains(&v));
    }
    assert_eq!(s.value(), 1.0);
}

#[test]
fn spring_follows_a_moving_target() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    s.set_target(1.0);
    for _ in 0..10 {
        s.step(FRAME);
    }
    s.set_target(0.25);
    for _ in 0..600 {
        s.step(FRAME);
    }
    assert_eq!(s.value(), 0.25);
    assert_eq!(s.target(), 0.25);
}

#[test]
fn spring_ignores_non_finite_targets() {
    let mut s = Spring::new(SpringConfig::default(), 0.3);
    s.set_target(f32::NAN);
    assert_eq!(s.target(), 0.3);
}

#[test]
fn ease_endpoints_are_stable() {
    for ease in [Ease::Linear, Ease::OutCubic] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-1.0), 0.0);
        assert_eq!(ease.apply(2.0), 1.0);
    }
    assert!(Ease::OutCubic.apply(0.5) > Ease::Linear.apply(0.5));
}

#[test]
fn tween_runs_to_target_over_its_duration() {
    let mut t = Tween::settled(1.0, CURSOR_SCALE_SEC, Ease::OutCubic);
    assert!(t.is_done());
    t.retarget(CURSOR_HOVER_SCALE);
    assert!(!t.is_done());
    assert_eq!(t.value(), 1.0);

    let mid = t.advance(CURSOR_SCALE_SEC / 2.0);
    assert!(mid > 1.0 && mid < CURSOR_HOVER_SCALE);

    assert_eq!(t.advance(CURSOR_SCALE_SEC), CURSOR_HOVER_SCALE);
    assert!(t.is_done());
}

#[test]
fn tween_retarget_mid_flight_is_continuous() {
    let mut t = Tween::settled(0.0, 1.0, Ease::Linear);
    t.retarget(1.0);
    let at = t.advance(0.4);
    t.retarget(0.0);
    assert!((t.value() - at).abs() < 1e-6);
    assert_eq!(t.target(), 0.0);
    assert_eq!(t.advance(1.0), 0.0);
}

#[test]
fn tween_snap_skips_transition() {
    let mut t = Tween::settled(0.0, PREVIEW_FADE_SEC, Ease::Linear);
    t.retarget(1.0);
    t.snap(0.0);
    assert!(t.is_done());
    assert_eq!(t.value(), 0.0);
}

#[test]
fn fade_in_starts_hidden_and_runs_linearly() {
    let mut t = Tween::fade_in(PLACEHOLDER_FADE_SEC);
    assert_eq!(t.value(), 0.0);
    assert!(!t.is_done());
    assert!((t.advance(PLACEHOLDER_FADE_SEC / 2.0) - 0.5).abs() < 1e-6);
    assert_eq!(t.advance(PLACEHOLDER_FADE_SEC), 1.0);
    assert!(t.is_done());
}
