//! Tween and easing tests
//!
//! The lid animation contract: sampled by elapsed time, monotonic toward
//! the terminal value, pinned there forever after the duration.

use ringbox::{Easing, Tween};
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Easing curves
// ============================================================================

#[test]
fn easing_endpoints() {
    let curves = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicInOut,
        Easing::SineInOut,
    ];

    for curve in curves {
        assert!(approx_eq(curve.apply(0.0), 0.0), "{curve:?} at 0");
        assert!(approx_eq(curve.apply(1.0), 1.0), "{curve:?} at 1");
    }
}

#[test]
fn easing_clamps_out_of_range_input() {
    assert!(approx_eq(Easing::QuadraticInOut.apply(-1.0), 0.0));
    assert!(approx_eq(Easing::QuadraticInOut.apply(2.0), 1.0));
}

#[test]
fn easing_quadratic_in_out_midpoint_and_symmetry() {
    let curve = Easing::QuadraticInOut;
    assert!(approx_eq(curve.apply(0.5), 0.5));

    // f(t) + f(1-t) == 1 for a symmetric in-out curve
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!(
            (curve.apply(t) + curve.apply(1.0 - t) - 1.0).abs() < 1e-5,
            "symmetry broken at t={t}"
        );
    }
}

#[test]
fn easing_curves_are_monotonic() {
    let curves = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicInOut,
        Easing::SineInOut,
    ];

    for curve in curves {
        let mut prev = curve.apply(0.0);
        for i in 1..=100 {
            let next = curve.apply(i as f32 / 100.0);
            assert!(next >= prev - EPSILON, "{curve:?} not monotonic at step {i}");
            prev = next;
        }
    }
}

// ============================================================================
// Tween
// ============================================================================

#[test]
fn tween_starts_at_from_value() {
    let tween = Tween::new(0.0_f32, -FRAC_PI_2, 3.0).with_easing(Easing::QuadraticInOut);
    assert!(approx_eq(tween.sample(0.0), 0.0));
}

#[test]
fn tween_terminal_value_is_exact_and_stable() {
    let tween = Tween::new(0.0_f32, -FRAC_PI_2, 3.0).with_easing(Easing::QuadraticInOut);

    assert!(approx_eq(tween.sample(3.0), -FRAC_PI_2));
    // Later samples never move off the terminal value
    for elapsed in [3.001, 4.0, 10.0, 1000.0] {
        assert!(approx_eq(tween.sample(elapsed), -FRAC_PI_2), "at {elapsed}");
    }
    assert!(tween.finished(3.0));
    assert!(!tween.finished(2.999));
}

#[test]
fn tween_is_monotonic_toward_target() {
    // Sampled at increasing offsets, the lid rotation only ever decreases
    // from 0 toward -PI/2
    let tween = Tween::new(0.0_f32, -FRAC_PI_2, 3.0).with_easing(Easing::QuadraticInOut);

    let mut prev = tween.sample(0.0);
    for i in 1..=300 {
        let value = tween.sample(i as f32 * 0.01);
        assert!(value <= prev + EPSILON, "increased at step {i}");
        assert!((-FRAC_PI_2..=0.0).contains(&value));
        prev = value;
    }
}

#[test]
fn tween_resampling_same_time_is_stable() {
    let tween = Tween::new(0.0_f32, -FRAC_PI_2, 3.0).with_easing(Easing::QuadraticInOut);
    let a = tween.sample(1.25);
    let b = tween.sample(1.25);
    assert!(approx_eq(a, b));
}

#[test]
fn tween_with_delay_waits_at_start() {
    let tween = Tween::new(1.0_f32, 2.0, 2.0).with_delay(1.0);

    assert!(approx_eq(tween.sample(0.0), 1.0));
    assert!(approx_eq(tween.sample(1.0), 1.0));
    assert!(approx_eq(tween.sample(2.0), 1.5));
    assert!(approx_eq(tween.sample(3.0), 2.0));
    assert!(tween.finished(3.0));
}

#[test]
fn tween_zero_duration_snaps_to_end() {
    let tween = Tween::new(0.0_f32, 5.0, 0.0);
    assert!(approx_eq(tween.sample(0.0), 5.0));
    assert!(tween.finished(0.0));
}

#[test]
fn tween_interpolates_vectors() {
    let tween = Tween::new(glam::Vec3::ZERO, glam::Vec3::new(2.0, 4.0, 6.0), 2.0);
    let mid = tween.sample(1.0);
    assert!((mid - glam::Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
}
