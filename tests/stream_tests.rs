// Host-side tests for the kinetic strip state.
// The main crate is wasm-only, so we pull the pure core tree in by path.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scan_core;

use rand::prelude::*;
use scan_core::{StreamParams, StreamState};

fn make_stream(content: f32, viewport: f32) -> StreamState {
    let mut s = StreamState::new(StreamParams::default());
    s.set_extent(content, viewport);
    s
}

fn in_bounds(s: &StreamState) -> bool {
    s.position >= -s.content_width() && s.position <= s.viewport_width()
}

#[test]
fn starts_drifting_left_at_default_speed() {
    let s = make_stream(15_300.0, 1200.0);
    assert_eq!(s.position, 0.0);
    assert_eq!(s.velocity, 120.0);
    assert_eq!(s.direction, -1.0);
    assert!(s.autoplay);
    assert!(!s.dragging);
}

#[test]
fn wrap_holds_after_random_steps_and_wheel() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = make_stream(3000.0, 800.0);
    for _ in 0..5000 {
        match rng.gen_range(0..3) {
            0 => {
                s.step(rng.gen_range(0.0..0.2));
            }
            1 => {
                s.wheel(rng.gen_range(-200.0..200.0));
            }
            _ => {
                s.direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                s.step(0.05);
            }
        }
        assert!(in_bounds(&s), "position {} escaped", s.position);
    }
}

#[test]
fn left_edge_wraps_to_viewport() {
    let mut s = make_stream(1000.0, 500.0);
    s.position = -999.0;
    s.velocity = 200.0;
    s.params.min_velocity = 200.0;
    s.step(0.1);
    assert_eq!(s.position, 500.0);
}

#[test]
fn right_edge_wraps_to_negative_content() {
    let mut s = make_stream(1000.0, 500.0);
    s.direction = 1.0;
    s.position = 499.0;
    s.step(0.1);
    assert_eq!(s.position, -1000.0);
}

#[test]
fn friction_is_monotonic_and_floored() {
    let mut s = make_stream(10_000.0, 1000.0);
    s.velocity = 900.0;
    let mut prev = s.velocity;
    for _ in 0..200 {
        s.step(1.0 / 60.0);
        assert!(s.velocity <= prev);
        assert!(s.velocity >= s.params.min_velocity);
        prev = s.velocity;
    }
    assert_eq!(s.velocity, s.params.min_velocity);
}

#[test]
fn large_frame_gap_is_clamped() {
    let mut s = make_stream(100_000.0, 1000.0);
    s.velocity = 30.0;
    s.step(5.0);
    // 30 px/s for at most 0.1 s
    assert!((s.position + 3.0).abs() < 1e-3, "moved to {}", s.position);
}

#[test]
fn no_step_while_dragging() {
    let mut s = make_stream(5000.0, 1000.0);
    s.begin_drag(100.0, None);
    assert!(!s.step(0.016));
    assert!(!s.autoplay);
    assert_eq!(s.position, 0.0);
}

#[test]
fn drag_follows_pointer_exactly() {
    let mut s = make_stream(5000.0, 1000.0);
    s.begin_drag(300.0, None);
    let mut x = 300.0;
    for delta in [5.0, -12.0, 40.0, 0.5] {
        let before = s.position;
        x += delta;
        assert!(s.drag_to(x));
        assert!((s.position - before - delta).abs() < 1e-4);
    }
    assert!((s.pointer_velocity() - 0.5 * 60.0).abs() < 1e-4);
}

#[test]
fn grabbing_uses_rendered_offset() {
    let mut s = make_stream(5000.0, 1000.0);
    s.position = -42.0;
    s.begin_drag(10.0, Some(-40.5));
    assert_eq!(s.position, -40.5);
    s.begin_drag(10.0, Some(f32::NAN));
    assert_eq!(s.position, -40.5);
}

#[test]
fn fast_release_seeds_velocity_and_direction() {
    let mut s = make_stream(5000.0, 1000.0);
    s.begin_drag(100.0, None);
    s.drag_to(110.0);
    assert!(s.end_drag());
    assert_eq!(s.velocity, 600.0);
    assert_eq!(s.direction, 1.0);
    assert!(s.autoplay);
    assert!(!s.dragging);
}

#[test]
fn slow_release_falls_back_to_default_speed() {
    let mut s = make_stream(5000.0, 1000.0);
    s.direction = 1.0;
    s.begin_drag(100.0, None);
    s.drag_to(100.25);
    assert!(s.end_drag());
    assert_eq!(s.velocity, 120.0);
    assert_eq!(s.direction, 1.0);
}

#[test]
fn release_without_drag_is_ignored() {
    let mut s = make_stream(5000.0, 1000.0);
    assert!(!s.end_drag());
    assert!(!s.drag_to(50.0));
    assert_eq!(s.velocity, 120.0);
}

#[test]
fn wheel_down_moves_left() {
    let mut s = make_stream(5000.0, 1000.0);
    assert!(s.wheel(120.0));
    assert_eq!(s.position, -20.0);
    assert!(s.wheel(-3.0));
    assert_eq!(s.position, 0.0);
    assert!(!s.wheel(0.0));
    assert_eq!(s.position, 0.0);
}

#[test]
fn reduced_motion_keeps_autoplay_off_after_release() {
    let mut s = make_stream(5000.0, 1000.0);
    s.set_autoplay_allowed(false);
    assert!(!s.step(0.016));
    s.begin_drag(0.0, None);
    s.drag_to(20.0);
    s.end_drag();
    assert!(!s.autoplay);
    assert!(s.wheel(1.0));
}

#[test]
fn resize_keeps_position() {
    let mut s = make_stream(5000.0, 1000.0);
    s.position = -1234.0;
    s.set_extent(6000.0, 400.0);
    assert_eq!(s.position, -1234.0);
    assert_eq!(s.viewport_width(), 400.0);
}
