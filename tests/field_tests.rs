// Host-side tests for the backdrop field simulation.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scan_core;

use scan_core::{FieldParams, FieldState};

fn make_field(width: f32) -> FieldState {
    FieldState::new(FieldParams::default(), width, 9)
}

#[test]
fn seeds_fixed_pool() {
    let f = make_field(1000.0);
    assert_eq!(f.points().len(), 400);
    for p in f.points() {
        assert!((0.2..=1.0).contains(&p.alpha));
        assert!((30.0..=90.0).contains(&p.speed));
        assert!(p.pos.y.abs() <= 325.0);
        assert!(p.size > 0.0);
    }
}

#[test]
fn points_never_linger_past_right_edge() {
    let mut f = make_field(1000.0);
    let right = 500.0 + 100.0;
    for _ in 0..600 {
        f.step(1.0 / 60.0);
        assert!(f.points().iter().all(|p| p.pos.x <= right));
    }
    assert_eq!(f.points().len(), 400);
}

#[test]
fn twinkle_keeps_alpha_in_unit_range() {
    let mut f = make_field(1000.0);
    for _ in 0..2000 {
        f.step(1.0 / 60.0);
    }
    assert!(f.points().iter().all(|p| (0.0..=1.0).contains(&p.alpha)));
}

#[test]
fn resize_only_changes_projection() {
    let mut f = make_field(1000.0);
    let before: Vec<_> = f.points().iter().map(|p| p.pos).collect();
    f.resize(1600.0);
    let after: Vec<_> = f.points().iter().map(|p| p.pos).collect();
    assert_eq!(before, after);
    assert_eq!(f.half_extent().x, 800.0);
    assert_eq!(f.half_extent().y, 325.0);
}

#[test]
fn release_clears_pool() {
    let mut f = make_field(1000.0);
    f.release();
    f.release();
    assert!(f.points().is_empty());
    f.step(0.016);
    assert!(f.points().is_empty());
}
