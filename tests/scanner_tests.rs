// Host-side tests for the scanner's regime blend and particle pool.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scan_core;

use scan_core::{PassKind, ScannerParams, ScannerState};

fn make_scanner() -> ScannerState {
    ScannerState::new(ScannerParams::default(), 1200.0, 42)
}

#[test]
fn starts_idle_with_full_pool() {
    let s = make_scanner();
    assert!(!s.is_active());
    assert_eq!(s.ceiling(), 800);
    assert_eq!(s.particles().len(), 800);
    assert_eq!(s.regime_progress(), 0.0);
}

#[test]
fn blend_converges_within_ninety_steps_without_overshoot() {
    let mut s = make_scanner();
    s.set_active(true);
    let start = s.current().intensity;
    let target = s.target().intensity;
    for _ in 0..90 {
        s.step();
        assert!(s.current().intensity <= target);
        assert!(s.current().glow <= s.target().glow);
    }
    let gap = (target - s.current().intensity).abs();
    assert!(gap <= 0.01 * (target - start), "gap {gap}");

    s.set_active(false);
    for _ in 0..90 {
        s.step();
        assert!(s.current().intensity >= s.target().intensity);
    }
}

#[test]
fn set_active_is_idempotent() {
    let mut a = make_scanner();
    let mut b = make_scanner();
    a.set_active(true);
    b.set_active(true);
    b.set_active(true);
    a.step();
    b.step();
    assert_eq!(a.current(), b.current());
}

#[test]
fn pool_never_outgrows_rising_ceiling() {
    let mut s = make_scanner();
    s.set_active(true);
    for _ in 0..600 {
        s.step();
        assert!(s.particles().len() <= s.ceiling());
    }
    assert!(s.particles().len() > 800);
}

fn run_active_then_idle(frames: usize) -> ScannerState {
    let mut s = make_scanner();
    s.set_active(true);
    for _ in 0..frames {
        s.step();
    }
    s.set_active(false);
    s
}

#[test]
fn pool_never_grows_while_above_ceiling() {
    let mut s = run_active_then_idle(600);
    for _ in 0..1500 {
        let before = s.particles().len();
        let over = before > s.ceiling();
        s.step();
        if over {
            assert!(s.particles().len() <= before);
        }
    }
}

#[test]
fn pool_settles_back_under_idle_ceiling() {
    let mut s = run_active_then_idle(600);
    let mut worst_excess = 0;
    for _ in 0..1500 {
        s.step();
        worst_excess = worst_excess.max(s.particles().len().saturating_sub(s.ceiling()));
    }
    assert!(worst_excess > 0);
    assert!(s.particles().len() <= s.ceiling());
}

#[test]
fn huge_trim_slack_does_not_overflow() {
    let params = ScannerParams {
        trim_slack: usize::MAX,
        ..ScannerParams::default()
    };
    let mut s = ScannerState::new(params, 1200.0, 5);
    s.set_active(true);
    for _ in 0..50 {
        s.step();
    }
    assert!(s.particles().len() <= s.ceiling());
}

#[test]
fn particles_stay_alive_and_in_range() {
    let mut s = make_scanner();
    for _ in 0..300 {
        s.step();
    }
    for p in s.particles() {
        assert!(p.life > 0.0);
        assert!(p.pos.x <= s.width() + 10.0);
        assert!(p.decay >= 0.001);
        let a = p.draw_alpha(s.current().fade_zone, s.height());
        assert!((0.0..=1.0).contains(&a));
    }
}

#[test]
fn emission_off_empties_pool() {
    let mut s = make_scanner();
    s.set_emission(false);
    s.set_active(true);
    for _ in 0..50 {
        s.step();
    }
    assert!(s.particles().is_empty());
    assert!(s.light_bar().height > 0.0);
}

#[test]
fn widest_halo_only_while_active() {
    let mut s = make_scanner();
    let idle = s.light_bar();
    assert_eq!(idle.passes.len(), 3);
    assert_eq!(idle.passes[0].kind, PassKind::Core);
    assert!((idle.height - 520.0).abs() < 1e-3);
    assert!((idle.top - 90.0).abs() < 1e-3);

    s.set_active(true);
    let active = s.light_bar();
    assert_eq!(active.passes.len(), 4);
    assert_eq!(active.passes[3].half_width, 24.0);
    assert!(active.passes.iter().skip(1).all(|p| p.kind == PassKind::Halo));
}

#[test]
fn bar_grows_toward_card_height_when_active() {
    let mut s = make_scanner();
    s.set_active(true);
    for _ in 0..200 {
        s.step();
    }
    let bar = s.light_bar();
    assert!((bar.height - 650.0).abs() < 0.1);
    assert!(bar.fade_top < 0.02);
    assert!(bar.fade_bottom > 0.98);
    assert!(s.regime_progress() > 0.99);
}

#[test]
fn resize_recentres_bar() {
    let mut s = make_scanner();
    s.resize(800.0);
    assert_eq!(s.light_bar().x, 400.0);
}

#[test]
fn release_twice_is_harmless() {
    let mut s = make_scanner();
    s.release();
    s.release();
    assert!(s.particles().is_empty());
    s.step();
    assert!(s.particles().is_empty());
}
