// Host-side tests for scan-band clipping and the shared scan signal.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scan_core;

use rand::prelude::*;
use scan_core::card::populate;
use scan_core::clip::overlap;
use scan_core::{CardParams, CardStrip, MediaSource, Overlap, ScanBand, ScanSignal};

fn strip_of(n: usize, signal: ScanSignal) -> CardStrip {
    let params = CardParams {
        count: n,
        ..CardParams::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    let cards = populate(&[MediaSource::image("a.jpg")], &params, &mut rng);
    CardStrip::new(cards, params.gap, params.scan_band_width, signal)
}

#[test]
fn band_is_centered() {
    let band = ScanBand::centered(500.0, 8.0);
    assert_eq!(band, ScanBand { left: 496.0, right: 504.0 });
}

#[test]
fn overlap_classifies_cards() {
    let band = ScanBand::centered(500.0, 8.0);
    assert_eq!(overlap(0.0, 400.0, band), Overlap::Passed);
    assert_eq!(overlap(96.0, 400.0, band), Overlap::Passed);
    assert_eq!(overlap(504.0, 400.0, band), Overlap::Pending);
    assert!(matches!(overlap(97.0, 400.0, band), Overlap::Crossing { .. }));
    assert!(matches!(overlap(503.0, 400.0, band), Overlap::Crossing { .. }));
    assert_eq!(overlap(100.0, 0.0, band), Overlap::Unmeasured);
}

#[test]
fn crossing_clip_percentages() {
    let band = ScanBand::centered(500.0, 8.0);
    let ov = overlap(300.0, 400.0, band);
    let (normal, decoded) = ov.clip_percent().unwrap();
    assert!((normal - 49.0).abs() < 1e-4);
    assert!((decoded - 51.0).abs() < 1e-4);
}

#[test]
fn clip_percentages_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..2000 {
        let band = ScanBand::centered(rng.gen_range(0.0..2000.0), rng.gen_range(0.0..50.0));
        let ov = overlap(rng.gen_range(-3000.0..3000.0), rng.gen_range(1.0..900.0), band);
        if let Some((a, b)) = ov.clip_percent() {
            assert!((0.0..=100.0).contains(&a));
            assert!((0.0..=100.0).contains(&b));
        }
    }
}

#[test]
fn edge_entry_has_zero_left_intersection() {
    // Band straddles the card's left edge.
    let band = ScanBand::centered(500.0, 8.0);
    match overlap(498.0, 400.0, band) {
        Overlap::Crossing { intersect_left, intersect_right, .. } => {
            assert_eq!(intersect_left, 0.0);
            assert_eq!(intersect_right, 6.0);
        }
        other => panic!("expected crossing, got {other:?}"),
    }
}

#[test]
fn strip_writes_signal_each_recompute() {
    let signal = ScanSignal::new();
    let mut strip = strip_of(3, signal.clone());
    // Card 0 spans 0..450, gap 60, card 1 spans 510..960.
    strip.recompute(0.0, 200.0);
    assert!(signal.get());
    strip.recompute(0.0, 480.0);
    assert!(!signal.get());
    let report = strip.recompute(0.0, 700.0);
    assert!(report.any_scanning);
    assert!(signal.get());
}

#[test]
fn pulse_fires_once_per_crossing() {
    let signal = ScanSignal::new();
    let mut strip = strip_of(2, signal);
    let mut pulses = 0;
    // Slide card 0 leftward across a band at x=200.
    for step in 0..100 {
        let origin = 300.0 - step as f32 * 10.0;
        pulses += strip
            .recompute(origin, 200.0)
            .pulses
            .iter()
            .filter(|&&i| i == 0)
            .count();
    }
    assert_eq!(pulses, 1);
}

#[test]
fn pulse_rearms_after_leaving_band() {
    let mut strip = strip_of(1, ScanSignal::new());
    assert_eq!(strip.recompute(0.0, 200.0).pulses.as_slice(), &[0]);
    assert!(strip.recompute(-10.0, 200.0).pulses.is_empty());
    strip.recompute(1000.0, 200.0);
    assert_eq!(strip.recompute(0.0, 200.0).pulses.as_slice(), &[0]);
}

#[test]
fn only_changed_clips_are_reported() {
    let mut strip = strip_of(3, ScanSignal::new());
    let first = strip.recompute(0.0, 200.0).changed.len();
    assert_eq!(first, 3);
    assert!(strip.recompute(0.0, 200.0).changed.is_empty());
    let moved = strip.recompute(-1.0, 200.0);
    assert_eq!(moved.changed.len(), 1);
    assert_eq!(moved.changed[0].index, 0);
}

#[test]
fn content_width_includes_gaps() {
    let strip = strip_of(30, ScanSignal::new());
    assert_eq!(strip.content_width(), 30.0 * (450.0 + 60.0));
}

#[test]
fn second_card_starts_after_width_and_gap() {
    let mut strip = strip_of(2, ScanSignal::new());
    // Card 0 spans 10..460, card 1 starts at 520.
    assert!(!strip.recompute(10.0, 515.0).any_scanning);
    let report = strip.recompute(10.0, 525.0);
    assert!(report.any_scanning);
    assert_eq!(report.pulses.as_slice(), &[1]);
}

#[test]
fn wider_gap_shifts_later_cards() {
    let params = CardParams {
        count: 3,
        gap: 100.0,
        ..CardParams::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    let cards = populate(&[MediaSource::image("a.jpg")], &params, &mut rng);
    let mut strip = CardStrip::new(cards, params.gap, params.scan_band_width, ScanSignal::new());
    assert_eq!(strip.content_width(), 3.0 * 550.0);
    // Card 1 starts at 550; with the default 60px gap a band at 530 would hit it.
    assert!(!strip.recompute(0.0, 530.0).any_scanning);
    assert!(strip.recompute(0.0, 560.0).any_scanning);
}

#[test]
fn empty_strip_is_never_scanning() {
    let signal = ScanSignal::new();
    signal.set(true);
    let mut strip = CardStrip::new(Vec::new(), 60.0, 8.0, signal.clone());
    assert_eq!(strip.content_width(), 0.0);
    assert!(!strip.recompute(0.0, 500.0).any_scanning);
    assert!(!signal.get());
}
