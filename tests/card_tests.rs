// Host-side tests for card sizing, media cycling and filler text.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scan_core;

use rand::prelude::*;
use scan_core::card::{default_media, display_size, populate, refresh_fillers};
use scan_core::filler::{filler_text, grid_for};
use scan_core::{Card, CardParams, MediaKind, MediaSource, Size};

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

fn assert_grid(text: &str, cols: usize, rows: usize) {
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), rows);
    for line in lines {
        assert_eq!(line.chars().count(), cols, "line {line:?}");
    }
}

#[test]
fn tall_media_is_scaled_to_max_height() {
    let size = display_size(Size::new(1200.0, 1800.0), 700.0);
    assert!((size.width - 466.666_67).abs() < 0.01);
    assert_eq!(size.height, 700.0);
}

#[test]
fn short_media_keeps_natural_size() {
    let natural = Size::new(800.0, 600.0);
    assert_eq!(display_size(natural, 700.0), natural);
}

#[test]
fn placeholder_card_has_default_size_and_filler() {
    let card = Card::placeholder(0, MediaSource::image("x.jpg"), &CardParams::default(), &mut rng());
    assert_eq!(card.display, Size::new(450.0, 650.0));
    assert_eq!(card.filler_grid(), (75, 50));
    assert_grid(&card.filler, 75, 50);
    assert!(card.natural.is_none());
}

#[test]
fn only_first_media_report_resizes() {
    let mut r = rng();
    let mut card = Card::placeholder(3, MediaSource::image("x.jpg"), &CardParams::default(), &mut r);
    assert!(card.resolve_media(Size::new(1200.0, 1800.0), 700.0, &mut r));
    assert_eq!(card.display.height, 700.0);
    let (cols, rows) = card.filler_grid();
    assert_eq!((cols, rows), (77, 53));
    assert_grid(&card.filler, cols, rows);

    assert!(!card.resolve_media(Size::new(100.0, 100.0), 700.0, &mut r));
    assert_eq!(card.display.height, 700.0);
}

#[test]
fn degenerate_media_size_is_ignored() {
    let mut r = rng();
    let mut card = Card::placeholder(0, MediaSource::video("v.mp4"), &CardParams::default(), &mut r);
    assert!(!card.resolve_media(Size::new(0.0, 0.0), 700.0, &mut r));
    assert!(card.natural.is_none());
    assert!(card.resolve_media(Size::new(640.0, 360.0), 700.0, &mut r));
    assert_eq!(card.display, Size::new(640.0, 360.0));
}

#[test]
fn failed_media_keeps_placeholder_size() {
    let mut card = Card::placeholder(0, MediaSource::image("x.jpg"), &CardParams::default(), &mut rng());
    card.mark_media_failed();
    assert!(card.media_failed);
    assert_eq!(card.display, Size::new(450.0, 650.0));
}

#[test]
fn populate_cycles_media() {
    let media = vec![MediaSource::image("a.jpg"), MediaSource::video("b.mp4")];
    let cards = populate(&media, &CardParams::default(), &mut rng());
    assert_eq!(cards.len(), 30);
    assert_eq!(cards[0].media.url, "a.jpg");
    assert_eq!(cards[1].media.kind, MediaKind::Video);
    assert_eq!(cards[29].media.url, "b.mp4");
    assert!(cards.iter().enumerate().all(|(i, c)| c.index == i));
}

#[test]
fn populate_without_media_is_empty() {
    assert!(populate(&[], &CardParams::default(), &mut rng()).is_empty());
}

#[test]
fn default_media_lists_gallery_images() {
    let media = default_media();
    assert_eq!(media.len(), 33);
    assert_eq!(media[0].url, "/gallery/image00001.jpg");
    assert_eq!(media[32].url, "/gallery/image00033.jpg");
    assert!(media.iter().all(|m| m.kind == MediaKind::Image));
}

#[test]
fn refresh_touches_subset_by_probability() {
    let mut r = rng();
    let mut cards = populate(&default_media(), &CardParams::default(), &mut r);
    assert!(refresh_fillers(&mut cards, 0.0, &mut r).is_empty());
    let before = cards[4].filler.clone();
    let touched = refresh_fillers(&mut cards, 1.0, &mut r);
    assert_eq!(touched, (0..30).collect::<Vec<_>>());
    assert_ne!(cards[4].filler, before);
    assert_grid(&cards[4].filler, 75, 50);
}

#[test]
fn filler_text_is_deterministic_per_seed() {
    assert_eq!(filler_text(40, 10, 5), filler_text(40, 10, 5));
    assert_ne!(filler_text(40, 10, 5), filler_text(40, 10, 6));
    assert_grid(&filler_text(40, 10, 5), 40, 10);
    assert_grid(&filler_text(1, 3, 9), 1, 3);
}

#[test]
fn empty_grid_gives_empty_text() {
    assert_eq!(filler_text(0, 10, 1), "");
    assert_eq!(filler_text(10, 0, 1), "");
    assert_eq!(grid_for(5.0, 12.0), (0, 0));
}
