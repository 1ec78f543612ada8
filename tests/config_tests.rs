// Host-side tests for gallery configuration parsing and shared handles.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scan_core;

use scan_core::constants::*;
use scan_core::{ConfigError, GalleryConfig, MediaKind, ScanSignal, StreamState, Teardown};

#[test]
fn defaults_are_valid() {
    let config = GalleryConfig::default();
    config.validate().unwrap();
    assert_eq!(config.stream.friction, FRICTION);
    assert_eq!(config.cards.count, CARD_COUNT);
    assert_eq!(config.field.point_count, FIELD_POINT_COUNT);
    assert_eq!(config.scanner.idle.intensity, IDLE_INTENSITY);
    assert_eq!(config.media.len(), 33);
    assert_eq!(config.reduced_motion, None);
}

#[test]
fn empty_object_gives_defaults() {
    assert_eq!(GalleryConfig::from_json("{}").unwrap(), GalleryConfig::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = GalleryConfig::from_json(
        r#"{
            "stream": { "friction": 0.9 },
            "cards": { "count": 4 },
            "media": [{ "url": "clip.mp4", "kind": "video" }],
            "reduced_motion": true
        }"#,
    )
    .unwrap();
    assert_eq!(config.stream.friction, 0.9);
    assert_eq!(config.stream.min_velocity, MIN_VELOCITY);
    assert_eq!(config.cards.count, 4);
    assert_eq!(config.cards.gap, CARD_GAP_PX);
    assert_eq!(config.media.len(), 1);
    assert_eq!(config.media[0].kind, MediaKind::Video);
    assert_eq!(config.reduced_motion, Some(true));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = GalleryConfig::from_json("{ stream: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    for (json, field) in [
        (r#"{"stream":{"friction":0.0}}"#, "stream.friction"),
        (r#"{"stream":{"min_velocity":-1.0}}"#, "stream.min_velocity"),
        (r#"{"scanner":{"blend":1.0}}"#, "scanner.blend"),
        (r#"{"cards":{"refresh_probability":1.5}}"#, "cards.refresh_probability"),
        (r#"{"stream":{"max_frame_dt":-1.0}}"#, "stream.max_frame_dt"),
        (r#"{"scanner":{"trim_batch":0}}"#, "scanner.trim_batch"),
        (r#"{"cards":{"gap":-5.0}}"#, "cards.gap"),
    ] {
        match GalleryConfig::from_json(json) {
            Err(ConfigError::OutOfRange { field: f, .. }) => assert_eq!(f, field),
            other => panic!("{json}: expected range error, got {other:?}"),
        }
    }
}

#[test]
fn accepted_frame_clamp_steps_cleanly() {
    let config = GalleryConfig::from_json(r#"{"stream":{"max_frame_dt":0.0}}"#).unwrap();
    let mut stream = StreamState::new(config.stream);
    stream.set_extent(1000.0, 500.0);
    assert!(stream.step(0.016));
    assert_eq!(stream.position, 0.0);
}

#[test]
fn active_preset_outranks_idle() {
    let c = GalleryConfig::default().scanner;
    assert!(c.active.intensity > c.idle.intensity);
    assert!(c.active.max_particles > c.idle.max_particles);
    assert!(c.active.bar_height > c.idle.bar_height);
    assert!(c.active.fade_zone < c.idle.fade_zone);
}

#[test]
fn signal_clones_share_state() {
    let writer = ScanSignal::new();
    let reader = writer.clone();
    assert!(!reader.get());
    writer.set(true);
    assert!(reader.get());
}

#[test]
fn teardown_latches_once() {
    let mut t = Teardown::default();
    assert!(t.begin());
    assert!(!t.begin());
    assert!(!t.begin());
}
