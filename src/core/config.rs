use super::card::{default_media, MediaSource};
use super::constants::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gallery config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gallery config field `{field}` out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

/// Kinetic scroll tuning for the card strip.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StreamParams {
    pub default_velocity: f32,
    pub friction: f32,
    pub min_velocity: f32,
    pub drag_sample_rate_hz: f32,
    pub wheel_step: f32,
    pub max_frame_dt: f32,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            default_velocity: DEFAULT_VELOCITY,
            friction: FRICTION,
            min_velocity: MIN_VELOCITY,
            drag_sample_rate_hz: DRAG_SAMPLE_RATE_HZ,
            wheel_step: WHEEL_STEP_PX,
            max_frame_dt: MAX_FRAME_DT_SEC,
        }
    }
}

/// Card population, sizing and the decoded-layer refresh cadence.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardParams {
    pub count: usize,
    pub gap: f32,
    pub max_height: f32,
    pub placeholder_width: f32,
    pub placeholder_height: f32,
    pub scan_band_width: f32,
    pub pulse_ms: i32,
    pub refresh_ms: i32,
    pub refresh_probability: f64,
}

impl Default for CardParams {
    fn default() -> Self {
        Self {
            count: CARD_COUNT,
            gap: CARD_GAP_PX,
            max_height: MAX_CARD_HEIGHT,
            placeholder_width: PLACEHOLDER_CARD_WIDTH,
            placeholder_height: PLACEHOLDER_CARD_HEIGHT,
            scan_band_width: SCAN_BAND_WIDTH,
            pulse_ms: SCAN_PULSE_MS,
            refresh_ms: FILLER_REFRESH_MS,
            refresh_probability: FILLER_REFRESH_PROBABILITY,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldParams {
    pub point_count: usize,
    pub height: f32,
    pub edge_margin: f32,
    pub speed_min: f32,
    pub speed_span: f32,
    pub bob_amplitude: f32,
    pub bob_phase_step: f32,
    pub twinkle_step: f32,
    pub twinkle_probability: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            point_count: FIELD_POINT_COUNT,
            height: FIELD_HEIGHT_PX,
            edge_margin: FIELD_EDGE_MARGIN_PX,
            speed_min: FIELD_SPEED_MIN,
            speed_span: FIELD_SPEED_SPAN,
            bob_amplitude: FIELD_BOB_AMPLITUDE,
            bob_phase_step: FIELD_BOB_PHASE_STEP,
            twinkle_step: FIELD_TWINKLE_STEP,
            twinkle_probability: FIELD_TWINKLE_PROBABILITY,
        }
    }
}

/// Target values the scanner blends toward in one regime.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct RegimePreset {
    pub intensity: f32,
    pub max_particles: f32,
    pub fade_zone: f32,
    pub glow: f32,
    pub bar_height: f32,
    pub bar_fade: f32,
}

impl RegimePreset {
    pub fn idle() -> Self {
        Self {
            intensity: IDLE_INTENSITY,
            max_particles: IDLE_MAX_PARTICLES,
            fade_zone: IDLE_FADE_ZONE,
            glow: IDLE_GLOW,
            bar_height: SCANNER_CARD_HEIGHT_PX * SCANNER_IDLE_BAR_RATIO,
            bar_fade: IDLE_BAR_FADE,
        }
    }

    pub fn active() -> Self {
        Self {
            intensity: ACTIVE_INTENSITY,
            max_particles: ACTIVE_MAX_PARTICLES,
            fade_zone: ACTIVE_FADE_ZONE,
            glow: ACTIVE_GLOW,
            bar_height: SCANNER_CARD_HEIGHT_PX,
            bar_fade: ACTIVE_BAR_FADE,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScannerParams {
    pub height: f32,
    pub bar_width: f32,
    pub blend: f32,
    pub exit_margin: f32,
    pub idle: RegimePreset,
    pub active: RegimePreset,
    pub trim_slack: usize,
    pub trim_batch: usize,
}

impl Default for ScannerParams {
    fn default() -> Self {
        Self {
            height: SCANNER_HEIGHT_PX,
            bar_width: LIGHT_BAR_WIDTH_PX,
            blend: REGIME_BLEND,
            exit_margin: SCANNER_EXIT_MARGIN_PX,
            idle: RegimePreset::idle(),
            active: RegimePreset::active(),
            trim_slack: TRIM_SLACK,
            trim_batch: TRIM_BATCH,
        }
    }
}

/// Everything a mounted gallery can be tuned with.
///
/// Read from the root element's `data-gallery-config` attribute; any field
/// left out keeps its default.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    pub stream: StreamParams,
    pub cards: CardParams,
    pub field: FieldParams,
    pub scanner: ScannerParams,
    pub media: Vec<MediaSource>,
    /// `None` defers to the `prefers-reduced-motion` media query.
    pub reduced_motion: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            stream: StreamParams::default(),
            cards: CardParams::default(),
            field: FieldParams::default(),
            scanner: ScannerParams::default(),
            media: default_media(),
            reduced_motion: None,
        }
    }
}

impl GalleryConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stream.friction > 0.0 && self.stream.friction <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "stream.friction",
                reason: "must be in (0, 1]",
            });
        }
        if self.stream.min_velocity < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "stream.min_velocity",
                reason: "must not be negative",
            });
        }
        if self.stream.drag_sample_rate_hz <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "stream.drag_sample_rate_hz",
                reason: "must be positive",
            });
        }
        if !(self.stream.max_frame_dt.is_finite() && self.stream.max_frame_dt >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "stream.max_frame_dt",
                reason: "must be finite and not negative",
            });
        }
        if !(self.scanner.blend > 0.0 && self.scanner.blend < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "scanner.blend",
                reason: "must be in (0, 1)",
            });
        }
        if self.scanner.idle.intensity <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "scanner.idle.intensity",
                reason: "must be positive",
            });
        }
        if self.scanner.trim_batch == 0 {
            return Err(ConfigError::OutOfRange {
                field: "scanner.trim_batch",
                reason: "must be at least 1",
            });
        }
        if self.cards.max_height <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "cards.max_height",
                reason: "must be positive",
            });
        }
        if !(self.cards.gap.is_finite() && self.cards.gap >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "cards.gap",
                reason: "must be finite and not negative",
            });
        }
        if !(0.0..=1.0).contains(&self.cards.refresh_probability) {
            return Err(ConfigError::OutOfRange {
                field: "cards.refresh_probability",
                reason: "must be in [0, 1]",
            });
        }
        Ok(())
    }
}
