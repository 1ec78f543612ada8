// Tuning defaults shared by the stream, field and scanner simulations.
//
// These are aesthetic choices, not invariants. Each one seeds a field of the
// matching `*Params` struct in `config.rs` and can be overridden per mount.

// Card strip layout
pub const CARD_COUNT: usize = 30;
pub const CARD_GAP_PX: f32 = 60.0;
pub const PLACEHOLDER_CARD_WIDTH: f32 = 450.0;
pub const PLACEHOLDER_CARD_HEIGHT: f32 = 650.0;
pub const MAX_CARD_HEIGHT: f32 = 700.0;

// Kinetic scroll
pub const DEFAULT_VELOCITY: f32 = 120.0; // px/s while idling
pub const FRICTION: f32 = 0.95; // multiplicative per step
pub const MIN_VELOCITY: f32 = 30.0; // floor the drift never drops below
pub const DRAG_SAMPLE_RATE_HZ: f32 = 60.0; // pointer velocity = delta * rate
pub const WHEEL_STEP_PX: f32 = 20.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Scan band
pub const SCAN_BAND_WIDTH: f32 = 8.0;
pub const SCAN_PULSE_MS: i32 = 600;

// Filler ("decoded") layer
pub const FILLER_REFRESH_MS: i32 = 200;
pub const FILLER_REFRESH_PROBABILITY: f64 = 0.15;
pub const FILLER_CHAR_WIDTH_PX: f32 = 6.0;
pub const FILLER_LINE_HEIGHT_PX: f32 = 13.0;
pub const FILLER_FONT_SIZE_PX: f32 = 11.0;

// Particle field (backdrop)
pub const FIELD_POINT_COUNT: usize = 400;
pub const FIELD_HEIGHT_PX: f32 = 650.0;
pub const FIELD_EDGE_MARGIN_PX: f32 = 100.0;
pub const FIELD_SPEED_MIN: f32 = 30.0;
pub const FIELD_SPEED_SPAN: f32 = 60.0;
pub const FIELD_BOB_AMPLITUDE: f32 = 0.5;
pub const FIELD_BOB_PHASE_STEP: f32 = 0.1;
pub const FIELD_TWINKLE_STEP: f32 = 0.05;
pub const FIELD_TWINKLE_PROBABILITY: f32 = 0.1; // per direction, per frame

// Scanner canvas
pub const SCANNER_HEIGHT_PX: f32 = 700.0;
pub const SCANNER_CARD_HEIGHT_PX: f32 = 650.0;
pub const SCANNER_IDLE_BAR_RATIO: f32 = 0.8;
pub const LIGHT_BAR_WIDTH_PX: f32 = 3.0;
pub const REGIME_BLEND: f32 = 0.05; // cur += (target - cur) * blend
pub const SCANNER_EXIT_MARGIN_PX: f32 = 10.0;

pub const IDLE_INTENSITY: f32 = 0.8;
pub const IDLE_MAX_PARTICLES: f32 = 800.0;
pub const IDLE_FADE_ZONE: f32 = 60.0;
pub const IDLE_GLOW: f32 = 1.0;
pub const IDLE_BAR_FADE: f32 = 60.0;

pub const ACTIVE_INTENSITY: f32 = 1.8;
pub const ACTIVE_MAX_PARTICLES: f32 = 2500.0;
pub const ACTIVE_FADE_ZONE: f32 = 35.0;
pub const ACTIVE_GLOW: f32 = 3.5;
pub const ACTIVE_BAR_FADE: f32 = 5.0;

// Population control
pub const TRIM_SLACK: usize = 200;
pub const TRIM_BATCH: usize = 15;
pub const MIN_PARTICLE_DECAY: f32 = 0.001;
