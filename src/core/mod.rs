//! Pure simulation core: no DOM, no GPU, compiled on every target so the
//! host-side tests can drive it directly.

pub mod card;
pub mod clip;
pub mod config;
pub mod constants;
pub mod field;
pub mod filler;
pub mod lifecycle;
pub mod scanner;
pub mod stream;
pub mod strip;
pub mod sync;

pub use card::{Card, MediaKind, MediaSource, Size};
pub use clip::{Overlap, ScanBand};
pub use config::{
    CardParams, ConfigError, FieldParams, GalleryConfig, RegimePreset, ScannerParams,
    StreamParams,
};
pub use field::{FieldPoint, FieldState};
pub use lifecycle::Teardown;
pub use scanner::{GlowPass, LightBar, PassKind, ScanParticle, ScannerState};
pub use stream::StreamState;
pub use strip::{CardStrip, ClipReport, ClipUpdate};
pub use sync::ScanSignal;

// Shader bundled as a string constant
pub static FIELD_WGSL: &str = include_str!("../../shaders/field.wgsl");
