//! Rendering constants for the browser front end.
//!
//! Colours and sprite sizes that only matter once something is drawn; the
//! simulation tuning lives in `core::constants`.

// Element ids inside the gallery root
pub const ROOT_ID: &str = "card-scanner";
pub const STREAM_ID: &str = "card-stream";
pub const LINE_ID: &str = "card-line";
pub const FIELD_CANVAS_ID: &str = "particle-canvas";
pub const SCANNER_CANVAS_ID: &str = "scanner-canvas";
pub const CONFIG_ATTR: &str = "data-gallery-config";

// Media failure placeholder
pub const FALLBACK_GRADIENT_START: &str = "#667eea";
pub const FALLBACK_GRADIENT_END: &str = "#764ba2";

// Scanner particle sprite (radial gradient cached on an offscreen canvas)
pub const SPRITE_SIZE_PX: u32 = 16;
pub const SPRITE_STOPS: [(f32, &str); 4] = [
    (0.0, "rgba(255, 255, 255, 1)"),
    (0.3, "rgba(173, 216, 230, 0.8)"),
    (0.7, "rgba(135, 206, 250, 0.4)"),
    (1.0, "rgba(255, 255, 255, 0)"),
];

// Light-bar core gradient: (offset, share of peak alpha)
pub const CORE_STOPS: [(f32, f32); 5] = [(0.0, 0.0), (0.3, 0.9), (0.5, 1.0), (0.7, 0.9), (1.0, 0.0)];
pub const HALO_STOPS: [(f32, f32); 3] = [(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)];
