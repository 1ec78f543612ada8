/// Fixed-width vertical strip around the viewport centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanBand {
    pub left: f32,
    pub right: f32,
}

impl ScanBand {
    pub fn centered(center_x: f32, width: f32) -> Self {
        let half = width.max(0.0) * 0.5;
        Self {
            left: center_x - half,
            right: center_x + half,
        }
    }
}

/// How a card sits relative to the scan band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Overlap {
    /// Zero or negative width; nothing to clip against yet.
    Unmeasured,
    /// Entirely left of the band: fully decoded.
    Passed,
    /// Entirely right of the band: fully normal.
    Pending,
    Crossing {
        /// Distance from the card's left edge to the band's left edge,
        /// floored at zero.
        intersect_left: f32,
        /// Distance from the card's left edge to the band's right edge,
        /// capped at the card width.
        intersect_right: f32,
        width: f32,
    },
}

impl Overlap {
    /// `(normal clip-right %, decoded clip-left %)`, both in `[0, 100]`.
    pub fn clip_percent(&self) -> Option<(f32, f32)> {
        match *self {
            Overlap::Unmeasured => None,
            Overlap::Passed => Some((100.0, 100.0)),
            Overlap::Pending => Some((0.0, 0.0)),
            Overlap::Crossing {
                intersect_left,
                intersect_right,
                width,
            } => Some((
                (intersect_left / width * 100.0).clamp(0.0, 100.0),
                (intersect_right / width * 100.0).clamp(0.0, 100.0),
            )),
        }
    }
}

pub fn overlap(card_left: f32, card_width: f32, band: ScanBand) -> Overlap {
    if !(card_width > 0.0) {
        return Overlap::Unmeasured;
    }
    let card_right = card_left + card_width;
    if card_left < band.right && card_right > band.left {
        Overlap::Crossing {
            intersect_left: (band.left - card_left).max(0.0),
            intersect_right: (band.right - card_left).min(card_width),
            width: card_width,
        }
    } else if card_right <= band.left {
        Overlap::Passed
    } else {
        Overlap::Pending
    }
}
