use super::card::{Card, Size};
use super::clip::{overlap, Overlap, ScanBand};
use super::sync::ScanSignal;
use rand::Rng;
use smallvec::SmallVec;

/// Clip state the DOM side should apply to one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipUpdate {
    pub index: usize,
    pub normal_clip_right: f32,
    pub decoded_clip_left: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ClipReport {
    pub any_scanning: bool,
    /// Only cards whose clip changed since the previous recompute.
    pub changed: Vec<ClipUpdate>,
    /// Cards that just started crossing the band.
    pub pulses: SmallVec<[usize; 4]>,
}

/// The laid-out row of cards plus per-card scan bookkeeping.
///
/// Card rectangles are derived from the strip origin and the card widths, so
/// recomputing clipping never has to read layout back from the page.
pub struct CardStrip {
    cards: Vec<Card>,
    gap: f32,
    band_width: f32,
    scanned: Vec<bool>,
    last_clip: Vec<Option<(f32, f32)>>,
    signal: ScanSignal,
    report: ClipReport,
}

impl CardStrip {
    pub fn new(cards: Vec<Card>, gap: f32, band_width: f32, signal: ScanSignal) -> Self {
        let n = cards.len();
        Self {
            cards,
            gap,
            band_width,
            scanned: vec![false; n],
            last_clip: vec![None; n],
            signal,
            report: ClipReport::default(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Σ(width + gap) over all cards; the trailing gap is included so the
    /// wrap seam keeps the same spacing as the rest of the row.
    pub fn content_width(&self) -> f32 {
        self.cards.iter().map(|c| c.display.width + self.gap).sum()
    }

    /// Apply a media metadata report; returns whether the strip width changed.
    pub fn resolve_media<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        natural: Size,
        max_height: f32,
        rng: &mut R,
    ) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => card.resolve_media(natural, max_height, rng),
            None => false,
        }
    }

    /// Recompute every card's overlap with the scan band and publish whether
    /// any card is crossing it.
    pub fn recompute(&mut self, origin_x: f32, viewport_center_x: f32) -> &ClipReport {
        let band = ScanBand::centered(viewport_center_x, self.band_width);
        self.report.changed.clear();
        self.report.pulses.clear();
        let mut any = false;

        for (i, left, width) in card_lefts(&self.cards, self.gap, origin_x) {
            let ov = overlap(left, width, band);

            match ov {
                Overlap::Crossing { intersect_left, .. } => {
                    any = true;
                    if !self.scanned[i] && intersect_left > 0.0 {
                        self.scanned[i] = true;
                        self.report.pulses.push(i);
                    }
                }
                Overlap::Passed | Overlap::Pending => self.scanned[i] = false,
                Overlap::Unmeasured => {}
            }

            if let Some(clip) = ov.clip_percent() {
                if self.last_clip[i] != Some(clip) {
                    self.last_clip[i] = Some(clip);
                    self.report.changed.push(ClipUpdate {
                        index: i,
                        normal_clip_right: clip.0,
                        decoded_clip_left: clip.1,
                    });
                }
            }
        }

        self.report.any_scanning = any;
        self.signal.set(any);
        &self.report
    }
}

/// Screen-space `(index, left, width)` of each card in a strip starting at
/// `origin_x`.
fn card_lefts(
    cards: &[Card],
    gap: f32,
    origin_x: f32,
) -> impl Iterator<Item = (usize, f32, f32)> + '_ {
    let mut x = origin_x;
    cards.iter().enumerate().map(move |(i, c)| {
        let left = x;
        x += c.display.width + gap;
        (i, left, c.display.width)
    })
}
