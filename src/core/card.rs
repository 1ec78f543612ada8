use super::config::CardParams;
use super::filler;
use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MediaSource {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaSource {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: MediaKind::Image,
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: MediaKind::Video,
        }
    }
}

/// The compressed gallery images served under `/gallery/`.
pub fn default_media() -> Vec<MediaSource> {
    (1..=33)
        .map(|i| MediaSource::image(format!("/gallery/image{i:05}.jpg")))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Scale `natural` down so its height fits `max_height`, keeping the aspect
/// ratio. Media already short enough is shown at its natural size.
pub fn display_size(natural: Size, max_height: f32) -> Size {
    if natural.height > max_height && natural.height > 0.0 {
        let scale = max_height / natural.height;
        Size::new(natural.width * scale, max_height)
    } else {
        natural
    }
}

/// One tile of the stream.
#[derive(Clone, Debug)]
pub struct Card {
    pub index: usize,
    pub media: MediaSource,
    pub natural: Option<Size>,
    pub display: Size,
    pub filler: String,
    pub media_failed: bool,
}

impl Card {
    pub fn placeholder<R: Rng + ?Sized>(
        index: usize,
        media: MediaSource,
        params: &CardParams,
        rng: &mut R,
    ) -> Self {
        let display = Size::new(params.placeholder_width, params.placeholder_height);
        let mut card = Self {
            index,
            media,
            natural: None,
            display,
            filler: String::new(),
            media_failed: false,
        };
        card.regenerate_filler(rng);
        card
    }

    /// Fix the card's size from its media metadata. Only the first report
    /// counts; returns whether the display size changed.
    pub fn resolve_media<R: Rng + ?Sized>(
        &mut self,
        natural: Size,
        max_height: f32,
        rng: &mut R,
    ) -> bool {
        if self.natural.is_some() || natural.width <= 0.0 || natural.height <= 0.0 {
            return false;
        }
        self.natural = Some(natural);
        let display = display_size(natural, max_height);
        let changed = display != self.display;
        self.display = display;
        self.regenerate_filler(rng);
        changed
    }

    /// The placeholder size stays in place so layout keeps working.
    pub fn mark_media_failed(&mut self) {
        self.media_failed = true;
    }

    pub fn filler_grid(&self) -> (usize, usize) {
        filler::grid_for(self.display.width, self.display.height)
    }

    pub fn regenerate_filler<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (cols, rows) = self.filler_grid();
        self.filler = filler::generate(cols, rows, rng);
    }
}

/// Build the card list, cycling through `media`. Empty media gives no cards.
pub fn populate<R: Rng + ?Sized>(
    media: &[MediaSource],
    params: &CardParams,
    rng: &mut R,
) -> Vec<Card> {
    if media.is_empty() {
        return Vec::new();
    }
    (0..params.count)
        .map(|i| Card::placeholder(i, media[i % media.len()].clone(), params, rng))
        .collect()
}

/// Resample the filler of a random subset of cards; returns the indices
/// touched so the DOM side can update just those.
pub fn refresh_fillers<R: Rng + ?Sized>(
    cards: &mut [Card],
    probability: f64,
    rng: &mut R,
) -> Vec<usize> {
    let p = probability.clamp(0.0, 1.0);
    let mut touched = Vec::new();
    for card in cards.iter_mut() {
        if rng.gen_bool(p) {
            card.regenerate_filler(rng);
            touched.push(card.index);
        }
    }
    touched
}
