use crate::cards::{CardView, MediaEvent};
use crate::core::card::{self, populate};
use crate::core::{CardParams, CardStrip, GalleryConfig, ScanSignal, Size, StreamState, Teardown};
use crate::dom::{self, Listener};
use crate::error::GalleryError;
use crate::events;
use crate::frame::{AnimationLoop, IntervalTimer};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// State shared between the frame loop, the input handlers and the media
/// callbacks of one mounted stream.
pub(crate) struct StreamInner {
    pub(crate) state: StreamState,
    strip: CardStrip,
    /// Indexed like the strip's cards; `None` where the DOM build failed.
    views: Vec<Option<CardView>>,
    document: web::Document,
    container: web::HtmlElement,
    pub(crate) line: web::HtmlElement,
    params: CardParams,
    rng: StdRng,
    container_left: f32,
    center_x: f32,
}

impl StreamInner {
    /// Re-read container geometry and the strip width. Position is kept.
    pub(crate) fn remeasure(&mut self) {
        let viewport = self.container.offset_width() as f32;
        self.container_left = self.container.get_bounding_client_rect().left() as f32;
        self.center_x = dom::viewport_width() * 0.5;
        self.state.set_extent(self.strip.content_width(), viewport);
    }

    /// Write the translation and recompute clipping against the scan band.
    pub(crate) fn render(&mut self) {
        dom::set_style(
            &self.line,
            "transform",
            &format!("translateX({}px)", self.state.position),
        );
        self.recompute_clipping();
    }

    fn view(&self, index: usize) -> Option<&CardView> {
        self.views.get(index).and_then(Option::as_ref)
    }

    fn recompute_clipping(&mut self) {
        if self.center_x <= 0.0 {
            self.center_x = dom::viewport_width() * 0.5;
        }
        let origin = self.container_left + self.state.position;
        let report = self.strip.recompute(origin, self.center_x);
        for u in &report.changed {
            if let Some(view) = self.views.get(u.index).and_then(Option::as_ref) {
                view.set_clip(u.normal_clip_right, u.decoded_clip_left);
            }
        }
        for &i in &report.pulses {
            if let Some(view) = self.views.get(i).and_then(Option::as_ref) {
                view.pulse(&self.document, self.params.pulse_ms);
            }
        }
    }

    fn on_media(&mut self, index: usize, event: MediaEvent) {
        match event {
            MediaEvent::Loaded(natural) => {
                let max_h = self.params.max_height;
                if self.strip.resolve_media(index, natural, max_h, &mut self.rng) {
                    let card = &self.strip.cards()[index];
                    if let Some(view) = self.view(index) {
                        view.apply_size(card.display);
                        view.set_filler(&card.filler);
                    }
                    log::debug!(
                        "[stream] card {} sized {:.1}x{:.1}",
                        index,
                        card.display.width,
                        card.display.height
                    );
                    self.remeasure();
                }
            }
            MediaEvent::Failed => {
                let Some(card) = self.strip.cards_mut().get_mut(index) else {
                    return;
                };
                if card.media_failed {
                    return;
                }
                card.mark_media_failed();
                let size = Size::new(self.params.placeholder_width, self.params.placeholder_height);
                log::warn!("[stream] media failed for card {}: {}", index, card.media.url);
                if let Some(view) = self.view(index) {
                    view.show_fallback(&self.document, size);
                }
            }
        }
    }

    fn refresh_fillers(&mut self) {
        let p = self.params.refresh_probability;
        let touched = card::refresh_fillers(self.strip.cards_mut(), p, &mut self.rng);
        for i in touched {
            if let (Some(view), Some(card)) = (self.view(i), self.strip.cards().get(i)) {
                view.set_filler(&card.filler);
            }
        }
    }
}

/// Card strip with drag / wheel / autoplay motion. Publishes whether any
/// card crosses the scan band through the `ScanSignal` it is built with.
pub struct StreamController {
    inner: Rc<RefCell<StreamInner>>,
    frame: Option<AnimationLoop>,
    refresh: Option<IntervalTimer>,
    listeners: Vec<Listener>,
    teardown: Teardown,
}

impl StreamController {
    pub fn init(
        container: web::HtmlElement,
        line: web::HtmlElement,
        config: &GalleryConfig,
        signal: ScanSignal,
        reduced_motion: bool,
    ) -> Result<Self, GalleryError> {
        let document = dom::document()?;
        let mut rng = StdRng::from_entropy();
        let cards = populate(&config.media, &config.cards, &mut rng);
        if cards.is_empty() {
            log::warn!("[stream] no media configured; strip stays empty");
        }

        line.set_inner_html("");
        // The strip math lays cards out with this gap, so the page must too.
        dom::set_style(&line, "gap", &format!("{}px", config.cards.gap));
        let mut state = StreamState::new(config.stream.clone());
        state.set_autoplay_allowed(!reduced_motion);

        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<StreamInner>>| {
            let mut views = Vec::with_capacity(cards.len());
            for card in &cards {
                let weak = weak.clone();
                let on_media = move |index: usize, ev: MediaEvent| {
                    if let Some(inner) = weak.upgrade() {
                        inner.borrow_mut().on_media(index, ev);
                    }
                };
                match CardView::build(&document, card, on_media) {
                    Ok(view) => {
                        if let Err(e) = line.append_child(&view.wrapper) {
                            log::error!("[stream] append card {}: {:?}", card.index, e);
                        }
                        views.push(Some(view));
                    }
                    Err(e) => {
                        log::error!("[stream] card {} not built: {}", card.index, e);
                        views.push(None);
                    }
                }
            }
            RefCell::new(StreamInner {
                state,
                strip: CardStrip::new(
                    cards,
                    config.cards.gap,
                    config.cards.scan_band_width,
                    signal,
                ),
                views,
                document: document.clone(),
                container,
                line: line.clone(),
                params: config.cards.clone(),
                rng,
                container_left: 0.0,
                center_x: 0.0,
            })
        });

        {
            let mut s = inner.borrow_mut();
            s.remeasure();
            s.render();
            log::info!(
                "[stream] {} cards, content width {:.0}px, viewport {:.0}px",
                s.strip.len(),
                s.state.content_width(),
                s.state.viewport_width()
            );
        }

        let listeners = events::wire_stream_input(&inner, &line, &document);

        let frame_inner = inner.clone();
        let frame = AnimationLoop::start(move |dt| {
            let mut s = frame_inner.borrow_mut();
            s.state.step(dt);
            s.render();
        });

        let refresh_inner = Rc::downgrade(&inner);
        let refresh = IntervalTimer::start(config.cards.refresh_ms, move || {
            if let Some(inner) = refresh_inner.upgrade() {
                inner.borrow_mut().refresh_fillers();
            }
        });

        Ok(Self {
            inner,
            frame: Some(frame),
            refresh,
            listeners,
            teardown: Teardown::default(),
        })
    }

    /// Stop the loop and timer, unhook listeners, remove the card DOM.
    pub fn release(&mut self) {
        if !self.teardown.begin() {
            return;
        }
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
        if let Some(timer) = self.refresh.take() {
            timer.cancel();
        }
        self.listeners.clear();
        let mut s = self.inner.borrow_mut();
        for view in s.views.drain(..).flatten() {
            view.remove();
        }
        log::info!("[stream] released");
    }
}

impl Drop for StreamController {
    fn drop(&mut self) {
        self.release();
    }
}
