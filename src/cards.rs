use crate::constants::{FALLBACK_GRADIENT_END, FALLBACK_GRADIENT_START};
use crate::core::constants::{FILLER_FONT_SIZE_PX, FILLER_LINE_HEIGHT_PX};
use crate::core::{Card, MediaKind, Size};
use crate::dom::{self, Listener};
use crate::error::GalleryError;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a card's media element reported.
#[derive(Clone, Copy, Debug)]
pub enum MediaEvent {
    Loaded(Size),
    Failed,
}

/// DOM for one card: a wrapper holding the media layer and the decoded
/// (filler text) layer stacked on top of each other.
pub struct CardView {
    pub wrapper: web::HtmlElement,
    normal: web::HtmlElement,
    decoded: web::HtmlElement,
    content: web::HtmlElement,
    media_el: web::HtmlElement,
    _listeners: Vec<Listener>,
}

impl CardView {
    /// Build the card DOM. `on_media` is invoked from the media element's
    /// load / error events.
    pub fn build(
        document: &web::Document,
        card: &Card,
        on_media: impl Fn(usize, MediaEvent) + Clone + 'static,
    ) -> Result<Self, GalleryError> {
        let wrapper = dom::create_div(document, "card-wrapper")?;
        let normal = dom::create_div(document, "card card-normal")?;
        let decoded = dom::create_div(document, "card card-ascii")?;
        let content = dom::create_div(document, "ascii-content")?;

        let index = card.index;
        let mut listeners = Vec::new();
        let media_el: web::HtmlElement = match card.media.kind {
            MediaKind::Image => {
                let img: web::HtmlImageElement = dom::create(document, "img")?;
                img.set_class_name("card-media");
                img.set_alt("Gallery Image");
                _ = img.set_attribute("loading", "lazy");
                _ = img.set_attribute("decoding", "async");

                let on_load = on_media.clone();
                listeners.push(Listener::new(&img, "load", move |ev: web::Event| {
                    let Some(img) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web::HtmlImageElement>().ok())
                    else {
                        return;
                    };
                    let natural = Size::new(img.natural_width() as f32, img.natural_height() as f32);
                    on_load(index, MediaEvent::Loaded(natural));
                }));
                let on_error = on_media.clone();
                listeners.push(Listener::new(&img, "error", move |_: web::Event| {
                    on_error(index, MediaEvent::Failed);
                }));
                img.set_src(&card.media.url);
                img.unchecked_into()
            }
            MediaKind::Video => {
                let video: web::HtmlVideoElement = dom::create(document, "video")?;
                video.set_class_name("card-media");
                video.set_autoplay(true);
                video.set_loop(true);
                video.set_muted(true);
                _ = video.set_attribute("playsinline", "");

                let on_meta = on_media.clone();
                listeners.push(Listener::new(&video, "loadedmetadata", move |ev: web::Event| {
                    let Some(video) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web::HtmlVideoElement>().ok())
                    else {
                        return;
                    };
                    let natural = Size::new(video.video_width() as f32, video.video_height() as f32);
                    on_meta(index, MediaEvent::Loaded(natural));
                    // Muted inline video may still be blocked; nothing to do then.
                    _ = video.play();
                }));
                let on_error = on_media.clone();
                listeners.push(Listener::new(&video, "error", move |_: web::Event| {
                    on_error(index, MediaEvent::Failed);
                }));
                video.set_src(&card.media.url);
                video.unchecked_into()
            }
        };

        normal.append_child(&media_el)?;
        decoded.append_child(&content)?;
        wrapper.append_child(&normal)?;
        wrapper.append_child(&decoded)?;

        dom::set_style(&content, "font-size", &format!("{FILLER_FONT_SIZE_PX}px"));
        dom::set_style(&content, "line-height", &format!("{FILLER_LINE_HEIGHT_PX}px"));

        let view = Self {
            wrapper,
            normal,
            decoded,
            content,
            media_el,
            _listeners: listeners,
        };
        view.apply_size(card.display);
        view.set_filler(&card.filler);
        Ok(view)
    }

    pub fn apply_size(&self, size: Size) {
        dom::set_size_px(&self.wrapper, size.width, size.height);
        dom::set_size_px(&self.normal, size.width, size.height);
        dom::set_size_px(&self.decoded, size.width, size.height);
    }

    pub fn set_filler(&self, text: &str) {
        self.content.set_text_content(Some(text));
    }

    pub fn set_clip(&self, normal_clip_right: f32, decoded_clip_left: f32) {
        dom::set_style(&self.normal, "--clip-right", &format!("{normal_clip_right:.3}%"));
        dom::set_style(&self.decoded, "--clip-left", &format!("{decoded_clip_left:.3}%"));
    }

    /// Overlay a one-shot sweep that removes itself after `duration_ms`.
    pub fn pulse(&self, document: &web::Document, duration_ms: i32) {
        let Ok(effect) = dom::create_div(document, "scan-effect") else {
            return;
        };
        if self.wrapper.append_child(&effect).is_err() {
            return;
        }
        crate::frame::after(duration_ms, move || effect.remove());
    }

    /// Swap the media for a generated gradient so the card keeps its shape.
    pub fn show_fallback(&self, document: &web::Document, size: Size) {
        let url = match fallback_data_url(document, size) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("[cards] fallback gradient failed: {}", e);
                return;
            }
        };
        if let Some(img) = self.media_el.dyn_ref::<web::HtmlImageElement>() {
            img.set_src(&url);
            return;
        }
        let Ok(img) = dom::create::<web::HtmlImageElement>(document, "img") else {
            return;
        };
        img.set_class_name("card-media");
        img.set_src(&url);
        _ = self.normal.replace_child(&img, &self.media_el);
    }

    pub fn remove(&self) {
        self.wrapper.remove();
    }
}

fn fallback_data_url(document: &web::Document, size: Size) -> Result<String, GalleryError> {
    let canvas: web::HtmlCanvasElement = dom::create(document, "canvas")?;
    let (w, h) = (size.width.max(1.0) as f64, size.height.max(1.0) as f64);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    let ctx = dom::context_2d(&canvas)?;
    let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
    gradient.add_color_stop(0.0, FALLBACK_GRADIENT_START)?;
    gradient.add_color_stop(1.0, FALLBACK_GRADIENT_END)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);
    Ok(canvas.to_data_url()?)
}
