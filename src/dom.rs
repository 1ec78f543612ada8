use crate::error::GalleryError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn document() -> Result<web::Document, GalleryError> {
    window_document().ok_or(GalleryError::NoDocument)
}

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(
    document: &web::Document,
    id: &str,
    expected: &'static str,
) -> Result<T, GalleryError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GalleryError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| GalleryError::WrongElement {
            id: id.to_string(),
            expected,
        })
}

pub fn create<T: JsCast>(document: &web::Document, tag: &str) -> Result<T, GalleryError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| GalleryError::Js(format!("<{tag}> has unexpected type")))
}

pub fn create_div(document: &web::Document, class: &str) -> Result<web::HtmlElement, GalleryError> {
    let el: web::HtmlElement = create(document, "div")?;
    el.set_class_name(class);
    Ok(el)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, GalleryError> {
    canvas
        .get_context("2d")?
        .ok_or(GalleryError::NoCanvasContext)?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| GalleryError::NoCanvasContext)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_size_px(el: &web::HtmlElement, width: f32, height: f32) {
    set_style(el, "width", &format!("{width}px"));
    set_style(el, "height", &format!("{height}px"));
}

pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(1.0)
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Horizontal translation actually on screen, from the computed transform.
pub fn rendered_translate_x(el: &web::Element) -> Option<f32> {
    let style = web::window()?.get_computed_style(el).ok().flatten()?;
    let transform = style.get_property_value("transform").ok()?;
    if transform.is_empty() || transform == "none" {
        return None;
    }
    let matrix = web::DomMatrix::new_with_transform_list(&transform).ok()?;
    Some(matrix.m41() as f32)
}

/// Size a canvas to `css_width` x `css_height` CSS pixels with a backing
/// store scaled by `pixel_ratio`.
pub fn size_canvas(
    canvas: &web::HtmlCanvasElement,
    css_width: f32,
    css_height: f32,
    pixel_ratio: f64,
) -> (u32, u32) {
    let w_px = ((css_width as f64 * pixel_ratio) as u32).max(1);
    let h_px = ((css_height as f64 * pixel_ratio) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    set_size_px(canvas, css_width, css_height);
    (w_px, h_px)
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Self
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        Self::register(target, event, handler, None)
    }

    /// Registered with `passive: false` so the handler may `prevent_default`
    /// on touch and wheel events.
    pub fn active<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Self
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        Self::register(target, event, handler, Some(opts))
    }

    fn register<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: F,
        opts: Option<web::AddEventListenerOptions>,
    ) -> Self
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let cb = closure.as_ref().unchecked_ref();
        let res = match opts {
            Some(o) => target
                .add_event_listener_with_callback_and_add_event_listener_options(event, cb, &o),
            None => target.add_event_listener_with_callback(event, cb),
        };
        if let Err(e) = res {
            log::warn!("[dom] addEventListener({event}) failed: {:?}", e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
