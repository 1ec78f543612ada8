#![cfg(target_arch = "wasm32")]
use crate::core::{GalleryConfig, ScanSignal};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod cards;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod particles;
mod render;
mod scanner;
mod stream;

use constants::{CONFIG_ATTR, FIELD_CANVAS_ID, LINE_ID, ROOT_ID, SCANNER_CANVAS_ID, STREAM_ID};
use particles::ParticleField;
use scanner::ScannerRenderer;
use stream::StreamController;

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<Gallery>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    let has_root = dom::window_document()
        .and_then(|d| d.get_element_by_id(ROOT_ID))
        .is_some();
    if !has_root {
        log::info!("[gallery] no #{} on the page; waiting for mount()", ROOT_ID);
        return;
    }
    match mount(ROOT_ID) {
        Ok(gallery) => AUTO_MOUNTED.with(|slot| {
            if let Some(mut old) = slot.borrow_mut().replace(gallery) {
                old.destroy();
            }
        }),
        Err(e) => log::error!("[gallery] auto-mount failed: {:?}", e),
    }
}

/// A mounted gallery. Dropping it or calling `destroy()` tears everything down.
#[wasm_bindgen]
pub struct Gallery {
    stream: Option<StreamController>,
    field: Rc<RefCell<Option<ParticleField>>>,
    scanner: Option<ScannerRenderer>,
    signal: ScanSignal,
    destroyed: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl Gallery {
    /// Stop every loop and timer, unhook listeners, free GPU and canvas
    /// resources. Calling it again does nothing.
    pub fn destroy(&mut self) {
        if self.destroyed.replace(true) {
            return;
        }
        if let Some(mut stream) = self.stream.take() {
            stream.release();
        }
        if let Some(mut field) = self.field.borrow_mut().take() {
            field.release();
        }
        if let Some(mut scanner) = self.scanner.take() {
            scanner.release();
        }
        self.signal.set(false);
        log::info!("[gallery] destroyed");
    }

    /// Whether a card currently crosses the scan band.
    #[wasm_bindgen(getter)]
    pub fn scanning(&self) -> bool {
        self.signal.get()
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Mount the gallery into the element with id `root_id`. Components that
/// fail to start are logged and skipped; the rest still run.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<Gallery, JsValue> {
    let document = dom::document()?;
    let root: web::HtmlElement = dom::element_by_id(&document, root_id, "HTMLElement")?;
    let config = read_config(&root);
    let reduced_motion = config
        .reduced_motion
        .unwrap_or_else(dom::prefers_reduced_motion);
    if reduced_motion {
        log::info!("[gallery] reduced motion: autoplay and drift disabled");
    }

    let signal = ScanSignal::new();
    let destroyed = Rc::new(Cell::new(false));

    // Stream first: its frame writes the signal the scanner reads.
    let stream = start_stream(&document, &config, signal.clone(), reduced_motion)
        .map_err(|e| log::error!("[gallery] stream disabled: {:#}", e))
        .ok();

    let field = Rc::new(RefCell::new(None));
    {
        let slot = field.clone();
        let destroyed = destroyed.clone();
        let document = document.clone();
        let params = config.field.clone();
        spawn_local(async move {
            match start_field(&document, params, reduced_motion).await {
                Ok(mut f) => {
                    if destroyed.get() {
                        f.release();
                    } else {
                        *slot.borrow_mut() = Some(f);
                    }
                }
                Err(e) => log::error!("[gallery] field disabled: {:#}", e),
            }
        });
    }

    let scanner = start_scanner(&document, &config, signal.clone(), reduced_motion)
        .map_err(|e| log::error!("[gallery] scanner disabled: {:#}", e))
        .ok();

    log::info!("[gallery] mounted into #{}", root_id);
    Ok(Gallery {
        stream,
        field,
        scanner,
        signal,
        destroyed,
    })
}

fn read_config(root: &web::HtmlElement) -> GalleryConfig {
    let Some(text) = root.get_attribute(CONFIG_ATTR) else {
        return GalleryConfig::default();
    };
    GalleryConfig::from_json(&text).unwrap_or_else(|e| {
        log::warn!("[gallery] ignoring {}: {}", CONFIG_ATTR, e);
        GalleryConfig::default()
    })
}

fn start_stream(
    document: &web::Document,
    config: &GalleryConfig,
    signal: ScanSignal,
    reduced_motion: bool,
) -> anyhow::Result<StreamController> {
    let container = dom::element_by_id(document, STREAM_ID, "HTMLElement")?;
    let line = dom::element_by_id(document, LINE_ID, "HTMLElement")?;
    Ok(StreamController::init(container, line, config, signal, reduced_motion)?)
}

async fn start_field(
    document: &web::Document,
    params: crate::core::FieldParams,
    reduced_motion: bool,
) -> anyhow::Result<ParticleField> {
    let canvas = dom::element_by_id(document, FIELD_CANVAS_ID, "HTMLCanvasElement")?;
    Ok(ParticleField::init(canvas, params, reduced_motion).await?)
}

fn start_scanner(
    document: &web::Document,
    config: &GalleryConfig,
    signal: ScanSignal,
    reduced_motion: bool,
) -> anyhow::Result<ScannerRenderer> {
    let canvas = dom::element_by_id(document, SCANNER_CANVAS_ID, "HTMLCanvasElement")?;
    Ok(ScannerRenderer::init(
        canvas,
        config.scanner.clone(),
        signal,
        reduced_motion,
    )?)
}
