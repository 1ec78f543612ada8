use crate::core::{FieldParams, FieldState, Teardown};
use crate::dom::{self, Listener};
use crate::error::GalleryError;
use crate::frame::AnimationLoop;
use crate::render::FieldGpu;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct FieldInner {
    state: FieldState,
    gpu: FieldGpu,
    canvas: web::HtmlCanvasElement,
    height: f32,
}

impl FieldInner {
    fn resize(&mut self) {
        let width = dom::viewport_width();
        let (w_px, h_px) = dom::size_canvas(&self.canvas, width, self.height, dom::device_pixel_ratio());
        self.state.resize(width);
        self.gpu.resize(w_px, h_px);
    }
}

/// Drifting backdrop points drawn through WebGPU.
pub struct ParticleField {
    inner: Rc<RefCell<FieldInner>>,
    frame: Option<AnimationLoop>,
    listeners: Vec<Listener>,
    teardown: Teardown,
}

impl ParticleField {
    /// Size the canvas, bring up the GPU and start drawing. With reduced
    /// motion the points are drawn but never advanced.
    pub async fn init(
        canvas: web::HtmlCanvasElement,
        params: FieldParams,
        reduced_motion: bool,
    ) -> Result<Self, GalleryError> {
        let width = dom::viewport_width();
        let height = params.height;
        dom::size_canvas(&canvas, width, height, dom::device_pixel_ratio());
        let gpu = FieldGpu::new(&canvas, params.point_count).await?;
        let state = FieldState::new(params, width, rand::random());
        log::info!(
            "[field] {} points over {:.0}x{:.0}",
            state.points().len(),
            width,
            height
        );

        let inner = Rc::new(RefCell::new(FieldInner {
            state,
            gpu,
            canvas,
            height,
        }));

        let frame_inner = inner.clone();
        let frame = AnimationLoop::start(move |dt| {
            let mut f = frame_inner.borrow_mut();
            if !reduced_motion {
                f.state.step(dt);
            }
            let FieldInner { state, gpu, .. } = &mut *f;
            gpu.render(state.points(), state.half_extent());
        });

        let mut listeners = Vec::new();
        if let Some(window) = web::window() {
            let resize_inner = inner.clone();
            listeners.push(Listener::new(&window, "resize", move |_: web::Event| {
                resize_inner.borrow_mut().resize();
            }));
        }

        Ok(Self {
            inner,
            frame: Some(frame),
            listeners,
            teardown: Teardown::default(),
        })
    }

    pub fn release(&mut self) {
        if !self.teardown.begin() {
            return;
        }
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
        self.listeners.clear();
        self.inner.borrow_mut().state.release();
        log::info!("[field] released");
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        self.release();
    }
}
