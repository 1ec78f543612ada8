use crate::constants::{CORE_STOPS, HALO_STOPS, SPRITE_SIZE_PX, SPRITE_STOPS};
use crate::core::{LightBar, PassKind, ScanSignal, ScannerParams, ScannerState, Teardown};
use crate::dom::{self, Listener};
use crate::error::GalleryError;
use crate::frame::AnimationLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn white(alpha: f32) -> String {
    format!("rgba(255, 255, 255, {:.3})", alpha.clamp(0.0, 1.0))
}

struct ScannerInner {
    state: ScannerState,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    sprite: web::HtmlCanvasElement,
    signal: ScanSignal,
    width: f32,
}

impl ScannerInner {
    fn resize(&mut self) {
        self.width = dom::viewport_width();
        let dpr = dom::device_pixel_ratio();
        dom::size_canvas(&self.canvas, self.width, self.state.height(), dpr);
        // Resizing the backing store resets the transform.
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.state.resize(self.width);
    }

    fn frame(&mut self) {
        let active = self.signal.get();
        if active != self.state.is_active() {
            log::debug!("[scanner] {}", if active { "active" } else { "idle" });
        }
        self.state.set_active(active);
        self.state.step();

        let h = self.state.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, self.width as f64, h);
        self.draw_bar(&self.state.light_bar());
        self.draw_particles();
    }

    fn draw_bar(&self, bar: &LightBar) {
        if bar.height <= 0.0 {
            return;
        }
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.set_global_composite_operation("lighter");
        let (x, top, height) = (bar.x as f64, bar.top as f64, bar.height as f64);
        for pass in &bar.passes {
            let hw = pass.half_width as f64;
            let gradient = ctx.create_linear_gradient(x - hw, 0.0, x + hw, 0.0);
            let stops: &[(f32, f32)] = match pass.kind {
                PassKind::Core => &CORE_STOPS,
                PassKind::Halo => &HALO_STOPS,
            };
            for &(offset, share) in stops {
                _ = gradient.add_color_stop(offset, &white(share * pass.peak_alpha));
            }
            ctx.set_global_alpha(pass.layer_alpha.clamp(0.0, 1.0) as f64);
            ctx.set_fill_style_canvas_gradient(&gradient);
            capsule(ctx, x - hw, top, hw * 2.0, height, pass.corner_radius as f64);
            ctx.fill();
        }

        // Feather the bar ends.
        _ = ctx.set_global_composite_operation("destination-in");
        ctx.set_global_alpha(1.0);
        let mask = ctx.create_linear_gradient(0.0, top, 0.0, top + height);
        _ = mask.add_color_stop(0.0, &white(0.0));
        _ = mask.add_color_stop(bar.fade_top, &white(1.0));
        _ = mask.add_color_stop(bar.fade_bottom, &white(1.0));
        _ = mask.add_color_stop(1.0, &white(0.0));
        ctx.set_fill_style_canvas_gradient(&mask);
        ctx.fill_rect(0.0, 0.0, self.width as f64, self.state.height() as f64);
        ctx.restore();
    }

    fn draw_particles(&self) {
        let ctx = &self.ctx;
        let fade_zone = self.state.current().fade_zone;
        let height = self.state.height();
        ctx.save();
        _ = ctx.set_global_composite_operation("lighter");
        for p in self.state.particles() {
            let a = p.draw_alpha(fade_zone, height);
            if a <= 0.0 {
                continue;
            }
            let r = p.radius as f64;
            ctx.set_global_alpha(a as f64);
            _ = ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
                &self.sprite,
                p.pos.x as f64 - r,
                p.pos.y as f64 - r,
                r * 2.0,
                r * 2.0,
            );
        }
        ctx.restore();
    }
}

/// Rounded rect with the radius limited to what the box can hold.
fn capsule(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    let r = radius.min(w * 0.5).min(h * 0.5).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    _ = ctx.arc_to(x, y + h, x, y, r);
    _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}

/// Radial glow cached once and stamped for every particle.
fn build_sprite(document: &web::Document) -> Result<web::HtmlCanvasElement, GalleryError> {
    let sprite: web::HtmlCanvasElement = dom::create(document, "canvas")?;
    sprite.set_width(SPRITE_SIZE_PX);
    sprite.set_height(SPRITE_SIZE_PX);
    let ctx = dom::context_2d(&sprite)?;
    let half = SPRITE_SIZE_PX as f64 * 0.5;
    let gradient = ctx.create_radial_gradient(half, half, 0.0, half, half, half)?;
    for (offset, color) in SPRITE_STOPS {
        gradient.add_color_stop(offset, color)?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(half, half, half, 0.0, std::f64::consts::TAU)?;
    ctx.fill();
    Ok(sprite)
}

/// 2D canvas light bar with a particle burst. Follows the `ScanSignal`
/// written by the stream every frame.
pub struct ScannerRenderer {
    inner: Rc<RefCell<ScannerInner>>,
    frame: Option<AnimationLoop>,
    listeners: Vec<Listener>,
    teardown: Teardown,
}

impl ScannerRenderer {
    pub fn init(
        canvas: web::HtmlCanvasElement,
        params: ScannerParams,
        signal: ScanSignal,
        reduced_motion: bool,
    ) -> Result<Self, GalleryError> {
        let document = dom::document()?;
        let ctx = dom::context_2d(&canvas)?;
        let sprite = build_sprite(&document)?;
        let width = dom::viewport_width();
        let mut state = ScannerState::new(params, width, rand::random());
        if reduced_motion {
            state.set_emission(false);
        }

        let mut inner = ScannerInner {
            state,
            canvas,
            ctx,
            sprite,
            signal,
            width,
        };
        inner.resize();
        log::info!(
            "[scanner] {:.0}x{:.0}, {} particles at idle",
            inner.width,
            inner.state.height(),
            inner.state.particles().len()
        );
        let inner = Rc::new(RefCell::new(inner));

        let frame_inner = inner.clone();
        let frame = AnimationLoop::start(move |_dt| frame_inner.borrow_mut().frame());

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
        let mut s = self.inner.borrow_mut();
        s.state.release();
        let h = s.state.height() as f64;
        s.ctx.clear_rect(0.0, 0.0, s.width as f64, h);
        log::info!("[scanner] released");
    }
}

impl Drop for ScannerRenderer {
    fn drop(&mut self) {
        self.release();
    }
}
