use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling `requestAnimationFrame` loop owned by one component.
///
/// The handler receives the seconds elapsed since the previous frame (0 on
/// the first). `cancel` stops rescheduling, cancels the pending frame and
/// drops the closure; it is a no-op the second time.
pub struct AnimationLoop {
    tick: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut(f32) + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        let mut last_ms: Option<f64> = None;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            let dt = last_ms.map(|t| ((now_ms - t) / 1000.0) as f32).unwrap_or(0.0);
            last_ms = Some(now_ms);
            frame(dt.max(0.0));
            if running_tick.get() {
                handle_tick.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut(f64)>));

        handle.set(request_frame(&tick));
        Self {
            tick,
            handle,
            running,
        }
    }

    pub fn cancel(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference back to its own slot.
        drop(self.tick.borrow_mut().take());
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// `setInterval` wrapper cleared on `cancel` or drop.
pub struct IntervalTimer {
    handle: Cell<Option<i32>>,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn start(period_ms: i32, handler: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let w = web::window()?;
        let id = w
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms.max(1),
            )
            .map_err(|e| log::warn!("[frame] setInterval failed: {:?}", e))
            .ok()?;
        Some(Self {
            handle: Cell::new(Some(id)),
            _closure: closure,
        })
    }

    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Fire `handler` once after `delay_ms`. The closure frees itself after it runs.
pub fn after(delay_ms: i32, handler: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(handler);
    _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}
