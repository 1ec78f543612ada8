use crate::dom::Listener;
use crate::stream::StreamInner;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub(super) fn wire(inner: &Rc<RefCell<StreamInner>>, line: &web::HtmlElement) -> Listener {
    let inner = inner.clone();
    Listener::active(line, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let mut s = inner.borrow_mut();
        if s.state.wheel(ev.delta_y() as f32) {
            s.render();
        }
    })
}
