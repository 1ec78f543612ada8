use crate::dom::{self, Listener};
use crate::stream::StreamInner;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub(super) fn wire(
    inner: &Rc<RefCell<StreamInner>>,
    line: &web::HtmlElement,
    document: &web::Document,
) -> Vec<Listener> {
    let mut out = Vec::with_capacity(8);

    let i = inner.clone();
    out.push(Listener::new(line, "mousedown", move |ev: web::MouseEvent| {
        ev.prevent_default();
        begin_drag(&i, ev.client_x() as f32);
    }));
    let i = inner.clone();
    out.push(Listener::new(document, "mousemove", move |ev: web::MouseEvent| {
        if drag_to(&i, ev.client_x() as f32) {
            ev.prevent_default();
        }
    }));
    let i = inner.clone();
    out.push(Listener::new(document, "mouseup", move |_: web::MouseEvent| {
        end_drag(&i);
    }));

    let i = inner.clone();
    out.push(Listener::active(line, "touchstart", move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            ev.prevent_default();
            begin_drag(&i, t.client_x() as f32);
        }
    }));
    let i = inner.clone();
    out.push(Listener::active(document, "touchmove", move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            if drag_to(&i, t.client_x() as f32) {
                ev.prevent_default();
            }
        }
    }));
    let i = inner.clone();
    out.push(Listener::new(document, "touchend", move |_: web::TouchEvent| {
        end_drag(&i);
    }));

    // Keep text selection and native image drag out of the way.
    for name in ["selectstart", "dragstart"] {
        out.push(Listener::new(line, name, |ev: web::Event| ev.prevent_default()));
    }
    out
}

fn begin_drag(inner: &Rc<RefCell<StreamInner>>, x: f32) {
    let mut s = inner.borrow_mut();
    let rendered = dom::rendered_translate_x(&s.line);
    s.state.begin_drag(x, rendered);
    _ = s.line.class_list().add_1("dragging");
    set_body_drag_style(true);
}

fn drag_to(inner: &Rc<RefCell<StreamInner>>, x: f32) -> bool {
    let mut s = inner.borrow_mut();
    if !s.state.drag_to(x) {
        return false;
    }
    s.render();
    true
}

fn end_drag(inner: &Rc<RefCell<StreamInner>>) {
    let mut s = inner.borrow_mut();
    if !s.state.end_drag() {
        return;
    }
    _ = s.line.class_list().remove_1("dragging");
    set_body_drag_style(false);
    log::debug!(
        "[input] release: velocity {:.1} direction {}",
        s.state.velocity,
        s.state.direction
    );
}

fn set_body_drag_style(dragging: bool) {
    let Some(body) = dom::window_document().and_then(|d| d.body()) else {
        return;
    };
    let (select, cursor) = if dragging { ("none", "grabbing") } else { ("", "") };
    dom::set_style(&body, "user-select", select);
    dom::set_style(&body, "cursor", cursor);
}
