use crate::dom::Listener;
use crate::stream::StreamInner;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;
mod wheel;

/// Hook up every input source the stream reacts to. Dropping the returned
/// listeners unhooks them again.
pub(crate) fn wire_stream_input(
    inner: &Rc<RefCell<StreamInner>>,
    line: &web::HtmlElement,
    document: &web::Document,
) -> Vec<Listener> {
    let mut listeners = pointer::wire(inner, line, document);
    listeners.push(wheel::wire(inner, line));
    if let Some(window) = web::window() {
        let inner = inner.clone();
        listeners.push(Listener::new(&window, "resize", move |_: web::Event| {
            inner.borrow_mut().remeasure();
        }));
    }
    listeners
}
