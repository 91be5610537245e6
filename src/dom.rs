use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`. Events that do not cast to
    /// `E` are ignored.
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        capture: bool,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: JsCast + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let func: &js_sys::Function = callback.as_ref().unchecked_ref();
        if target
            .add_event_listener_with_callback_and_bool(event, func, capture)
            .is_err()
        {
            log::warn!("[dom] failed to add '{}' listener", event);
        }
        Self {
            target: target.clone(),
            event,
            capture,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let func: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        _ = self
            .target
            .remove_event_listener_with_callback_and_bool(self.event, func, self.capture);
    }
}
