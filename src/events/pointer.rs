use super::SharedState;
use crate::constants::{EV_MOUSE_ENTER, EV_MOUSE_LEAVE, EV_POINTER_MOVE};
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track pointer position on the window and image hover on the whole
/// document. Enter/leave listen in the capture phase so they fire for every
/// nested element, not just the document itself.
pub fn wire_pointer_tracking(
    window: &web::Window,
    document: &web::Document,
    state: &SharedState,
) -> Vec<Listener> {
    vec![
        wire_pointermove(window, state),
        wire_mouseenter(document, state),
        wire_mouseleave(document, state),
    ]
}

fn wire_pointermove(window: &web::Window, state: &SharedState) -> Listener {
    let state = state.clone();
    Listener::new(window, EV_POINTER_MOVE, false, move |ev: web::PointerEvent| {
        state
            .borrow_mut()
            .cursor
            .pointer_move(ev.client_x(), ev.client_y());
    })
}

fn wire_mouseenter(document: &web::Document, state: &SharedState) -> Listener {
    let state = state.clone();
    Listener::new(document, EV_MOUSE_ENTER, true, move |ev: web::MouseEvent| {
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let mut st = state.borrow_mut();
        let was_hovering = st.cursor.hovering();
        st.cursor.pointer_enter(&el.tag_name(), el.get_attribute("src"));
        if !was_hovering && st.cursor.hovering() {
            log::debug!("[cursor] preview {}", st.cursor.preview);
        }
    })
}

fn wire_mouseleave(document: &web::Document, state: &SharedState) -> Listener {
    let state = state.clone();
    Listener::new(document, EV_MOUSE_LEAVE, true, move |_ev: web::MouseEvent| {
        state.borrow_mut().cursor.pointer_leave();
    })
}
