pub mod click;
pub mod pointer;
pub mod scroll;

use crate::core::PageState;
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedState = Rc<RefCell<PageState>>;

pub use click::*;
pub use pointer::*;
pub use scroll::*;

/// Register every page listener. This is the only place listeners are
/// created; dropping the returned handles removes all of them.
pub fn wire_all(
    window: &web::Window,
    document: &web::Document,
    state: &SharedState,
) -> Vec<Listener> {
    let mut listeners = Vec::new();
    listeners.extend(wire_pointer_tracking(window, document, state));
    listeners.extend(wire_scroll_tracking(window, document, state));
    listeners.extend(wire_project_clicks(document, state));
    listeners.extend(wire_contact_form(document));
    listeners
}
