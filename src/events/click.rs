use super::{apply_scroll_effects, SharedState};
use crate::constants::{EV_CLICK, EV_SUBMIT};
use crate::core::markup::{CONTACT_FORM_ID, PROJECT_ID_ATTR, PROJECT_LIST_ID};
use crate::dom::Listener;
use crate::page;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One delegated click listener on the project list.
pub fn wire_project_clicks(document: &web::Document, state: &SharedState) -> Option<Listener> {
    let list = document.get_element_by_id(PROJECT_LIST_ID)?;
    let document = document.clone();
    let state = state.clone();
    Some(Listener::new(&list, EV_CLICK, false, move |ev: web::MouseEvent| {
        let Some(id) = clicked_project_id(&ev) else {
            return;
        };
        let changed = state.borrow_mut().selection.select(id);
        if !changed {
            return;
        }
        {
            let st = state.borrow();
            if let Some(p) = st.selection.current() {
                log::info!("[select] project {} \"{}\"", p.id, p.title);
            }
            page::render_selection(&document, &st.selection);
        }
        if let Some(window) = web::window() {
            apply_scroll_effects(&window, &document, &state);
        }
    }))
}

fn clicked_project_id(ev: &web::MouseEvent) -> Option<u32> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let entry = target
        .closest(&format!("button[{}]", PROJECT_ID_ATTR))
        .ok()??;
    entry.get_attribute(PROJECT_ID_ATTR)?.parse().ok()
}

/// The contact form has no endpoint; swallow the submit.
pub fn wire_contact_form(document: &web::Document) -> Option<Listener> {
    let form = document.get_element_by_id(CONTACT_FORM_ID)?;
    Some(Listener::new(&form, EV_SUBMIT, false, |ev: web::Event| {
        ev.prevent_default();
        log::info!("[contact] submit ignored: no endpoint configured");
    }))
}
