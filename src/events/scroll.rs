use super::SharedState;
use crate::constants::{EV_RESIZE, EV_SCROLL};
use crate::core::markup::PAGE_ROOT_ID;
use crate::core::{background_hsl, element_progress, page_progress};
use crate::dom::{self, Listener};
use crate::page;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll_tracking(
    window: &web::Window,
    document: &web::Document,
    state: &SharedState,
) -> Vec<Listener> {
    [EV_SCROLL, EV_RESIZE]
        .into_iter()
        .map(|event| {
            let window_cb = window.clone();
            let document_cb = document.clone();
            let state = state.clone();
            Listener::new(window, event, false, move |_ev: web::Event| {
                apply_scroll_effects(&window_cb, &document_cb, &state);
            })
        })
        .collect()
}

/// Recompute page progress, the background hue (on change) and every tracked
/// element's transform/opacity from the current scroll position.
pub fn apply_scroll_effects(window: &web::Window, document: &web::Document, state: &SharedState) {
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let scroll_h = document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0);

    let progress = page_progress(scroll_y, scroll_h, viewport_h);
    // Background only recolours when progress actually moves
    let changed = state.borrow_mut().record_scroll(progress);
    if changed {
        if let Some(root) = dom::html_element_by_id(document, PAGE_ROOT_ID) {
            dom::set_style(&root, "background-color", &background_hsl(progress));
        }
    }

    for (el, kind) in page::tracked_elements(document) {
        let top = layout_top(&el) - scroll_y;
        let height = el.offset_height() as f32;
        let style = kind.style_at(element_progress(top, height, viewport_h));
        dom::set_style(&el, "transform", &style.css_transform());
        dom::set_style(&el, "opacity", &format!("{:.3}", style.opacity));
    }
}

// Document-relative top from layout offsets, so the transforms applied above
// do not feed back into the next measurement.
fn layout_top(el: &web::HtmlElement) -> f32 {
    let mut top = el.offset_top() as f32;
    let mut parent = el.offset_parent();
    while let Some(p) = parent {
        match p.dyn_into::<web::HtmlElement>() {
            Ok(p) => {
                top += p.offset_top() as f32;
                parent = p.offset_parent();
            }
            Err(_) => break,
        }
    }
    top
}
