use crate::constants::TRACKED_SELECTOR;
use crate::core::markup::{self, DETAIL_PANE_ID, PROJECT_ID_ATTR, SELECTED_CLASS, TRACK_ATTR};
use crate::core::{Selection, TrackKind};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn mount(mount_point: &web::Element, selection: &Selection) {
    mount_point.set_inner_html(&markup::page_html(selection));
}

/// Re-render the parts of the page that depend on the selection.
pub fn render_selection(document: &web::Document, selection: &Selection) {
    if let Ok(items) = document.query_selector_all(&markup::track_selector("item")) {
        for i in 0..items.length() {
            let Some(el) = items.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let selected = el
                .get_attribute(PROJECT_ID_ATTR)
                .and_then(|v| v.parse::<u32>().ok())
                .is_some_and(|id| selection.is_selected(id));
            let classes = el.class_list();
            _ = if selected {
                classes.add_1(SELECTED_CLASS)
            } else {
                classes.remove_1(SELECTED_CLASS)
            };
        }
    }
    match document.get_element_by_id(DETAIL_PANE_ID) {
        Some(pane) => pane.set_inner_html(&markup::detail_html(&selection.detail())),
        None => log::warn!("[page] missing #{}", DETAIL_PANE_ID),
    }
}

/// All elements currently carrying a scroll-tracking attribute.
pub fn tracked_elements(document: &web::Document) -> Vec<(web::HtmlElement, TrackKind)> {
    let mut out = Vec::new();
    let Ok(nodes) = document.query_selector_all(TRACKED_SELECTOR) else {
        return out;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        if let Some(kind) = el
            .get_attribute(TRACK_ATTR)
            .as_deref()
            .and_then(TrackKind::from_attr)
        {
            out.push((el, kind));
        }
    }
    out
}
