use crate::core::markup::{CURSOR_BLEND_ID, CURSOR_DOT_ID, CURSOR_ID, CURSOR_PREVIEW_ID};
use crate::core::{preview_offset, CursorState};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    _ = el.set_attribute("style", "");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.set_attribute("style", "display:none");
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    el.get_attribute("style")
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

/// Handles to the blend-mode dot, the floating cursor circle and its image
/// preview.
pub struct CursorOverlay {
    blend: web::HtmlElement,
    root: web::HtmlElement,
    dot: web::HtmlElement,
    preview: web::HtmlElement,
    shown_src: String,
}

impl CursorOverlay {
    pub fn find(document: &web::Document) -> Option<Self> {
        let blend = dom::html_element_by_id(document, CURSOR_BLEND_ID)?;
        let root = dom::html_element_by_id(document, CURSOR_ID)?;
        let dot = dom::html_element_by_id(document, CURSOR_DOT_ID)?;
        let preview = dom::html_element_by_id(document, CURSOR_PREVIEW_ID)?;
        Some(Self {
            blend,
            root,
            dot,
            preview,
            shown_src: String::new(),
        })
    }

    /// Push cursor state plus the current transition values to the DOM.
    pub fn apply(&mut self, cursor: &CursorState, scale: f32, preview_opacity: f32) {
        let origin = cursor.overlay_origin();
        let translate = format!("translate({}px, {}px)", origin.x, origin.y);
        dom::set_style(&self.blend, "transform", &translate);
        dom::set_style(&self.root, "transform", &translate);
        dom::set_style(&self.dot, "transform", &format!("scale({:.3})", scale));

        if !cursor.hovering() || cursor.preview.is_empty() {
            if !is_hidden(&self.preview) {
                hide(&self.preview);
            }
            self.shown_src.clear();
            return;
        }
        if self.shown_src != cursor.preview {
            _ = self.preview.set_attribute("src", &cursor.preview);
            self.shown_src.clone_from(&cursor.preview);
        }
        if is_hidden(&self.preview) {
            show(&self.preview);
            let offset = preview_offset();
            dom::set_style(&self.preview, "left", &format!("{}px", offset.x));
            dom::set_style(&self.preview, "top", &format!("{}px", offset.y));
        }
        dom::set_style(&self.preview, "opacity", &format!("{:.3}", preview_opacity));
    }
}
