use crate::core::constants::{PLACEHOLDER_FADE_SEC, SPRING_MAX_FRAME_SEC};
use crate::core::markup::{DETAIL_PLACEHOLDER_ID, PROGRESS_BAR_ID};
use crate::core::{CursorAnim, Spring, SpringConfig, Tween};
use crate::dom;
use crate::events::SharedState;
use crate::overlay::CursorOverlay;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame animation state: everything that eases over time rather than
/// snapping on the triggering event.
pub struct FrameContext {
    pub state: SharedState,
    pub document: web::Document,
    pub progress_bar: Option<web::HtmlElement>,
    pub cursor: Option<CursorOverlay>,

    pub progress_spring: Spring,
    pub cursor_anim: CursorAnim,
    pub placeholder_opacity: Tween,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(document: &web::Document, state: SharedState) -> Self {
        let initial_progress = state.borrow().scroll_progress;
        Self {
            state,
            document: document.clone(),
            progress_bar: dom::html_element_by_id(document, PROGRESS_BAR_ID),
            cursor: CursorOverlay::find(document),
            progress_spring: Spring::new(SpringConfig::default(), initial_progress),
            cursor_anim: CursorAnim::default(),
            placeholder_opacity: Tween::fade_in(PLACEHOLDER_FADE_SEC),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(SPRING_MAX_FRAME_SEC);
        self.last_instant = now;

        let st = self.state.borrow();

        // Header progress bar follows the raw scroll progress through the spring
        self.progress_spring.set_target(st.scroll_progress);
        let bar = self.progress_spring.step(dt_sec);
        if let Some(el) = &self.progress_bar {
            dom::set_style(el, "transform", &format!("scaleX({:.4})", bar));
        }

        // Cursor scale and preview fade
        let (scale, opacity) = self.cursor_anim.step(&st.cursor, dt_sec);
        if let Some(cursor) = &mut self.cursor {
            cursor.apply(&st.cursor, scale, opacity);
        }

        // Placeholder fade-in; only present until a project is selected
        if !self.placeholder_opacity.is_done() {
            let value = self.placeholder_opacity.advance(dt_sec);
            if let Some(el) = dom::html_element_by_id(&self.document, DETAIL_PLACEHOLDER_ID) {
                dom::set_style(&el, "opacity", &format!("{:.3}", value));
            }
        }
    }
}

/// A running `requestAnimationFrame` loop; cancelled when dropped.
pub struct FrameLoop {
    handle: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let handle = Rc::new(Cell::new(0));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_ctx.borrow_mut().frame();
            if let Some(next) = tick_clone.borrow().as_ref() {
                handle_clone.set(request_frame(next));
            }
        }) as Box<dyn FnMut()>));
        if let Some(first) = tick.borrow().as_ref() {
            handle.set(request_frame(first));
        }
        Self { handle, tick }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.handle.get());
        }
        // Dropping the closure breaks its self-reference.
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> i32 {
    web::window()
        .and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
        .unwrap_or(0)
}
