#![cfg(target_arch = "wasm32")]
use crate::core::PageState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod page;

/// Everything that must be released on teardown: every listener from
/// `events::wire_all` and the animation frame loop.
struct MountedApp {
    _listeners: Vec<dom::Listener>,
    _frame_loop: frame::FrameLoop,
}

thread_local! {
    static APP: RefCell<Option<MountedApp>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");
    mount();
    Ok(())
}

/// Render the page into `#app` and register all listeners. No-op if already
/// mounted.
#[wasm_bindgen]
pub fn mount() {
    if APP.with(|app| app.borrow().is_some()) {
        log::warn!("[mount] already mounted; ignoring");
        return;
    }
    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

/// Remove every listener registered by `events::wire_all` and cancel the
/// frame loop, by dropping the mounted app.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("[mount] unmounted");
    }
}

fn init() -> anyhow::Result<MountedApp> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mount_point = document
        .get_element_by_id(constants::MOUNT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::MOUNT_ID))?;

    let state = Rc::new(RefCell::new(PageState::default()));
    page::mount(&mount_point, &state.borrow().selection);

    let listeners = events::wire_all(&window, &document, &state);

    // Initial pass so tracked elements start in their scroll-derived pose
    events::apply_scroll_effects(&window, &document, &state);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(&document, state)));
    let frame_loop = frame::FrameLoop::start(frame_ctx);

    log::info!(
        "[mount] {} projects, {} listeners",
        crate::core::PROJECTS.len(),
        listeners.len()
    );
    Ok(MountedApp {
        _listeners: listeners,
        _frame_loop: frame_loop,
    })
}
