//! WASM entry point: logging setup, mounting, and listener wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page templates render the chrome markup; this module finds it once the
//! document is parsed, builds a [`ControllerCore`] over the live elements and
//! `localStorage`, and forwards clicks to it. Deferred overlay reveals are
//! scheduled on a `gloo-timers` timeout.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::config::ChromeConfig;
use crate::consts;
use crate::controller::{Action, ControllerCore, Event};
use crate::dom::DomSurface;
use crate::error::ChromeError;
use crate::storage::LocalStore;
use crate::surface::Part;

type Shared = Rc<RefCell<ControllerCore<LocalStore, DomSurface>>>;

/// Module start hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(consts::LOG_LEVEL).is_err() {
        log::debug!("console logger already installed");
    }

    let result = web_sys::window()
        .ok_or(ChromeError::NoWindow)
        .and_then(when_ready);
    if let Err(e) = result {
        log::error!("site chrome disabled: {e}");
    }
}

/// Mount now if the document is parsed, otherwise on `DOMContentLoaded`.
fn when_ready(window: Window) -> Result<(), ChromeError> {
    let document = window.document().ok_or(ChromeError::NoDocument)?;
    if document.ready_state() != "loading" {
        return mount(&window, &document);
    }

    let target = document.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = mount(&window, &target) {
            log::error!("site chrome disabled: {e}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(|e| ChromeError::Dom(format!("listen DOMContentLoaded: {e:?}")))?;
    on_ready.forget();
    Ok(())
}

fn mount(window: &Window, document: &Document) -> Result<(), ChromeError> {
    let config = ChromeConfig::from_document(document)?;
    let surface = DomSurface::resolve(document, &config.ids)?;
    let toggle = surface.element(Part::ThemeToggle)?.clone();
    let open = surface.element(Part::MenuOpen)?.clone();
    let close = surface.element(Part::MenuClose)?.clone();

    let system_dark = config.follow_system_scheme && prefers_dark(window);
    let fade_delay_ms = config.fade_delay_ms;
    let mut core = ControllerCore::new(config, LocalStore::from_window(window), surface).with_system_hint(system_dark);
    let theme = core.initialize()?;

    let shared: Shared = Rc::new(RefCell::new(core));
    listen(&toggle, &shared, Event::ToggleTheme, fade_delay_ms)?;
    listen(&open, &shared, Event::OpenMenu, fade_delay_ms)?;
    listen(&close, &shared, Event::CloseMenu, fade_delay_ms)?;

    log::info!("site chrome mounted (theme={theme:?})");
    Ok(())
}

fn prefers_dark(window: &Window) -> bool {
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("prefers-color-scheme query threw: {e:?}");
            false
        }
    }
}

/// Forward clicks on `target` to the controller as `event`.
fn listen(target: &Element, shared: &Shared, event: Event, fade_delay_ms: u32) -> Result<(), ChromeError> {
    let controller = Rc::clone(shared);
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        dispatch(&controller, event, fade_delay_ms);
    });
    target
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(|e| ChromeError::Dom(format!("listen click for {event:?}: {e:?}")))?;
    on_click.forget();
    Ok(())
}

fn dispatch(shared: &Shared, event: Event, fade_delay_ms: u32) {
    let outcome = match shared.try_borrow_mut() {
        Ok(mut core) => core.handle(event),
        Err(_) => {
            log::warn!("controller busy; dropped {event:?}");
            return;
        }
    };
    match outcome {
        Ok(Action::None) => {}
        Ok(Action::ScheduleReveal(ticket)) => {
            let controller = Rc::clone(shared);
            Timeout::new(fade_delay_ms, move || {
                dispatch(&controller, Event::RevealOverlay(ticket), fade_delay_ms);
            })
            .forget();
        }
        Err(e) => log::error!("{event:?} failed: {e}"),
    }
}
