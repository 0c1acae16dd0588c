// ============================================================================
// TCE VOLUNTEERS CLIENT - client-side state synchronization (RUST + WASM)
// ============================================================================
// Layers:
// - Models: records shared with the backend
// - Services: ApiClient, ONLY talks HTTP (bearer auth, 401 handling)
// - Stores: collection + loading/error bookkeeping per resource
// - State: reactive handles over the stores, shared by Rc<RefCell>
// - ViewModels: one async operation per user action, run through the dispatcher
// - Navigation: routes and the session guard
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::models::Credentials;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
}

fn current_app() -> Option<Rc<App>> {
    let app = APP.with(|cell| cell.borrow().clone());
    if app.is_none() {
        log::warn!("⚠️ App is not initialized");
    }
    app
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 TCE volunteers client ({})", CONFIG.environment);

    let app = Rc::new(App::browser(&CONFIG));
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    navigate(&path);
    Ok(())
}

/// Enter `path` (guard applied) and load its data in the background
#[wasm_bindgen]
pub fn navigate(path: &str) {
    let Some(app) = current_app() else { return };
    if let Some(route) = app.enter(path) {
        wasm_bindgen_futures::spawn_local(async move {
            app.load(route).await;
        });
    }
}

#[wasm_bindgen]
pub fn login(email: String, password: String) {
    let Some(app) = current_app() else { return };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(message) = app.sign_in(&Credentials::new(email, password)).await {
            log::warn!("⚠️ Login rejected: {}", message);
        }
    });
}

#[wasm_bindgen]
pub fn logout() {
    if let Some(app) = current_app() {
        app.sign_out();
    }
}

#[wasm_bindgen]
pub fn is_logged_in() -> bool {
    current_app().map_or(false, |app| app.auth.is_logged_in())
}

/// Latest error of the named store, for screens rendering outside Rust
#[wasm_bindgen]
pub fn store_error(store: &str) -> Option<String> {
    let app = current_app()?;
    let state = &app.state;
    match store {
        "auth" => state.auth.store.error(),
        "activities" => state.activities.store.error(),
        "bloodRequirements" => state.blood_requirements.error(),
        "attendance" => state.attendance.error(),
        "volunteers" => state.volunteers.error(),
        other => {
            log::warn!("⚠️ Unknown store {}", other);
            None
        }
    }
}
