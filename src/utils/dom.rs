// ============================================================================
// DOM HELPERS - dialogs, history and window listeners
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Event};

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Blocking `window.confirm`; false when no window is available
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Seconds since the epoch, as compared against a JWT `exp`
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `history.pushState` (replace = false) or `history.replaceState`
pub fn set_history_path(path: &str, replace: bool) {
    let Some(history) = window().and_then(|win| win.history().ok()) else {
        log::warn!("⚠️ History API not available");
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        log::error!("❌ Could not update history to {}: {:?}", path, e);
    }
}

/// Window event listener removed on drop
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let win = window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        if let Err(e) = win.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::error!("❌ Could not listen to '{}': {:?}", event, e);
            return None;
        }
        Some(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
