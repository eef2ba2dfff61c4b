//! Client-side routing for the tournament viewer.
//!
//! History mode only: real URL paths, no hash fragments. The route table
//! itself lives in [`crate::app::screens::ScreenRegistry`]; this module is
//! the browser plumbing.

use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, History, Location};

/// Router for managing client-side navigation and URL synchronization
pub struct Router {
    /// Current path (pathname) observed in the browser
    current_path: String,
    /// Browser history API
    history: History,
    /// Browser location API
    location: Location,
    /// Callback closure for popstate events
    _popstate_callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Router {
    /// Create a new router instance
    pub fn new() -> Result<Self, JsValue> {
        let window = window().ok_or("No window object")?;
        let history = window.history()?;
        let location = window.location();

        let current_path = Self::parse_current_path(&location)?;

        // Back/forward buttons are picked up by polling the location in
        // check_for_url_changes(); the listener only has to exist.
        let popstate_callback =
            Closure::wrap(Box::new(move |_event: web_sys::Event| {}) as Box<dyn FnMut(web_sys::Event)>);
        window.add_event_listener_with_callback(
            "popstate",
            popstate_callback.as_ref().unchecked_ref(),
        )?;

        Ok(Router {
            current_path,
            history,
            location,
            _popstate_callback: popstate_callback,
        })
    }

    /// Parse the current path from browser location
    fn parse_current_path(location: &Location) -> Result<String, JsValue> {
        let pathname = location.pathname()?;
        // Ensure non-empty and always start with '/'
        let p = if pathname.is_empty() {
            "/".to_string()
        } else {
            pathname
        };
        Ok(p)
    }

    /// Get the current path string
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Scroll the viewport back to the origin. Runs synchronously before
    /// every route transition, matching the pre-navigation hook of the
    /// original site.
    pub fn reset_scroll(&self) {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Navigate to a path, pushing it to the browser history.
    pub fn navigate_to_path(&mut self, path: &str) -> Result<(), JsValue> {
        let path = if path.is_empty() { "/" } else { path };
        if path != self.current_path {
            self.reset_scroll();
            self.history
                .push_state_with_url(&JsValue::NULL, "", Some(path))?;
            self.current_path = path.to_string();
            debug!(path, "navigated");
        }
        Ok(())
    }

    /// Check if the URL has changed (back/forward buttons) and update the
    /// current path. Returns true if the path changed.
    pub fn check_for_url_changes(&mut self) -> Result<bool, JsValue> {
        let new_path = Self::parse_current_path(&self.location)?;
        if new_path != self.current_path {
            self.reset_scroll();
            self.current_path = new_path;
            return Ok(true);
        }
        Ok(false)
    }
}
