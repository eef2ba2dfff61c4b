//! Client-side (WASM) library for the Drunken TowerFall tournament viewer.

pub mod api;
pub mod app;
pub mod effects;
pub mod models;
pub mod router;
pub mod store;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use {
    eframe::{AppCreator, WebOptions, WebRunner},
    egui_extras::install_image_loaders,
    wasm_bindgen_futures::spawn_local,
    web_sys::HtmlCanvasElement,
};

#[wasm_bindgen]
extern "C" {
    /// JavaScript console.log binding for debug output
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// println! alternative that reaches the browser console even before the
/// tracing subscriber is installed.
#[macro_export]
macro_rules! sprintln {
	($($arg:tt)*) => {{
		$crate::log(format!($($arg)*).as_str());
	}};
}

#[cfg(target_arch = "wasm32")]
pub fn start_app(canvas: HtmlCanvasElement, init: AppCreator<'static>) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Forward tracing::info!/warn!/error! to the browser console.
    tracing_wasm::set_as_global_default();

    let web_options = WebOptions::default();
    spawn_local(async move {
        if let Err(e) = WebRunner::new().start(canvas, web_options, init).await {
            // Avoid panicking inside the wasm task; log instead
            crate::sprintln!("Failed to start eframe: {:?}", e);
        }
    });
    Ok(())
}

/// Entry point invoked by the host page. The canvas is the element the
/// page mounts as `app`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let init = Box::new(|cc: &eframe::CreationContext| {
        install_image_loaders(&cc.egui_ctx);
        let app: Box<dyn eframe::App> = Box::new(app::App::new());
        Ok(app)
    });
    start_app(canvas, init)
}

/// Install a fmt subscriber for native builds (tests and tools). The wasm
/// build installs tracing-wasm in `start_app` instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
