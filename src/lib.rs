#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Pannable, zoomable fragment-shader view for a browser canvas.
//!
//! The view logic (`view`, `input`, `frame`) is platform-neutral and builds
//! on the host. The WebGL2 plumbing only compiles for wasm32.

pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod view;

pub use config::{Config, ViewConfig};
pub use error::{ConfigError, SetupError};
pub use frame::{Animation, FrameClock, FrameUniforms, Renderer, Scheduler, Viewer};
pub use input::{normalized_pointer, ClientRect, DragState, InputController, PointerUniform, Surface};
pub use view::{Smoothed, ViewState};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    use crate::config::Config;
    use crate::error::SetupError;

    mod fetch;
    mod render;
    mod shader;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let config = Config::default();
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| SetupError::CanvasNotFound(config.canvas_id.clone()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| SetupError::NotACanvas(config.canvas_id.clone()))?;

        let dataset = canvas.dataset();
        let config = config.with_overrides(dataset.get("vertex"), dataset.get("fragment"));
        config.validate().map_err(SetupError::from)?;
        log::info!("shader view starting on #{}", config.canvas_id);

        // Shader sources arrive asynchronously; report setup failures instead
        // of leaving a blank canvas.
        spawn_local(async move {
            if let Err(err) = render::start(canvas, config).await {
                log::error!("setup failed: {err}");
            }
        });
        Ok(())
    }
}
