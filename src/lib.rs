#![cfg(target_arch = "wasm32")]
use sanae_core::overlay::{MountWhen, OverlayConfig};
use sanae_core::MarkerClasses;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod overlay;
mod toggle;
mod typewriter;

pub use toggle::{
    init_toggle_section, init_toggle_section_by_query, init_toggle_sections_all,
    init_toggle_sections_by_class,
};
pub use typewriter::{active_animation_count, delay_print};

fn mount_overlay(document: web::Document) {
    if let Err(e) = overlay::LoadingOverlay::mount(document, OverlayConfig::default()) {
        log::error!("[overlay] mount failed: {:?}", e);
    }
}

/// Show the loading overlay until the page and its text animations finish.
/// Pages opt in by calling this; it mounts on DOMContentLoaded, or at once if
/// the document has already been parsed.
#[wasm_bindgen(js_name = mountLoadingOverlay)]
pub fn mount_loading_overlay() {
    let Some(document) = dom::window_document() else {
        log::error!("[overlay] no document");
        return;
    };
    match MountWhen::for_ready_state(&document.ready_state()) {
        MountWhen::Now => mount_overlay(document),
        MountWhen::OnContentLoaded => {
            let doc = document.clone();
            dom::add_listener(
                &document,
                constants::DOM_CONTENT_LOADED,
                Box::new(move || mount_overlay(doc.clone())),
            );
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sanae-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::install_marker_styles(&document, &MarkerClasses::default())?;
    Ok(())
}
