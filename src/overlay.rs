//! Loading overlay shown from DOMContentLoaded until the page has fully
//! loaded and the typewriter text is done.

use crate::constants::*;
use crate::dom::{js_error, set_timeout};
use crate::typewriter;
use instant::Instant;
use sanae_core::overlay::{
    fragment_allowed, ready_to_dismiss, OverlayConfig, OverlayLifecycle, OverlayPhase, CONCEAL_ID,
    CONTENT_ID, FILE_PROTOCOL_MESSAGE, FONT_CLASS, SUBCONTENT_ID,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Owns every node it creates; nothing is left behind after `Removed`.
pub struct LoadingOverlay {
    document: web::Document,
    config: OverlayConfig,
    container: web::HtmlElement,
    decoration: RefCell<Option<web::HtmlElement>>,
    lifecycle: Cell<OverlayLifecycle>,
    mounted_at: Instant,
}

fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(js_error)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

fn create_line(document: &web::Document, id: &str, style: &str) -> anyhow::Result<web::HtmlElement> {
    let el = create_html(document, "p")?;
    el.set_id(id);
    el.set_class_name(FONT_CLASS);
    el.set_attribute("style", style).map_err(js_error)?;
    Ok(el)
}

impl LoadingOverlay {
    pub fn mount(document: web::Document, config: OverlayConfig) -> anyhow::Result<Rc<Self>> {
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;

        let container = create_html(&document, "div")?;
        container.set_id(CONCEAL_ID);
        container.set_attribute("style", CONCEAL_STYLE).map_err(js_error)?;
        let heading = create_line(&document, CONTENT_ID, CONTENT_STYLE)?;
        let subtext = create_line(&document, SUBCONTENT_ID, SUBCONTENT_STYLE)?;
        container.append_child(&heading).map_err(js_error)?;
        container.append_child(&subtext).map_err(js_error)?;
        body.append_child(&container).map_err(js_error)?;

        let mut lifecycle = OverlayLifecycle::default();
        lifecycle.mount();
        let overlay = Rc::new(Self {
            document,
            config,
            container,
            decoration: RefCell::new(None),
            lifecycle: Cell::new(lifecycle),
            mounted_at: Instant::now(),
        });
        log::info!("[overlay] mounted");

        let protocol = web::window()
            .and_then(|w| w.location().protocol().ok())
            .unwrap_or_default();
        if fragment_allowed(&protocol) {
            let loader = overlay.clone();
            spawn_local(async move {
                if let Err(e) = loader.load_decoration().await {
                    log::error!("[overlay] decoration: {:?}", e);
                }
            });
        } else if let Some(window) = web::window() {
            _ = window.alert_with_message(FILE_PROTOCOL_MESSAGE);
        }

        for print in &overlay.config.prints {
            typewriter::submit(&print.selector(), &print.text, print.interval_ms, print.chain);
        }

        let poller = overlay.clone();
        set_timeout(overlay.config.initial_delay_ms, move || poller.poll());
        Ok(overlay)
    }

    pub fn phase(&self) -> OverlayPhase {
        self.lifecycle.get().phase()
    }

    async fn load_decoration(&self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let url = &self.config.fragment_url;
        let response: web::Response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;
        if !response.ok() {
            anyhow::bail!("GET {} returned {}", url, response.status());
        }
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        // The overlay may already be fading if the fetch was slow.
        if self.phase() != OverlayPhase::Mounted {
            return Ok(());
        }
        let body = self.document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;
        let decoration = create_html(&self.document, "div")?;
        decoration.set_inner_html(&text);
        decoration.set_attribute("style", DECORATION_STYLE).map_err(js_error)?;
        body.append_child(&decoration).map_err(js_error)?;
        *self.decoration.borrow_mut() = Some(decoration);
        Ok(())
    }

    fn poll(self: Rc<Self>) {
        if ready_to_dismiss(&self.document.ready_state(), typewriter::is_idle()) {
            self.unmount();
        } else {
            let again = self.clone();
            set_timeout(self.config.poll_interval_ms, move || again.poll());
        }
    }

    /// Fade the overlay out and drop its nodes after the fade. Calling this
    /// more than once has no further effect.
    pub fn unmount(self: &Rc<Self>) {
        let mut lifecycle = self.lifecycle.get();
        if !lifecycle.begin_fade() {
            return;
        }
        self.lifecycle.set(lifecycle);

        _ = self
            .container
            .style()
            .set_property("animation", CONCEAL_HIDE_ANIMATION);
        if let Some(decoration) = self.decoration.borrow().as_ref() {
            let style = decoration.style();
            _ = style.set_property("transform", DECORATION_EXIT_TRANSFORM);
            _ = style.set_property("opacity", DECORATION_EXIT_OPACITY);
        }

        let overlay = self.clone();
        set_timeout(self.config.fade_ms, move || overlay.remove_nodes());
    }

    fn remove_nodes(&self) {
        let mut lifecycle = self.lifecycle.get();
        if !lifecycle.finish() {
            return;
        }
        self.lifecycle.set(lifecycle);
        self.container.remove();
        if let Some(decoration) = self.decoration.borrow_mut().take() {
            decoration.remove();
        }
        log::info!(
            "[overlay] removed after {} ms",
            self.mounted_at.elapsed().as_millis()
        );
    }
}
