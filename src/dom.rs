use sanae_core::{timeout_ms, DomTree, Error, MarkerClasses, MARKER_STYLE_ID};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_error(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        log::error!("set_timeout: no window");
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), timeout_ms(ms))
    {
        log::error!("set_timeout failed: {:?}", e);
    }
}

/// Register a listener on `target` that lives as long as the page.
pub fn add_listener(target: &web::EventTarget, event: &str, handler: Box<dyn FnMut()>) {
    let closure = Closure::wrap(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

/// Inject the hover glyph stylesheet for the marker classes once.
pub fn install_marker_styles(document: &web::Document, markers: &MarkerClasses) -> anyhow::Result<()> {
    if document.get_element_by_id(MARKER_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style").map_err(js_error)?;
    style.set_id(MARKER_STYLE_ID);
    style.set_text_content(Some(&markers.stylesheet()));
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    head.append_child(&style).map_err(js_error)?;
    Ok(())
}

/// `DomTree` over the live document.
#[derive(Clone)]
pub struct WebDom {
    document: web::Document,
}

impl WebDom {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    pub fn current() -> anyhow::Result<Self> {
        window_document()
            .map(Self::new)
            .ok_or_else(|| anyhow::anyhow!("no document"))
    }
}

impl DomTree for WebDom {
    type Node = web::Element;

    fn query_all(&self, selector: &str) -> sanae_core::Result<Vec<web::Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| Error::invalid_selector(selector, format!("{:?}", e)))?;
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect())
    }

    fn query_first_in(
        &self,
        scope: &web::Element,
        selector: &str,
    ) -> sanae_core::Result<Option<web::Element>> {
        scope
            .query_selector(selector)
            .map_err(|e| Error::invalid_selector(selector, format!("{:?}", e)))
    }

    fn next_element_sibling(&self, node: &web::Element) -> Option<web::Element> {
        node.next_element_sibling()
    }

    fn has_class(&self, node: &web::Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&self, node: &web::Element, class: &str, present: bool) {
        _ = node.class_list().toggle_with_force(class, present);
    }

    fn has_attribute(&self, node: &web::Element, name: &str) -> bool {
        node.has_attribute(name)
    }

    fn set_attribute(&self, node: &web::Element, name: &str, value: &str) {
        _ = node.set_attribute(name, value);
    }

    fn display(&self, node: &web::Element) -> String {
        node.dyn_ref::<web::HtmlElement>()
            .and_then(|el| el.style().get_property_value("display").ok())
            .unwrap_or_default()
    }

    fn set_display(&self, node: &web::Element, value: &str) {
        match node.dyn_ref::<web::HtmlElement>() {
            Some(el) => {
                _ = el.style().set_property("display", value);
            }
            None => log::warn!("[toggle] {} has no inline style", self.describe(node)),
        }
    }

    fn add_click_listener(&self, node: &web::Element, handler: Box<dyn FnMut()>) {
        add_listener(node, crate::constants::CLICK, handler);
    }

    fn describe(&self, node: &web::Element) -> String {
        let mut label = node.tag_name().to_ascii_lowercase();
        let id = node.id();
        if !id.is_empty() {
            label.push('#');
            label.push_str(&id);
        }
        for class in node.class_name().split_whitespace() {
            label.push('.');
            label.push_str(class);
        }
        label
    }
}
