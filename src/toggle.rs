//! JS entry points for expand/collapse sections.
//!
//! None of these throw: discovery problems are logged and the affected
//! elements are left alone.

use crate::dom::WebDom;
use sanae_core::{report, ClassConvention, SectionConvention, ToggleController};
use wasm_bindgen::prelude::*;
use web_sys as web;

fn controller() -> Option<ToggleController<WebDom>> {
    match WebDom::current() {
        Ok(dom) => Some(ToggleController::new(dom)),
        Err(e) => {
            log::error!("[toggle] {:?}", e);
            None
        }
    }
}

#[wasm_bindgen(js_name = initToggleSection)]
pub fn init_toggle_section(title: web::Element, target: web::Element, init_hide: Option<bool>) {
    if let Some(ctl) = controller() {
        ctl.init_section(title, target, init_hide.unwrap_or(true));
    }
}

#[wasm_bindgen(js_name = initToggleSectionByQuery)]
pub fn init_toggle_section_by_query(title_query: &str, target_query: &str, init_hide: Option<bool>) {
    let Some(ctl) = controller() else { return };
    match ctl.init_by_query(title_query, target_query, init_hide.unwrap_or(true)) {
        Ok(n) => log::debug!("[toggle] bound {} by query", n),
        Err(e) => report("initToggleSectionByQuery", &e),
    }
}

#[wasm_bindgen(js_name = initToggleSectionsAll)]
pub fn init_toggle_sections_all(init_hide: Option<bool>) {
    let Some(ctl) = controller() else { return };
    match ctl.init_all(&SectionConvention::default(), init_hide.unwrap_or(true)) {
        Ok(n) => log::debug!("[toggle] bound {} sections", n),
        Err(e) => report("initToggleSectionsAll", &e),
    }
}

#[wasm_bindgen(js_name = initToggleSectionsByClass)]
pub fn init_toggle_sections_by_class(
    title_class: Option<String>,
    target_class: Option<String>,
    init_hide: Option<bool>,
) {
    let Some(ctl) = controller() else { return };
    let convention = ClassConvention::new(title_class, target_class);
    match ctl.init_by_class(&convention, init_hide.unwrap_or(true)) {
        Ok(n) => log::debug!("[toggle] bound {} by class", n),
        Err(e) => report("initToggleSectionsByClass", &e),
    }
}
