// Host-side tests for styling constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use sanae_core::{
    timeout_ms, ClassConvention, MarkerClasses, SectionConvention, DEFAULT_CONTENT_CLASS, DEFAULT_TITLE_CLASS,
    HIDE_CLASS, REVEAL_CLASS,
};

#[test]
fn overlay_sits_above_page_content() {
    assert!(CONCEAL_STYLE.contains("position: fixed"));
    assert!(CONCEAL_STYLE.contains("z-index: 255"));
    assert!(DECORATION_STYLE.contains("z-index: 255"));
    assert!(DECORATION_STYLE.contains("transform: translate(50%, 70%)"));
    assert!(CONCEAL_HIDE_ANIMATION.starts_with("concealHide"));
}

#[test]
fn marker_stylesheet_covers_both_classes() {
    let css = MarkerClasses::default().stylesheet();
    assert!(css.contains(&format!(".{}:hover::after", REVEAL_CLASS)));
    assert!(css.contains(&format!(".{}:hover::after", HIDE_CLASS)));
    assert!(css.contains("content: \" ^\""));
    assert!(css.contains("content: \" v\""));
}

#[test]
fn conventions_default_to_page_markup() {
    let classes = ClassConvention::default();
    assert_eq!(classes.title_class, DEFAULT_TITLE_CLASS);
    assert_eq!(classes.content_class, DEFAULT_CONTENT_CLASS);
    assert_eq!(
        ClassConvention::new(None, Some("body".into())).content_class,
        "body"
    );

    let sections = SectionConvention::default();
    assert_eq!(sections.section_selector, "main > div");
    assert_eq!(sections.heading_selector, "h2");
    assert_ne!(REVEAL_CLASS, HIDE_CLASS);
}

#[test]
fn timer_delays_saturate_instead_of_wrapping() {
    assert_eq!(timeout_ms(0), 0);
    assert_eq!(timeout_ms(1400), 1400);
    assert_eq!(timeout_ms(i32::MAX as u32), i32::MAX);
    assert_eq!(timeout_ms(u32::MAX), i32::MAX);
}
