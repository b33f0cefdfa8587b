// Host-side tests for toggle bindings, driven through the in-memory document.

use sanae_core::memdom::{MemDom, NodeId};
use sanae_core::{
    class_for, BindOutcome, DomTree, MarkerClasses, ToggleController, Visibility, BOUND_ATTR,
    HIDE_CLASS, REVEAL_CLASS,
};

fn section(dom: &MemDom) -> (NodeId, NodeId) {
    let main = dom.append(dom.root(), "main");
    let title = dom.append(main, "h2");
    let target = dom.append(main, "div");
    (title, target)
}

fn markers_on(dom: &MemDom, node: NodeId) -> Vec<String> {
    dom.classes(node)
        .into_iter()
        .filter(|c| c == REVEAL_CLASS || c == HIDE_CLASS)
        .collect()
}

#[test]
fn default_init_shows_content_and_clicks_flip_it() {
    let dom = MemDom::new();
    let (title, target) = section(&dom);
    let ctl = ToggleController::new(dom.clone());
    assert_eq!(dom.display(&target), "");

    assert_eq!(ctl.init_section(title, target, true), BindOutcome::Bound);
    assert_eq!(dom.display(&target), "block");
    assert_eq!(markers_on(&dom, title), vec![REVEAL_CLASS]);

    assert_eq!(dom.click(title), 1);
    assert_eq!(dom.display(&target), "none");
    assert_eq!(markers_on(&dom, title), vec![HIDE_CLASS]);

    dom.click(title);
    assert_eq!(dom.display(&target), "block");
    assert_eq!(markers_on(&dom, title), vec![REVEAL_CLASS]);
}

#[test]
fn init_hide_false_starts_hidden() {
    let dom = MemDom::new();
    let (title, target) = section(&dom);
    ToggleController::new(dom.clone()).init_section(title, target, false);
    assert_eq!(dom.display(&target), "none");
    assert_eq!(markers_on(&dom, title), vec![HIDE_CLASS]);

    dom.click(title);
    assert_eq!(dom.display(&target), "block");
    assert_eq!(markers_on(&dom, title), vec![REVEAL_CLASS]);
}

#[test]
fn even_number_of_clicks_restores_initial_state() {
    let dom = MemDom::new();
    let (title, target) = section(&dom);
    ToggleController::new(dom.clone()).init_section(title, target, false);
    let display = dom.display(&target);
    let classes = dom.classes(title);
    for _ in 0..6 {
        dom.click(title);
    }
    assert_eq!(dom.display(&target), display);
    assert_eq!(dom.classes(title), classes);
}

#[test]
fn premarked_title_keeps_markup_state_but_gets_listener() {
    let dom = MemDom::new();
    let main = dom.append(dom.root(), "main");
    let title = dom.append_with_classes(main, "h2", &[HIDE_CLASS]);
    let target = dom.append(main, "div");
    let before = dom.mutation_count();

    let ctl = ToggleController::new(dom.clone());
    assert_eq!(ctl.init_section(title, target, true), BindOutcome::Bound);
    // only the bound stamp is written
    assert_eq!(dom.mutation_count(), before + 1);
    assert_eq!(dom.display(&target), "");
    assert_eq!(markers_on(&dom, title), vec![HIDE_CLASS]);
    assert_eq!(dom.listener_count(title), 1);

    dom.click(title);
    assert_eq!(dom.display(&target), "block");
    assert_eq!(markers_on(&dom, title), vec![REVEAL_CLASS]);
}

#[test]
fn binding_twice_does_not_add_a_second_listener() {
    let dom = MemDom::new();
    let (title, target) = section(&dom);
    let ctl = ToggleController::new(dom.clone());
    assert_eq!(ctl.init_section(title, target, true), BindOutcome::Bound);
    assert_eq!(ctl.init_section(title, target, false), BindOutcome::AlreadyBound);
    assert!(dom.has_attribute(&title, BOUND_ATTR));
    assert_eq!(BOUND_ATTR, "data-toggle-bound");
    assert_eq!(dom.listener_count(title), 1);

    // a single flip, not two cancelling ones
    dom.click(title);
    assert_eq!(dom.display(&target), "none");
}

#[test]
fn bindings_are_independent() {
    let dom = MemDom::new();
    let (t1, c1) = section(&dom);
    let (t2, c2) = section(&dom);
    let ctl = ToggleController::new(dom.clone());
    ctl.init_section(t1, c1, true);
    ctl.init_section(t2, c2, true);

    dom.click(t1);
    assert_eq!(dom.display(&c1), "none");
    assert_eq!(dom.display(&c2), "block");
    assert_eq!(markers_on(&dom, t2), vec![REVEAL_CLASS]);
}

#[test]
fn custom_marker_classes() {
    let dom = MemDom::new();
    let (title, target) = section(&dom);
    let markers = MarkerClasses {
        reveal: "open".to_string(),
        hide: "closed".to_string(),
    };
    let ctl = ToggleController::with_markers(dom.clone(), markers);
    ctl.init_section(title, target, true);
    assert_eq!(dom.classes(title), vec!["open"]);
    dom.click(title);
    assert_eq!(dom.classes(title), vec!["closed"]);
}

#[test]
fn visibility_reads_only_block_as_shown() {
    assert_eq!(Visibility::from_display("block"), Visibility::Shown);
    assert_eq!(Visibility::from_display(""), Visibility::Hidden);
    assert_eq!(Visibility::from_display("none"), Visibility::Hidden);
    assert_eq!(Visibility::from_display("flex"), Visibility::Hidden);
    assert_eq!(Visibility::initial(true), Visibility::Shown);
    assert_eq!(Visibility::initial(false), Visibility::Hidden);
    assert_eq!(Visibility::Shown.flipped(), Visibility::Hidden);
}

#[test]
fn marker_class_follows_visibility() {
    let markers = MarkerClasses::default();
    assert_eq!(class_for(&markers, Visibility::Shown), REVEAL_CLASS);
    assert_eq!(class_for(&markers, Visibility::Hidden), HIDE_CLASS);
    assert_eq!(Visibility::Shown.css_display(), "block");
    assert_eq!(Visibility::Hidden.css_display(), "none");
}
