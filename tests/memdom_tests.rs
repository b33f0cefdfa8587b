// Host-side tests for the selector subset and the in-memory document.

use sanae_core::memdom::MemDom;
use sanae_core::selector::{parse, Combinator};
use sanae_core::{DomTree, Error};

#[test]
fn parses_child_combinator() {
    let list = parse("main > div").unwrap();
    assert_eq!(list.0.len(), 1);
    let cx = &list.0[0];
    assert_eq!(cx.compounds.len(), 2);
    assert_eq!(cx.combinators, vec![Combinator::Child]);
    assert_eq!(cx.compounds[0].tag.as_deref(), Some("main"));
    assert_eq!(cx.compounds[1].tag.as_deref(), Some("div"));

    // spacing around `>` is optional
    assert_eq!(parse("main>div").unwrap(), list);
}

#[test]
fn parses_compound_parts() {
    let list = parse("DIV#intro.toggle-title.wide").unwrap();
    let c = &list.0[0].compounds[0];
    assert_eq!(c.tag.as_deref(), Some("div"));
    assert_eq!(c.id.as_deref(), Some("intro"));
    assert_eq!(c.classes, vec!["toggle-title", "wide"]);

    let any = parse("* .x").unwrap();
    assert_eq!(any.0[0].compounds[0].tag, None);
    assert_eq!(any.0[0].combinators, vec![Combinator::Descendant]);
}

#[test]
fn rejects_what_it_cannot_match() {
    for bad in ["", " ", "> div", "div >", "a,,b", "div:hover", "#a#b", ".", "h2[x]", "a > > b"] {
        assert!(
            matches!(parse(bad), Err(Error::InvalidSelector { .. })),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn query_all_returns_document_order() {
    let dom = MemDom::new();
    let body = dom.append(dom.root(), "body");
    let a = dom.append_with_classes(body, "p", &["x"]);
    let wrap = dom.append(body, "div");
    let b = dom.append_with_classes(wrap, "p", &["x"]);
    let c = dom.append_with_classes(body, "p", &["x"]);

    assert_eq!(dom.query_all(".x").unwrap(), vec![a, b, c]);
    assert_eq!(dom.query_all("div .x").unwrap(), vec![b]);
    assert_eq!(dom.query_all("body > .x").unwrap(), vec![a, c]);
}

#[test]
fn selector_lists_match_each_node_once() {
    let dom = MemDom::new();
    let body = dom.append(dom.root(), "body");
    let h = dom.append_with_classes(body, "h2", &["t"]);
    let p = dom.append(body, "p");
    assert_eq!(dom.query_all("h2, .t, p").unwrap(), vec![h, p]);
}

#[test]
fn ids_and_scoped_queries() {
    let dom = MemDom::new();
    let body = dom.append(dom.root(), "body");
    let outer = dom.append(body, "div");
    let inner = dom.append(outer, "h2");
    dom.set_id(inner, "intro");
    let elsewhere = dom.append(body, "h2");

    assert_eq!(dom.query_all("#intro").unwrap(), vec![inner]);
    assert_eq!(dom.query_first_in(&outer, "h2").unwrap(), Some(inner));
    assert_eq!(dom.query_first_in(&inner, "h2").unwrap(), None);
    assert_eq!(dom.query_first_in(&body, "h2").unwrap(), Some(inner));
    assert_ne!(Some(elsewhere), dom.query_first_in(&outer, "h2").unwrap());
    assert_eq!(dom.describe(&inner), "h2#intro");
}

#[test]
fn next_element_sibling_stops_at_last_child() {
    let dom = MemDom::new();
    let body = dom.append(dom.root(), "body");
    let a = dom.append(body, "h2");
    let b = dom.append(body, "p");
    assert_eq!(dom.next_element_sibling(&a), Some(b));
    assert_eq!(dom.next_element_sibling(&b), None);
    assert_eq!(dom.next_element_sibling(&dom.root()), None);
}

#[test]
fn clicks_run_registered_listeners() {
    use std::cell::Cell;
    use std::rc::Rc;

    let dom = MemDom::new();
    let button = dom.append(dom.root(), "button");
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    dom.add_click_listener(&button, Box::new(move || counter.set(counter.get() + 1)));

    assert_eq!(dom.click(button), 1);
    assert_eq!(dom.click(dom.root()), 0);
    assert_eq!(hits.get(), 1);
}
