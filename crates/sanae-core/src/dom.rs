//! Minimal view of a document tree needed by the toggle controller.
//!
//! The web frontend implements this over `web_sys::Document`; `memdom::MemDom`
//! (feature `test-support`) implements it in memory so discovery and click
//! handling run on the host.
//! All mutation goes through `&self`: browser nodes are shared handles, and the
//! in-memory tree uses interior mutability to match.

use crate::Result;

pub trait DomTree: Clone + 'static {
    type Node: Clone + 'static;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>>;

    /// First descendant of `scope` matching `selector`.
    fn query_first_in(&self, scope: &Self::Node, selector: &str) -> Result<Option<Self::Node>>;

    fn next_element_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_class(&self, node: &Self::Node, class: &str, present: bool);

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Inline `display` value, empty when unset.
    fn display(&self, node: &Self::Node) -> String;
    fn set_display(&self, node: &Self::Node, value: &str);

    fn add_click_listener(&self, node: &Self::Node, handler: Box<dyn FnMut()>);

    /// Short human-readable label for diagnostics (`h2#intro.toggle-title`).
    fn describe(&self, node: &Self::Node) -> String;
}
