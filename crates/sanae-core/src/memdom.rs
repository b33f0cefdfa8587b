//! In-memory document used to exercise discovery and bindings off the browser.
//!
//! `MemDom` is a cheap `Rc` handle; clones share one tree, the same way
//! `web_sys` element handles share the live document. Click listeners are kept
//! per node and run by [`MemDom::click`].

use crate::dom::DomTree;
use crate::selector::{self, Combinator, Complex};
use crate::Result;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

const DOCUMENT_TAG: &str = "#document";

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: FnvHashMap<String, String>,
    display: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct Tree {
    nodes: Vec<NodeData>,
    listeners: Vec<(NodeId, Handler)>,
    mutations: usize,
}

impl Tree {
    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn is_element(&self, id: NodeId) -> bool {
        self.node(id).tag != DOCUMENT_TAG
    }

    // Pre-order, excluding `scope` itself.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(scope).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn matches_at(&self, id: NodeId, cx: &Complex, i: usize) -> bool {
        let n = self.node(id);
        let ok = cx.compounds[i].matches(&n.tag, n.id.as_deref(), |c| n.classes.iter().any(|k| k == c));
        if !ok {
            return false;
        }
        if i == 0 {
            return true;
        }
        let element_parent = |id: NodeId| self.node(id).parent.filter(|p| self.is_element(*p));
        match cx.combinators[i - 1] {
            Combinator::Child => element_parent(id).is_some_and(|p| self.matches_at(p, cx, i - 1)),
            Combinator::Descendant => {
                let mut ancestor = element_parent(id);
                while let Some(a) = ancestor {
                    if self.matches_at(a, cx, i - 1) {
                        return true;
                    }
                    ancestor = element_parent(a);
                }
                false
            }
        }
    }

    fn matches(&self, id: NodeId, list: &selector::SelectorList) -> bool {
        self.is_element(id)
            && list
                .0
                .iter()
                .any(|cx| self.matches_at(id, cx, cx.compounds.len() - 1))
    }
}

#[derive(Clone)]
pub struct MemDom {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemDom {
    pub fn new() -> Self {
        let mut tree = Tree::default();
        tree.nodes.push(NodeData {
            tag: DOCUMENT_TAG.to_string(),
            ..Default::default()
        });
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append(&self, parent: NodeId, tag: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            parent: Some(parent),
            ..Default::default()
        });
        tree.node_mut(parent).children.push(id);
        id
    }

    /// `append` plus classes, for building fixtures.
    pub fn append_with_classes(&self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = self.append(parent, tag);
        let mut tree = self.tree.borrow_mut();
        tree.node_mut(id).classes = classes.iter().map(|c| c.to_string()).collect();
        id
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        self.tree.borrow_mut().node_mut(node).id = Some(id.to_string());
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.tree.borrow().node(node).classes.clone()
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.tree.borrow().listeners.iter().filter(|(n, _)| *n == node).count()
    }

    pub fn total_listeners(&self) -> usize {
        self.tree.borrow().listeners.len()
    }

    /// Number of attribute, class and style changes made through the
    /// `DomTree` interface.
    pub fn mutation_count(&self) -> usize {
        self.tree.borrow().mutations
    }

    /// Dispatch a click on `node`, returning how many listeners ran.
    pub fn click(&self, node: NodeId) -> usize {
        let handlers: Vec<Handler> = self
            .tree
            .borrow()
            .listeners
            .iter()
            .filter(|(n, _)| *n == node)
            .map(|(_, h)| h.clone())
            .collect();
        for handler in &handlers {
            let mut h = handler.borrow_mut();
            (*h)();
        }
        handlers.len()
    }
}

impl DomTree for MemDom {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let list = selector::parse(selector)?;
        let tree = self.tree.borrow();
        let found = tree
            .descendants(self.root())
            .into_iter()
            .filter(|id| tree.matches(*id, &list))
            .collect();
        Ok(found)
    }

    fn query_first_in(&self, scope: &NodeId, selector: &str) -> Result<Option<NodeId>> {
        let list = selector::parse(selector)?;
        let tree = self.tree.borrow();
        let found = tree
            .descendants(*scope)
            .into_iter()
            .find(|id| tree.matches(*id, &list));
        Ok(found)
    }

    fn next_element_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let tree = self.tree.borrow();
        let parent = tree.node(*node).parent?;
        let siblings = &tree.node(parent).children;
        let pos = siblings.iter().position(|c| c == node)?;
        siblings.get(pos + 1).copied()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.tree.borrow().node(*node).classes.iter().any(|c| c == class)
    }

    fn set_class(&self, node: &NodeId, class: &str, present: bool) {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree.node_mut(*node).classes;
        if present {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        } else {
            classes.retain(|c| c != class);
        }
        tree.mutations += 1;
    }

    fn has_attribute(&self, node: &NodeId, name: &str) -> bool {
        self.tree.borrow().node(*node).attrs.contains_key(name)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        let mut tree = self.tree.borrow_mut();
        tree.node_mut(*node).attrs.insert(name.to_string(), value.to_string());
        tree.mutations += 1;
    }

    fn display(&self, node: &NodeId) -> String {
        self.tree.borrow().node(*node).display.clone()
    }

    fn set_display(&self, node: &NodeId, value: &str) {
        let mut tree = self.tree.borrow_mut();
        tree.node_mut(*node).display = value.to_string();
        tree.mutations += 1;
    }

    fn add_click_listener(&self, node: &NodeId, handler: Box<dyn FnMut()>) {
        self.tree
            .borrow_mut()
            .listeners
            .push((*node, Rc::new(RefCell::new(handler))));
    }

    fn describe(&self, node: &NodeId) -> String {
        let tree = self.tree.borrow();
        let n = tree.node(*node);
        let mut label = n.tag.clone();
        if let Some(id) = &n.id {
            label.push('#');
            label.push_str(id);
        }
        for c in &n.classes {
            label.push('.');
            label.push_str(c);
        }
        label
    }
}
