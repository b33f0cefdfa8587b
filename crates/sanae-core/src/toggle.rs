//! Expand/collapse bindings between a title element and the content it controls.
//!
//! A binding has two states, shown and hidden. The only transition is a click
//! on the title, which flips the target's inline display between `block` and
//! `none` and moves the title's marker class to match. The marker is always
//! derived from visibility through [`class_for`], so a title never carries
//! both marker classes once the binding has touched it.

use crate::constants::{MarkerClasses, BOUND_ATTR, DISPLAY_HIDDEN, DISPLAY_SHOWN};
use crate::discovery::{self, ToggleBinding};
use crate::{ClassConvention, DomTree, Error, Result, SectionConvention};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Only an explicit `block` counts as shown; an unset display reads as hidden.
    pub fn from_display(display: &str) -> Self {
        if display.trim() == DISPLAY_SHOWN {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    pub fn css_display(self) -> &'static str {
        match self {
            Visibility::Shown => DISPLAY_SHOWN,
            Visibility::Hidden => DISPLAY_HIDDEN,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    /// State a fresh binding starts in. `init_hide` keeps its historical
    /// meaning: `true` starts with the content shown.
    pub fn initial(init_hide: bool) -> Self {
        if init_hide {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

#[inline]
pub fn class_for(markers: &MarkerClasses, visibility: Visibility) -> &str {
    match visibility {
        Visibility::Shown => &markers.reveal,
        Visibility::Hidden => &markers.hide,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindOutcome {
    Bound,
    AlreadyBound,
}

fn apply_marker<D: DomTree>(dom: &D, markers: &MarkerClasses, title: &D::Node, v: Visibility) {
    dom.set_class(title, class_for(markers, v.flipped()), false);
    dom.set_class(title, class_for(markers, v), true);
}

fn apply<D: DomTree>(dom: &D, markers: &MarkerClasses, binding: &ToggleBinding<D::Node>, v: Visibility) {
    dom.set_display(&binding.target, v.css_display());
    apply_marker(dom, markers, &binding.title, v);
}

/// Flip one binding, returning the state it is now in.
pub fn click<D: DomTree>(
    dom: &D,
    markers: &MarkerClasses,
    binding: &ToggleBinding<D::Node>,
) -> Visibility {
    let next = Visibility::from_display(&dom.display(&binding.target)).flipped();
    apply(dom, markers, binding, next);
    next
}

/// Wire a single title/target pair.
///
/// A title that already carries a marker class keeps its markup-provided
/// state; only the click listener is added. A title bound earlier is left
/// untouched so it never ends up with two listeners. The `data-toggle-bound`
/// stamp used for that check stays visible in the page markup.
pub fn init_toggle_section<D: DomTree>(
    dom: &D,
    markers: &MarkerClasses,
    binding: ToggleBinding<D::Node>,
    init_hide: bool,
) -> BindOutcome {
    let title = &binding.title;
    if dom.has_attribute(title, BOUND_ATTR) {
        log::debug!("[toggle] {} is already bound", dom.describe(title));
        return BindOutcome::AlreadyBound;
    }

    let premarked = dom.has_class(title, &markers.reveal) || dom.has_class(title, &markers.hide);
    if !premarked {
        apply(dom, markers, &binding, Visibility::initial(init_hide));
    }
    dom.set_attribute(title, BOUND_ATTR, "");

    let handler_dom = dom.clone();
    let handler_markers = markers.clone();
    let handler_binding = binding.clone();
    dom.add_click_listener(
        title,
        Box::new(move || {
            click(&handler_dom, &handler_markers, &handler_binding);
        }),
    );
    BindOutcome::Bound
}

/// Owns a document handle and marker classes, and runs each discovery
/// strategy into [`init_toggle_section`].
#[derive(Clone)]
pub struct ToggleController<D: DomTree> {
    dom: D,
    markers: MarkerClasses,
}

impl<D: DomTree> ToggleController<D> {
    pub fn new(dom: D) -> Self {
        Self::with_markers(dom, MarkerClasses::default())
    }

    pub fn with_markers(dom: D, markers: MarkerClasses) -> Self {
        Self { dom, markers }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn markers(&self) -> &MarkerClasses {
        &self.markers
    }

    pub fn init_section(&self, title: D::Node, target: D::Node, init_hide: bool) -> BindOutcome {
        init_toggle_section(&self.dom, &self.markers, ToggleBinding { title, target }, init_hide)
    }

    /// Bind i-th title to i-th target. Mismatched lists bind nothing.
    pub fn init_by_query(&self, title_query: &str, target_query: &str, init_hide: bool) -> Result<usize> {
        let pairs = discovery::pairs_by_query(&self.dom, title_query, target_query)?;
        if pairs.is_empty() {
            log::debug!("[toggle] `{}` / `{}` matched nothing", title_query, target_query);
        }
        Ok(self.bind_all(pairs, init_hide))
    }

    pub fn init_all(&self, convention: &SectionConvention, init_hide: bool) -> Result<usize> {
        let found = discovery::pairs_by_structure(&self.dom, convention)?;
        Ok(self.bind_all(found.pairs, init_hide))
    }

    pub fn init_by_class(&self, convention: &ClassConvention, init_hide: bool) -> Result<usize> {
        let found = discovery::pairs_by_class(&self.dom, convention)?;
        Ok(self.bind_all(found.pairs, init_hide))
    }

    fn bind_all(&self, pairs: Vec<ToggleBinding<D::Node>>, init_hide: bool) -> usize {
        pairs
            .into_iter()
            .map(|pair| init_toggle_section(&self.dom, &self.markers, pair, init_hide))
            .filter(|outcome| *outcome == BindOutcome::Bound)
            .count()
    }
}

/// Log a failed discovery the way the exported entry points report it.
pub fn report(strategy: &str, err: &Error) {
    match err {
        Error::LengthMismatch { .. } => log::warn!("[toggle] {}: {}; nothing bound", strategy, err),
        _ => log::warn!("[toggle] {}: {}", strategy, err),
    }
}
