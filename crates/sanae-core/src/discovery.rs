//! Strategies that locate (title, target) pairs in a document.
//!
//! Each strategy only reads the tree and returns binding descriptors; wiring
//! happens in [`crate::toggle`].

use crate::{ClassConvention, DomTree, Error, Result, SectionConvention};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleBinding<N> {
    pub title: N,
    pub target: N,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoHeading,
    NoSiblingAfterHeading,
    NoContentSibling { content_class: String },
}

/// A candidate that could not be paired. `label` comes from [`DomTree::describe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    pub label: String,
    pub reason: SkipReason,
}

#[derive(Clone, Debug)]
pub struct Discovery<N> {
    pub pairs: Vec<ToggleBinding<N>>,
    pub skipped: Vec<Skipped>,
}

impl<N> Default for Discovery<N> {
    fn default() -> Self {
        Self {
            pairs: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Zip two selector results. Both lists must have the same length; otherwise
/// the whole discovery is abandoned.
pub fn pairs_by_query<D: DomTree>(
    dom: &D,
    title_query: &str,
    target_query: &str,
) -> Result<Vec<ToggleBinding<D::Node>>> {
    let titles = dom.query_all(title_query)?;
    let targets = dom.query_all(target_query)?;
    if titles.len() != targets.len() {
        return Err(Error::LengthMismatch {
            titles: titles.len(),
            targets: targets.len(),
        });
    }
    Ok(titles
        .into_iter()
        .zip(targets)
        .map(|(title, target)| ToggleBinding { title, target })
        .collect())
}

/// Every section container contributes its first heading and the element
/// right after that heading.
pub fn pairs_by_structure<D: DomTree>(
    dom: &D,
    convention: &SectionConvention,
) -> Result<Discovery<D::Node>> {
    let mut found = Discovery::default();
    for section in dom.query_all(&convention.section_selector)? {
        let Some(title) = dom.query_first_in(&section, &convention.heading_selector)? else {
            log::debug!("[toggle] {} has no {}", dom.describe(&section), convention.heading_selector);
            found.skipped.push(Skipped {
                label: dom.describe(&section),
                reason: SkipReason::NoHeading,
            });
            continue;
        };
        match dom.next_element_sibling(&title) {
            Some(target) => found.pairs.push(ToggleBinding { title, target }),
            None => {
                log::debug!("[toggle] nothing follows {}", dom.describe(&title));
                found.skipped.push(Skipped {
                    label: dom.describe(&title),
                    reason: SkipReason::NoSiblingAfterHeading,
                });
            }
        }
    }
    Ok(found)
}

/// Pair each title-class element with its nearest following sibling that
/// carries the content class. Titles without one are skipped with a warning.
pub fn pairs_by_class<D: DomTree>(
    dom: &D,
    convention: &ClassConvention,
) -> Result<Discovery<D::Node>> {
    let selector = format!(".{}", convention.title_class);
    let mut found = Discovery::default();
    for title in dom.query_all(&selector)? {
        match nearest_sibling_with_class(dom, &title, &convention.content_class) {
            Some(target) => found.pairs.push(ToggleBinding { title, target }),
            None => {
                let label = dom.describe(&title);
                log::warn!(
                    "[toggle] no element with class \"{}\" follows {}",
                    convention.content_class,
                    label
                );
                found.skipped.push(Skipped {
                    label,
                    reason: SkipReason::NoContentSibling {
                        content_class: convention.content_class.clone(),
                    },
                });
            }
        }
    }
    Ok(found)
}

pub fn nearest_sibling_with_class<D: DomTree>(dom: &D, node: &D::Node, class: &str) -> Option<D::Node> {
    let mut next = dom.next_element_sibling(node);
    while let Some(candidate) = next {
        if dom.has_class(&candidate, class) {
            return Some(candidate);
        }
        next = dom.next_element_sibling(&candidate);
    }
    None
}
