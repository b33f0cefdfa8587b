//! The small CSS selector subset the page conventions rely on:
//! type, `#id`, `.class`, `*`, the descendant and child (`>`) combinators,
//! and comma-separated lists. Used by [`crate::memdom::MemDom`]; the browser
//! resolves selectors natively.

use crate::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Compound {
    pub fn matches(&self, tag: &str, id: Option<&str>, has_class: impl Fn(&str) -> bool) -> bool {
        if let Some(want) = &self.tag {
            if !want.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(want) = &self.id {
            if id != Some(want.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| has_class(c))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// `compounds[i]` and `compounds[i + 1]` are joined by `combinators[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Complex {
    pub compounds: Vec<Compound>,
    pub combinators: Vec<Combinator>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList(pub Vec<Complex>);

pub fn parse(selector: &str) -> Result<SelectorList> {
    let mut list = Vec::new();
    for part in selector.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(Error::invalid_selector(selector, "empty selector"));
        }
        list.push(parse_complex(part, selector)?);
    }
    Ok(SelectorList(list))
}

fn parse_complex(src: &str, full: &str) -> Result<Complex> {
    let spaced = src.replace('>', " > ");
    let mut tokens = spaced.split_whitespace();
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();

    match tokens.next() {
        Some(">") | None => return Err(Error::invalid_selector(full, "expected a selector before `>`")),
        Some(first) => compounds.push(parse_compound(first, full)?),
    }
    while let Some(token) = tokens.next() {
        if token == ">" {
            match tokens.next() {
                Some(">") | None => return Err(Error::invalid_selector(full, "dangling `>`")),
                Some(next) => {
                    combinators.push(Combinator::Child);
                    compounds.push(parse_compound(next, full)?);
                }
            }
        } else {
            combinators.push(Combinator::Descendant);
            compounds.push(parse_compound(token, full)?);
        }
    }
    Ok(Complex {
        compounds,
        combinators,
    })
}

fn is_marker(c: char) -> bool {
    c == '.' || c == '#'
}

fn is_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => false,
        Some(c) if c.is_ascii_digit() => false,
        Some(c) => is_ident_char(c) && chars.all(is_ident_char),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn parse_compound(token: &str, full: &str) -> Result<Compound> {
    let mut compound = Compound::default();
    let tag_end = token.find(is_marker).unwrap_or(token.len());
    let tag = &token[..tag_end];
    if !tag.is_empty() && tag != "*" {
        if !is_ident(tag) {
            return Err(Error::invalid_selector(full, format!("unsupported token `{}`", tag)));
        }
        compound.tag = Some(tag.to_ascii_lowercase());
    }

    let mut rest = &token[tag_end..];
    while let Some(marker) = rest.chars().next() {
        let body = &rest[marker.len_utf8()..];
        let end = body.find(is_marker).unwrap_or(body.len());
        let name = &body[..end];
        if !is_ident(name) {
            return Err(Error::invalid_selector(full, format!("bad name after `{}`", marker)));
        }
        if marker == '#' {
            if compound.id.is_some() {
                return Err(Error::invalid_selector(full, "more than one id"));
            }
            compound.id = Some(name.to_string());
        } else {
            compound.classes.push(name.to_string());
        }
        rest = &body[end..];
    }
    Ok(compound)
}
