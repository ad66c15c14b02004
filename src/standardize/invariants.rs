//! Post-run structural checks.
//!
//! The passes are written so these never fire; the checker exists to catch
//! inputs that defeat the detection heuristics.

use thiserror::Error;

use crate::dom::{ArenaDom, ArenaNodeId};

use super::fragments::HEAD_BLOCK;
use super::kind::PageKind;
use super::nav::{is_active_entry, nav_entries};
use super::predicates::{
    BACK_GLYPH, MESSAGE_GLYPH, canonical_glyph, is_back_header, is_bottom_nav, is_icon,
};
use super::structure::{find_body, find_head};

/// A broken expectation about a standardized page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("document has no <{0}>")]
    MissingRegion(&'static str),

    #[error("frameset documents drop the synthesized <body> when re-parsed")]
    FramesetDocument,

    #[error("head does not start with a non-empty <title>")]
    MissingTitle,

    #[error("head does not match the canonical head block")]
    HeadMismatch,

    #[error("detail page does not start with a back header")]
    MissingBackHeader,

    #[error("top-level page has a back header")]
    UnexpectedBackHeader,

    #[error("{0} back headers found")]
    DuplicateBackHeader(usize),

    #[error("top-level page does not end with the bottom navigation")]
    MissingBottomNav,

    #[error("detail page has a bottom navigation")]
    UnexpectedBottomNav,

    #[error("{0} bottom navigation bars found")]
    DuplicateBottomNav(usize),

    #[error("expected active tab {expected:?}, found {found:?}")]
    ActiveTab {
        expected: Option<&'static str>,
        found: Vec<String>,
    },

    #[error("icon glyph {0:?} was not canonicalized")]
    AliasGlyph(String),
}

/// Check a standardized document against what the passes guarantee.
pub fn check_invariants(dom: &ArenaDom, kind: PageKind) -> Vec<Violation> {
    let mut violations = Vec::new();

    if is_frameset_document(dom) {
        violations.push(Violation::FramesetDocument);
    }

    match find_head(dom) {
        Some(head) => check_head(dom, head, &mut violations),
        None => violations.push(Violation::MissingRegion("head")),
    }

    match find_body(dom) {
        Some(body) => check_body(dom, body, kind, &mut violations),
        None => violations.push(Violation::MissingRegion("body")),
    }

    check_glyphs(dom, &mut violations);
    violations
}

/// A `<frameset>` root has no body; parsers ignore a `<body>` that follows it.
fn is_frameset_document(dom: &ArenaDom) -> bool {
    dom.child_by_tag(dom.document(), "html")
        .and_then(|html| dom.child_by_tag(html, "frameset"))
        .is_some()
}

fn check_head(dom: &ArenaDom, head: ArenaNodeId, violations: &mut Vec<Violation>) {
    let children: Vec<_> = dom.children(head).collect();

    let title_ok = children.first().is_some_and(|&title| {
        dom.is_tag(title, "title") && !dom.collect_text(title, "").trim().is_empty()
    });
    if !title_ok {
        violations.push(Violation::MissingTitle);
    }

    let rest = children.get(1..).unwrap_or_default();
    let block_ok = rest.len() == HEAD_BLOCK.len()
        && HEAD_BLOCK
            .iter()
            .zip(rest)
            .all(|(entry, &id)| entry.matches(dom, id));
    if !block_ok {
        violations.push(Violation::HeadMismatch);
    }
}

fn check_body(
    dom: &ArenaDom,
    body: ArenaNodeId,
    kind: PageKind,
    violations: &mut Vec<Violation>,
) {
    let headers: Vec<_> = dom
        .find_all_by_tag("header")
        .into_iter()
        .filter(|&id| is_back_header(dom, id))
        .collect();
    let navs: Vec<_> = dom
        .find_all_by_tag("nav")
        .into_iter()
        .filter(|&id| is_bottom_nav(dom, id))
        .collect();

    if headers.len() > 1 {
        violations.push(Violation::DuplicateBackHeader(headers.len()));
    }
    if navs.len() > 1 {
        violations.push(Violation::DuplicateBottomNav(navs.len()));
    }

    let first = dom.get(body).map(|n| n.first_child);
    let last = dom.get(body).map(|n| n.last_child);

    match kind {
        PageKind::Detail => {
            if !first.is_some_and(|id| headers.contains(&id)) {
                violations.push(Violation::MissingBackHeader);
            }
            if !navs.is_empty() {
                violations.push(Violation::UnexpectedBottomNav);
            }
        }
        PageKind::TopLevel(tab) => {
            if !headers.is_empty() {
                violations.push(Violation::UnexpectedBackHeader);
            }
            match last.filter(|id| navs.contains(id)) {
                Some(nav) => {
                    let found: Vec<String> = nav_entries(dom, nav)
                        .into_iter()
                        .filter(|&id| is_active_entry(dom, id))
                        .filter_map(|id| dom.get_attr(id, "data-tab").map(str::to_string))
                        .collect();
                    let expected = tab.has_nav_entry().then(|| tab.as_str());
                    let matches = match expected {
                        Some(tab) => found.len() == 1 && found[0] == tab,
                        None => found.is_empty(),
                    };
                    if !matches {
                        violations.push(Violation::ActiveTab { expected, found });
                    }
                }
                None => violations.push(Violation::MissingBottomNav),
            }
        }
    }
}

fn check_glyphs(dom: &ArenaDom, violations: &mut Vec<Violation>) {
    for id in dom.descendants(dom.document()) {
        if !is_icon(dom, id) {
            continue;
        }
        let Some(glyph) = dom.single_text_child(id) else {
            continue;
        };
        if canonical_glyph(glyph).is_some() && glyph != BACK_GLYPH && glyph != MESSAGE_GLYPH {
            violations.push(Violation::AliasGlyph(glyph.to_string()));
        }
    }
}
