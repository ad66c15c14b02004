//! Pass 4: Bottom Navigation

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::error::Result;

use super::fragments::BOTTOM_NAV;
use super::kind::{PageKind, Tab};
use super::predicates::is_bottom_nav;
use super::structure::ensure_body;

/// Class added to the active navigation entry.
pub const ACTIVE_CLASS: &str = "text-primary";

/// Remove existing bottom navigation, then give top-level pages a fresh one.
///
/// Returns the number of navigation bars removed.
pub fn apply_bottom_nav(dom: &mut ArenaDom, kind: PageKind) -> Result<usize> {
    let removed = remove_bottom_navs(dom);
    if let PageKind::TopLevel(tab) = kind {
        let nav = insert_bottom_nav(dom)?;
        if !mark_active(dom, nav, tab) {
            tracing::warn!(tab = %tab, "No bottom navigation entry for top-level tab");
        }
    }
    Ok(removed)
}

/// Detach every `<nav>` that looks like a pinned navigation bar.
pub fn remove_bottom_navs(dom: &mut ArenaDom) -> usize {
    let navs: Vec<_> = dom
        .find_all_by_tag("nav")
        .into_iter()
        .filter(|&id| is_bottom_nav(dom, id))
        .collect();
    for &id in &navs {
        dom.detach(id);
    }
    navs.len()
}

/// Append the canonical bottom navigation as the last child of `<body>`.
pub fn insert_bottom_nav(dom: &mut ArenaDom) -> Result<ArenaNodeId> {
    let nav = BOTTOM_NAV.instantiate(dom)?;
    let body = ensure_body(dom);
    dom.append(body, nav);
    Ok(nav)
}

/// Navigation entries (`[data-tab]` elements) below `nav`.
pub fn nav_entries(dom: &ArenaDom, nav: ArenaNodeId) -> Vec<ArenaNodeId> {
    dom.descendants(nav)
        .filter(|&id| dom.get_attr(id, "data-tab").is_some())
        .collect()
}

/// Mark the entry for `tab` as the current page.
///
/// Returns `false` if the navigation has no entry for the tab.
pub fn mark_active(dom: &mut ArenaDom, nav: ArenaNodeId, tab: Tab) -> bool {
    let Some(entry) = nav_entries(dom, nav)
        .into_iter()
        .find(|&id| dom.get_attr(id, "data-tab") == Some(tab.as_str()))
    else {
        return false;
    };

    dom.set_attr(entry, "aria-current", "page");
    let mut classes = dom.element_classes(entry).to_vec();
    classes.push(ACTIVE_CLASS.to_string());
    dom.set_classes(entry, &classes);
    true
}

/// Whether a navigation entry is marked as the current page.
pub fn is_active_entry(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.get_attr(id, "aria-current") == Some("page")
}
