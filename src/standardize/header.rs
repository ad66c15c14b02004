//! Pass 3: Back Header

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::error::Result;

use super::fragments::{BACK_HEADER, BACK_TITLE};
use super::kind::PageKind;
use super::predicates::is_back_header;
use super::structure::ensure_body;

/// Remove every existing back header, then give detail pages a fresh one.
///
/// Removal runs on every page so a page that became top-level loses its old
/// header. Returns the number of headers removed.
pub fn apply_back_header(dom: &mut ArenaDom, kind: PageKind, title: &str) -> Result<usize> {
    let removed = remove_back_headers(dom);
    if kind == PageKind::Detail {
        insert_back_header(dom, title)?;
    }
    Ok(removed)
}

/// Detach every `<header>` that looks like a back header.
pub fn remove_back_headers(dom: &mut ArenaDom) -> usize {
    let headers: Vec<_> = dom
        .find_all_by_tag("header")
        .into_iter()
        .filter(|&id| is_back_header(dom, id))
        .collect();
    for &id in &headers {
        dom.detach(id);
    }
    headers.len()
}

/// Insert the canonical back header as the first child of `<body>`.
pub fn insert_back_header(dom: &mut ArenaDom, title: &str) -> Result<ArenaNodeId> {
    let header = BACK_HEADER.instantiate(dom)?;

    let title = if title.trim().is_empty() { BACK_TITLE } else { title };
    if let Some(h1) = dom.descendants(header).find(|&id| dom.is_tag(id, "h1")) {
        dom.set_text(h1, title);
    }

    let body = ensure_body(dom);
    dom.prepend(body, header);
    Ok(header)
}
