//! Page standardization pipeline.
//!
//! Every page is parsed, rewritten by a fixed sequence of passes, and
//! serialized again. Each pass removes what it is about to (re)build before
//! building it, so running the pipeline on its own output changes nothing.
//!
//! ## Pipeline Order
//!
//! 0. **Title** - Resolve the page title from `<h1>` or the file name
//! 1. **Head** - Replace `<head>` with the canonical block, keeping `<title>`
//!    (or the `App` placeholder when the page declared none)
//! 2. **Icons** - Migrate legacy icon classes and alias glyph names
//! 3. **Back Header** - Remove old back headers; detail pages get a new one
//! 4. **Bottom Navigation** - Remove old bars; top-level pages get a new one
//!
//! Icons run before the header and navigation passes because back-header
//! detection looks for canonical glyph names.
//!
//! # Example
//!
//! ```
//! use facelift::standardize::standardize;
//!
//! let page = standardize("<h1>Welcome</h1>", "home.html").unwrap();
//! assert!(page.kind.is_top_level());
//! assert_eq!(page.title, "Welcome");
//! assert!(page.html.contains(r#"aria-current="page""#));
//! assert!(page.violations.is_empty());
//! ```

mod fragments;
mod head;
mod header;
mod icons;
mod invariants;
mod kind;
mod nav;
mod predicates;
mod structure;
mod title;

pub use fragments::{
    BACK_HEADER_HTML, BACK_TITLE, BOTTOM_NAV_HTML, DEFAULT_TITLE, HEAD_BLOCK, HeadEntry,
    ICON_STYLE, TAILWIND_CONFIG,
};
pub use head::{declared_title, normalize_head};
pub use header::{apply_back_header, insert_back_header, remove_back_headers};
pub use icons::{IconChanges, normalize_icons};
pub use invariants::{Violation, check_invariants};
pub use kind::{PageKind, TOP_LEVEL_PAGES, Tab};
pub use nav::{ACTIVE_CLASS, apply_bottom_nav, insert_bottom_nav, mark_active, remove_bottom_navs};
pub use predicates::{
    BACK_ICON_ALIASES, ICON_CLASS, LEGACY_ICON_CLASS, MESSAGE_ICON_ALIASES, canonical_glyph,
    is_back_header, is_bottom_nav,
};
pub use title::{resolve_title, title_case};

use crate::dom::{ArenaDom, parse_html, serialize_html};
use crate::error::{Error, Result};

/// Outcome of standardizing one page.
#[derive(Debug, Clone)]
pub struct StandardizedPage {
    /// The rewritten document.
    pub html: String,
    /// Title resolved from the page's `<h1>` or file name.
    pub title: String,
    pub kind: PageKind,
    /// Structural checks that failed after the run. Empty on success.
    pub violations: Vec<Violation>,
}

/// What the passes did to a document, for logging and reports.
#[derive(Debug, Clone)]
pub struct PassSummary {
    pub title: String,
    pub kind: PageKind,
    pub icons: IconChanges,
    pub headers_removed: usize,
    pub navs_removed: usize,
}

/// Standardize one page's markup.
///
/// `file_name` decides the page kind and provides the fallback title; only
/// its final path component is used.
pub fn standardize(html: &str, file_name: &str) -> Result<StandardizedPage> {
    let mut dom = parse_html(html);
    let summary = standardize_dom(&mut dom, file_name)?;

    let violations = check_invariants(&dom, summary.kind);
    for violation in &violations {
        tracing::warn!(page = file_name, %violation, "Invariant violated");
    }

    let html = serialize_html(&dom).map_err(Error::Serialize)?;
    Ok(StandardizedPage {
        html,
        title: summary.title,
        kind: summary.kind,
        violations,
    })
}

/// Run every pass over a parsed document, in order.
pub fn standardize_dom(dom: &mut ArenaDom, file_name: &str) -> Result<PassSummary> {
    let kind = PageKind::classify(file_name);
    let title = resolve_title(dom, file_name);
    tracing::debug!(page = file_name, %kind, title = %title, "Resolved page");

    tracing::debug!(pass = "head", "Running pass");
    normalize_head(dom);

    tracing::debug!(pass = "icons", "Running pass");
    let icons = normalize_icons(dom);

    tracing::debug!(pass = "back-header", "Running pass");
    let headers_removed = apply_back_header(dom, kind, &title)?;

    tracing::debug!(pass = "bottom-nav", "Running pass");
    let navs_removed = apply_bottom_nav(dom, kind)?;

    Ok(PassSummary {
        title,
        kind,
        icons,
        headers_removed,
        navs_removed,
    })
}
