//! Mutable HTML document model.
//!
//! Pages are parsed by html5ever into an [`ArenaDom`], rewritten in place,
//! and written back out with html5ever's HTML serializer.
//!
//! # Example
//!
//! ```
//! use facelift::dom::{parse_html, serialize_html};
//!
//! let mut dom = parse_html("<p class='x'>Hello</p>");
//! let p = dom.find_by_tag("p").unwrap();
//! dom.set_attr(p, "class", "y");
//!
//! let html = serialize_html(&dom).unwrap();
//! assert!(html.contains(r#"<p class="y">Hello</p>"#));
//! ```

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{
    ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, ChildrenIter, DescendantsIter,
    attr_name, html_name,
};
pub use serialize::{serialize_html, serialize_node};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::ArenaSink;

/// Parse a full HTML document.
///
/// Parsing never fails: malformed markup is repaired the way browsers do,
/// and the result always has `<html>`, `<head>` and `<body>` (or `<frameset>`).
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}
