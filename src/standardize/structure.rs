//! Guarantees that a document has `<html>`, `<head>` and `<body>`.
//!
//! html5ever always builds these, but the passes also run on documents
//! assembled by hand, so each lookup synthesizes what is missing.

use crate::dom::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// Return the `<html>` element, creating it if the document has none.
///
/// A newly created root adopts every existing child of the document except
/// doctypes.
pub fn ensure_html(dom: &mut ArenaDom) -> ArenaNodeId {
    let doc = dom.document();
    if let Some(html) = dom.child_by_tag(doc, "html") {
        return html;
    }

    let html = dom.create_html_element("html", &[]);
    let adopted: Vec<_> = dom
        .children(doc)
        .filter(|&c| {
            !dom.get(c)
                .is_some_and(|n| matches!(n.data, ArenaNodeData::Doctype { .. }))
        })
        .collect();
    for child in adopted {
        dom.detach(child);
        dom.append(html, child);
    }
    dom.append(doc, html);
    html
}

/// Return the `<head>` element, creating it as the first child of `<html>`.
pub fn ensure_head(dom: &mut ArenaDom) -> ArenaNodeId {
    let html = ensure_html(dom);
    if let Some(head) = dom.child_by_tag(html, "head") {
        return head;
    }
    let head = dom.create_html_element("head", &[]);
    dom.prepend(html, head);
    head
}

/// Return the `<body>` element, creating it as the last child of `<html>`.
pub fn ensure_body(dom: &mut ArenaDom) -> ArenaNodeId {
    let html = ensure_html(dom);
    if let Some(body) = dom.child_by_tag(html, "body") {
        return body;
    }
    let body = dom.create_html_element("body", &[]);
    dom.append(html, body);
    body
}

/// Find `<head>` without modifying the document.
pub fn find_head(dom: &ArenaDom) -> Option<ArenaNodeId> {
    let html = dom.child_by_tag(dom.document(), "html")?;
    dom.child_by_tag(html, "head")
}

/// Find `<body>` without modifying the document.
pub fn find_body(dom: &ArenaDom) -> Option<ArenaNodeId> {
    let html = dom.child_by_tag(dom.document(), "html")?;
    dom.child_by_tag(html, "body")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_parsed_documents_already_have_structure() {
        let mut dom = parse_html("<p>x</p>");
        let before = dom.len();
        let head = ensure_head(&mut dom);
        let body = ensure_body(&mut dom);

        assert_eq!(dom.len(), before);
        assert_eq!(find_head(&dom), Some(head));
        assert_eq!(find_body(&dom), Some(body));
    }

    #[test]
    fn test_synthesizes_missing_elements() {
        let mut dom = ArenaDom::new();
        let doc = dom.document();
        let doctype = dom.create_doctype("html".into(), String::new(), String::new());
        dom.append(doc, doctype);
        let stray = dom.create_html_element("p", &[]);
        dom.append(doc, stray);

        let body = ensure_body(&mut dom);
        let head = ensure_head(&mut dom);
        let html = ensure_html(&mut dom);

        assert_eq!(dom.children(doc).collect::<Vec<_>>(), vec![doctype, html]);
        assert_eq!(
            dom.children(html).collect::<Vec<_>>(),
            vec![head, stray, body]
        );
    }
}
