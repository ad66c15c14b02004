//! Pass 1: Head Normalizer

use crate::dom::ArenaDom;

use super::fragments::{DEFAULT_TITLE, HEAD_BLOCK};
use super::structure::{ensure_head, find_head};
use super::title::collapse_whitespace;

/// Text of the first `<title>` inside `<head>`, trimmed, if non-empty.
pub fn declared_title(dom: &ArenaDom) -> Option<String> {
    let head = find_head(dom)?;
    let title = dom.descendants(head).find(|&id| dom.is_tag(id, "title"))?;
    let text = collapse_whitespace(&dom.collect_text(title, ""));
    (!text.is_empty()).then_some(text)
}

/// Replace the whole `<head>` with `<title>` plus the canonical head block.
///
/// The declared title survives; a page without one gets [`DEFAULT_TITLE`].
/// Everything else previously in the head is dropped.
pub fn normalize_head(dom: &mut ArenaDom) {
    let title_text = declared_title(dom).unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let head = ensure_head(dom);
    dom.clear_children(head);

    let title = dom.create_html_element("title", &[]);
    dom.append_text(title, &title_text);
    dom.append(head, title);

    for entry in HEAD_BLOCK {
        let el = entry.build(dom);
        dom.append(head, el);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse_html, serialize_node};

    fn head_children(dom: &ArenaDom) -> Vec<String> {
        let head = find_head(dom).unwrap();
        dom.children(head)
            .map(|c| dom.element_name(c).map(|n| n.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_replaces_head_keeping_title() {
        let mut dom = parse_html(
            r#"<head>
                 <meta charset="utf-8">
                 <title> Saved places </title>
                 <link rel="stylesheet" href="old.css">
                 <script src="https://cdn.tailwindcss.com"></script>
               </head><body></body>"#,
        );

        normalize_head(&mut dom);

        assert_eq!(
            head_children(&dom),
            ["title", "link", "link", "link", "link", "script", "script", "style"]
        );
        assert_eq!(declared_title(&dom).as_deref(), Some("Saved places"));
        let head = find_head(&dom).unwrap();
        assert!(!serialize_node(&dom, head).unwrap().contains("old.css"));
    }

    #[test]
    fn test_missing_title_uses_placeholder() {
        let mut dom = parse_html("<head><meta name=x></head><body><h1>Listing</h1></body>");
        normalize_head(&mut dom);
        assert_eq!(declared_title(&dom).as_deref(), Some(DEFAULT_TITLE));
    }

    #[test]
    fn test_blank_title_uses_fallback() {
        let mut dom = parse_html("<title>   </title>");
        normalize_head(&mut dom);
        assert_eq!(declared_title(&dom).as_deref(), Some(DEFAULT_TITLE));
    }

    #[test]
    fn test_synthesizes_head() {
        let mut dom = ArenaDom::new();
        normalize_head(&mut dom);
        assert_eq!(head_children(&dom).len(), 1 + HEAD_BLOCK.len());
    }

    #[test]
    fn test_head_block_follows_title() {
        let mut dom = parse_html("<title>T</title>");
        normalize_head(&mut dom);

        let head = find_head(&dom).unwrap();
        let children: Vec<_> = dom.children(head).skip(1).collect();
        assert_eq!(children.len(), HEAD_BLOCK.len());
        for (entry, id) in HEAD_BLOCK.iter().zip(children) {
            assert!(entry.matches(&dom, id), "{entry:?}");
        }
    }
}
