//! Page title resolution.

use std::path::Path;

use crate::dom::ArenaDom;

use super::fragments::DEFAULT_TITLE;

/// Resolve the human-readable title of a page.
///
/// Prefers the text of the first `<h1>`; otherwise the file stem with
/// underscores turned into spaces and title-cased. Never returns an empty
/// string.
pub fn resolve_title(dom: &ArenaDom, file_name: &str) -> String {
    if let Some(h1) = dom.find_by_tag("h1") {
        let text = collapse_whitespace(&dom.collect_text(h1, ""));
        if !text.is_empty() {
            return text;
        }
    }

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let title = collapse_whitespace(&title_case(&stem.replace('_', " ")));
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
///
/// `"listing_detail"` style words split on anything that is not a letter, so
/// `"faq2go"` becomes `"Faq2Go"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Trim and squeeze internal whitespace runs to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use proptest::prelude::*;

    #[test]
    fn test_prefers_first_h1() {
        let dom = parse_html("<main><h1>  Welcome\n home </h1><h1>Second</h1></main>");
        assert_eq!(resolve_title(&dom, "home.html"), "Welcome home");
    }

    #[test]
    fn test_h1_text_spans_inline_children() {
        let dom = parse_html("<h1>Hello <em>there</em></h1>");
        assert_eq!(resolve_title(&dom, "x.html"), "Hello there");
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let dom = parse_html(r#"<h1>Stay<span class="text-primary">Finder</span></h1>"#);
        assert_eq!(resolve_title(&dom, "x.html"), "StayFinder");

        let dom = parse_html("<h1>Wel<b>come</b>\n  <em>home</em></h1>");
        assert_eq!(resolve_title(&dom, "x.html"), "Welcome home");
    }

    #[test]
    fn test_empty_h1_falls_back_to_file_name() {
        let dom = parse_html("<h1> <img src=a.png> </h1>");
        assert_eq!(resolve_title(&dom, "listing_detail.html"), "Listing Detail");
    }

    #[test]
    fn test_file_name_fallback() {
        let dom = parse_html("<p>No heading</p>");
        assert_eq!(resolve_title(&dom, "listing_detail.html"), "Listing Detail");
        assert_eq!(resolve_title(&dom, "pages/HOST_profile.html"), "Host Profile");
        assert_eq!(resolve_title(&dom, "__a__b.html"), "A B");
    }

    #[test]
    fn test_never_empty() {
        let dom = parse_html("");
        assert_eq!(resolve_title(&dom, "___.html"), DEFAULT_TITLE);
        assert_eq!(resolve_title(&dom, ""), DEFAULT_TITLE);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("listing detail"), "Listing Detail");
        assert_eq!(title_case("o'neil's"), "O'Neil'S");
        assert_eq!(title_case("faq2go"), "Faq2Go");
        assert_eq!(title_case("ÉCOLE"), "École");
    }

    proptest! {
        #[test]
        fn prop_title_case_is_idempotent(s in "[a-zA-Z0-9 _'-]{0,32}") {
            let once = title_case(&s);
            prop_assert_eq!(title_case(&once), once.clone());
        }

        #[test]
        fn prop_resolved_title_is_non_empty_and_trimmed(stem in "[a-z_]{0,16}") {
            let dom = parse_html("<p></p>");
            let title = resolve_title(&dom, &format!("{stem}.html"));
            prop_assert!(!title.is_empty());
            prop_assert_eq!(title.trim(), title.as_str());
        }
    }
}
