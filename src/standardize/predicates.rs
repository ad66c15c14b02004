//! Shared predicates for the rewrite passes.
//!
//! Detection of pre-existing headers and navigation bars is heuristic. Each
//! rule lives here as a named function so it can be tested on its own.

use crate::dom::{ArenaDom, ArenaNodeId};

/// Class of the icon font pages used to ship with.
pub const LEGACY_ICON_CLASS: &str = "material-icons";

/// Class of the canonical icon font.
pub const ICON_CLASS: &str = "material-symbols-outlined";

/// Substring that marks any class of the canonical icon family.
pub const ICON_FAMILY_MARKER: &str = "material-symbols";

/// Glyph names that all render some form of "go back".
pub const BACK_ICON_ALIASES: &[&str] = &[
    "arrow_back",
    "arrow_back_ios",
    "arrow_back_ios_new",
    "arrowback",
    "arrowbackiosnew",
    "chevron_left",
    "chevronleft",
    "keyboard_backspace",
];

/// Glyph names used for messaging before `chat` became the standard.
pub const MESSAGE_ICON_ALIASES: &[&str] = &["chatbubble", "mail"];

pub const BACK_GLYPH: &str = "arrow_back";
pub const MESSAGE_GLYPH: &str = "chat";

/// Class substrings that mark a `<nav>` as a pinned bottom bar.
pub const BOTTOM_NAV_TOKENS: &[&str] = &["bottom", "fixed", "sticky"];

/// Check if an element carries the legacy icon class.
pub fn is_legacy_icon(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.element_classes(id).iter().any(|c| c == LEGACY_ICON_CLASS)
}

/// Check if an element is an icon of the canonical family.
pub fn is_icon(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.element_classes(id)
        .iter()
        .any(|c| c.contains(ICON_FAMILY_MARKER))
}

/// Normalize glyph text for alias lookup: trimmed, lower-cased, no whitespace.
pub fn normalize_glyph(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Check if glyph text names a back arrow.
pub fn is_back_glyph(text: &str) -> bool {
    BACK_ICON_ALIASES.contains(&normalize_glyph(text).as_str())
}

/// Check if glyph text names a messaging icon.
pub fn is_message_glyph(text: &str) -> bool {
    MESSAGE_ICON_ALIASES.contains(&normalize_glyph(text).as_str())
}

/// Canonical replacement for a glyph, if the glyph is a known alias.
///
/// Canonical names map to themselves, so the result may equal the input.
pub fn canonical_glyph(text: &str) -> Option<&'static str> {
    if is_back_glyph(text) {
        Some(BACK_GLYPH)
    } else if is_message_glyph(text) {
        Some(MESSAGE_GLYPH)
    } else {
        None
    }
}

/// Fold text for back-arrow detection: lower-cased with underscores removed.
fn fold_for_back_search(text: &str) -> String {
    text.to_lowercase().replace('_', "")
}

/// Check if a flattened text mentions any back-arrow glyph.
pub fn mentions_back_glyph(text: &str) -> bool {
    let folded = fold_for_back_search(text);
    BACK_ICON_ALIASES
        .iter()
        .any(|alias| folded.contains(&fold_for_back_search(alias)))
}

/// Check if an element is an existing back header.
///
/// Any `<header>` whose text mentions a back-arrow glyph qualifies, whatever
/// else it contains.
pub fn is_back_header(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    dom.is_tag(id, "header") && mentions_back_glyph(&dom.collect_text(id, " "))
}

/// Check if an element is an existing bottom navigation bar.
///
/// Matches any `<nav>` whose class attribute contains one of
/// [`BOTTOM_NAV_TOKENS`] as a substring, so `sticky-top` and `fixed-width`
/// navs match as well.
pub fn is_bottom_nav(dom: &ArenaDom, id: ArenaNodeId) -> bool {
    if !dom.is_tag(id, "nav") {
        return false;
    }
    let classes = dom.element_classes(id).join(" ");
    BOTTOM_NAV_TOKENS.iter().any(|token| classes.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn first(dom: &ArenaDom, tag: &str) -> ArenaNodeId {
        dom.find_by_tag(tag).unwrap()
    }

    #[test]
    fn test_glyph_aliases() {
        assert!(is_back_glyph("chevron_left"));
        assert!(is_back_glyph("  Arrow_Back_IOS \n"));
        assert!(is_back_glyph("arrow back"));
        assert!(!is_back_glyph("arrow_forward"));
        assert!(is_message_glyph("Mail"));
        assert!(!is_message_glyph("chat"));

        assert_eq!(canonical_glyph("keyboard_backspace"), Some("arrow_back"));
        assert_eq!(canonical_glyph("arrow_back"), Some("arrow_back"));
        assert_eq!(canonical_glyph(" chatbubble "), Some("chat"));
        assert_eq!(canonical_glyph("home"), None);
    }

    #[test]
    fn test_icon_classes() {
        let dom = parse_html(
            r#"<span class="material-icons md-18">home</span>
               <i class="material-symbols-rounded">star</i>
               <b class="material-icons-outlined">x</b>"#,
        );
        let span = first(&dom, "span");
        let i = first(&dom, "i");
        let b = first(&dom, "b");

        assert!(is_legacy_icon(&dom, span));
        assert!(!is_icon(&dom, span));
        assert!(is_icon(&dom, i));
        assert!(!is_legacy_icon(&dom, b));
    }

    #[test]
    fn test_back_header_detection() {
        let dom = parse_html(
            r#"<header id="a"><button><span>chevron_left</span></button>Title</header>
               <header id="b"><h1>ChevronLeft Apparel</h1></header>
               <header id="c"><h1>Home</h1></header>
               <div id="d"><span>arrow_back</span></div>"#,
        );
        let headers = dom.find_all_by_tag("header");
        let div = first(&dom, "div");

        assert!(is_back_header(&dom, headers[0]));
        // Plain text mentioning an alias is indistinguishable from a glyph.
        assert!(is_back_header(&dom, headers[1]));
        assert!(!is_back_header(&dom, headers[2]));
        assert!(!is_back_header(&dom, div));
    }

    #[test]
    fn test_canonical_back_glyph_is_detected() {
        assert!(mentions_back_glyph("arrow_back Page title"));
        assert!(mentions_back_glyph("ARROWBACKIOSNEW"));
        assert!(!mentions_back_glyph("arrow forward"));
    }

    #[test]
    fn test_bottom_nav_detection() {
        let dom = parse_html(
            r#"<nav class="fixed bottom-0"></nav>
               <nav class="sticky-top breadcrumbs"></nav>
               <nav class="tabs"></nav>
               <nav></nav>
               <div class="fixed bottom-0"></div>"#,
        );
        let navs = dom.find_all_by_tag("nav");
        let div = first(&dom, "div");

        assert!(is_bottom_nav(&dom, navs[0]));
        assert!(is_bottom_nav(&dom, navs[1]));
        assert!(!is_bottom_nav(&dom, navs[2]));
        assert!(!is_bottom_nav(&dom, navs[3]));
        assert!(!is_bottom_nav(&dom, div));
    }
}
