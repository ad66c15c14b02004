//! Page classification: top-level tab pages versus detail pages.

use std::fmt;
use std::path::Path;

/// A bottom-navigation tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Search,
    Saved,
    Messages,
    Profile,
    /// Top-level page with no entry in the bottom navigation.
    Map,
}

impl Tab {
    /// The `data-tab` value identifying this tab.
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Search => "search",
            Tab::Saved => "saved",
            Tab::Messages => "messages",
            Tab::Profile => "profile",
            Tab::Map => "map",
        }
    }

    /// Whether the canonical bottom navigation has an entry for this tab.
    pub fn has_nav_entry(self) -> bool {
        !matches!(self, Tab::Map)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File names of the top-level pages and the tab each one anchors.
pub const TOP_LEVEL_PAGES: &[(&str, Tab)] = &[
    ("home.html", Tab::Home),
    ("search_results.html", Tab::Search),
    ("saved.html", Tab::Saved),
    ("message_threads.html", Tab::Messages),
    ("profile.html", Tab::Profile),
    ("map.html", Tab::Map),
];

/// How a page is decorated: bottom navigation or back header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Anchors a tab; gets the bottom navigation and no back header.
    TopLevel(Tab),
    /// Any other page; gets a back header and no bottom navigation.
    Detail,
}

impl PageKind {
    /// Classify a page by its file name.
    ///
    /// Only the final path component is considered, and the match is exact.
    pub fn classify(file_name: &str) -> Self {
        let name = Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file_name);

        TOP_LEVEL_PAGES
            .iter()
            .find(|(page, _)| *page == name)
            .map_or(PageKind::Detail, |&(_, tab)| PageKind::TopLevel(tab))
    }

    pub fn is_top_level(self) -> bool {
        matches!(self, PageKind::TopLevel(_))
    }

    pub fn tab(self) -> Option<Tab> {
        match self {
            PageKind::TopLevel(tab) => Some(tab),
            PageKind::Detail => None,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::TopLevel(tab) => write!(f, "top-level ({tab})"),
            PageKind::Detail => f.write_str("detail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_top_level() {
        assert_eq!(PageKind::classify("home.html"), PageKind::TopLevel(Tab::Home));
        assert_eq!(
            PageKind::classify("message_threads.html"),
            PageKind::TopLevel(Tab::Messages)
        );
        assert_eq!(PageKind::classify("map.html"), PageKind::TopLevel(Tab::Map));
    }

    #[test]
    fn test_classify_uses_file_name_only() {
        assert_eq!(
            PageKind::classify("site/pages/saved.html"),
            PageKind::TopLevel(Tab::Saved)
        );
        assert_eq!(PageKind::classify("home/listing.html"), PageKind::Detail);
    }

    #[test]
    fn test_classify_is_exact() {
        assert_eq!(PageKind::classify("Home.html"), PageKind::Detail);
        assert_eq!(PageKind::classify("home.htm"), PageKind::Detail);
        assert_eq!(PageKind::classify("listing_detail.html"), PageKind::Detail);
    }

    #[test]
    fn test_map_has_no_nav_entry() {
        assert!(!Tab::Map.has_nav_entry());
        assert!(Tab::Profile.has_nav_entry());
        assert_eq!(PageKind::TopLevel(Tab::Map).to_string(), "top-level (map)");
    }
}
