//! Canonical markup enforced on every page.
//!
//! The head block is a table of elements built directly into the page. The
//! back header and bottom navigation are HTML templates, parsed once on first
//! use and copied into each page.

use std::sync::LazyLock;

use crate::dom::{ArenaDom, ArenaNodeId, parse_html};
use crate::error::{Error, Result};

/// Title used when a page declares none and none can be derived.
pub const DEFAULT_TITLE: &str = "App";

/// Back-header title used when the resolved title is empty.
pub const BACK_TITLE: &str = "Back";

/// Inline Tailwind theme, the payload of `<script id="tailwind-config">`.
pub const TAILWIND_CONFIG: &str = r##"tailwind.config = {
  darkMode: "class",
  theme: {
    extend: {
      colors: {
        primary: "#13a4ec",
        "background-light": "#f6f7f8",
        "background-dark": "#101c22",
      },
      fontFamily: {
        display: ["Plus Jakarta Sans", "sans-serif"],
      },
      borderRadius: {
        DEFAULT: "0.5rem",
        lg: "1rem",
        xl: "1.5rem",
        full: "9999px",
      },
    },
  },
};
"##;

/// Baseline rendering for Material Symbols glyphs.
pub const ICON_STYLE: &str = r#"/* Material Symbols baseline */
.material-symbols-outlined{
  font-family:"Material Symbols Outlined";
  font-variation-settings:'FILL' 0,'wght' 400,'GRAD' 0,'opsz' 24;
  line-height:1;
  -webkit-font-smoothing:antialiased;
  -moz-osx-font-smoothing:grayscale;
}
"#;

/// One element of the canonical head block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadEntry {
    pub tag: &'static str,
    pub attrs: &'static [(&'static str, &'static str)],
    pub text: Option<&'static str>,
}

/// Everything that follows `<title>` in a standardized head, in order.
pub const HEAD_BLOCK: &[HeadEntry] = &[
    HeadEntry {
        tag: "link",
        attrs: &[("rel", "preconnect"), ("href", "https://fonts.googleapis.com")],
        text: None,
    },
    HeadEntry {
        tag: "link",
        attrs: &[
            ("rel", "preconnect"),
            ("href", "https://fonts.gstatic.com"),
            ("crossorigin", ""),
        ],
        text: None,
    },
    HeadEntry {
        tag: "link",
        attrs: &[
            ("rel", "preload"),
            ("as", "style"),
            (
                "href",
                "https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@400;500;700;800&display=swap",
            ),
            ("onload", "this.rel='stylesheet'"),
        ],
        text: None,
    },
    HeadEntry {
        tag: "link",
        attrs: &[
            (
                "href",
                "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:opsz,wght,FILL,GRAD@24,400,0,0",
            ),
            ("rel", "stylesheet"),
        ],
        text: None,
    },
    HeadEntry {
        tag: "script",
        attrs: &[(
            "src",
            "https://cdn.tailwindcss.com?plugins=forms,container-queries",
        )],
        text: None,
    },
    HeadEntry {
        tag: "script",
        attrs: &[("id", "tailwind-config")],
        text: Some(TAILWIND_CONFIG),
    },
    HeadEntry {
        tag: "style",
        attrs: &[],
        text: Some(ICON_STYLE),
    },
];

impl HeadEntry {
    /// Build a detached element for this entry.
    pub fn build(&self, dom: &mut ArenaDom) -> ArenaNodeId {
        let el = dom.create_html_element(self.tag, self.attrs);
        if let Some(text) = self.text {
            dom.append_text(el, text);
        }
        el
    }

    /// Check whether an element in `dom` is exactly this entry.
    pub fn matches(&self, dom: &ArenaDom, id: ArenaNodeId) -> bool {
        dom.is_tag(id, self.tag)
            && dom.attrs(id) == self.attrs
            && match self.text {
                Some(text) => dom.single_text_child(id) == Some(text),
                None => dom.children(id).next().is_none(),
            }
    }
}

pub const BACK_HEADER_HTML: &str = r#"<header class="sticky top-0 z-50 bg-white/90 dark:bg-slate-900/80 backdrop-blur border-b border-slate-200 dark:border-slate-800">
  <div class="h-14 flex items-center gap-3 px-4">
    <a href="javascript:history.back()" class="inline-flex h-10 w-10 items-center justify-center rounded-full hover:bg-slate-100 dark:hover:bg-slate-800 text-slate-700 dark:text-slate-200" aria-label="Back">
      <span class="material-symbols-outlined text-[24px]" aria-hidden="true">arrow_back</span>
    </a>
    <h1 class="text-base font-bold tracking-wide truncate">Page title</h1>
  </div>
</header>"#;

pub const BOTTOM_NAV_HTML: &str = r#"<nav class="fixed bottom-0 inset-x-0 z-50 border-t border-slate-200 dark:border-slate-800 bg-white/95 dark:bg-slate-900/90 backdrop-blur">
  <ul class="grid grid-cols-5 text-xs">
    <li>
      <a href="home.html" data-tab="home" class="flex flex-col items-center justify-center py-2 text-slate-600 dark:text-slate-300 hover:text-primary">
        <span class="material-symbols-outlined text-[22px]">home</span>
        <span class="text-[10px] leading-none mt-1">Home</span>
      </a>
    </li>
    <li>
      <a href="search_results.html" data-tab="search" class="flex flex-col items-center justify-center py-2 text-slate-600 dark:text-slate-300 hover:text-primary">
        <span class="material-symbols-outlined text-[22px]">search</span>
        <span class="text-[10px] leading-none mt-1">Search</span>
      </a>
    </li>
    <li>
      <a href="saved.html" data-tab="saved" class="flex flex-col items-center justify-center py-2 text-slate-600 dark:text-slate-300 hover:text-primary">
        <span class="material-symbols-outlined text-[22px]">bookmark</span>
        <span class="text-[10px] leading-none mt-1">Saved</span>
      </a>
    </li>
    <li>
      <a href="message_threads.html" data-tab="messages" class="flex flex-col items-center justify-center py-2 text-slate-600 dark:text-slate-300 hover:text-primary">
        <span class="material-symbols-outlined text-[22px]">chat</span>
        <span class="text-[10px] leading-none mt-1">Messages</span>
      </a>
    </li>
    <li>
      <a href="profile.html" data-tab="profile" class="flex flex-col items-center justify-center py-2 text-slate-600 dark:text-slate-300 hover:text-primary">
        <span class="material-symbols-outlined text-[22px]">person</span>
        <span class="text-[10px] leading-none mt-1">Profile</span>
      </a>
    </li>
  </ul>
</nav>"#;

/// A parsed template whose root element is copied into pages.
pub struct Fragment {
    dom: ArenaDom,
    root: Option<ArenaNodeId>,
    tag: &'static str,
}

impl Fragment {
    /// Parse `html` and take its first `tag` element as the template root.
    pub fn parse(html: &str, tag: &'static str) -> Self {
        let dom = parse_html(html);
        let root = dom.find_by_tag(tag);
        Self { dom, root, tag }
    }

    /// Copy the template into `dom`, returning the detached copy.
    pub fn instantiate(&self, dom: &mut ArenaDom) -> Result<ArenaNodeId> {
        let root = self
            .root
            .ok_or_else(|| Error::MissingElement(format!("<{}> in template", self.tag)))?;
        Ok(dom.import_subtree(&self.dom, root))
    }
}

pub static BACK_HEADER: LazyLock<Fragment> =
    LazyLock::new(|| Fragment::parse(BACK_HEADER_HTML, "header"));

pub static BOTTOM_NAV: LazyLock<Fragment> =
    LazyLock::new(|| Fragment::parse(BOTTOM_NAV_HTML, "nav"));
