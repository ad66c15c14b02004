//! # facelift
//!
//! Batch standardizer for the HTML pages of a mobile app mockup.
//!
//! Every page in a folder is rewritten in place so that it shares one
//! canonical `<head>`, uses one icon font with one name per glyph, and has
//! exactly the navigation chrome its file name calls for:
//!
//! - **Top-level pages** (`home.html`, `search_results.html`, ...) end with a
//!   bottom navigation bar whose matching tab is marked active.
//! - **Detail pages** (everything else) start with a back header titled after
//!   the page.
//!
//! Running the tool again on its own output changes nothing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use facelift::{BatchOptions, run};
//!
//! let report = run(&BatchOptions::new("site").with_backup_suffix(".orig")).unwrap();
//! println!("{} updated, {} failed", report.succeeded(), report.failed());
//! ```
//!
//! ## Single Pages
//!
//! ```
//! use facelift::{PageKind, standardize};
//!
//! assert!(PageKind::classify("search_results.html").is_top_level());
//! assert!(!PageKind::classify("search.html").is_top_level());
//!
//! let page = standardize("<p>Two bedrooms</p>", "listing_detail.html").unwrap();
//! assert_eq!(page.title, "Listing Detail");
//! assert!(page.html.contains("<header"));
//! ```

pub mod batch;
pub mod dom;
pub mod error;
pub mod standardize;
pub(crate) mod util;

pub use batch::{
    BatchOptions, DEFAULT_BACKUP_SUFFIX, FileOutcome, FileStatus, Report, discover_pages,
    process_file, run,
};
pub use error::{Error, Result};
pub use standardize::{PageKind, StandardizedPage, Tab, Violation, standardize};
pub use util::decode_page;
