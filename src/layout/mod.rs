//! Greedy word wrapping and pagination of plain text.
//!
//! Layout only computes geometry: which words go on which line, and where
//! each line sits on which page. Widths come from a [Measure] implementation
//! supplied by the caller, so the same algorithm works with real font
//! metrics ([crate::FontMetrics]), fixed-advance metrics ([Monospace]) or a
//! deterministic stub in tests.
//!
//! # Example
//!
//! ```
//! use textpage::layout::{paginate, Monospace, PaginationConfig};
//! use textpage::{pagesize, Pt};
//!
//! let config = PaginationConfig::new(pagesize::LETTER, Pt(72.0), Pt(11.0));
//! let text = lipsum::lipsum(2000);
//! let pages = paginate(&text, &config, &Monospace::courier(config.font_size)).unwrap();
//!
//! assert!(pages.len() > 1);
//! for page in &pages {
//!     for line in &page.lines {
//!         assert!(page.content_box.contains_y(line.coords.1));
//!     }
//! }
//! ```

mod measure;
mod pages;
mod text;

pub use measure::{Measure, Monospace};
pub(crate) use measure::Memoized;
pub use pages::*;
pub use text::*;
