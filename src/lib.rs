//! Text analysis and fixed-page layout for a plain-text document editor.
//!
//! Two pure entry points operate on a snapshot of the document text:
//!
//! - [highlight::highlight] classifies keywords, strings, comments and
//!   numbers into [highlight::StyleSpan]s for the host to decorate with.
//! - [layout::paginate] wraps the text greedily to a page width and stacks
//!   the wrapped lines onto fixed-size [layout::Page]s, which
//!   [export::render_pdf] can turn into a PDF.
//!
//! Neither keeps state between calls.

mod colour;
pub use colour::*;

pub mod config;

mod error;
pub use error::*;

pub mod export;

mod font;
pub use font::*;

pub mod highlight;

pub mod layout;

pub mod pagesize;

mod rect;
pub use rect::*;

mod units;
pub use units::*;
