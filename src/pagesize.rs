//! Common paper formats, in portrait orientation (width ≤ height).
//!
//! ```
//! use textpage::pagesize::{self, PageOrientation};
//!
//! let a4 = pagesize::by_name("a4").expect("a4 is a known size");
//! assert_eq!(a4, pagesize::A4);
//! assert!(a4.landscape().0 > a4.landscape().1);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// iso a-series, converted from mm
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Look up a page size by its case-insensitive name, as written in configuration files
pub fn by_name(name: &str) -> Option<PageSize> {
    match name.trim().to_ascii_lowercase().as_str() {
        "letter" => Some(LETTER),
        "legal" => Some(LEGAL),
        "tabloid" => Some(TABLOID),
        "a3" => Some(A3),
        "a4" => Some(A4),
        "a5" => Some(A5),
        _ => None,
    }
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(by_name(" Letter "), Some(LETTER));
        assert_eq!(by_name("A5"), Some(A5));
        assert_eq!(by_name("b5"), None);
    }

    #[test]
    fn orientation_round_trips() {
        assert_eq!(A4.landscape().portrait(), A4);
        assert_eq!(LETTER.portrait(), LETTER);
    }
}
