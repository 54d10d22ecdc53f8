use crate::error::MeasureError;
use crate::units::Pt;
use std::cell::RefCell;
use std::collections::HashMap;

/// A width oracle: how wide `text` renders in the font and size used for layout.
///
/// Implemented for [Monospace], for [crate::FontMetrics], and for any
/// `Fn(&str) -> Result<Pt, MeasureError>`, which makes a deterministic stub
/// as simple as a function:
///
/// ```
/// use textpage::{layout::Measure, MeasureError, Pt};
///
/// fn chars(text: &str) -> Result<Pt, MeasureError> {
///     Ok(Pt(text.chars().count() as f32))
/// }
///
/// assert_eq!(chars.measure("abc").unwrap(), Pt(3.0));
/// ```
pub trait Measure {
    fn measure(&self, text: &str) -> Result<Pt, MeasureError>;
}

impl<F> Measure for F
where
    F: Fn(&str) -> Result<Pt, MeasureError>,
{
    fn measure(&self, text: &str) -> Result<Pt, MeasureError> {
        self(text)
    }
}

/// Every character advances by the same amount
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Monospace {
    pub advance: Pt,
}

impl Monospace {
    pub fn new(advance: Pt) -> Monospace {
        Monospace { advance }
    }

    /// Metrics of the standard Courier face, whose glyphs are all 600/1000 em wide
    pub fn courier(font_size: Pt) -> Monospace {
        Monospace {
            advance: font_size * 0.6,
        }
    }
}

impl Measure for Monospace {
    fn measure(&self, text: &str) -> Result<Pt, MeasureError> {
        Ok(self.advance * text.chars().count() as f32)
    }
}

/// Remembers the width of every string it has measured. Only lives for one
/// layout pass, so the wrapped measurer never sees the same string twice.
pub(crate) struct Memoized<'m, M: ?Sized> {
    inner: &'m M,
    widths: RefCell<HashMap<String, Pt>>,
}

impl<'m, M: Measure + ?Sized> Memoized<'m, M> {
    pub(crate) fn new(inner: &'m M) -> Self {
        Memoized {
            inner,
            widths: RefCell::new(HashMap::new()),
        }
    }
}

impl<M: Measure + ?Sized> Measure for Memoized<'_, M> {
    fn measure(&self, text: &str) -> Result<Pt, MeasureError> {
        if let Some(width) = self.widths.borrow().get(text) {
            return Ok(*width);
        }
        let width = self.inner.measure(text)?;
        self.widths.borrow_mut().insert(text.to_string(), width);
        Ok(width)
    }
}
