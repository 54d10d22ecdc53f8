use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the lower-left corner.
    pub x1: Pt,
    /// The y-coordinate of the lower-left corner.
    pub y1: Pt,
    /// The x-coordinate of the upper-right corner.
    pub x2: Pt,
    /// The y-coordinate of the upper-right corner.
    pub y2: Pt,
}

impl Rect {
    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Whether a baseline at `y` lies within the vertical extent of the rectangle
    pub fn contains_y(&self, y: Pt) -> bool {
        y >= self.y1 && y <= self.y2
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect::new(r.x1.0, r.y1.0, r.x2.0, r.y2.0)
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        (*r).into()
    }
}
