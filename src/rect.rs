use crate::units::*;

/// An axis-aligned rectangle in page space, specified by its lower-left
/// (`x1`, `y1`) and upper-right (`x2`, `y2`) corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    pub fn new(x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Rect {
        Rect { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Shrink the rectangle by `inset` on every side
    pub fn inset(&self, inset: Pt) -> Rect {
        Rect {
            x1: self.x1 + inset,
            y1: self.y1 + inset,
            x2: self.x2 - inset,
            y2: self.y2 - inset,
        }
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}
