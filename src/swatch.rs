//! Single-page PDF swatch sheets, for checking a palette on paper.

use crate::{
    pagesize::{PageSize, LETTER},
    refs::{ObjectReferences, RefType},
    units::*,
    Colour, ColourError, Palette, Rect,
};
use pdf_writer::{Content, Finish, Pdf};
use std::io::Write;
use tracing::{debug, trace};

/// One filled square on a swatch sheet
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SwatchCell {
    pub colour: Colour,
    pub rect: Rect,
}

/// Lays a palette out as a grid of squares, left to right and top to bottom,
/// then renders it to a PDF with a call to [SwatchSheet::write].
///
/// ```
/// use recipe_palette::{Palette, SwatchSheet, pagesize::A4, Pt};
///
/// let mut pdf = Vec::new();
/// SwatchSheet::new(Palette::new(12))
///     .with_page_size(A4)
///     .with_margin(Pt(36.0))
///     .with_columns(4)
///     .write(&mut pdf)
///     .unwrap();
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
#[derive(Debug, Clone)]
pub struct SwatchSheet {
    palette: Palette,
    page_size: PageSize,
    margin: Pt,
    columns: usize,
}

impl SwatchSheet {
    /// A letter-sized sheet with half-inch margins and five columns
    pub fn new(palette: Palette) -> SwatchSheet {
        SwatchSheet {
            palette,
            page_size: LETTER,
            margin: In(0.5).into(),
            columns: 5,
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> SwatchSheet {
        self.page_size = page_size;
        self
    }

    pub fn with_margin<D: Into<Pt>>(mut self, margin: D) -> SwatchSheet {
        self.margin = margin.into();
        self
    }

    /// Number of swatches per row. Zero is treated as one.
    pub fn with_columns(mut self, columns: usize) -> SwatchSheet {
        self.columns = columns.max(1);
        self
    }

    fn media_box(&self) -> Rect {
        let (width, height) = self.page_size;
        Rect::new(Pt(0.0), Pt(0.0), width, height)
    }

    /// Where each colour will be drawn. Cells are square unless there are too
    /// many rows to fit, in which case they get shorter.
    pub fn layout(&self) -> Vec<SwatchCell> {
        let count = self.palette.len();
        if count == 0 {
            return Vec::new();
        }

        let content = self.media_box().inset(self.margin);
        let rows = count.div_ceil(self.columns);
        let cell_width = *content.width() / self.columns as f32;
        let cell_height = cell_width.min(*content.height() / rows as f32);

        self.palette
            .iter()
            .enumerate()
            .map(|(i, &colour)| {
                let column = (i % self.columns) as f32;
                let row = (i / self.columns) as f32;
                let x1 = content.x1 + Pt(column * cell_width);
                let y2 = content.y2 - Pt(row * cell_height);
                SwatchCell {
                    colour,
                    rect: Rect::new(x1, y2 - Pt(cell_height), x1 + Pt(cell_width), y2),
                }
            })
            .collect()
    }

    /// Write the sheet as a complete PDF document. Alpha is ignored; every swatch
    /// is painted opaque.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), ColourError> {
        let cells = self.layout();
        debug!(
            swatches = cells.len(),
            columns = self.columns,
            "writing swatch sheet"
        );

        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        writer
            .catalog(refs.id(RefType::Catalog))
            .pages(refs.id(RefType::PageTree));
        writer
            .pages(refs.id(RefType::PageTree))
            .kids([refs.id(RefType::Page)])
            .count(1);

        let mut page = writer.page(refs.id(RefType::Page));
        page.media_box(self.media_box().into());
        page.parent(refs.id(RefType::PageTree));
        page.contents(refs.id(RefType::Content));
        page.finish();

        let mut content = Content::new();
        for cell in cells.iter() {
            trace!(colour = %cell.colour, x = *cell.rect.x1, y = *cell.rect.y1, "swatch");
            let Colour { r, g, b, .. } = cell.colour;
            content.set_fill_rgb((r / 255.0) as f32, (g / 255.0) as f32, (b / 255.0) as f32);
            content.rect(
                cell.rect.x1.into(),
                cell.rect.y1.into(),
                cell.rect.width().into(),
                cell.rect.height().into(),
            );
            content.fill_nonzero();
        }
        writer.stream(refs.id(RefType::Content), &content.finish());

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
