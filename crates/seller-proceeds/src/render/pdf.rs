use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt,
};

use super::logo::Logo;
use super::metrics::{text_width, wrap_text};
use super::{RenderError, StatementRenderer};
use crate::worksheet::{RowKind, StatementRow, WorksheetStatement};

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 36.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 9.0;
const BODY_LEADING: f32 = 10.0;
const CELL_PADDING: f32 = 4.0;
const ROW_HEIGHT: f32 = BODY_SIZE + 2.0 * CELL_PADDING;
const COLUMN_WIDTHS: [f32; 4] = [220.0, 110.0, 100.0, 110.0];

/// Letter-size, single-page worksheet in the standard Helvetica faces.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    logo: Option<Logo>,
}

impl PdfRenderer {
    pub fn new(logo: Option<Logo>) -> Self {
        Self { logo }
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

/// Tracks the top of the remaining space on the page, in points from the
/// bottom edge.
struct PageCursor {
    layer: PdfLayerReference,
    y: f32,
}

impl PageCursor {
    fn skip(&mut self, points: f32) {
        self.y -= points;
    }

    fn text(&self, text: &str, size: f32, x: f32, baseline: f32, font: &IndirectFontRef) {
        if text.is_empty() {
            return;
        }
        self.layer
            .use_text(text, size, Mm::from(Pt(x)), Mm::from(Pt(baseline)), font);
    }

    fn centered(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        let x = MARGIN + (CONTENT_WIDTH - text_width(text, size)).max(0.0) / 2.0;
        self.text(text, size, x, self.y - size, font);
        self.skip(size * 1.2);
    }

    fn logo(&mut self, logo: &Logo) {
        let (width, height) = logo.fitted_size();
        let image = Image::from_dynamic_image(&logo.image);
        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm::from(Pt(MARGIN))),
                translate_y: Some(Mm::from(Pt(self.y - height))),
                scale_x: Some(width / logo.width_px as f32),
                scale_y: Some(height / logo.height_px as f32),
                dpi: Some(72.0),
                ..Default::default()
            },
        );
        self.skip(height);
    }

    fn row(&mut self, row: &StatementRow, font: &IndirectFontRef) {
        let baseline = self.y - CELL_PADDING - BODY_SIZE + 2.0;
        let mut column_x = MARGIN;

        for (index, cell) in row.cells.iter().enumerate().take(COLUMN_WIDTHS.len()) {
            let width = COLUMN_WIDTHS[index];
            // Amounts sit flush right in the second column.
            let x = if index == 1 && row.kind != RowKind::Signature {
                column_x + width - CELL_PADDING - text_width(cell, BODY_SIZE)
            } else {
                column_x + CELL_PADDING
            };
            self.text(cell, BODY_SIZE, x, baseline, font);
            column_x += width;
        }

        self.skip(ROW_HEIGHT);
    }

    fn paragraph(&mut self, text: &str, font: &IndirectFontRef) {
        for line in wrap_text(text, BODY_SIZE, CONTENT_WIDTH) {
            self.text(&line, BODY_SIZE, MARGIN, self.y - BODY_SIZE, font);
            self.skip(BODY_LEADING);
        }
    }
}

impl StatementRenderer for PdfRenderer {
    fn render(&self, statement: &WorksheetStatement) -> Result<Vec<u8>, RenderError> {
        let (document, page, layer) = PdfDocument::new(
            statement.title,
            Mm::from(Pt(PAGE_WIDTH)),
            Mm::from(Pt(PAGE_HEIGHT)),
            "Worksheet",
        );

        let font = |face| {
            document
                .add_builtin_font(face)
                .map_err(|err| RenderError::Font(err.to_string()))
        };
        let fonts = Fonts {
            regular: font(BuiltinFont::Helvetica)?,
            bold: font(BuiltinFont::HelveticaBold)?,
            oblique: font(BuiltinFont::HelveticaOblique)?,
        };

        let mut cursor = PageCursor {
            layer: document.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT - MARGIN,
        };

        if let Some(logo) = &self.logo {
            cursor.logo(logo);
        }
        cursor.skip(12.0);

        cursor.centered(statement.title, TITLE_SIZE, &fonts.bold);
        cursor.skip(18.0);

        for row in &statement.rows {
            cursor.row(row, &fonts.regular);
        }

        cursor.skip(18.0);
        cursor.paragraph(statement.disclaimer, &fonts.regular);
        cursor.skip(12.0);
        cursor.centered(statement.tax_note, BODY_SIZE, &fonts.oblique);

        document
            .save_to_bytes()
            .map_err(|err| RenderError::Pdf(err.to_string()))
    }
}
