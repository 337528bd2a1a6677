mod logo;
pub mod metrics;
mod pdf;
mod text;

pub use logo::{fit_within, Logo, LOGO_BOX};
pub use pdf::PdfRenderer;
pub use text::TextRenderer;

use crate::worksheet::WorksheetStatement;

/// Turns a finished worksheet statement into a document.
pub trait StatementRenderer {
    fn render(&self, statement: &WorksheetStatement) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unable to load builtin font: {0}")]
    Font(String),
    #[error("unable to assemble pdf: {0}")]
    Pdf(String),
}
