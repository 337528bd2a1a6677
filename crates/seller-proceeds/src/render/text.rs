use std::fmt::Write as _;

use super::metrics::wrap_with;
use super::{RenderError, StatementRenderer};
use crate::worksheet::{RowKind, WorksheetStatement};

const LINE_WIDTH: usize = 72;
const LABEL_WIDTH: usize = 40;
const VALUE_WIDTH: usize = 16;

/// Plain-text rendition of the worksheet for terminals and logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn render_string(&self, statement: &WorksheetStatement) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:^width$}", statement.title, width = LINE_WIDTH);
        out.push('\n');

        for row in &statement.rows {
            match row.kind {
                RowKind::Spacer => out.push('\n'),
                RowKind::Signature => {
                    let _ = writeln!(out, "{}", row.cells.join("  ").trim_end());
                }
                _ => {
                    let mut line = format!(
                        "{:<label$}{:>value$}",
                        row.label(),
                        row.value(),
                        label = LABEL_WIDTH,
                        value = VALUE_WIDTH
                    );
                    for extra in row.cells.iter().skip(2).filter(|cell| !cell.is_empty()) {
                        line.push_str("  ");
                        line.push_str(extra);
                    }
                    let _ = writeln!(out, "{}", line.trim_end());
                }
            }
        }

        out.push('\n');
        for line in wrap_with(statement.disclaimer, LINE_WIDTH as f32, |line| {
            line.chars().count() as f32
        }) {
            let _ = writeln!(out, "{line}");
        }
        out.push('\n');
        let _ = writeln!(out, "{:^width$}", statement.tax_note, width = LINE_WIDTH);
        out
    }
}

impl StatementRenderer for TextRenderer {
    fn render(&self, statement: &WorksheetStatement) -> Result<Vec<u8>, RenderError> {
        Ok(self.render_string(statement).into_bytes())
    }
}
