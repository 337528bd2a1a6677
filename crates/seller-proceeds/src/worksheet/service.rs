use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use super::domain::{ComputedTotals, LineItemInputs, Money};
use super::draft::{DraftDefaults, LineItemDefaults, WorksheetDraft};
use super::statement::WorksheetStatement;
use super::totals::compute_totals;
use super::validation::{
    check_draft_ranges, check_range, AmountPolicy, WorksheetError, MAX_AMOUNT, MAX_RATE,
};
use crate::render::{Logo, PdfRenderer, RenderError, StatementRenderer, TextRenderer};

/// Knobs for turning drafts into worksheets.
#[derive(Debug, Clone, Default)]
pub struct WorksheetSettings {
    pub defaults: DraftDefaults,
    pub policy: AmountPolicy,
    pub logo_path: Option<PathBuf>,
}

/// Inputs and the totals computed from them for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worksheet {
    pub inputs: LineItemInputs,
    pub totals: ComputedTotals,
}

impl Worksheet {
    pub fn new(inputs: LineItemInputs) -> Self {
        let totals = compute_totals(&inputs);
        Self { inputs, totals }
    }

    pub fn statement(&self) -> WorksheetStatement {
        WorksheetStatement::build(&self.inputs, &self.totals)
    }
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct WorksheetService {
    settings: WorksheetSettings,
}

impl WorksheetService {
    pub fn new(settings: WorksheetSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &WorksheetSettings {
        &self.settings
    }

    /// Values a blank form starts with for a sale at `selling_price`.
    pub fn defaults(
        &self,
        selling_price: Money,
        listing_agent_percent: Option<Decimal>,
        buyers_agent_percent: Option<Decimal>,
        transfer_tax_rate: Option<Decimal>,
    ) -> Result<LineItemDefaults, WorksheetError> {
        let fallback = &self.settings.defaults;
        let listing_agent_percent =
            listing_agent_percent.unwrap_or(fallback.listing_agent_percent);
        let buyers_agent_percent =
            buyers_agent_percent.unwrap_or(fallback.buyers_agent_percent);
        let transfer_tax_rate = transfer_tax_rate.unwrap_or(fallback.transfer_tax_rate);

        check_range("selling_price", selling_price, MAX_AMOUNT)?;
        check_range("listing_agent_percent", listing_agent_percent, MAX_RATE)?;
        check_range("buyers_agent_percent", buyers_agent_percent, MAX_RATE)?;
        check_range("transfer_tax_rate", transfer_tax_rate, MAX_RATE)?;

        Ok(LineItemDefaults::for_sale(
            selling_price,
            listing_agent_percent,
            buyers_agent_percent,
            transfer_tax_rate,
        ))
    }

    pub fn prepare(&self, draft: WorksheetDraft) -> Result<Worksheet, WorksheetError> {
        check_draft_ranges(&draft)?;
        let inputs = draft.resolve(&self.settings.defaults);
        self.settings.policy.check(&inputs)?;

        let worksheet = Worksheet::new(inputs);
        info!(
            selling_price = %worksheet.inputs.selling_price,
            total_selling_expense = %worksheet.totals.total_selling_expense,
            approximate_proceeds = %worksheet.totals.approximate_proceeds,
            "worksheet prepared"
        );
        Ok(worksheet)
    }

    pub fn render_pdf(&self, worksheet: &Worksheet) -> Result<RenderedDocument, RenderError> {
        let logo = self.settings.logo_path.as_deref().and_then(Logo::load);
        let statement = worksheet.statement();
        let bytes = PdfRenderer::new(logo).render(&statement)?;

        debug!(file_name = %statement.file_name, bytes = bytes.len(), "worksheet pdf rendered");
        Ok(RenderedDocument {
            file_name: statement.file_name,
            bytes,
        })
    }

    pub fn render_text(&self, worksheet: &Worksheet) -> String {
        TextRenderer.render_string(&worksheet.statement())
    }
}
