pub mod domain;
mod draft;
pub mod format;
mod premium;
mod router;
mod service;
mod statement;
mod totals;
mod validation;

pub use domain::{ComputedTotals, ExpenseItem, LineItemInputs, Money};
pub use draft::{DraftDefaults, LineItemDefaults, WorksheetDraft};
pub use premium::{compute_title_premium, PremiumBand, PremiumSchedule};
pub use router::worksheet_router;
pub use service::{RenderedDocument, Worksheet, WorksheetService, WorksheetSettings};
pub use statement::{RowKind, StatementRow, WorksheetStatement, DISCLAIMER, TAX_NOTE, WORKSHEET_TITLE};
pub use totals::compute_totals;
pub use validation::{
    check_draft_ranges, negative_amounts, AmountPolicy, WorksheetError, MAX_AMOUNT, MAX_RATE,
};
