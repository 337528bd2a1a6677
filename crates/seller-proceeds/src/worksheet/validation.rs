use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::domain::{LineItemInputs, Money};
use super::draft::WorksheetDraft;

/// Largest magnitude accepted for a dollar amount.
pub const MAX_AMOUNT: Money = dec!(1000000000000000);
/// Largest magnitude accepted for a commission percent or transfer tax rate.
pub const MAX_RATE: Decimal = dec!(1000000);

/// How negative monetary amounts are treated before totals are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Accept every value as entered.
    #[default]
    Lenient,
    RejectNegative,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorksheetError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Money },
    #[error("{field} is out of range (got {value}, limit {limit})")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        limit: Decimal,
    },
}

/// Rejects a value whose magnitude exceeds `limit`.
pub fn check_range(
    field: &'static str,
    value: Decimal,
    limit: Decimal,
) -> Result<(), WorksheetError> {
    if value.abs() > limit {
        return Err(WorksheetError::OutOfRange {
            field,
            value,
            limit,
        });
    }
    Ok(())
}

/// Bounds every number in a draft so defaults and totals stay within
/// `Decimal` range.
pub fn check_draft_ranges(draft: &WorksheetDraft) -> Result<(), WorksheetError> {
    let amounts = [
        ("selling_price", Some(draft.selling_price)),
        ("mortgage_balance", Some(draft.mortgage_balance)),
        ("listing_commission_amount", draft.listing_commission_amount),
        ("buyers_commission_amount", draft.buyers_commission_amount),
        ("title_insurance", draft.title_insurance),
        ("transfer_tax_amount", draft.transfer_tax_amount),
        ("pest_inspection", Some(draft.pest_inspection)),
        ("city_certifications", Some(draft.city_certifications)),
        ("well_septic_inspection", Some(draft.well_septic_inspection)),
        ("home_warranty", Some(draft.home_warranty)),
        ("seller_concessions", Some(draft.seller_concessions)),
        ("transaction_fee", Some(draft.transaction_fee)),
        ("survey", Some(draft.survey)),
        ("use_occupancy_escrow", Some(draft.use_occupancy_escrow)),
        ("taxes_escrow_rebate", Some(draft.taxes_escrow_rebate)),
    ];
    let rates = [
        ("listing_agent_percent", draft.listing_agent_percent),
        ("buyers_agent_percent", draft.buyers_agent_percent),
        ("transfer_tax_rate", draft.transfer_tax_rate),
    ];

    amounts
        .into_iter()
        .map(|(field, value)| (field, value, MAX_AMOUNT))
        .chain(rates.into_iter().map(|(field, value)| (field, value, MAX_RATE)))
        .try_for_each(|(field, value, limit)| match value {
            Some(value) => check_range(field, value, limit),
            None => Ok(()),
        })
}

/// Names of the monetary fields holding a negative amount, in worksheet order.
pub fn negative_amounts(inputs: &LineItemInputs) -> Vec<(&'static str, Money)> {
    inputs
        .monetary_fields()
        .into_iter()
        .filter(|(_, value)| value.is_sign_negative() && !value.is_zero())
        .collect()
}

impl AmountPolicy {
    pub fn check(self, inputs: &LineItemInputs) -> Result<(), WorksheetError> {
        let negatives = negative_amounts(inputs);
        let Some(&(field, value)) = negatives.first() else {
            return Ok(());
        };

        match self {
            AmountPolicy::RejectNegative => Err(WorksheetError::NegativeAmount { field, value }),
            AmountPolicy::Lenient => {
                let fields: Vec<&str> = negatives.iter().map(|(name, _)| *name).collect();
                tracing::warn!(?fields, "accepting negative worksheet amounts");
                Ok(())
            }
        }
    }
}
