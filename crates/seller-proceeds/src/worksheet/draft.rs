use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::domain::{today, LineItemInputs, Money};
use super::premium::compute_title_premium;

/// Form defaults for the percent and rate fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftDefaults {
    pub listing_agent_percent: Decimal,
    pub buyers_agent_percent: Decimal,
    pub transfer_tax_rate: Decimal,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            listing_agent_percent: dec!(3.0),
            buyers_agent_percent: dec!(3.0),
            transfer_tax_rate: dec!(8.60),
        }
    }
}

/// Editable amounts a blank form starts with for a given sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineItemDefaults {
    pub listing_commission_amount: Money,
    pub buyers_commission_amount: Money,
    pub title_insurance: Money,
    pub transfer_tax_amount: Money,
}

impl LineItemDefaults {
    pub fn for_sale(
        selling_price: Money,
        listing_agent_percent: Decimal,
        buyers_agent_percent: Decimal,
        transfer_tax_rate: Decimal,
    ) -> Self {
        Self {
            listing_commission_amount: selling_price * listing_agent_percent / dec!(100),
            buyers_commission_amount: selling_price * buyers_agent_percent / dec!(100),
            title_insurance: compute_title_premium(selling_price),
            transfer_tax_amount: selling_price / dec!(1000) * transfer_tax_rate,
        }
    }
}

/// A submitted worksheet form. Percents, rate and the four derived amounts may
/// be omitted; [`WorksheetDraft::resolve`] fills them in once. Any value that
/// is present, zero included, is kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorksheetDraft {
    pub name: String,
    pub property: String,
    pub selling_price: Money,
    pub mortgage_balance: Money,
    pub listing_agent_percent: Option<Decimal>,
    pub listing_commission_amount: Option<Money>,
    pub buyers_agent_percent: Option<Decimal>,
    pub buyers_commission_amount: Option<Money>,
    pub title_insurance: Option<Money>,
    pub transfer_tax_rate: Option<Decimal>,
    pub transfer_tax_amount: Option<Money>,
    pub pest_inspection: Money,
    pub city_certifications: Money,
    pub well_septic_inspection: Money,
    pub well_septic_note: String,
    pub home_warranty: Money,
    pub seller_concessions: Money,
    pub transaction_fee: Money,
    pub survey: Money,
    pub use_occupancy_escrow: Money,
    pub taxes_escrow_rebate: Money,
    pub agent: String,
    pub seller: String,
    pub date: Option<NaiveDate>,
}

impl WorksheetDraft {
    pub fn defaults(&self, fallback: &DraftDefaults) -> LineItemDefaults {
        LineItemDefaults::for_sale(
            self.selling_price,
            self.listing_agent_percent
                .unwrap_or(fallback.listing_agent_percent),
            self.buyers_agent_percent
                .unwrap_or(fallback.buyers_agent_percent),
            self.transfer_tax_rate.unwrap_or(fallback.transfer_tax_rate),
        )
    }

    pub fn resolve(self, fallback: &DraftDefaults) -> LineItemInputs {
        let initial = self.defaults(fallback);

        LineItemInputs {
            name: self.name,
            property: self.property,
            selling_price: self.selling_price,
            mortgage_balance: self.mortgage_balance,
            listing_agent_percent: self
                .listing_agent_percent
                .unwrap_or(fallback.listing_agent_percent),
            listing_commission_amount: self
                .listing_commission_amount
                .unwrap_or(initial.listing_commission_amount),
            buyers_agent_percent: self
                .buyers_agent_percent
                .unwrap_or(fallback.buyers_agent_percent),
            buyers_commission_amount: self
                .buyers_commission_amount
                .unwrap_or(initial.buyers_commission_amount),
            title_insurance: self.title_insurance.unwrap_or(initial.title_insurance),
            transfer_tax_rate: self.transfer_tax_rate.unwrap_or(fallback.transfer_tax_rate),
            transfer_tax_amount: self
                .transfer_tax_amount
                .unwrap_or(initial.transfer_tax_amount),
            pest_inspection: self.pest_inspection,
            city_certifications: self.city_certifications,
            well_septic_inspection: self.well_septic_inspection,
            well_septic_note: self.well_septic_note,
            home_warranty: self.home_warranty,
            seller_concessions: self.seller_concessions,
            transaction_fee: self.transaction_fee,
            survey: self.survey,
            use_occupancy_escrow: self.use_occupancy_escrow,
            taxes_escrow_rebate: self.taxes_escrow_rebate,
            agent: self.agent,
            seller: self.seller,
            date: self.date.unwrap_or_else(today),
        }
    }
}
