use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount in dollars.
pub type Money = Decimal;

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Every value that appears on a proceeds worksheet, after form defaults have
/// been applied. Commission amounts, title insurance and transfer tax are
/// owned values: they are not tied to the percents, rate or price they were
/// first derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItemInputs {
    pub name: String,
    pub property: String,
    pub selling_price: Money,
    pub mortgage_balance: Money,
    pub listing_agent_percent: Decimal,
    pub listing_commission_amount: Money,
    pub buyers_agent_percent: Decimal,
    pub buyers_commission_amount: Money,
    pub title_insurance: Money,
    pub transfer_tax_rate: Decimal,
    pub transfer_tax_amount: Money,
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
    pub date: NaiveDate,
}

impl Default for LineItemInputs {
    fn default() -> Self {
        Self {
            name: String::new(),
            property: String::new(),
            selling_price: Money::ZERO,
            mortgage_balance: Money::ZERO,
            listing_agent_percent: Decimal::ZERO,
            listing_commission_amount: Money::ZERO,
            buyers_agent_percent: Decimal::ZERO,
            buyers_commission_amount: Money::ZERO,
            title_insurance: Money::ZERO,
            transfer_tax_rate: Decimal::ZERO,
            transfer_tax_amount: Money::ZERO,
            pest_inspection: Money::ZERO,
            city_certifications: Money::ZERO,
            well_septic_inspection: Money::ZERO,
            well_septic_note: String::new(),
            home_warranty: Money::ZERO,
            seller_concessions: Money::ZERO,
            transaction_fee: Money::ZERO,
            survey: Money::ZERO,
            use_occupancy_escrow: Money::ZERO,
            taxes_escrow_rebate: Money::ZERO,
            agent: String::new(),
            seller: String::new(),
            date: today(),
        }
    }
}

impl LineItemInputs {
    pub fn expense(&self, item: ExpenseItem) -> Money {
        match item {
            ExpenseItem::ListingCommission => self.listing_commission_amount,
            ExpenseItem::BuyersCommission => self.buyers_commission_amount,
            ExpenseItem::TitleInsurance => self.title_insurance,
            ExpenseItem::TransferTax => self.transfer_tax_amount,
            ExpenseItem::PestInspection => self.pest_inspection,
            ExpenseItem::CityCertifications => self.city_certifications,
            ExpenseItem::WellSepticInspection => self.well_septic_inspection,
            ExpenseItem::HomeWarranty => self.home_warranty,
            ExpenseItem::SellerConcessions => self.seller_concessions,
            ExpenseItem::TransactionFee => self.transaction_fee,
            ExpenseItem::Survey => self.survey,
        }
    }

    /// Every monetary field paired with its field name, in worksheet order.
    pub fn monetary_fields(&self) -> [(&'static str, Money); 15] {
        [
            ("selling_price", self.selling_price),
            ("mortgage_balance", self.mortgage_balance),
            ("listing_commission_amount", self.listing_commission_amount),
            ("buyers_commission_amount", self.buyers_commission_amount),
            ("title_insurance", self.title_insurance),
            ("transfer_tax_amount", self.transfer_tax_amount),
            ("pest_inspection", self.pest_inspection),
            ("city_certifications", self.city_certifications),
            ("well_septic_inspection", self.well_septic_inspection),
            ("home_warranty", self.home_warranty),
            ("seller_concessions", self.seller_concessions),
            ("transaction_fee", self.transaction_fee),
            ("survey", self.survey),
            ("use_occupancy_escrow", self.use_occupancy_escrow),
            ("taxes_escrow_rebate", self.taxes_escrow_rebate),
        ]
    }
}

/// Line items that make up the total selling expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseItem {
    ListingCommission,
    BuyersCommission,
    TitleInsurance,
    TransferTax,
    PestInspection,
    CityCertifications,
    WellSepticInspection,
    HomeWarranty,
    SellerConcessions,
    TransactionFee,
    Survey,
}

impl ExpenseItem {
    /// Summation order for the total selling expense.
    pub const fn ordered() -> [Self; 11] {
        [
            Self::ListingCommission,
            Self::BuyersCommission,
            Self::TitleInsurance,
            Self::TransferTax,
            Self::PestInspection,
            Self::CityCertifications,
            Self::WellSepticInspection,
            Self::HomeWarranty,
            Self::SellerConcessions,
            Self::TransactionFee,
            Self::Survey,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ListingCommission => "Commission - Listing Agent",
            Self::BuyersCommission => "Commission - Buyers Agent",
            Self::TitleInsurance => "Owner's Title Insurance Policy",
            Self::TransferTax => "MI Transfer Tax",
            Self::PestInspection => "Pest Inspection",
            Self::CityCertifications => "City Certifications",
            Self::WellSepticInspection => "Well & Septic Inspection",
            Self::HomeWarranty => "Home Warranty",
            Self::SellerConcessions => "Seller Concessions",
            Self::TransactionFee => "Transaction Fee",
            Self::Survey => "Survey, splitting costs",
        }
    }
}

/// Totals derived from a set of [`LineItemInputs`]. Recomputed on every
/// submission and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputedTotals {
    pub total_selling_expense: Money,
    pub approximate_proceeds: Money,
}
