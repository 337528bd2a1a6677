use serde::Serialize;

use super::domain::{ComputedTotals, ExpenseItem, LineItemInputs, Money};
use super::format::{download_file_name, format_currency, format_rate};

pub const WORKSHEET_TITLE: &str = "SELLER'S CASH PROCEEDS WORKSHEET";

pub const DISCLAIMER: &str = "The above figures are approximate and are to be used as a guide only. \
Final Statements are prepared prior to closing. This will signify that I have seen the approximate \
cash proceeds on the sale of my home.";

pub const TAX_NOTE: &str = "*Ask your Accountant or Financial Advisor about any tax liability*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Identity,
    Amount,
    Total,
    Adjustment,
    Signature,
    Spacer,
}

/// One line of the worksheet table. Cells are already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRow {
    pub kind: RowKind,
    pub cells: Vec<String>,
}

impl StatementRow {
    fn new<I, S>(kind: RowKind, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    fn spacer() -> Self {
        Self {
            kind: RowKind::Spacer,
            cells: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or("")
    }

    pub fn value(&self) -> &str {
        self.cells.get(1).map(String::as_str).unwrap_or("")
    }
}

/// Everything the document renderer lays out, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorksheetStatement {
    pub title: &'static str,
    pub rows: Vec<StatementRow>,
    pub disclaimer: &'static str,
    pub tax_note: &'static str,
    pub file_name: String,
}

impl WorksheetStatement {
    pub fn build(inputs: &LineItemInputs, totals: &ComputedTotals) -> Self {
        let mut rows = vec![
            StatementRow::new(RowKind::Identity, ["Name:", inputs.name.as_str()]),
            StatementRow::new(RowKind::Identity, ["Property:", inputs.property.as_str()]),
            amount_row("Selling Price", inputs.selling_price),
            amount_row("Mortgage Balances", inputs.mortgage_balance),
        ];

        for item in ExpenseItem::ordered() {
            let amount = format_currency(inputs.expense(item));
            let row = match item {
                ExpenseItem::ListingCommission => StatementRow::new(
                    RowKind::Amount,
                    [
                        format!(
                            "{} {}%",
                            item.label(),
                            format_rate(inputs.listing_agent_percent)
                        ),
                        amount,
                    ],
                ),
                ExpenseItem::BuyersCommission => StatementRow::new(
                    RowKind::Amount,
                    [
                        format!(
                            "{} {}%",
                            item.label(),
                            format_rate(inputs.buyers_agent_percent)
                        ),
                        amount,
                    ],
                ),
                ExpenseItem::TransferTax => StatementRow::new(
                    RowKind::Amount,
                    [
                        format!(
                            "{} (${} per $1,000)",
                            item.label(),
                            format_rate(inputs.transfer_tax_rate)
                        ),
                        amount,
                    ],
                ),
                ExpenseItem::WellSepticInspection => StatementRow::new(
                    RowKind::Amount,
                    [
                        item.label().to_string(),
                        amount,
                        inputs.well_septic_note.clone(),
                    ],
                ),
                _ => StatementRow::new(RowKind::Amount, [item.label().to_string(), amount]),
            };
            rows.push(row);
        }

        rows.extend([
            StatementRow::new(
                RowKind::Total,
                [
                    "Total Selling Expense".to_string(),
                    format_currency(totals.total_selling_expense),
                ],
            ),
            StatementRow::new(
                RowKind::Total,
                [
                    "Approximate Proceeds to Seller".to_string(),
                    format_currency(totals.approximate_proceeds),
                ],
            ),
            StatementRow::spacer(),
            StatementRow::new(
                RowKind::Adjustment,
                [
                    "Use and Occupancy Escrow".to_string(),
                    format!("- {}", format_currency(inputs.use_occupancy_escrow)),
                ],
            ),
            StatementRow::new(
                RowKind::Adjustment,
                [
                    "Taxes and Escrow Rebate".to_string(),
                    format!("+ {}", format_currency(inputs.taxes_escrow_rebate)),
                ],
            ),
            StatementRow::spacer(),
            StatementRow::new(
                RowKind::Signature,
                ["Agent", inputs.agent.as_str(), "Seller", inputs.seller.as_str()],
            ),
            StatementRow::spacer(),
            StatementRow::new(
                RowKind::Signature,
                [
                    "Date".to_string(),
                    inputs.date.format("%Y-%m-%d").to_string(),
                    "Seller".to_string(),
                    inputs.seller.clone(),
                ],
            ),
        ]);

        Self {
            title: WORKSHEET_TITLE,
            rows,
            disclaimer: DISCLAIMER,
            tax_note: TAX_NOTE,
            file_name: download_file_name(&inputs.name),
        }
    }

    pub fn row(&self, label: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|row| row.label() == label)
    }
}

fn amount_row(label: &str, amount: Money) -> StatementRow {
    StatementRow::new(RowKind::Amount, [label.to_string(), format_currency(amount)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet::totals::compute_totals;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn inputs() -> LineItemInputs {
        LineItemInputs {
            name: "Jane Seller".to_string(),
            property: "12 Elm St".to_string(),
            selling_price: dec!(300000),
            mortgage_balance: dec!(100000),
            listing_agent_percent: dec!(3.0),
            listing_commission_amount: dec!(9000),
            buyers_agent_percent: dec!(2.75),
            buyers_commission_amount: dec!(8250),
            title_insurance: dec!(1656),
            transfer_tax_rate: dec!(8.60),
            transfer_tax_amount: dec!(2580),
            well_septic_inspection: dec!(450),
            well_septic_note: "paid by buyer".to_string(),
            use_occupancy_escrow: dec!(1000),
            taxes_escrow_rebate: dec!(312.5),
            agent: "Pat Agent".to_string(),
            seller: "Jane Seller".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date"),
            ..LineItemInputs::default()
        }
    }

    fn statement() -> WorksheetStatement {
        let inputs = inputs();
        WorksheetStatement::build(&inputs, &compute_totals(&inputs))
    }

    #[test]
    fn rows_follow_worksheet_order() {
        let statement = statement();
        let labels: Vec<&str> = statement
            .rows
            .iter()
            .filter(|row| row.kind != RowKind::Spacer)
            .map(StatementRow::label)
            .collect();

        assert_eq!(
            labels,
            vec![
                "Name:",
                "Property:",
                "Selling Price",
                "Mortgage Balances",
                "Commission - Listing Agent 3.0%",
                "Commission - Buyers Agent 2.75%",
                "Owner's Title Insurance Policy",
                "MI Transfer Tax ($8.6 per $1,000)",
                "Pest Inspection",
                "City Certifications",
                "Well & Septic Inspection",
                "Home Warranty",
                "Seller Concessions",
                "Transaction Fee",
                "Survey, splitting costs",
                "Total Selling Expense",
                "Approximate Proceeds to Seller",
                "Use and Occupancy Escrow",
                "Taxes and Escrow Rebate",
                "Agent",
                "Date",
            ]
        );
    }

    #[test]
    fn amounts_are_formatted_as_currency() {
        let statement = statement();
        assert_eq!(
            statement.row("Selling Price").map(StatementRow::value),
            Some("$300,000.00")
        );
        assert_eq!(
            statement.row("Total Selling Expense").map(StatementRow::value),
            Some("$21,936.00")
        );
        assert_eq!(
            statement
                .row("Approximate Proceeds to Seller")
                .map(StatementRow::value),
            Some("$177,376.50")
        );
        assert_eq!(
            statement
                .row("Use and Occupancy Escrow")
                .map(StatementRow::value),
            Some("- $1,000.00")
        );
        assert_eq!(
            statement.row("Taxes and Escrow Rebate").map(StatementRow::value),
            Some("+ $312.50")
        );
    }

    #[test]
    fn well_septic_row_carries_note_and_signatures_carry_names() {
        let statement = statement();
        let well = statement
            .row("Well & Septic Inspection")
            .expect("well row present");
        assert_eq!(well.cells, vec!["Well & Septic Inspection", "$450.00", "paid by buyer"]);

        let date = statement.row("Date").expect("date row present");
        assert_eq!(date.cells, vec!["Date", "2026-10-18", "Seller", "Jane Seller"]);
        assert_eq!(statement.file_name, "Seller_Cash_Proceeds_Jane_Seller.pdf");
    }
}
