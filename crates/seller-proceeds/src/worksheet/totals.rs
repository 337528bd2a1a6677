use super::domain::{ComputedTotals, ExpenseItem, LineItemInputs, Money};

/// Sums the selling expenses and applies the escrow adjustments.
pub fn compute_totals(inputs: &LineItemInputs) -> ComputedTotals {
    let total_selling_expense: Money = ExpenseItem::ordered()
        .into_iter()
        .map(|item| inputs.expense(item))
        .sum();

    let approximate_proceeds = inputs.selling_price
        - inputs.mortgage_balance
        - total_selling_expense
        - inputs.use_occupancy_escrow
        + inputs.taxes_escrow_rebate;

    ComputedTotals {
        total_selling_expense,
        approximate_proceeds,
    }
}
