use rust_decimal::{Decimal, RoundingStrategy};

use super::domain::Money;

const FILE_STEM: &str = "Seller_Cash_Proceeds";

/// `$1,234.56`; negative amounts keep the sign after the symbol (`$-1,234.56`).
pub fn format_currency(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("${sign}{}.{cents}", group_thousands(whole))
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Shortest decimal form with at least one fractional digit: `3.0`, `2.75`,
/// `8.6`.
pub fn format_rate(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}

/// Download name for a seller's worksheet. Blank names fall back to the bare
/// stem.
pub fn download_file_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return format!("{FILE_STEM}.pdf");
    }

    let slug: String = name
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | '"' => '_',
            ch if ch.is_whitespace() => '_',
            ch => ch,
        })
        .collect();

    format!("{FILE_STEM}_{slug}.pdf")
}
