use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_MARKERS: [&str; 3] = ["Payment", "Balance", "Interest"];

/// Whether a ledger column holds money and gets currency formatting.
pub fn is_currency_column(name: &str) -> bool {
    CURRENCY_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Rounds to cents, midpoints away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats `value` as `$#,##0.00`, e.g. `$1,234.57` or `-$5.00`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_cents(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{cents}")
}

/// Formats `value` rounded to cents without symbol or grouping.
pub fn format_plain(value: Decimal) -> String {
    format!("{:.2}", round_cents(value))
}
