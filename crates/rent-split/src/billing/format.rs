use serde::Serialize;

use super::domain::BillResult;

/// Formats an amount as Brazilian Real: `R$ 1.234,56`.
///
/// Cents come from the exact decimal expansion of the stored value, so large amounts keep every
/// digit. Infinite amounts render as `R$ ∞`.
pub fn format_brl(value: f64) -> String {
    if value.is_nan() {
        return "R$ NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}R$ ∞");
    }

    let fixed = format!("{:.2}", value.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (index, digit) in units.chars().enumerate() {
        if index > 0 && (units.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    // Amounts that round to zero cents print without a sign.
    let negative = value < 0.0 && fixed.bytes().any(|byte| matches!(byte, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents}")
}

/// A result ready for display, carrying the raw numbers alongside their formatted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitView {
    pub rent_share: f64,
    pub bills_share: f64,
    pub total_share: f64,
    pub formatted: FormattedShares,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedShares {
    pub rent_share: String,
    pub bills_share: String,
    pub total_share: String,
}

impl From<&BillResult> for SplitView {
    fn from(result: &BillResult) -> Self {
        let total = result.total();
        Self {
            rent_share: result.rent_share,
            bills_share: result.bills_share,
            total_share: total,
            formatted: FormattedShares {
                rent_share: format_brl(result.rent_share),
                bills_share: format_brl(result.bills_share),
                total_share: format_brl(total),
            },
        }
    }
}
