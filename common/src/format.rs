//! Display formatting for numbers, currency and percentages.
//!
//! The dashboard renders figures the Venezuelan-Spanish way: `.` groups
//! thousands and `,` separates decimals. Grouping comes from `num-format`'s
//! Spanish locale.

use num_format::{Locale, ToFormattedString};

/// Formats an integer with thousands grouping, e.g. `2.450.000`.
pub fn format_number(value: u64) -> String {
    value.to_formatted_string(&Locale::es)
}

/// Signed variant of [`format_number`], used for transaction quantities.
pub fn format_signed(value: i64) -> String {
    value.to_formatted_string(&Locale::es)
}

/// Formats a dollar amount with two decimals, e.g. `$3.120,00`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0,00".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${},{:02}",
        sign,
        format_number(cents / 100),
        cents % 100
    )
}

/// One-decimal percentage with a decimal comma, e.g. `30,4%`.
pub fn format_percent(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.1}%", value).replace('.', ",")
}

/// Size in kilobytes with two decimals, as shown for a selected upload file.
pub fn format_kilobytes(bytes: f64) -> String {
    format!("{:.2} KB", bytes / 1024.0).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(2_450_000), "2.450.000");
        assert_eq!(format_signed(-1500), "-1.500");
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(3120.0), "$3.120,00");
        assert_eq!(format_currency(70.5), "$70,50");
        assert_eq!(format_currency(0.126), "$0,13");
        assert_eq!(format_currency(-12.3), "-$12,30");
        assert_eq!(format_currency(-0.001), "$0,00");
        assert_eq!(format_currency(f64::NAN), "$0,00");
    }

    #[test]
    fn percent_uses_decimal_comma() {
        assert_eq!(format_percent(30.4), "30,4%");
        assert_eq!(format_percent(100.0), "100,0%");
        assert_eq!(format_kilobytes(2048.0), "2,00 KB");
    }
}
