// src/utils.rs - Display formatting helpers shared by the pages

use chrono::{DateTime, Utc};

/// Formats a dollar amount the way every money cell renders it: `$1,234.56`.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let remainder = cents % 100;

    let mut grouped = String::new();
    let digits = dollars.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}.{:02}", grouped, remainder)
    } else {
        format!("${}.{:02}", grouped, remainder)
    }
}

/// Discount rows render as a negative amount: `-$5.00`.
pub fn format_discount(amount: f64) -> String {
    format!("-{}", format_usd(amount))
}

pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %d, %Y").to_string()
}

pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%b %d, %Y %H:%M").to_string()
}

/// One decimal place for average ratings: `4.2`.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(5.0), "$5.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_discount() {
        assert_eq!(format_discount(5.0), "-$5.00");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap();
        assert_eq!(format_date(ts), "Jun 01, 2025");
        assert_eq!(format_datetime(ts), "Jun 01, 2025 10:30");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.25), "4.2");
        assert_eq!(format_rating(5.0), "5.0");
    }
}
