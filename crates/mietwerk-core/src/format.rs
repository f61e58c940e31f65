//! Locale formatting helpers for German contract text.
//!
//! All functions are total: unparsable input degrades to the empty string
//! or is passed through unchanged, matching the clause-engine policy of
//! never aborting a render over a formatting problem.

use chrono::{NaiveDate, NaiveDateTime};

/// Format an ISO date (`YYYY-MM-DD`, optionally with a time part) as
/// German `DD.MM.YYYY`. Unparsable input is returned unchanged; empty
/// stays empty.
pub fn fmt_date_de(value: &str) -> String {
    let s = value.trim();
    if s.is_empty() {
        return String::new();
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%d.%m.%Y").to_string();
    }
    s.to_string()
}

/// Parse a date that may arrive as ISO (`2014-01-01`) or German
/// (`01.01.2014`) form.
pub fn parse_date_flexible(value: &str) -> Option<NaiveDate> {
    let s = value.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .ok()
}

/// Format an amount in German EUR style: 1200 → `1.200,00`.
pub fn fmt_eur(value: f64) -> String {
    let neg = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}{grouped},{frac:02}", if neg { "-" } else { "" })
}

/// Format a submitted amount string as German EUR style.
///
/// Empty input stays empty; input that does not parse as a number is
/// passed through unchanged.
pub fn fmt_eur_str(value: &str) -> String {
    let s = value.trim();
    if s.is_empty() {
        return String::new();
    }
    match parse_amount(s) {
        Some(v) => fmt_eur(v),
        None => s.to_string(),
    }
}

/// Format a decimal quantity (living area etc.) in German style:
/// `75.5` → `75,50`. Unparsable input yields the empty string.
pub fn fmt_decimal_de(value: &str) -> String {
    match parse_amount(value) {
        Some(v) => fmt_eur(v),
        None => String::new(),
    }
}

/// Parse a submitted numeric string (dot decimal separator).
pub fn parse_amount(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Group an IBAN into blocks of four characters.
pub fn format_iban(value: &str) -> String {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return String::new();
    }
    compact
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}
