//! Display formatting shared by tables, cards and exports.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{NaiveDate, NaiveDateTime};

pub fn date(value: NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

pub fn date_time(value: NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

pub fn opt_date_time(value: Option<NaiveDateTime>) -> String {
    value.map(date_time).unwrap_or_default()
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Sí" } else { "No" }
}

/// Colombian peso: `$ 1.234.567`, rounded to whole pesos.
#[allow(clippy::cast_possible_truncation)]
pub fn currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 { format!("-$ {grouped}") } else { format!("$ {grouped}") }
}
