//! Display formatting helpers following es-CO conventions: `.` for digit
//! grouping, `,` for the decimal separator, `$` for Colombian pesos.

use time::Date;

/// Format an amount as Colombian-peso currency text with no fractional digits.
///
/// Non-finite input renders the platform-default text (`NaN`, `inf`) rather
/// than panicking; validating input is the caller's responsibility.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let pesos = amount.round() as i64;
    if pesos < 0 {
        format!("-$ {}", group_digits(-pesos))
    } else {
        format!("$ {}", group_digits(pesos))
    }
}

/// Format a number with locale grouping separators and no currency symbol.
/// At most 3 fractional digits are kept, trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let negative = value < 0.0;
    let abs = value.abs();
    let mut whole = abs.trunc() as i64;
    let mut millis = ((abs - whole as f64) * 1000.0).round() as i64;
    if millis == 1000 {
        whole += 1;
        millis = 0;
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(whole));

    if millis > 0 {
        let frac = format!("{millis:03}");
        out.push(',');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Format a calendar date in es-CO order (`d/m/yyyy`, no zero padding).
pub fn format_date(date: Date) -> String {
    format!("{}/{}/{}", date.day(), date.month() as u8, date.year())
}

/// Insert `.` grouping separators every three digits.
fn group_digits(value: i64) -> String {
    let digits = value.to_string();
    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push('.');
        }
        reversed.push(c);
    }
    reversed.chars().rev().collect()
}
