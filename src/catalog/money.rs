// SPDX-License-Identifier: MPL-2.0
//! Storefront money formatting.
//!
//! Prices render the way the storefront writes Colombian pesos: a `$` marker,
//! thousands grouped with `.`, and a decimal comma for the rare fractional
//! amount (at most three fraction digits, trailing zeros dropped).
//! 45000 becomes `$45.000`.

/// Formats a numeric amount as a storefront price string.
#[must_use]
pub fn format_money(amount: f64) -> String {
    let rendered = format!("{:.3}", amount);
    let (raw_int, raw_frac) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));

    let (sign, digits) = match raw_int.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw_int),
    };

    let grouped = group_thousands(digits);
    let frac = raw_frac.trim_end_matches('0');

    if frac.is_empty() {
        format!("${sign}{grouped}")
    } else {
        format!("${sign}{grouped},{frac}")
    }
}

/// Inserts a `.` separator every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
