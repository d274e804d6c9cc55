//! Unicode formatting utilities
use std::ops::Range;

use crate::value::Value;

/// Format a floating point number as a string
///
/// # Parameters
/// - `n`: The number to format
/// - `fixed_range`: An optional range specifying the values that will not be formatted in scientific notation
/// - `precision`: The number of decimal places to include
pub fn float<T: Value>(n: T, fixed_range: Option<Range<T>>, precision: usize) -> String {
    match fixed_range {
        Some(range) if range.contains(&n) => format!("{n:.precision$}"),
        _ => format!("{n:.precision$e}"),
    }
}

/// Characters that have both a superscript and a subscript form
const PLAIN: [char; 15] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '(', ')', 'n',
];
const SUPERSCRIPT: [char; 15] = [
    '⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹', '⁺', '⁻', '⁽', '⁾', 'ⁿ',
];
const SUBSCRIPT: [char; 15] = [
    '₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉', '₊', '₋', '₍', '₎', 'ₙ',
];

/// Convert a string into a superscript string, ignoring invalid characters
#[must_use]
pub fn superscript(s: &str) -> String {
    translate(s, &SUPERSCRIPT)
}

/// Convert a string into a subscript string, ignoring invalid characters
#[must_use]
pub fn subscript(s: &str) -> String {
    translate(s, &SUBSCRIPT)
}

fn translate(s: &str, table: &[char; 15]) -> String {
    s.chars()
        .filter_map(|c| {
            let c = c.to_ascii_lowercase();
            PLAIN.iter().position(|p| *p == c).map(|i| table[i])
        })
        .collect()
}
