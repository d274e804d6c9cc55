//! Utilities for formatting chart labels
//!
//! This module turns numbers and polynomial terms into the short, human-readable
//! strings used in titles, legends and annotations.
//!
//! # Helpers
//! - [`format_number`]: Rounds a value and strips trailing zeros (`0.30` → `0.3`).
//! - [`format_term`]: Formats a single polynomial term such as `0.2n²` or `3n`.
//! - [`format_variable`]: Adds subscripts and superscripts to a variable name.
use crate::value::Value;

pub mod unicode;

/// Default precision for formatting coefficients and constants
pub const DEFAULT_PRECISION: usize = 2;

/// Default range in which scientific notation is not used
#[must_use]
pub fn default_fixed_range<T: Value>() -> Option<std::ops::Range<T>> {
    const RANGE: std::ops::Range<f64> = 1e-3..1e6;
    let s = T::try_cast(RANGE.start).ok()?;
    let e = T::try_cast(RANGE.end).ok()?;
    Some(s..e)
}

/// Formats a number with at most `precision` decimal places, without trailing zeros.
///
/// Values outside [`default_fixed_range`] are written in scientific notation.
///
/// # Example
/// ```
/// # use asymplot::display::format_number;
/// assert_eq!(format_number(0.3, 2), "0.3");
/// assert_eq!(format_number(35.0, 2), "35");
/// assert_eq!(format_number(0.3875, 2), "0.39");
/// assert_eq!(format_number(-2.5, 2), "-2.5");
/// ```
pub fn format_number<T: Value>(n: T, precision: usize) -> String {
    if n.is_zero() {
        return "0".to_string();
    }

    let abs = n.abs();
    let body = match default_fixed_range::<T>() {
        Some(range) if range.contains(&abs) => {
            let fixed = format!("{abs:.precision$}");
            trim_zeros(&fixed).to_string()
        }
        range => unicode::float(abs, range, precision),
    };

    if n < T::zero() {
        format!("-{body}")
    } else {
        body
    }
}

/// Formats one polynomial term without its sign
///
/// - Returns `None` if the coefficient is zero
/// - A coefficient of exactly one is omitted unless the term is constant
///
/// # Example
/// ```
/// # use asymplot::display::format_term;
/// assert_eq!(format_term(0.2, 2, "n"), Some("0.2n²".to_string()));
/// assert_eq!(format_term(1.0, 2, "n"), Some("n²".to_string()));
/// assert_eq!(format_term(-3.0, 1, "n"), Some("3n".to_string()));
/// assert_eq!(format_term(15.0, 0, "n"), Some("15".to_string()));
/// assert_eq!(format_term(0.0, 1, "n"), None);
/// ```
pub fn format_term<T: Value>(coef: T, degree: usize, var: &str) -> Option<String> {
    if coef.is_zero() {
        return None;
    }

    let abs = coef.abs();
    let variable = format_variable(var, None, degree);
    if degree != 0 && (abs - T::one()).abs() <= T::epsilon() {
        return Some(variable);
    }

    Some(format!(
        "{}{variable}",
        format_number(abs, DEFAULT_PRECISION)
    ))
}

/// Formats the variable part of a term for display purposes.
///
/// # Behavior
/// - If `exp == 0`, returns an empty string (`""`).
/// - Otherwise, appends the subscript and, past the first power, the superscript exponent.
///
/// # Examples
/// ```
/// # use asymplot::display::format_variable;
/// assert_eq!(format_variable("n", None, 0), "");
/// assert_eq!(format_variable("n", None, 1), "n");
/// assert_eq!(format_variable("c", Some("2"), 1), "c₂");
/// assert_eq!(format_variable("n", None, 2), "n²");
/// ```
#[must_use]
pub fn format_variable(base: &str, subscript: Option<&str>, exp: usize) -> String {
    let lbl = unicode::subscript(subscript.unwrap_or_default());
    match exp {
        0 => String::new(),
        1 => format!("{base}{lbl}"),
        _ => {
            let sup = unicode::superscript(&exp.to_string());
            format!("{base}{lbl}{sup}")
        }
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(format_number(0.2, 2), "0.2");
        assert_eq!(format_number(0.65, 2), "0.65");
        assert_eq!(format_number(365.0, 1), "365");
        assert_eq!(format_number(367.5, 1), "367.5");
        assert_eq!(format_number(0.0, 2), "0");
        assert_eq!(format_number(2.5e7, 2), "2.50e7");
    }

    #[test]
    fn terms() {
        assert_eq!(format_term(3.0, 1, "n"), Some("3n".to_string()));
        assert_eq!(format_term(1.0, 0, "n"), Some("1".to_string()));
        assert_eq!(format_term(-1.0, 1, "n"), Some("n".to_string()));
    }

    #[test]
    fn subscripted_variables() {
        assert_eq!(format_variable("n", Some("0"), 1), "n₀");
        assert_eq!(format_variable("c", Some("1"), 2), "c₁²");
    }
}
