use std::borrow::Cow;

use crate::{display, value::Value};

/// A polynomial in the variable `n`, stored as ascending monomial coefficients.
///
/// Used for both the cost function `f(n)` and the comparison function `g(n)`.
/// Coefficients may be borrowed (e.g. from a `const` produced by [`crate::function!`])
/// or owned (e.g. after [`Polynomial::scaled`]).
///
/// # Type Parameters
/// - `'a`: Lifetime for borrowed coefficients, if used.
/// - `T`: Numeric type for the coefficients, default is `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<'a, T: Value = f64> {
    coefficients: Cow<'a, [T]>,
}
impl<'a, T: Value> Polynomial<'a, T> {
    /// Creates a polynomial that borrows its coefficients
    ///
    /// For example in `f(n) = 2n² - 3n + 1`, coefficients = `[1.0, -3.0, 2.0]`
    #[must_use]
    pub const fn borrowed(coefficients: &'a [T]) -> Self {
        Self {
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    /// Creates a polynomial from ascending coefficients
    pub fn new(coefficients: impl Into<Cow<'a, [T]>>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    /// Returns the ascending coefficients of the polynomial
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Highest power with a non-zero coefficient
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    /// Returns a copy of this polynomial multiplied by a constant factor
    ///
    /// This is how `c·g(n)` is built from `g(n)`.
    #[must_use]
    pub fn scaled(&self, factor: T) -> Polynomial<'static, T> {
        Polynomial {
            coefficients: self.coefficients.iter().map(|c| *c * factor).collect(),
        }
    }

    /// Evaluates the polynomial at `n` using Horner's method.
    pub fn y(&self, n: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * n + *c)
    }

    /// Evaluates the polynomial at every given point, returning `(n, y)` pairs.
    pub fn solve(&self, n: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        n.into_iter().map(|n| (n, self.y(n))).collect()
    }

    /// Human-readable equation in descending powers, e.g. `0.2n² + 3n + 15`
    ///
    /// Coefficients are rounded to [`display::DEFAULT_PRECISION`] decimal places
    /// with trailing zeros removed.
    #[must_use]
    pub fn equation(&self) -> String {
        let mut out = String::new();
        for (degree, coef) in self.coefficients.iter().enumerate().rev() {
            let Some(term) = display::format_term(*coef, degree, "n") else {
                continue;
            };

            let negative = *coef < T::zero();
            match (out.is_empty(), negative) {
                (true, true) => out.push('-'),
                (true, false) => {}
                (false, true) => out.push_str(" - "),
                (false, false) => out.push_str(" + "),
            }
            out.push_str(&term);
        }

        if out.is_empty() {
            out.push('0');
        }
        out
    }
}
impl<T: Value> std::fmt::Display for Polynomial<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.equation())
    }
}

/// Macro to generate a polynomial in `n`.
///
/// - Terms can be listed in any order
/// - Same-power terms are summed
/// - Missing terms are 0
///
/// The only major limitation is that it needs a space between the coefficient and the variable:
/// - `0.2 n^2` is valid, but `0.2n^2` is not.
///
/// Syntax:
/// ```text
/// function!(
///     [#[attr]]* [pub]? [const]?
///     [<name>(n) = ]?
///     [ [+]? <coef> [ n [ ^ <deg> ]? ]? ]+
/// )
/// ```
///
/// # Example
/// ```
/// # use asymplot::function;
/// function!(cost(n) = 0.2 n^2 + 3.0 n + 15.0); // Normal let-binding
/// function!(
///     /// Attributes and doc comments are kept on consts
///     const COMPARISON(n) = 1.0 n^2
/// ); // const can live outside functions
/// let linear = function!(2.0 n + 1.0); // No auto bindings
///
/// assert_eq!(cost.y(10.0), 65.0);
/// assert_eq!(COMPARISON.y(3.0), 9.0);
/// assert_eq!(linear.y(2.0), 5.0);
/// ```
#[macro_export]
macro_rules! function {
    ($( $(+)? $c0:literal $(n $( ^ $d0:literal )?)? )+) => { {
        const LEN: usize = {
            let mut degree = 0; $(
                let d2 = 1 $(+ 1 $(* $d0 as usize)?)?;
                if d2 > degree { degree = d2; }
            )+
            degree
        };

        const COEFS: [f64; LEN] = {
            let mut coefs = [0.0; LEN];
            // coef alone is degree 0, 1 if just n, or the power if specified
            $( coefs[ 0 $(+ 1 $(* $d0 as usize)?)? ] += $c0 as f64; )+
            coefs
        };

        $crate::Polynomial::borrowed(&COEFS)
    }};

    ($name:ident (n) = $($rest:tt)+ ) => {
        let $name: $crate::Polynomial = $crate::function!($($rest)+);
    };

    ($(#[$meta:meta])* const $name:ident (n) = $($rest:tt)+ ) => {
        $(#[$meta])*
        const $name: $crate::Polynomial<'static> = $crate::function!($($rest)+);
    };

    ($(#[$meta:meta])* pub const $name:ident (n) = $($rest:tt)+ ) => {
        $(#[$meta])*
        pub const $name: $crate::Polynomial<'static> = $crate::function!($($rest)+);
    };
}
