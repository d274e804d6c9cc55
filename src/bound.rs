//! Asymptotic bound witnesses and their empirical checks
//!
//! A [`Witness`] is the concrete set of constants and threshold that demonstrate one of
//! the three bound relationships between a cost function `f` and a comparison function `g`:
//!
//! | Kind | Notation | Inequality for every `n ≥ n₀` |
//! |------|----------|-------------------------------|
//! | [`BoundKind::Upper`] | `O(g)` | `f(n) ≤ c·g(n)` |
//! | [`BoundKind::Lower`] | `Ω(g)` | `f(n) ≥ c·g(n)` |
//! | [`BoundKind::Tight`] | `Θ(g)` | `c₁·g(n) ≤ f(n) ≤ c₂·g(n)` |
//!
//! Upper and lower witnesses are always supplied by the caller; infinitely many valid
//! `(c, n₀)` pairs exist, so none is searched for. A tight witness can instead be derived
//! from the sampled data with [`derive_tight`].
//!
//! All checks here are over a finite set of [`Sample`]s. They are a sampled approximation of the
//! bound, not a proof of it.
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    value::Value,
    Polynomial,
};

/// Relative tolerance used when comparing `f(n)` against a scaled `g(n)`
pub const TOLERANCE: f64 = 1e-9;

/// The three asymptotic bound relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    /// `f ∈ O(g)`: eventually bounded above by `c·g`
    Upper,

    /// `f ∈ Ω(g)`: eventually bounded below by `c·g`
    Lower,

    /// `f ∈ Θ(g)`: eventually sandwiched between `c₁·g` and `c₂·g`
    Tight,
}
impl BoundKind {
    /// The notation symbol: `O`, `Ω` or `Θ`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Upper => 'O',
            Self::Lower => 'Ω',
            Self::Tight => 'Θ',
        }
    }

    /// The inequality this kind asserts, in terms of `c·n²`-style constants
    #[must_use]
    pub const fn relation(self) -> &'static str {
        match self {
            Self::Upper => "f(n) ≤ c·n²",
            Self::Lower => "f(n) ≥ c·n²",
            Self::Tight => "c₁·n² ≤ f(n) ≤ c₂·n²",
        }
    }
}
impl std::fmt::Display for BoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upper => write!(f, "upper bound"),
            Self::Lower => write!(f, "lower bound"),
            Self::Tight => write!(f, "tight bound"),
        }
    }
}

/// One point of the sampled domain with both functions evaluated at it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T: Value = f64> {
    /// The input size
    pub n: T,

    /// Cost function value `f(n)`
    pub f: T,

    /// Comparison function value `g(n)`
    pub g: T,
}
impl<T: Value> Sample<T> {
    /// Evaluates both functions at `n`
    pub fn evaluate(n: T, cost: &Polynomial<T>, comparison: &Polynomial<T>) -> Self {
        Self {
            n,
            f: cost.y(n),
            g: comparison.y(n),
        }
    }

    /// Evaluates both functions over every point of a domain
    pub fn evaluate_all(
        domain: impl IntoIterator<Item = T>,
        cost: &Polynomial<T>,
        comparison: &Polynomial<T>,
    ) -> Vec<Self> {
        domain
            .into_iter()
            .map(|n| Self::evaluate(n, cost, comparison))
            .collect()
    }
}

/// Concrete constants and threshold demonstrating a bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Witness<T: Value = f64> {
    /// `f(n) ≤ c·g(n)` for all `n ≥ n0`
    Upper {
        /// Scaling constant
        c: T,
        /// Threshold
        n0: T,
    },

    /// `f(n) ≥ c·g(n)` for all `n ≥ n0`
    Lower {
        /// Scaling constant
        c: T,
        /// Threshold
        n0: T,
    },

    /// `c1·g(n) ≤ f(n) ≤ c2·g(n)` for all `n ≥ n0`
    Tight {
        /// Lower scaling constant
        c1: T,
        /// Upper scaling constant
        c2: T,
        /// Threshold
        n0: T,
    },
}
impl<T: Value> Witness<T> {
    /// Which relationship this witness demonstrates
    #[must_use]
    pub fn kind(&self) -> BoundKind {
        match self {
            Self::Upper { .. } => BoundKind::Upper,
            Self::Lower { .. } => BoundKind::Lower,
            Self::Tight { .. } => BoundKind::Tight,
        }
    }

    /// The threshold `n₀`
    #[must_use]
    pub fn threshold(&self) -> T {
        match self {
            Self::Upper { n0, .. } | Self::Lower { n0, .. } | Self::Tight { n0, .. } => *n0,
        }
    }

    /// Lower and upper multiples of `g` bounding `f`, where present
    ///
    /// `(None, Some(c))` for an upper bound, `(Some(c), None)` for a lower bound.
    #[must_use]
    pub fn scales(&self) -> (Option<T>, Option<T>) {
        match self {
            Self::Upper { c, .. } => (None, Some(*c)),
            Self::Lower { c, .. } => (Some(*c), None),
            Self::Tight { c1, c2, .. } => (Some(*c1), Some(*c2)),
        }
    }

    /// Checks that every constant is finite and positive, and that `c1 ≤ c2`
    ///
    /// # Errors
    /// Returns an error naming the first constant that breaks the rule.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Upper { c, .. } | Self::Lower { c, .. } => positive("c", *c),
            Self::Tight { c1, c2, .. } => {
                positive("c1", *c1)?;
                positive("c2", *c2)?;
                if c1 > c2 {
                    return Err(Error::InvertedTightBound {
                        c1: c1.as_f64(),
                        c2: c2.as_f64(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Whether the inequality holds at a single sample, ignoring the threshold
    #[must_use]
    pub fn holds_at(&self, sample: &Sample<T>) -> bool {
        let (lower, upper) = self.scales();
        let above = lower.map_or(true, |c| at_most(c * sample.g, sample.f));
        let below = upper.map_or(true, |c| at_most(sample.f, c * sample.g));
        above && below
    }
}

/// Outcome of checking a witness against sampled data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict<T: Value = f64> {
    /// The inequality holds at every sample with `n ≥ n₀`
    Holds,

    /// The first sample past the threshold where the inequality fails
    Violated {
        /// Sample where the bound fails
        n: T,
        /// Cost at that sample
        f: T,
        /// The scaled comparison value that was crossed
        bound: T,
    },
}
impl<T: Value> Verdict<T> {
    /// True if no violation was found
    #[must_use]
    pub fn holds(&self) -> bool {
        matches!(self, Self::Holds)
    }
}

/// Samples with `n ≥ n0`, in domain order
pub fn restrict<T: Value>(samples: &[Sample<T>], n0: T) -> impl Iterator<Item = &Sample<T>> {
    samples.iter().filter(move |s| s.n >= n0)
}

/// Derives the tightest sampled `Θ` constants for a threshold.
///
/// Restricts the samples to `n ≥ n0`, computes `r(n) = f(n) / g(n)` on each,
/// and takes `c1 = min r`, `c2 = max r`. By construction `c1·g(n) ≤ f(n) ≤ c2·g(n)`
/// holds for every restricted sample.
///
/// # Errors
/// - [`Error::EmptyRestriction`] if no sample has `n ≥ n0`
/// - [`Error::ZeroComparison`] if `g(n) = 0` anywhere in the restriction; checked before dividing
/// - [`Error::NonFinite`] if a ratio is NaN or infinite
/// - [`Error::NonPositiveConstant`] if the derived `c1` is not positive
pub fn derive_tight<T: Value>(samples: &[Sample<T>], n0: T) -> Result<Witness<T>> {
    let restricted: Vec<&Sample<T>> = restrict(samples, n0).collect();
    if restricted.is_empty() {
        return Err(Error::EmptyRestriction { n0: n0.as_f64() });
    }

    if let Some(zero) = restricted.iter().find(|s| s.g.is_zero()) {
        return Err(Error::ZeroComparison { n: zero.n.as_f64() });
    }

    let mut c1 = T::infinity();
    let mut c2 = T::neg_infinity();
    for sample in restricted {
        let ratio = sample.f / sample.g;
        if !ratio.is_finite() {
            return Err(Error::NonFinite("f(n)/g(n)"));
        }

        c1 = c1.min(ratio);
        c2 = c2.max(ratio);
    }

    positive("c1", c1)?;
    Ok(Witness::Tight { c1, c2, n0 })
}

/// Per-sample flag: `n ≥ n₀` and the witness inequality holds there.
///
/// Only used to bound the shaded region of a chart.
pub fn satisfaction_mask<T: Value>(samples: &[Sample<T>], witness: &Witness<T>) -> Vec<bool> {
    let n0 = witness.threshold();
    samples
        .iter()
        .map(|s| s.n >= n0 && witness.holds_at(s))
        .collect()
}

/// Checks a witness against every sample at or beyond its threshold.
///
/// Returns the first violation found, if any.
pub fn verify<T: Value>(samples: &[Sample<T>], witness: &Witness<T>) -> Verdict<T> {
    let (lower, upper) = witness.scales();
    for sample in restrict(samples, witness.threshold()) {
        if let Some(c) = lower {
            let bound = c * sample.g;
            if !at_most(bound, sample.f) {
                return Verdict::Violated {
                    n: sample.n,
                    f: sample.f,
                    bound,
                };
            }
        }

        if let Some(c) = upper {
            let bound = c * sample.g;
            if !at_most(sample.f, bound) {
                return Verdict::Violated {
                    n: sample.n,
                    f: sample.f,
                    bound,
                };
            }
        }
    }

    Verdict::Holds
}

/// `lhs ≤ rhs`, allowing for rounding relative to the larger magnitude
fn at_most<T: Value>(lhs: T, rhs: T) -> bool {
    let scale = T::one().max(lhs.abs()).max(rhs.abs());
    let tolerance = T::try_cast(TOLERANCE).unwrap_or_else(|_| T::epsilon());
    lhs <= rhs + tolerance * scale
}

fn positive<T: Value>(name: &'static str, value: T) -> Result<()> {
    if value.is_finite() && value > T::zero() {
        Ok(())
    } else {
        Err(Error::NonPositiveConstant {
            name,
            value: value.as_f64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_all_close, assert_bound_holds, assert_close, function, value::Linspace};

    function!(const COST(n) = 0.2 n^2 + 3.0 n + 15.0);
    function!(const SQUARE(n) = 1.0 n^2);

    fn sampled(min: f64, max: f64, count: usize) -> Vec<Sample> {
        Sample::evaluate_all(Linspace::new(min..=max, count), &COST, &SQUARE)
    }

    #[test]
    fn upper_bound_holds_past_threshold() {
        let samples = sampled(20.0, 50.0, 500);
        let witness = Witness::Upper { c: 0.3, n0: 35.0 };

        for s in restrict(&samples, 35.0) {
            assert!(s.f <= 0.3 * s.n * s.n * (1.0 + TOLERANCE), "n = {}", s.n);
        }
        assert_bound_holds!(&samples, &witness);
    }

    #[test]
    fn upper_bound_fails_before_threshold() {
        // 0.1n² - 3n - 15 has its positive root near 34.36
        let samples = sampled(20.0, 50.0, 500);
        let early = Witness::Upper { c: 0.3, n0: 20.0 };
        match verify(&samples, &early) {
            Verdict::Violated { n, f, bound } => {
                assert_close!(n, 20.0);
                assert!(f > bound);
            }
            Verdict::Holds => panic!("c = 0.3 cannot bound f from n = 20"),
        }
    }

    #[test]
    fn lower_bound_holds_everywhere() {
        let samples = sampled(0.0, 20.0, 500);
        let witness = Witness::Lower { c: 0.2, n0: 0.0 };

        for s in &samples {
            assert!(s.f >= 0.2 * s.n * s.n);
        }
        assert_bound_holds!(&samples, &witness);
        assert!(satisfaction_mask(&samples, &witness).iter().all(|m| *m));
    }

    #[test]
    fn fixed_tight_bound_holds() {
        let samples = sampled(20.0, 50.0, 500);
        let witness = Witness::Tight {
            c1: 0.2,
            c2: 0.3,
            n0: 35.0,
        };
        assert_bound_holds!(&samples, &witness);
    }

    #[test]
    fn derived_tight_bound_is_min_max_ratio() {
        let samples = sampled(1.0, 20.0, 500);
        let witness = derive_tight(&samples, 10.0).unwrap();

        let ratios: Vec<f64> = samples
            .iter()
            .filter(|s| s.n >= 10.0)
            .map(|s| s.f / (s.n * s.n))
            .collect();
        let min = ratios.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let Witness::Tight { c1, c2, n0 } = witness else {
            panic!("derive_tight must return a tight witness");
        };
        assert_all_close!([c1, c2, n0], [min, max, 10.0], "derived tight witness");

        // Holds by construction
        for s in restrict(&samples, 10.0) {
            assert!(c1 * s.g <= s.f * (1.0 + TOLERANCE));
            assert!(s.f <= c2 * s.g * (1.0 + TOLERANCE));
        }
        assert_bound_holds!(&samples, &witness);
    }

    #[test]
    fn derived_c1_approaches_leading_coefficient() {
        // f(n)/n² = 0.2 + 3/n + 15/n², which falls towards 0.2 as n grows
        let mut previous = f64::INFINITY;
        for start in [10.0, 100.0, 1_000.0, 5_000.0] {
            let samples = sampled(start, 2.0 * start, 200);
            let Witness::Tight { c1, c2, .. } = derive_tight(&samples, start).unwrap() else {
                unreachable!()
            };
            assert!(c1 > 0.2);
            assert!(c1 <= c2);
            assert!(c1 < previous);
            previous = c1;
        }
        assert!((previous - 0.2) < 1e-3, "c1 = {previous}");
    }

    #[test]
    fn threshold_at_domain_start_uses_every_sample() {
        let samples = sampled(1.0, 20.0, 50);
        assert_eq!(restrict(&samples, 1.0).count(), samples.len());
        assert!(derive_tight(&samples, 1.0).is_ok());
    }

    #[test]
    fn threshold_past_domain_end_fails() {
        let samples = sampled(1.0, 20.0, 50);
        assert_eq!(restrict(&samples, 21.0).count(), 0);
        assert!(matches!(
            derive_tight(&samples, 21.0),
            Err(Error::EmptyRestriction { .. })
        ));
    }

    #[test]
    fn zero_comparison_is_rejected() {
        let samples = sampled(0.0, 20.0, 21);
        let err = derive_tight(&samples, 0.0).unwrap_err();
        assert!(matches!(err, Error::ZeroComparison { n } if n == 0.0));

        // Excluding the zero makes it valid again
        assert!(derive_tight(&samples, 1.0).is_ok());
    }

    #[test]
    fn witness_validation() {
        assert!(Witness::Upper { c: 0.3, n0: 35.0 }.validate().is_ok());
        assert!(matches!(
            Witness::Lower { c: 0.0, n0: 0.0 }.validate(),
            Err(Error::NonPositiveConstant { name: "c", .. })
        ));
        assert!(matches!(
            Witness::Tight { c1: 0.3, c2: 0.2, n0: 0.0 }.validate(),
            Err(Error::InvertedTightBound { .. })
        ));
        assert!(matches!(
            Witness::Tight { c1: f64::NAN, c2: 0.2, n0: 0.0 }.validate(),
            Err(Error::NonPositiveConstant { name: "c1", .. })
        ));
    }

    #[test]
    fn mask_respects_threshold_and_inequality() {
        let samples = sampled(20.0, 50.0, 31);
        let mask = satisfaction_mask(&samples, &Witness::Upper { c: 0.3, n0: 35.0 });

        for (s, m) in samples.iter().zip(&mask) {
            assert_eq!(*m, s.n >= 35.0, "n = {}", s.n);
        }

        // A weaker constant only holds from its own crossing point onwards
        let mask = satisfaction_mask(&samples, &Witness::Upper { c: 0.28, n0: 20.0 });
        assert!(!mask[0]);
        assert!(mask[30]);
    }

    #[test]
    fn witness_serde_shape() {
        let witness: Witness = serde_json::from_str(r#"{"kind":"upper","c":0.3,"n0":35.0}"#).unwrap();
        assert_eq!(witness, Witness::Upper { c: 0.3, n0: 35.0 });
        assert_eq!(witness.kind(), BoundKind::Upper);
        assert_eq!(witness.kind().symbol(), 'O');
    }
}
