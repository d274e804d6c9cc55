//! Scenario configuration and the evaluation pipeline
//!
//! A [`Scenario`] holds every number a chart needs: the sampled interval, the sample count,
//! the fixed y-axis range, the bound witness (or how to derive it), and a few layout details.
//!
//! [`Scenario::evaluate`] runs the numeric part of the pipeline:
//! validate → sample domain → evaluate `f` and `g` → resolve the witness → verify → mask.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    bound::{self, BoundKind, Sample, Verdict, Witness},
    error::{Error, Result},
    function,
    value::Linspace,
};

function!(
    /// The cost function `f(n) = 0.2n² + 3n + 15` drawn in every chart
    pub const COST(n) = 0.2 n^2 + 3.0 n + 15.0
);
function!(
    /// The comparison function `g(n) = n²` that `f` is bounded by
    pub const COMPARISON(n) = 1.0 n^2
);

/// Where the bound constants come from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum WitnessSource {
    /// Constants chosen by hand and only checked, never searched for
    Fixed {
        /// The supplied witness
        witness: Witness,
    },

    /// Tight-bound constants derived from the sampled ratio `f(n)/g(n)` past `n0`
    Derived {
        /// Threshold
        n0: f64,
    },
}
impl WitnessSource {
    /// The kind of bound this source produces
    #[must_use]
    pub fn kind(&self) -> BoundKind {
        match self {
            Self::Fixed { witness } => witness.kind(),
            Self::Derived { .. } => BoundKind::Tight,
        }
    }

    /// The threshold `n₀`
    #[must_use]
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Fixed { witness } => witness.threshold(),
            Self::Derived { n0 } => *n0,
        }
    }
}

/// Every parameter of one chart
///
/// # Example
/// ```
/// # use asymplot::{scenario::{Scenario, WitnessSource}, bound::Witness};
/// let scenario = Scenario {
///     file_name: "big_o_notation.png".into(),
///     interval: (20.0, 50.0),
///     samples: 500,
///     y_range: (0.0, 500.0),
///     tick_step: 5.0,
///     witness: WitnessSource::Fixed { witness: Witness::Upper { c: 0.3, n0: 35.0 } },
///     annotation_offset: (-10.0, 10.0),
/// };
///
/// let evaluation = scenario.evaluate().unwrap();
/// assert!(evaluation.verdict.holds());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Name of the image written into the output directory
    pub file_name: String,

    /// Closed interval `[n_min, n_max]` to sample
    pub interval: (f64, f64),

    /// Number of evenly spaced samples
    pub samples: usize,

    /// Fixed y-axis range of the chart
    pub y_range: (f64, f64),

    /// Spacing between x-axis ticks
    pub tick_step: f64,

    /// Bound constants, or how to derive them
    pub witness: WitnessSource,

    /// Position of the annotation text relative to `(n₀, f(n₀))`, in data units
    pub annotation_offset: (f64, f64),
}
impl Scenario {
    /// Loads a scenario from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid scenario.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// The kind of bound this scenario illustrates
    #[must_use]
    pub fn kind(&self) -> BoundKind {
        self.witness.kind()
    }

    /// Checks the configuration before anything is computed.
    ///
    /// # Errors
    /// - [`Error::InvalidInterval`] if `n_min >= n_max` or either end is not finite
    /// - [`Error::InvalidSampleCount`] if there are no samples
    /// - [`Error::InvalidAxisRange`] if the y-range is empty or reversed
    /// - [`Error::NonPositiveConstant`] for a non-positive tick step or witness constant
    /// - [`Error::InvertedTightBound`] if `c1 > c2`
    /// - [`Error::ThresholdOutOfRange`] if `n₀` lies outside the interval
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.interval;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(Error::InvalidInterval { min, max });
        }

        if self.samples == 0 {
            return Err(Error::InvalidSampleCount(self.samples));
        }

        let (y_min, y_max) = self.y_range;
        if !(y_min.is_finite() && y_max.is_finite() && y_min < y_max) {
            return Err(Error::InvalidAxisRange {
                min: y_min,
                max: y_max,
            });
        }

        if !(self.tick_step.is_finite() && self.tick_step > 0.0) {
            return Err(Error::NonPositiveConstant {
                name: "tick_step",
                value: self.tick_step,
            });
        }

        let n0 = self.witness.threshold();
        if !(n0.is_finite() && (min..=max).contains(&n0)) {
            return Err(Error::ThresholdOutOfRange { n0, min, max });
        }

        if let WitnessSource::Fixed { witness } = &self.witness {
            witness.validate()?;
        }

        Ok(())
    }

    /// The sampled domain
    #[must_use]
    pub fn domain(&self) -> Linspace<f64> {
        Linspace::new(self.interval.0..=self.interval.1, self.samples)
    }

    /// Runs the numeric pipeline for this scenario
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid, or if a tight bound
    /// cannot be derived from the samples.
    pub fn evaluate(&self) -> Result<Evaluation> {
        self.validate()?;

        let samples = Sample::evaluate_all(self.domain(), &COST, &COMPARISON);
        let witness = match self.witness {
            WitnessSource::Fixed { witness } => witness,
            WitnessSource::Derived { n0 } => bound::derive_tight(&samples, n0)?,
        };

        let verdict = bound::verify(&samples, &witness);
        let mask = bound::satisfaction_mask(&samples, &witness);

        Ok(Evaluation {
            samples,
            witness,
            verdict,
            mask,
        })
    }
}

/// The numeric result of a scenario, ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// `(n, f(n), g(n))` for every point of the domain
    pub samples: Vec<Sample>,

    /// The witness actually used, after derivation
    pub witness: Witness,

    /// Result of checking the witness against the samples
    pub verdict: Verdict,

    /// Per-sample flag for the shaded region
    pub mask: Vec<bool>,
}
impl Evaluation {
    /// `(n, f(n))` for every sample
    #[must_use]
    pub fn cost_curve(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.n, s.f)).collect()
    }

    /// `(n, c·g(n))` for every sample
    #[must_use]
    pub fn scaled_curve(&self, c: f64) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.n, c * s.g)).collect()
    }

    /// `f(n₀)`, evaluated exactly rather than read from the nearest sample
    #[must_use]
    pub fn cost_at_threshold(&self) -> f64 {
        COST.y(self.witness.threshold())
    }
}
