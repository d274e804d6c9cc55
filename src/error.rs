//! Error types for bound rendering
//!
//! This module defines the failures that can stop a chart from being produced,
//! along with a convenient `Result` alias.
//!
//! Errors fall into three groups:
//! - Configuration errors, caught before anything is evaluated
//! - Arithmetic precondition violations while deriving a tight bound
//! - I/O and drawing errors while persisting the chart

/// Errors that can occur while evaluating or rendering a bound scenario.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sampled interval is empty, reversed, or not finite.
    #[error("Invalid interval [{min}, {max}]: the minimum must be finite and strictly less than the maximum")]
    InvalidInterval {
        /// Lower end of the interval
        min: f64,
        /// Upper end of the interval
        max: f64,
    },

    /// The domain must contain at least one sample.
    #[error("Sample count must be a positive integer, got {0}")]
    InvalidSampleCount(usize),

    /// The fixed y-axis range is empty or reversed.
    #[error("Invalid y-axis range [{min}, {max}]")]
    InvalidAxisRange {
        /// Bottom of the axis
        min: f64,
        /// Top of the axis
        max: f64,
    },

    /// A bound constant was zero, negative, or not finite.
    #[error("Constant `{name}` must be a finite value greater than zero, got {value}")]
    NonPositiveConstant {
        /// Name of the constant (`c`, `c1` or `c2`)
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// A tight bound was given with its lower constant above its upper constant.
    #[error("Tight bound constants are inverted: c1 = {c1} > c2 = {c2}")]
    InvertedTightBound {
        /// Lower constant
        c1: f64,
        /// Upper constant
        c2: f64,
    },

    /// The threshold lies outside the sampled interval.
    #[error("Threshold n₀ = {n0} lies outside the sampled interval [{min}, {max}]")]
    ThresholdOutOfRange {
        /// Requested threshold
        n0: f64,
        /// Lower end of the interval
        min: f64,
        /// Upper end of the interval
        max: f64,
    },

    /// No sample satisfies `n >= n₀`, so there is nothing to derive a bound from.
    #[error("No samples at or beyond the threshold n₀ = {n0}; cannot derive a tight bound")]
    EmptyRestriction {
        /// Requested threshold
        n0: f64,
    },

    /// The comparison function is zero inside the restricted domain.
    ///
    /// The ratio `f(n) / g(n)` is undefined there.
    #[error("Comparison function is zero at n = {n}; the ratio f(n)/g(n) is undefined")]
    ZeroComparison {
        /// Sample where `g(n) = 0`
        n: f64,
    },

    /// A computation produced NaN or infinity.
    #[error("Non-finite value encountered while computing {0}")]
    NonFinite(&'static str),

    /// A numeric value could not be cast to the target type.
    #[error("Failed to cast value to target type")]
    CastFailed,

    /// The output directory or image file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A scenario file could not be parsed.
    #[error("Invalid scenario configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The chart could not be drawn or encoded.
    #[error(transparent)]
    Plot(#[from] crate::plotting::plotters::Error),
}

/// Result type for bound rendering
pub type Result<T> = std::result::Result<T, Error>;
