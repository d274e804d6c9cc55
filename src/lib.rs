//! # Asymplot
//! ## Pictures of O, Ω and Θ
//!
//! The formal definitions of asymptotic bounds are easy to state and surprisingly hard to picture.
//! This crate draws them: one chart per bound, showing a cost function, the scaled comparison
//! function(s) that bound it, the threshold `n₀` past which the bound holds, and a shaded region
//! where the inequality is actually satisfied.
//!
//! Every chart uses the same pair of functions:
//! - cost function `f(n) = 0.2n² + 3n + 15`
//! - comparison function `g(n) = n²`
//!
//! ```rust
//! # use asymplot::{bound::Witness, scenario::{Scenario, WitnessSource}};
//! let scenario = Scenario {
//!     file_name: "big_o_notation.png".into(),
//!     interval: (20.0, 50.0),
//!     samples: 500,
//!     y_range: (0.0, 500.0),
//!     tick_step: 5.0,
//!     witness: WitnessSource::Fixed { witness: Witness::Upper { c: 0.3, n0: 35.0 } },
//!     annotation_offset: (-10.0, 10.0),
//! };
//!
//! // 0.2n² + 3n + 15 ≤ 0.3n² from n = 35 onwards
//! let evaluation = scenario.evaluate().unwrap();
//! assert!(evaluation.verdict.holds());
//! ```
//!
//! # Core Concepts
//! - A [`bound::Witness`] is the concrete set of constants demonstrating a bound: `(c, n₀)` or `(c₁, c₂, n₀)`.
//!     - Upper and lower witnesses are always supplied; there are infinitely many valid ones.
//!     - A tight witness can be derived from sampled data with [`bound::derive_tight`].
//! - A [`scenario::Scenario`] holds everything one chart needs, and can be loaded from JSON.
//! - [`render::render`] evaluates a scenario and writes its chart to a PNG file.
//!
//! A witness is only ever checked against a finite set of samples. A chart illustrates a bound;
//! it does not prove one.
//!
//! # Binaries
//! `big_o`, `big_omega`, `big_theta` and `big_theta_derived` each render one chart into `plots/`.
//! See [`cli::Args`] for the optional flags.
//!
//! # Testing utilities
//!
//! The crate includes assertion macros for bounds and floating-point values. See [`test`].
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar

pub mod bound;
pub mod cli;
pub mod display;
pub mod error;
pub mod plotting;
pub mod render;
pub mod scenario;
pub mod test;
pub mod value;

mod polynomial;
pub use polynomial::Polynomial;
