//! Assertions for checking bounds in tests.
//!
//! # Macros
//!
//! ### [`crate::assert_close`]
//! Asserts that two floating-point values are approximately equal within a relative tolerance.
//! - `assert_eq!` equivalent for floats.
//!
//! ### [`crate::assert_all_close`]
//! Element-wise [`crate::assert_close`] for slices.
//!
//! ### [`crate::assert_bound_holds`]
//! Asserts that a [`crate::bound::Witness`] holds at every sample past its threshold.
//! On failure the message names the first violating sample.
//! ```rust
//! # use asymplot::{assert_bound_holds, bound::{Sample, Witness}, function, value::Linspace};
//! function!(f(n) = 0.2 n^2 + 3.0 n + 15.0);
//! function!(g(n) = 1.0 n^2);
//! let samples = Sample::evaluate_all(Linspace::new(20.0..=50.0, 500), &f, &g);
//! assert_bound_holds!(&samples, &Witness::Upper { c: 0.3, n0: 35.0 });
//! ```
