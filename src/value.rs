//! Numeric types and sampling utilities for bound scenarios.
//!
//! This module defines the [`Value`] trait, which abstracts the floating-point
//! types a scenario can be evaluated in, and the [`Linspace`] iterator used to
//! sample the domain of `n`.
//!
//! # Traits
//!
//! - [`Value`]: Extends `Float` to provide:
//!   - `try_cast` for safe type conversion with error handling.
//!   - `from_positive_int` for sample indices.
//! - [`CoordExt`]: coordinate iterators, ranges and `f64` conversion for lists of points.
//!
//! # Iterators
//!
//! - [`Linspace`]: A fixed number of evenly spaced values over a closed interval.
//!
//! # Example
//!
//! ```rust
//! use asymplot::value::Linspace;
//!
//! // 5 evenly spaced samples over [0, 1]
//! let samples: Vec<f64> = Linspace::new(0.0..=1.0, 5).collect();
//! assert_eq!(samples, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```
use std::ops::{Range, RangeInclusive};

use crate::error::Error;

/// Numeric type for curves
pub trait Value:
    num_traits::Float + std::fmt::Debug + std::fmt::Display + std::fmt::LowerExp + Default
{
    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(Self::infinity())
    }

    /// Lossy conversion to `f64`, used for error reporting and drawing
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Value for T where
    T: num_traits::Float + std::fmt::Debug + std::fmt::Display + std::fmt::LowerExp + Default
{
}

/// Iterator over a fixed number of evenly spaced values in a closed interval.
///
/// Both ends of the interval are yielded; the last value is exactly `range.end()`
/// so accumulated rounding never drops the final sample.
/// A single sample yields only `range.start()`.
#[derive(Debug, Clone)]
pub struct Linspace<T: Value> {
    range: RangeInclusive<T>,
    count: usize,
    index: usize,
}
impl<T: Value> Linspace<T> {
    /// Creates a new iterator yielding `count` values over `range`
    pub fn new(range: RangeInclusive<T>, count: usize) -> Self {
        Self {
            range,
            count,
            index: 0,
        }
    }

    /// Distance between two consecutive samples
    ///
    /// Zero when there are fewer than two samples.
    pub fn step(&self) -> T {
        if self.count < 2 {
            return T::zero();
        }

        let span = *self.range.end() - *self.range.start();
        span / T::from_positive_int(self.count - 1)
    }
}
impl<T: Value> Iterator for Linspace<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let value = if self.index + 1 == self.count && self.count > 1 {
            *self.range.end()
        } else {
            *self.range.start() + self.step() * T::from_positive_int(self.index)
        };

        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}
impl<T: Value> ExactSizeIterator for Linspace<T> {}

/// Coordinate helpers for lists of `(x, y)` points
///
/// # Examples
///
/// ```
/// # use asymplot::value::CoordExt;
/// let data = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.y_range(), Some(-2.0..3.0));
/// ```
pub trait CoordExt<T: Value> {
    /// The underlying points
    fn points(&self) -> &[(T, T)];

    /// Iterates over the x-coordinates
    fn x_iter<'s>(&'s self) -> impl Iterator<Item = T> + 's
    where
        T: 's,
    {
        self.points().iter().map(|&(x, _)| x)
    }

    /// Iterates over the y-coordinates
    fn y_iter<'s>(&'s self) -> impl Iterator<Item = T> + 's
    where
        T: 's,
    {
        self.points().iter().map(|&(_, y)| y)
    }

    /// Smallest and largest y-coordinate, or `None` for an empty list
    fn y_range(&self) -> Option<Range<T>> {
        let mut ys = self.y_iter();
        let first = ys.next()?;
        let (min, max) = ys.fold((first, first), |(min, max), y| (min.min(y), max.max(y)));
        Some(min..max)
    }

    /// Converts every point to `f64`
    ///
    /// # Errors
    /// Returns an error if a coordinate cannot be represented as `f64`.
    fn as_f64(&self) -> crate::error::Result<Vec<(f64, f64)>> {
        self.points()
            .iter()
            .map(|&(x, y)| Ok((f64::try_cast(x)?, f64::try_cast(y)?)))
            .collect()
    }

    /// Converts to `f64` and clamps every y-value into `range`
    ///
    /// # Errors
    /// Returns an error if a coordinate cannot be represented as `f64`.
    fn y_clipped(&self, range: &Range<f64>) -> crate::error::Result<Vec<(f64, f64)>> {
        let mut data = self.as_f64()?;
        for point in &mut data {
            point.1 = point.1.clamp(range.start, range.end);
        }
        Ok(data)
    }
}
impl<T: Value> CoordExt<T> for [(T, T)] {
    fn points(&self) -> &[(T, T)] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let values: Vec<f64> = Linspace::new(20.0..=50.0, 500).collect();
        assert_eq!(values.len(), 500);
        assert_eq!(values[0], 20.0);
        assert_eq!(values[499], 50.0);
    }

    #[test]
    fn linspace_is_strictly_increasing() {
        let values: Vec<f64> = Linspace::new(0.0..=20.0, 500).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_single_sample() {
        let values: Vec<f64> = Linspace::new(3.0..=7.0, 1).collect();
        assert_eq!(values, vec![3.0]);

        let empty: Vec<f64> = Linspace::new(3.0..=7.0, 0).collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn linspace_step_and_len() {
        let space = Linspace::new(1.0..=20.0, 20);
        assert_eq!(space.len(), 20);
        crate::assert_close!(space.step(), 1.0);
    }

    #[test]
    fn coord_ranges() {
        let data = vec![(0.0, 4.0), (1.0, -1.0), (2.0, 9.0)];
        assert_eq!(data.y_range(), Some(-1.0..9.0));
        assert_eq!(data.x_iter().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert_eq!(data[1..].y_iter().collect::<Vec<_>>(), vec![-1.0, 9.0]);

        let clipped = data.y_clipped(&(0.0..5.0)).unwrap();
        assert_eq!(clipped, vec![(0.0, 4.0), (1.0, 0.0), (2.0, 5.0)]);
    }
}
