use std::ops::Range;

use crate::{
    value::{CoordExt, Value},
    Polynomial,
};

/// Elements that can be plotted
#[derive(Debug, Clone, PartialEq)]
pub enum PlottingElement<T: Value = f64> {
    /// A solid line, such as the cost function
    ///
    /// (points, label)
    Curve(Vec<(T, T)>, String),

    /// A dashed line, such as a scaled comparison function
    ///
    /// (points, label)
    Comparison(Vec<(T, T)>, String),

    /// A dotted vertical line spanning the whole y-axis
    ///
    /// (x, label)
    Threshold(T, String),

    /// A highlighted point, with text placed at an offset and a connector back to the point
    Annotation {
        /// The highlighted point
        point: (T, T),

        /// Where the text sits, relative to the point, in data units
        offset: (T, T),

        /// Annotation text
        text: String,
    },

    /// Area between two curves, filled wherever `mask` is set
    ///
    /// The curves and the mask are parallel: index `i` of each refers to the same sample.
    Region {
        /// One edge of the area
        lower: Vec<(T, T)>,

        /// The other edge of the area
        upper: Vec<(T, T)>,

        /// Which samples are inside the area
        mask: Vec<bool>,

        /// Legend entry
        label: String,
    },
}
impl<T: Value> PlottingElement<T> {
    /// Creates a solid curve by solving a polynomial over `xs`
    ///
    /// The label is `<name> = <equation>`, e.g. `f(n) = 0.2n² + 3n + 15`.
    pub fn from_polynomial(poly: &Polynomial<'_, T>, xs: &[T], name: &str) -> Self {
        let data = poly.solve(xs.iter().copied());
        Self::Curve(data, format!("{name} = {}", poly.equation()))
    }

    /// Returns the legend label for this element, if it has one
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Curve(_, label)
            | Self::Comparison(_, label)
            | Self::Threshold(_, label)
            | Self::Region { label, .. } => Some(label),
            Self::Annotation { .. } => None,
        }
    }

    /// Returns the x-axis range for this element
    #[must_use]
    pub fn x_range(&self) -> Range<T> {
        match self {
            Self::Curve(data, _) | Self::Comparison(data, _) | Self::Region { lower: data, .. } => {
                match (data.first(), data.last()) {
                    (Some((x_min, _)), Some((x_max, _))) => *x_min..*x_max,
                    _ => T::zero()..T::one(),
                }
            }
            Self::Threshold(x, _) => *x..*x + T::one(),
            Self::Annotation { point, .. } => point.0..point.0 + T::one(),
        }
    }

    /// Returns the y-axis range for this element, padded by 10% of its span
    #[must_use]
    pub fn y_range(&self) -> Range<T> {
        let range = match self {
            Self::Curve(data, _) | Self::Comparison(data, _) => data.y_range(),
            Self::Region { lower, upper, .. } => match (lower.y_range(), upper.y_range()) {
                (Some(a), Some(b)) => Some(a.start.min(b.start)..a.end.max(b.end)),
                (a, b) => a.or(b),
            },
            Self::Annotation { point, .. } => Some(point.1..point.1),
            Self::Threshold(..) => None,
        };

        let Some(range) = range else {
            return T::zero()..T::one();
        };

        let ten = T::from_positive_int(10);
        let padding = ((range.end - range.start) / ten).max(T::one());
        (range.start - padding)..(range.end + padding)
    }

    /// Splits a [`PlottingElement::Region`] into one closed outline per contiguous run of set mask entries
    ///
    /// Each outline walks forward along `upper` and back along `lower`.
    /// Other elements have no polygons.
    #[must_use]
    pub fn polygons(&self) -> Vec<Vec<(T, T)>> {
        let Self::Region {
            lower, upper, mask, ..
        } = self
        else {
            return vec![];
        };

        let len = mask.len().min(lower.len()).min(upper.len());
        let mut polygons = Vec::new();
        let mut run_start = None;
        for i in 0..=len {
            let inside = i < len && mask[i];
            match (run_start, inside) {
                (None, true) => run_start = Some(i),
                (Some(start), false) => {
                    let outline = upper[start..i]
                        .iter()
                        .chain(lower[start..i].iter().rev())
                        .copied()
                        .collect();
                    polygons.push(outline);
                    run_start = None;
                }
                _ => {}
            }
        }

        polygons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function;

    fn region(mask: Vec<bool>) -> PlottingElement {
        let lower = (0..mask.len()).map(|i| (i as f64, 0.0)).collect();
        let upper = (0..mask.len()).map(|i| (i as f64, 1.0)).collect();
        PlottingElement::Region {
            lower,
            upper,
            mask,
            label: "area".into(),
        }
    }

    #[test]
    fn polynomial_curve_label() {
        function!(f(n) = 0.2 n^2 + 3.0 n + 15.0);
        let element = PlottingElement::from_polynomial(&f, &[0.0, 10.0], "f(n)");
        assert_eq!(element.label(), Some("f(n) = 0.2n² + 3n + 15"));

        let PlottingElement::Curve(data, _) = element else {
            panic!("expected a curve");
        };
        assert_eq!(data, vec![(0.0, 15.0), (10.0, 65.0)]);
    }

    #[test]
    fn one_polygon_per_run() {
        let polygons = region(vec![false, true, true, false, true, true, true]).polygons();
        assert_eq!(polygons.len(), 2);

        // Forward along the upper edge, back along the lower one
        assert_eq!(
            polygons[0],
            vec![(1.0, 1.0), (2.0, 1.0), (2.0, 0.0), (1.0, 0.0)]
        );
        assert_eq!(polygons[1].len(), 6);
        assert_eq!(polygons[1][0], (4.0, 1.0));
        assert_eq!(polygons[1][5], (4.0, 0.0));
    }

    #[test]
    fn empty_mask_has_no_polygons() {
        assert!(region(vec![false; 5]).polygons().is_empty());
        assert!(PlottingElement::Threshold(3.0, "t".into())
            .polygons()
            .is_empty());
    }

    #[test]
    fn ranges() {
        let curve = PlottingElement::Curve(vec![(20.0, 0.0), (50.0, 100.0)], "c".into());
        assert_eq!(curve.x_range(), 20.0..50.0);
        assert_eq!(curve.y_range(), -10.0..110.0);

        let full = region(vec![true; 4]);
        assert_eq!(full.x_range(), 0.0..3.0);
        assert_eq!(full.y_range(), -1.0..2.0);
    }
}
