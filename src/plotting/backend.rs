use std::ops::Range;

use crate::{
    plotting::{PlotOptions, PlottingElement},
    value::Value,
};

pub mod plotters;

/// Stroke width of the primary curve, in points
pub const CURVE_WIDTH: u32 = 3;

/// Stroke width of dashed comparison curves, in points
pub const COMPARISON_WIDTH: u32 = 2;

/// Dash length and gap of comparison curves, in points
pub const COMPARISON_DASH: (u32, u32) = (8, 4);

/// Opacity of the threshold line
pub const THRESHOLD_ALPHA: f64 = 0.7;

/// Opacity of shaded regions
pub const REGION_ALPHA: f64 = 0.2;

/// Trait for plot backends
///
/// `'a` is the lifetime of the borrow on [`PlotBackend::Root`] held by the plot while it is drawn.
///
/// Sizes passed to the `add_*` methods are in points; backends scale them to their own units.
pub trait PlotBackend<'a>: Sized {
    /// Error type for the plot backend
    type Error: std::error::Error;

    /// Root type for the plot backend
    type Root: 'a;

    /// Color type for the plot backend
    type Color: Clone;

    /// Get the next color in the palette
    fn next_color(&mut self) -> Self::Color;

    /// Color used to highlight the threshold and the annotated point
    fn accent_color(&self) -> Self::Color;

    /// Color used to shade regions
    fn fill_color(&self) -> Self::Color;

    /// Set the alpha (opacity) of a color
    fn color_with_alpha(color: &Self::Color, alpha: f64) -> Self::Color;

    /// Create a new plot with the given options and ranges on the given root
    ///
    /// # Errors
    /// Returns an error if the plot cannot be created.
    fn new_plot<T: Value>(
        root: &'a Self::Root,
        options: &PlotOptions<T>,
        x_range: Range<T>,
        y_range: Range<T>,
    ) -> Result<Self, Self::Error>;

    /// Add a solid line to the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Add a dashed line to the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_dashed_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        width: u32,
        sizing: (u32, u32),
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Add a dotted vertical line spanning the y-axis
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_vertical_line<T: Value>(
        &mut self,
        x: T,
        label: &str,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Add a filled circle, optionally with text at `offset` from it and a connector back to it
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_marker<T: Value>(
        &mut self,
        point: (T, T),
        label: Option<&str>,
        offset: (T, T),
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Add filled polygons sharing a single legend entry
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_polygons<T: Value>(
        &mut self,
        polygons: &[Vec<(T, T)>],
        label: &str,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Finalize the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn finalize(self) -> Result<(), Self::Error>;

    /// Add a plotting element to the plot
    ///
    /// Curves take their colours from the palette in the order they are added.
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_element<T: Value>(&mut self, element: &PlottingElement<T>) -> Result<(), Self::Error> {
        match element {
            PlottingElement::Curve(data, label) => {
                let color = self.next_color();
                self.add_line(data, label, CURVE_WIDTH, color)
            }

            PlottingElement::Comparison(data, label) => {
                let color = self.next_color();
                self.add_dashed_line(data, label, COMPARISON_WIDTH, COMPARISON_DASH, color)
            }

            PlottingElement::Threshold(x, label) => {
                let color = Self::color_with_alpha(&self.accent_color(), THRESHOLD_ALPHA);
                self.add_vertical_line(*x, label, color)
            }

            PlottingElement::Annotation {
                point,
                offset,
                text,
            } => {
                let color = self.accent_color();
                self.add_marker(*point, Some(text.as_str()), *offset, color)
            }

            PlottingElement::Region { label, .. } => {
                let color = Self::color_with_alpha(&self.fill_color(), REGION_ALPHA);
                self.add_polygons(&element.polygons(), label, color)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::{ColorSource, Plot};

    /// Records every call instead of drawing
    struct Recorder<'a> {
        calls: &'a std::cell::RefCell<Vec<String>>,
        palette: ColorSource<&'static str>,
    }

    impl<'a> PlotBackend<'a> for Recorder<'a> {
        type Error = std::fmt::Error;
        type Root = std::cell::RefCell<Vec<String>>;
        type Color = String;

        fn next_color(&mut self) -> Self::Color {
            self.palette.next_color().unwrap_or("black").to_string()
        }

        fn accent_color(&self) -> Self::Color {
            "green".into()
        }

        fn fill_color(&self) -> Self::Color {
            "limegreen".into()
        }

        fn color_with_alpha(color: &Self::Color, alpha: f64) -> Self::Color {
            format!("{color}@{alpha}")
        }

        fn new_plot<T: Value>(
            root: &'a Self::Root,
            options: &PlotOptions<T>,
            x_range: Range<T>,
            y_range: Range<T>,
        ) -> Result<Self, Self::Error> {
            root.borrow_mut().push(format!(
                "new {} x={x_range:?} y={y_range:?}",
                options.title
            ));
            Ok(Self {
                calls: root,
                palette: ColorSource::new(vec!["blue", "red", "green"]),
            })
        }

        fn add_line<T: Value>(
            &mut self,
            data: &[(T, T)],
            label: &str,
            width: u32,
            color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.calls
                .borrow_mut()
                .push(format!("line {label} {color} w={width} n={}", data.len()));
            Ok(())
        }

        fn add_dashed_line<T: Value>(
            &mut self,
            data: &[(T, T)],
            label: &str,
            width: u32,
            sizing: (u32, u32),
            color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.calls.borrow_mut().push(format!(
                "dashed {label} {color} w={width} {sizing:?} n={}",
                data.len()
            ));
            Ok(())
        }

        fn add_vertical_line<T: Value>(
            &mut self,
            x: T,
            label: &str,
            color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.calls
                .borrow_mut()
                .push(format!("vline {label} {color} x={x}"));
            Ok(())
        }

        fn add_marker<T: Value>(
            &mut self,
            point: (T, T),
            label: Option<&str>,
            offset: (T, T),
            color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.calls.borrow_mut().push(format!(
                "marker {color} at=({}, {}) {label:?} offset=({}, {})",
                point.0, point.1, offset.0, offset.1
            ));
            Ok(())
        }

        fn add_polygons<T: Value>(
            &mut self,
            polygons: &[Vec<(T, T)>],
            label: &str,
            color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.calls
                .borrow_mut()
                .push(format!("polygons {label} {color} n={}", polygons.len()));
            Ok(())
        }

        fn finalize(self) -> Result<(), Self::Error> {
            self.calls.borrow_mut().push("finalize".into());
            Ok(())
        }
    }

    #[test]
    fn elements_dispatch_to_backend() {
        let calls = std::cell::RefCell::new(vec![]);
        let options = PlotOptions {
            title: "demo".into(),
            x_range: Some(0.0..4.0),
            y_range: Some(0.0..10.0),
            ..Default::default()
        };

        let curve = PlottingElement::Curve(vec![(0.0, 1.0), (4.0, 5.0)], "f".into());
        let mut plot = Plot::<Recorder, f64>::new(&calls, &options, &curve).unwrap();
        plot.with_element(&PlottingElement::Comparison(
            vec![(0.0, 2.0), (4.0, 6.0)],
            "g".into(),
        ))
        .unwrap()
        .with_element(&PlottingElement::Threshold(2.0, "t".into()))
        .unwrap()
        .with_element(&PlottingElement::Annotation {
            point: (2.0, 3.0),
            offset: (-1.0, 1.0),
            text: "here".into(),
        })
        .unwrap()
        .with_element(&PlottingElement::Region {
            lower: vec![(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)],
            upper: vec![(0.0, 2.0), (2.0, 4.0), (4.0, 6.0)],
            mask: vec![true, false, true],
            label: "r".into(),
        })
        .unwrap();
        plot.finish().unwrap();

        assert_eq!(
            calls.into_inner(),
            vec![
                "new demo x=0.0..4.0 y=0.0..10.0",
                "line f blue w=3 n=2",
                "dashed g red w=2 (8, 4) n=2",
                "vline t green@0.7 x=2",
                "marker green at=(2, 3) Some(\"here\") offset=(-1, 1)",
                "polygons r limegreen@0.2 n=2",
                "finalize",
            ]
        );
    }

    #[test]
    fn ranges_fall_back_to_primary_element() {
        let calls = std::cell::RefCell::new(vec![]);
        let curve = PlottingElement::Curve(vec![(1.0, 0.0), (3.0, 50.0)], "f".into());
        Plot::<Recorder, f64>::new(&calls, &PlotOptions::default(), &curve)
            .unwrap()
            .finish()
            .unwrap();

        assert_eq!(calls.borrow()[0], "new Graph Output x=1.0..3.0 y=-5.0..55.0");
    }
}
