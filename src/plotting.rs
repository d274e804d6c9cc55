//! Chart drawing for bound scenarios
//!
//! A chart is a list of [`PlottingElement`]s drawn through a [`PlotBackend`].
//! The [`Plot`] struct ties a backend to its options and feeds it elements in order.
//!
//! The only backend shipped is [`plotters::Backend`], which writes PNG files through the
//! `plotters` bitmap backend.
use std::marker::PhantomData;

use crate::value::Value;

mod backend;
pub use backend::*;

mod element;
pub use element::*;

mod palette;
pub use palette::ColorSource;

/// Options for plotting
#[derive(Debug, Clone)]
pub struct PlotOptions<T>
where
    T: Value,
{
    /// Caption for the plot
    pub title: String,

    /// X-axis label
    pub x_label: Option<String>,

    /// Y-axis label
    pub y_label: Option<String>,

    /// Size of the output image in pixels
    pub size: (u32, u32),

    /// Pixels per point, used to scale fonts and stroke widths
    pub font_scale: f64,

    /// X-axis range
    pub x_range: Option<std::ops::Range<T>>,

    /// Y-axis range
    pub y_range: Option<std::ops::Range<T>>,

    /// Whether to hide the legend
    pub hide_legend: bool,

    /// Number of labels to show on the x-axis (if supported by the backend)
    pub x_axis_labels: Option<usize>,
}
impl<T: Value> Default for PlotOptions<T> {
    fn default() -> Self {
        Self {
            title: "Graph Output".into(),
            x_label: None,
            y_label: None,
            size: (640, 480),
            font_scale: 1.0,
            x_range: None,
            y_range: None,
            hide_legend: false,
            x_axis_labels: None,
        }
    }
}

/// A plot of one or more elements using a given backend.
pub struct Plot<'a, P, T>
where
    P: PlotBackend<'a>,
    T: Value,
{
    plot: P,
    _marker: PhantomData<(&'a (), T)>,
}

impl<'a, P, T> Plot<'a, P, T>
where
    P: PlotBackend<'a>,
    T: Value,
{
    /// Create a new plot with the given root, options, and primary element.
    /// The primary element is used to determine the axis ranges if they are not specified in the options.
    ///
    /// # Errors
    /// Returns an error if the plot cannot be created.
    pub fn new(
        root: &'a P::Root,
        options: &PlotOptions<T>,
        prime: &PlottingElement<T>,
    ) -> Result<Self, P::Error> {
        let x_range = options.x_range.clone().unwrap_or_else(|| prime.x_range());
        let y_range = options.y_range.clone().unwrap_or_else(|| prime.y_range());

        let mut plot = P::new_plot(root, options, x_range, y_range)?;
        plot.add_element(prime)?;
        Ok(Self {
            plot,
            _marker: PhantomData,
        })
    }

    /// Add another plotting element to this plot.
    ///
    /// # Errors
    /// Returns an error if the element cannot be added.
    pub fn with_element(&mut self, element: &PlottingElement<T>) -> Result<&mut Self, P::Error> {
        self.plot.add_element(element)?;
        Ok(self)
    }

    /// Finalize the plot and write it to the output.
    ///
    /// # Errors
    /// Returns an error if the plot cannot be finalized.
    pub fn finish(self) -> Result<(), P::Error> {
        self.plot.finalize()
    }
}
