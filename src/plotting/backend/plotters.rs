//! Plotting backend using the `plotters` crate
//!
//! Everything is coerced to `f64` for plotting purposes.
//!
//! Uses the bitmap backend to create PNG files.
//!
//! sans-serif font is included for use in plots.
//! - Copyright 2003 by Bitstream, Inc. (DejaVu changes are in the public domain)
use std::{ops::Range, path::Path};

use plotters::{
    coord::{types::RangedCoordf64, Shift},
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    display,
    plotting::{palette::ColorSource, PlotBackend, PlotOptions},
    value::{CoordExt, Value},
};

const FONT_BYTES: &[u8] = include_bytes!("DejaVuSans.ttf");
const MAX_LBL_WIDTH: usize = 120;

/// Title size, in points
const TITLE_FONT: f64 = 16.0;

/// Axis description size, in points
const AXIS_FONT: f64 = 14.0;

/// Legend, tick and annotation size, in points
const LABEL_FONT: f64 = 10.0;

/// Radius of annotated points, in points
const MARKER_RADIUS: f64 = 4.5;

/// Dot length and gap of vertical lines, in points
const DOT_SIZING: (f64, f64) = (1.5, 3.0);

const GRID_ALPHA: f64 = 0.3;

/// Length of the sample line in front of each legend entry, in points
const LEGEND_SAMPLE: f64 = 12.0;

/// Space reserved for the legend sample before its label, in points
const LEGEND_AREA: f64 = 18.0;

/// Length of the arrowhead on annotation connectors, in points
const ARROW_SIZE: f64 = 6.0;

/// Matplotlib's "green"
const ACCENT: RGBColor = RGBColor(0, 128, 0);

/// Matplotlib's "limegreen"
const FILL: RGBColor = RGBColor(50, 205, 50);

/// Register the built-in font with plotters
///
/// # Errors
/// Returns an error if the built-in font could not be parsed
pub fn register_font() -> Result<(), Error> {
    plotters::style::register_font("sans-serif", FontStyle::Normal, FONT_BYTES)
        .map_err(|_| Error::Font)
}

/// A drawing area root for plotters
pub struct Root<'p>(DrawingArea<BitMapBackend<'p>, Shift>);
impl<'p> AsRef<DrawingArea<BitMapBackend<'p>, Shift>> for Root<'p> {
    fn as_ref(&self) -> &DrawingArea<BitMapBackend<'p>, Shift> {
        &self.0
    }
}
impl<'p> Root<'p> {
    /// Create a new drawing area root for plotters
    ///
    /// Will create a PNG file at the given path with the given size once the plot is finished.
    /// An existing file at that path is overwritten.
    ///
    /// # Errors
    /// Returns an error if the font cannot be registered or the area cannot be cleared
    pub fn new(path: &'p Path, size: (u32, u32)) -> Result<Self, Error> {
        register_font()?;

        let backend = BitMapBackend::new(path, size);
        let root = IntoDrawingArea::into_drawing_area(backend);
        root.fill(&WHITE)?;
        Ok(Self(root))
    }
}

/// Plotters backend for plotting
///
/// `'a` borrows the [`Root`], `'p` is the output path borrowed by the bitmap backend.
pub struct Backend<'a, 'p> {
    context: ChartContext<'a, BitMapBackend<'p>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    y_range: Range<f64>,
    palette: ColorSource<RGBAColor>,
    scale: f64,

    x_label: Option<String>,
    y_label: Option<String>,

    hide_legend: bool,
    x_axis_labels: Option<usize>,
}
impl<'a, 'p: 'a> PlotBackend<'a> for Backend<'a, 'p> {
    type Error = Error;
    type Color = RGBAColor;
    type Root = Root<'p>;

    fn next_color(&mut self) -> Self::Color {
        self.palette
            .next_color()
            .unwrap_or_else(|| BLACK.to_rgba())
    }

    fn accent_color(&self) -> Self::Color {
        ACCENT.to_rgba()
    }

    fn fill_color(&self) -> Self::Color {
        FILL.to_rgba()
    }

    fn color_with_alpha(color: &Self::Color, alpha: f64) -> Self::Color {
        let mut color = *color;
        color.3 = alpha;
        color
    }

    fn new_plot<T: Value>(
        root: &'a Self::Root,
        options: &PlotOptions<T>,
        x_range: Range<T>,
        y_range: Range<T>,
    ) -> Result<Self, Self::Error> {
        //
        // T(Range) -> f64(Range)
        let x_range: Range<f64> = cast(x_range.start)?..cast(x_range.end)?;
        let y_range: Range<f64> = cast(y_range.start)?..cast(y_range.end)?;
        let scale = options.font_scale;

        let mut context = ChartBuilder::on(root.as_ref());
        context
            .margin(pixels(12.0, scale))
            .x_label_area_size(pixels(36.0, scale))
            .y_label_area_size(pixels(48.0, scale));

        if !options.title.is_empty() {
            context.caption(
                &options.title,
                (FontFamily::SansSerif, TITLE_FONT * scale).into_font(),
            );
        }

        let context = context.build_cartesian_2d(x_range, y_range.clone())?;

        let palette = ColorSource::new(vec![
            BLUE.to_rgba(),
            RED.to_rgba(),
            ACCENT.to_rgba(),
            MAGENTA.to_rgba(),
            CYAN.to_rgba(),
            BLACK.to_rgba(),
        ]);

        Ok(Self {
            context,
            y_range,
            palette,
            scale,

            x_label: options.x_label.clone(),
            y_label: options.y_label.clone(),

            hide_legend: options.hide_legend,
            x_axis_labels: options.x_axis_labels,
        })
    }

    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: &str,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let data = data.y_clipped(&self.y_range).map_err(|_| Error::Cast)?;

        let style = ShapeStyle::from(color).stroke_width(self.stroke(width));
        let sample = self.legend_sample();
        self.context
            .draw_series(LineSeries::new(data, style))?
            .label(shorten(label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], style));
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
        let data = data.y_clipped(&self.y_range).map_err(|_| Error::Cast)?;

        let style = ShapeStyle::from(color).stroke_width(self.stroke(width));
        let (dash, gap) = (self.stroke(sizing.0), self.stroke(sizing.1));
        let sample = self.legend_sample();
        self.context
            .draw_series(DashedLineSeries::new(data, dash, gap, style))?
            .label(shorten(label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], style));
        Ok(())
    }

    fn add_vertical_line<T: Value>(
        &mut self,
        x: T,
        label: &str,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let x = cast(x)?;
        let line = vec![(x, self.y_range.start), (x, self.y_range.end)];

        let style = ShapeStyle::from(color).stroke_width(self.stroke(1));
        let dot = pixels(DOT_SIZING.0, self.scale);
        let gap = pixels(DOT_SIZING.1, self.scale);
        let sample = self.legend_sample();
        self.context
            .draw_series(DashedLineSeries::new(line, dot, gap, style))?
            .label(shorten(label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], style));
        Ok(())
    }

    fn add_marker<T: Value>(
        &mut self,
        point: (T, T),
        label: Option<&str>,
        offset: (T, T),
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let x = cast(point.0)?;
        let y = cast(point.1)?.clamp(self.y_range.start, self.y_range.end);

        let radius = pixels(MARKER_RADIUS, self.scale);
        let shape = Circle::new((x, y), radius, ShapeStyle::from(color).filled());
        self.context.draw_series(std::iter::once(shape))?;

        if let Some(label) = label {
            let text_x = x + cast(offset.0)?;
            let text_y = (y + cast(offset.1)?).clamp(self.y_range.start, self.y_range.end);

            //
            // Connector from the text anchor back to the point, with an open arrowhead
            let connector = ShapeStyle::from(&BLACK).stroke_width(self.stroke(1));
            self.context.draw_series(std::iter::once(PathElement::new(
                vec![(text_x, text_y), (x, y)],
                connector,
            )))?;

            let from = self.context.backend_coord(&(text_x, text_y));
            let to = self.context.backend_coord(&(x, y));
            let size = f64::from(pixels(ARROW_SIZE, self.scale));
            if let Some(head) = arrow_head(from, to, f64::from(radius), size) {
                self.context.draw_series(std::iter::once(
                    EmptyElement::at((x, y)) + PathElement::new(head, connector),
                ))?;
            }

            let text_style = (FontFamily::SansSerif, LABEL_FONT * self.scale)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Bottom));
            self.context.draw_series(std::iter::once(Text::new(
                shorten(label),
                (text_x, text_y),
                text_style,
            )))?;
        }

        Ok(())
    }

    fn add_polygons<T: Value>(
        &mut self,
        polygons: &[Vec<(T, T)>],
        label: &str,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let style = ShapeStyle::from(color).filled();
        let shapes = polygons
            .iter()
            .map(|outline| {
                let outline = outline.y_clipped(&self.y_range)?;
                Ok(Polygon::new(outline, style))
            })
            .collect::<crate::error::Result<Vec<_>>>()
            .map_err(|_| Error::Cast)?;

        let sample = self.legend_sample();
        let half = sample / 4;
        self.context
            .draw_series(shapes)?
            .label(shorten(label))
            .legend(move |(x, y)| Rectangle::new([(x, y - half), (x + sample, y + half)], style));
        Ok(())
    }

    fn finalize(mut self) -> Result<(), Self::Error> {
        let scale = self.scale;
        let tick_formatter = |v: &f64| display::format_number(*v, 1);

        //
        // Mesh and axes
        let mut context = self.context.configure_mesh();

        context
            .label_style((FontFamily::SansSerif, LABEL_FONT * scale).into_font())
            .axis_desc_style((FontFamily::SansSerif, AXIS_FONT * scale).into_font())
            .bold_line_style(BLACK.mix(GRID_ALPHA))
            .light_line_style(TRANSPARENT)
            .x_label_formatter(&tick_formatter)
            .y_label_formatter(&tick_formatter);

        if let Some(x_label) = &self.x_label {
            context.x_desc(x_label);
        }

        if let Some(y_label) = &self.y_label {
            context.y_desc(y_label);
        }

        if let Some(x_labels) = self.x_axis_labels {
            context.x_labels(x_labels);
        }

        context.draw()?;

        if !self.hide_legend {
            //
            // Legend
            self.context
                .configure_series_labels()
                .label_font((FontFamily::SansSerif, LABEL_FONT * scale).into_font())
                .legend_area_size(pixels(LEGEND_AREA, scale))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(GRID_ALPHA))
                .position(SeriesLabelPosition::UpperLeft)
                .draw()?;
        }

        self.context.plotting_area().present()?;
        Ok(())
    }
}
impl Backend<'_, '_> {
    /// Stroke width in pixels for a size in points, never below one pixel
    fn stroke(&self, points: u32) -> u32 {
        pixels(f64::from(points), self.scale)
    }

    /// Length of the line drawn next to each legend entry, in pixels
    fn legend_sample(&self) -> i32 {
        i32::try_from(pixels(LEGEND_SAMPLE, self.scale)).unwrap_or(i32::MAX)
    }
}

/// Pixel offsets, relative to `to`, of an open `->` head on a line running from `from` to `to`
///
/// The tip stops `gap` pixels short of `to` so it meets the edge of the marker.
/// Returns `None` when the line is too short to carry a head.
fn arrow_head(from: (i32, i32), to: (i32, i32), gap: f64, size: f64) -> Option<Vec<(i32, i32)>> {
    let dx = f64::from(from.0 - to.0);
    let dy = f64::from(from.1 - to.1);
    let length = dx.hypot(dy);
    if length <= gap + size {
        return None;
    }

    let (ux, uy) = (dx / length, dy / length);
    let back = gap + size;
    let half = size * 0.5;
    let px = |v: f64| num_traits::cast::<f64, i32>(v.round()).unwrap_or(0);

    Some(vec![
        (px(back * ux - half * uy), px(back * uy + half * ux)),
        (px(gap * ux), px(gap * uy)),
        (px(back * ux + half * uy), px(back * uy - half * ux)),
    ])
}

/// Converts a size in points to whole pixels, never below one pixel
fn pixels(points: f64, scale: f64) -> u32 {
    num_traits::cast::<f64, u32>((points * scale).round())
        .unwrap_or(1)
        .max(1)
}

/// Shorten label and add [...] if too long
fn shorten(label: &str) -> String {
    if label.chars().count() > MAX_LBL_WIDTH {
        let mut s: String = label.chars().take(MAX_LBL_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        label.to_string()
    }
}

fn cast<T: Value>(value: T) -> Result<f64, Error> {
    num_traits::cast(value).ok_or(Error::Cast)
}

/// Error occurring during plotting
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error drawing the plot
    #[error("Error drawing plot: {0}")]
    Draw(#[from] DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>),

    /// Error casting a value
    #[error("A value could not be represented as f64")]
    Cast,

    /// The built-in font could not be loaded
    #[error("The built-in font could not be loaded")]
    Font,
}
