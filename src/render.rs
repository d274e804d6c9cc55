//! End-to-end chart rendering
//!
//! [`render`] runs the whole pipeline for one [`Scenario`]:
//! evaluate → warn on a failed witness → build elements → draw → persist.
//!
//! Status lines go to stdout (`Wrote plot to ...`) and warnings to stderr, unless
//! [`RenderOptions::silent`] is set.
use std::path::{Path, PathBuf};

use crate::{
    bound::{BoundKind, Verdict, Witness},
    display::{format_number, format_variable, DEFAULT_PRECISION},
    error::{Error, Result},
    plotting::{self, Plot, PlotOptions, PlottingElement},
    scenario::{Evaluation, Scenario, COMPARISON, COST},
};

/// X-axis label
pub const X_LABEL: &str = "n";

/// Y-axis label
pub const Y_LABEL: &str = "Function value";

/// Physical size of the output image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Width in inches
    pub width_in: f64,

    /// Height in inches
    pub height_in: f64,

    /// Pixels per inch
    pub dpi: f64,
}
impl Default for Canvas {
    fn default() -> Self {
        Self {
            width_in: 14.0,
            height_in: 8.0,
            dpi: 200.0,
        }
    }
}
impl Canvas {
    /// Image size in pixels, never below one pixel per side
    #[must_use]
    pub fn pixels(&self) -> (u32, u32) {
        let px = |inches: f64| {
            num_traits::cast::<f64, u32>((inches * self.dpi).round())
                .unwrap_or(1)
                .max(1)
        };
        (px(self.width_in), px(self.height_in))
    }

    /// Pixels per typographic point
    #[must_use]
    pub fn font_scale(&self) -> f64 {
        self.dpi / 72.0
    }
}

/// Run-time settings that are not part of a scenario
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Directory the chart is written into; created if missing
    pub output_dir: PathBuf,

    /// Suppress status lines and warnings
    pub silent: bool,

    /// Output image size
    pub canvas: Canvas,
}
impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            silent: false,
            canvas: Canvas::default(),
        }
    }
}

/// Evaluates a scenario and writes its chart to `<output_dir>/<file_name>`
///
/// A witness that fails on the sampled data is reported as a warning, and the chart is
/// still drawn. Any existing file at the target path is overwritten.
///
/// # Errors
/// - Configuration and derivation errors from [`Scenario::evaluate`], before anything is written
/// - [`Error::Io`] if the output directory or the image file cannot be created
/// - [`Error::Plot`] if the chart cannot be drawn or encoded; no file is left behind
pub fn render(scenario: &Scenario, options: &RenderOptions) -> Result<PathBuf> {
    let evaluation = scenario.evaluate()?;

    if let Verdict::Violated { n, f, bound } = evaluation.verdict {
        if !options.silent {
            eprintln!(
                "Warning: {} {} does not hold at n = {}: f(n) = {} against {}",
                evaluation.witness.kind(),
                describe(&evaluation.witness),
                format_number(n, DEFAULT_PRECISION),
                format_number(f, DEFAULT_PRECISION),
                format_number(bound, DEFAULT_PRECISION),
            );
        }
    }

    std::fs::create_dir_all(&options.output_dir)?;
    let path = options.output_dir.join(&scenario.file_name);

    // An unwritable target fails here, as Error::Io
    std::fs::File::create(&path)?;
    if let Err(e) = draw(scenario, &evaluation, &path, &options.canvas) {
        // never leave a partial image
        let _ = std::fs::remove_file(&path);
        return Err(Error::Plot(e));
    }

    if !options.silent {
        println!("Wrote plot to {}", path.display());
    }
    Ok(path)
}

fn draw(
    scenario: &Scenario,
    evaluation: &Evaluation,
    path: &Path,
    canvas: &Canvas,
) -> std::result::Result<(), plotting::plotters::Error> {
    let (n_min, n_max) = scenario.interval;
    let (y_min, y_max) = scenario.y_range;

    let options = PlotOptions {
        title: title(&evaluation.witness),
        x_label: Some(X_LABEL.to_string()),
        y_label: Some(Y_LABEL.to_string()),
        size: canvas.pixels(),
        font_scale: canvas.font_scale(),
        x_range: Some(n_min..n_max),
        y_range: Some(y_min..y_max),
        hide_legend: false,
        x_axis_labels: tick_count(n_min, n_max, scenario.tick_step),
    };

    let elements = elements(scenario, evaluation);
    let Some((prime, rest)) = elements.split_first() else {
        return Ok(());
    };

    let root = plotting::plotters::Root::new(path, options.size)?;
    let mut plot = Plot::<plotting::plotters::Backend, f64>::new(&root, &options, prime)?;
    for element in rest {
        plot.with_element(element)?;
    }
    plot.finish()
}

/// Everything drawn on a chart, in drawing order
///
/// 1. `f(n)` as a solid curve
/// 2. One dashed curve per scale of `g(n)` in the witness
/// 3. The threshold line
/// 4. The annotated point `(n₀, f(n₀))`
/// 5. The shaded region where the inequality holds
#[must_use]
pub fn elements(scenario: &Scenario, evaluation: &Evaluation) -> Vec<PlottingElement> {
    let witness = &evaluation.witness;
    let n0 = witness.threshold();
    let xs: Vec<f64> = evaluation.samples.iter().map(|s| s.n).collect();

    let mut elements = vec![PlottingElement::from_polynomial(&COST, &xs, "f(n)")];

    let scales: Vec<(String, f64)> = match *witness {
        Witness::Upper { c, .. } | Witness::Lower { c, .. } => vec![("c".to_string(), c)],
        Witness::Tight { c1, c2, .. } => vec![
            (format_variable("c", Some("1"), 1), c1),
            (format_variable("c", Some("2"), 1), c2),
        ],
    };
    for (name, c) in &scales {
        let label = format!("{name}·g(n) = {}", COMPARISON.scaled(*c).equation());
        elements.push(PlottingElement::Comparison(evaluation.scaled_curve(*c), label));
    }

    elements.push(PlottingElement::Threshold(
        n0,
        format!("Threshold {}", threshold_label(n0)),
    ));

    let f0 = evaluation.cost_at_threshold();
    let text = match *witness {
        Witness::Upper { c, .. } => format!(
            "f({n}) = {f0:.1} < c·g({n}) = {:.1}",
            c * COMPARISON.y(n0),
            n = format_number(n0, DEFAULT_PRECISION)
        ),
        Witness::Lower { .. } | Witness::Tight { .. } => {
            format!("f({}) = {f0:.1}", format_number(n0, DEFAULT_PRECISION))
        }
    };
    elements.push(PlottingElement::Annotation {
        point: (n0, f0),
        offset: scenario.annotation_offset,
        text,
    });

    let (lower, upper) = match *witness {
        Witness::Upper { c, .. } | Witness::Lower { c, .. } => {
            (evaluation.cost_curve(), evaluation.scaled_curve(c))
        }
        Witness::Tight { c1, c2, .. } => (evaluation.scaled_curve(c1), evaluation.scaled_curve(c2)),
    };
    let relation = match witness.kind() {
        BoundKind::Upper => "f(n) ≤ c·g(n)".to_string(),
        BoundKind::Lower => "f(n) ≥ c·g(n)".to_string(),
        BoundKind::Tight => {
            let (c1, c2) = (&scales[0].0, &scales[1].0);
            format!("{c1}·g(n) ≤ f(n) ≤ {c2}·g(n)")
        }
    };
    elements.push(PlottingElement::Region {
        lower,
        upper,
        mask: evaluation.mask.clone(),
        label: format!("{relation} for n ≥ {}", threshold_label(n0)),
    });

    elements
}

/// Chart title, e.g. `O(n²): c = 0.3, n₀ = 35: ∀ n ≥ n₀ → f(n) ≤ c·n²`
#[must_use]
pub fn title(witness: &Witness) -> String {
    let kind = witness.kind();
    format!(
        "{}({}): {}: ∀ n ≥ {} → {}",
        kind.symbol(),
        COMPARISON.equation(),
        describe(witness),
        format_variable("n", Some("0"), 1),
        kind.relation()
    )
}

/// Number of x-axis labels for ticks every `step` from `min` up to `max`
#[must_use]
pub fn tick_count(min: f64, max: f64, step: f64) -> Option<usize> {
    let steps = ((max - min) / step).floor();
    num_traits::cast::<f64, usize>(steps).map(|steps| steps + 1)
}

/// The witness constants, e.g. `c₁ = 0.2, c₂ = 0.3, n₀ = 35`
fn describe(witness: &Witness) -> String {
    let constant = |name: &str, sub: Option<&str>, value: f64| {
        format!(
            "{} = {}",
            format_variable(name, sub, 1),
            format_number(value, DEFAULT_PRECISION)
        )
    };

    let n0 = constant("n", Some("0"), witness.threshold());
    match *witness {
        Witness::Upper { c, .. } | Witness::Lower { c, .. } => {
            format!("{}, {n0}", constant("c", None, c))
        }
        Witness::Tight { c1, c2, .. } => format!(
            "{}, {}, {n0}",
            constant("c", Some("1"), c1),
            constant("c", Some("2"), c2)
        ),
    }
}

/// `n₀ = 35`
fn threshold_label(n0: f64) -> String {
    format!(
        "{} = {}",
        format_variable("n", Some("0"), 1),
        format_number(n0, DEFAULT_PRECISION)
    )
}
