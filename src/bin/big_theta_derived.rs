//! Renders the Θ (tight bound) chart with constants derived from the samples:
//! `c₁` and `c₂` are the smallest and largest `f(n)/n²` over every sampled `n ≥ 10`
use std::process::ExitCode;

use asymplot::scenario::{Scenario, WitnessSource};

const N_MIN: f64 = 1.0;
const N_MAX: f64 = 20.0;
const Y_MIN: f64 = 0.0;
const Y_MAX: f64 = 300.0;
const SAMPLES: usize = 500;
const TICK_STEP: f64 = 1.0;

const N0: f64 = 10.0;

const ANNOTATION_OFFSET: (f64, f64) = (-4.0, 20.0);
const FILE_NAME: &str = "big_theta_derived_notation.png";

fn main() -> ExitCode {
    asymplot::cli::run(Scenario {
        file_name: FILE_NAME.to_string(),
        interval: (N_MIN, N_MAX),
        samples: SAMPLES,
        y_range: (Y_MIN, Y_MAX),
        tick_step: TICK_STEP,
        witness: WitnessSource::Derived { n0: N0 },
        annotation_offset: ANNOTATION_OFFSET,
    })
}
