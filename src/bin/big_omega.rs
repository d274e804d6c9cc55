//! Renders the Ω (lower bound) chart: `0.2n² + 3n + 15 ≥ 0.2n²` for every `n ≥ 0`
use std::process::ExitCode;

use asymplot::{
    bound::Witness,
    scenario::{Scenario, WitnessSource},
};

const N_MIN: f64 = 0.0;
const N_MAX: f64 = 20.0;
const Y_MIN: f64 = 0.0;
const Y_MAX: f64 = 160.0;
const SAMPLES: usize = 500;
const TICK_STEP: f64 = 2.0;

const C: f64 = 0.2;
const N0: f64 = 0.0;

const ANNOTATION_OFFSET: (f64, f64) = (2.0, 20.0);
const FILE_NAME: &str = "big_omega_notation.png";

fn main() -> ExitCode {
    asymplot::cli::run(Scenario {
        file_name: FILE_NAME.to_string(),
        interval: (N_MIN, N_MAX),
        samples: SAMPLES,
        y_range: (Y_MIN, Y_MAX),
        tick_step: TICK_STEP,
        witness: WitnessSource::Fixed {
            witness: Witness::Lower { c: C, n0: N0 },
        },
        annotation_offset: ANNOTATION_OFFSET,
    })
}
