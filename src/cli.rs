//! Shared command line front-end for the chart binaries
//!
//! Every binary runs with no arguments, using the scenario constants compiled into it.
//! The optional flags only redirect output, silence status lines, or swap in a scenario file.
use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use crate::{
    error::Result,
    render::{render, RenderOptions},
    scenario::Scenario,
};

/// Command line arguments shared by all chart binaries
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Renders an asymptotic bound chart to a PNG file")]
pub struct Args {
    /// Directory the chart is written into
    #[arg(short, long, default_value = "plots")]
    pub output_dir: PathBuf,

    /// JSON scenario file replacing the built-in constants
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress status lines
    #[arg(short, long)]
    pub quiet: bool,
}
impl Args {
    /// The scenario to render: the config file if one was given, otherwise `default`
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    pub fn scenario(&self, default: Scenario) -> Result<Scenario> {
        match &self.config {
            Some(path) => Scenario::from_json_file(path),
            None => Ok(default),
        }
    }

    /// Render settings derived from the flags
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            output_dir: self.output_dir.clone(),
            silent: self.quiet,
            ..RenderOptions::default()
        }
    }

    /// Resolves the scenario and renders it
    ///
    /// # Errors
    /// Returns any configuration, derivation, I/O or drawing error.
    pub fn execute(&self, default: Scenario) -> Result<PathBuf> {
        let scenario = self.scenario(default)?;
        render(&scenario, &self.render_options())
    }
}

/// Entry point for the chart binaries
///
/// Parses the process arguments, renders, and maps failure to `Error: ...` on stderr.
#[must_use]
pub fn run(default: Scenario) -> ExitCode {
    let args = Args::parse();
    match args.execute(default) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bound::Witness, scenario::WitnessSource};

    fn lower() -> Scenario {
        Scenario {
            file_name: "big_omega_notation.png".into(),
            interval: (0.0, 20.0),
            samples: 100,
            y_range: (0.0, 160.0),
            tick_step: 2.0,
            witness: WitnessSource::Fixed {
                witness: Witness::Lower { c: 0.2, n0: 0.0 },
            },
            annotation_offset: (2.0, 20.0),
        }
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["big_omega"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("plots"));
        assert_eq!(args.config, None);
        assert!(!args.quiet);
        assert_eq!(args.render_options(), RenderOptions::default());
    }

    #[test]
    fn short_flags() {
        let args = Args::try_parse_from(["big_omega", "-o", "out", "-q", "-c", "s.json"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.config, Some(PathBuf::from("s.json")));
        assert!(args.render_options().silent);
    }

    #[test]
    fn config_file_replaces_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("scenario.json");
        let mut custom = lower();
        custom.file_name = "custom.png".into();
        std::fs::write(&config, serde_json::to_string(&custom).unwrap()).unwrap();

        let args = Args {
            output_dir: dir.path().join("plots"),
            config: Some(config),
            quiet: true,
        };
        assert_eq!(args.scenario(lower()).unwrap(), custom);

        let path = args.execute(lower()).unwrap();
        assert_eq!(path, dir.path().join("plots").join("custom.png"));
        assert!(path.exists());
    }

    #[test]
    fn missing_config_is_an_error() {
        let args = Args {
            output_dir: PathBuf::from("unused"),
            config: Some(PathBuf::from("/definitely/not/here.json")),
            quiet: true,
        };
        assert!(args.execute(lower()).is_err());
    }
}
