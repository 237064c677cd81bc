//! Small demonstration of `calcbox`: builds two functions, prints them, adds them together and
//! looks for a root of the sum.

use anyhow::Context;
use calcbox_function::{search_root, Function, FunctionKind, FunctionSpec};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Evaluate, combine and search roots of simple functions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding the demo configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting point of the root search
    #[arg(long, allow_hyphen_values = true)]
    initial_guess: Option<f64>,

    /// Damping factor applied to every Newton step
    #[arg(long)]
    step_size: Option<f64>,

    /// Number of Newton steps to perform
    #[arg(long)]
    iterations: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct DemoConfig {
    lhs: FunctionSpec,
    rhs: FunctionSpec,
    initial_guess: f64,
    step_size: f64,
    iterations: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            lhs: FunctionSpec::new(FunctionKind::Power, [2.0]),
            rhs: FunctionSpec::new(FunctionKind::Polynomial, [7.0, 0.0, 3.0, 15.0]),
            initial_guess: 1.0,
            step_size: 0.01,
            iterations: 10000,
        }
    }
}

impl DemoConfig {
    fn load(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Cannot read configuration file {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("Invalid configuration in {}", path.display()))?
            }
            None => Self::default(),
        };
        if let Some(initial_guess) = args.initial_guess {
            config.initial_guess = initial_guess;
        }
        if let Some(step_size) = args.step_size {
            config.step_size = step_size;
        }
        if let Some(iterations) = args.iterations {
            config.iterations = iterations;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = DemoConfig::load(&args)?;
    log::debug!("Configuration: {config:?}");

    let f = config.lhs.build()?;
    let g = config.rhs.build()?;
    println!("{f} for x = 10 is {}", f.evaluate(10.0)?);
    println!("{g} for x = 10 is {}", g.evaluate(10.0)?);

    let p = &f + &g;
    println!("{p} for x = 1 is {}", p.evaluate(1.0)?);

    let root = search_root(&p, config.initial_guess, config.step_size, config.iterations)?;
    println!("Root found at x = {root}");

    Ok(())
}
