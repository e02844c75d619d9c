//! Interactive plots of sampled functions.
//!
//! Each mode samples a function with random inputs and opens a plot window
//! showing the recorded input/output pairs projected onto two axes.
//!
//! # Usage
//!
//! ```text
//! cargo run --example fnplot --features plot -- sin
//! cargo run --example fnplot --features plot -- len
//! cargo run --example fnplot --features plot -- len 2000
//! ```
//!
//! # Modes
//!
//! - **sin [samples]** — Samples sin(x) on \[-2π, 2π\] with standard axes.
//!
//! - **len [samples]** — Samples the length of random alphanumeric strings.
//!   Strings encode to huge integers, so the x axis is logarithmic and both
//!   axes are scaled to a common height.

use std::{error::Error, f64::consts::TAU};

use fnplot_core::{
    Value, Values,
    axis::{LnScaled, Scaled, Std},
    values,
};
use fnplot_plot::{Figure, ShowConfig};
use fnplot_sampling::{Config, SampleSet, generator, sample};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "sin".into());
    let samples = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<usize>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid sample count, expected a whole number, e.g. 500");
            std::process::exit(1);
        })
        .unwrap_or(500);
    let config = Config::new(samples, 8)?;

    match mode.as_str() {
        "sin" => sin(&config),
        "len" => len(&config),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: fnplot [sin|len] [samples]");
            std::process::exit(1);
        }
    }
}

// --- Sin ---------------------------------------------------------------------

fn sin(config: &Config) -> Result<(), Box<dyn Error>> {
    let set = SampleSet::new();
    sample(
        &set,
        &[&generator::float64_range(-TAU, TAU)],
        config,
        |input: &Values| match input[0] {
            Value::F64(x) => values![x.sin()],
            _ => values![],
        },
    )?;

    let figure = Figure::from_samples("sin(x)", &set, Std, Std)?;
    figure.show(ShowConfig::new().legend("sin").markers())?;
    Ok(())
}

// --- Len ---------------------------------------------------------------------

fn len(config: &Config) -> Result<(), Box<dyn Error>> {
    let set = SampleSet::new();
    sample(
        &set,
        &[&generator::alpha_string()],
        config,
        |input: &Values| match &input[0] {
            Value::Str(s) => values![s.len()],
            _ => values![],
        },
    )?;

    let figure = Figure::from_samples("len(s)", &set, LnScaled::new(10.0)?, Scaled::new(10.0)?)?;
    figure.show(ShowConfig::new().legend("len").markers())?;
    Ok(())
}
