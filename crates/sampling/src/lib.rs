//! Sample collection for fnplot.
//!
//! This crate gathers the input/output pairs of a function under test and
//! turns them into plot coordinates:
//!
//! - [`SampleSet`] — a thread-safe collection of samples that tracks the
//!   extreme input and output scalars as samples arrive
//! - [`sample`] — a driver that calls a function across worker threads with
//!   generated inputs and records every call
//! - [`generator`] — random input generators for the driver
//!
//! # Example
//!
//! ```rust
//! use fnplot_core::{Value, Values, axis::Std, values};
//! use fnplot_sampling::{Config, SampleSet, generator, sample};
//!
//! let set = SampleSet::new();
//! let config = Config::new(50, 4).unwrap().with_seed(7);
//!
//! sample(&set, &[&generator::float64_range(0.0, 10.0)], &config, |input: &Values| {
//!     let Value::F64(x) = input[0] else { unreachable!() };
//!     values![x * x]
//! })
//! .unwrap();
//!
//! let points = set.points_on(Std, Std).unwrap();
//! assert_eq!(points.len(), 50);
//! assert!(points.windows(2).all(|w| w[0][0] <= w[1][0]));
//! ```

pub mod generator;
pub mod sample_set;
pub mod sampler;

pub use generator::Generator;
pub use sample_set::{Bounds, Error, Sample, SampleSet};
pub use sampler::{Config, ConfigError, sample};
