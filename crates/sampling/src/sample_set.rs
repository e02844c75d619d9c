//! A thread-safe set of function samples.
//!
//! See [`SampleSet`] for the insertion and projection protocol.

mod error;


pub use error::Error;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use fnplot_core::{
    Scalar, Values,
    axis::{Axis, Projection},
};

/// One observed call: the function's input and output values.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    input: Values,
    output: Values,
}

impl Sample {
    #[must_use]
    pub fn input(&self) -> &Values {
        &self.input
    }

    #[must_use]
    pub fn output(&self) -> &Values {
        &self.output
    }
}

/// The extreme input and output scalars across all inserted samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub min_input: Scalar,
    pub max_input: Scalar,
    pub min_output: Scalar,
    pub max_output: Scalar,
}

impl Bounds {
    fn new(input: Scalar, output: Scalar) -> Self {
        Self {
            min_input: input.clone(),
            max_input: input,
            min_output: output.clone(),
            max_output: output,
        }
    }

    /// Widens the bounds to include a sample. Ties keep the existing extremum.
    fn widen(&mut self, input: Scalar, output: Scalar) {
        widen(&mut self.min_input, &mut self.max_input, input);
        widen(&mut self.min_output, &mut self.max_output, output);
    }
}

fn widen(min: &mut Scalar, max: &mut Scalar, value: Scalar) {
    if value < *min {
        *min = value;
    } else if value > *max {
        *max = value;
    }
}

#[derive(Debug, Default)]
struct State {
    samples: Vec<Sample>,
    bounds: Option<Bounds>,
}

/// A thread-safe, append-only set of samples that tracks their bounds.
///
/// Any number of threads may [`insert`](SampleSet::insert) concurrently.
/// Each insertion appends its sample and widens the bounds as one unit, so
/// the final bounds do not depend on how insertions interleave. Once
/// sampling is complete, [`points_on`](SampleSet::points_on) calibrates a
/// pair of axes from the final bounds and projects every sample.
#[derive(Debug, Default)]
pub struct SampleSet {
    state: RwLock<State>,
}

impl SampleSet {
    /// Creates an empty sample set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one call of the function under test.
    ///
    /// Both sides are converted to scalars before the set is touched, so a
    /// failed insertion leaves the set unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] or [`Error::Output`] if either side cannot be
    /// converted to a scalar.
    pub fn insert(&self, input: Values, output: Values) -> Result<(), Error> {
        let input_scalar = input.scalar().map_err(Error::Input)?;
        let output_scalar = output.scalar().map_err(Error::Output)?;

        let mut state = self.write();
        let bounds = match state.bounds.take() {
            Some(mut bounds) => {
                bounds.widen(input_scalar, output_scalar);
                bounds
            }
            None => Bounds::new(input_scalar, output_scalar),
        };
        state.bounds = Some(bounds);
        state.samples.push(Sample { input, output });
        Ok(())
    }

    /// Projects every sample onto the given axes, sorted by x.
    ///
    /// The x axis is calibrated with the largest input scalar and the y axis
    /// with the largest output scalar. An empty set yields no points.
    ///
    /// Non-finite coordinates are not errors. They usually mean an axis is
    /// unsuited to the sampled range, and are reported as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sample`] naming the first sample that fails to
    /// convert to scalars.
    pub fn points_on<X: Axis, Y: Axis>(&self, x: X, y: Y) -> Result<Vec<[f64; 2]>, Error> {
        let state = self.read();
        let Some(bounds) = &state.bounds else {
            return Ok(Vec::new());
        };

        let x_axis = x.calibrate(&bounds.max_input);
        let y_axis = y.calibrate(&bounds.max_output);

        let mut points = Vec::with_capacity(state.samples.len());
        for (index, sample) in state.samples.iter().enumerate() {
            let point = project(sample, index, &x_axis, &y_axis).map_err(|source| {
                Error::Sample {
                    index,
                    source: Box::new(source),
                }
            })?;
            points.push(point);
        }

        points.sort_unstable_by(|a, b| a[0].total_cmp(&b[0]));
        Ok(points)
    }

    /// Returns the current bounds, or `None` if nothing has been inserted.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.read().bounds.clone()
    }

    /// Returns a copy of the samples in insertion order.
    #[must_use]
    pub fn samples(&self) -> Vec<Sample> {
        self.read().samples.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().samples.is_empty()
    }

    // State is only mutated after all fallible work, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn project<X: Projection, Y: Projection>(
    sample: &Sample,
    index: usize,
    x_axis: &X,
    y_axis: &Y,
) -> Result<[f64; 2], Error> {
    let input = sample.input.scalar().map_err(Error::Input)?;
    let output = sample.output.scalar().map_err(Error::Output)?;
    let point = [x_axis.point(&input), y_axis.point(&output)];

    if !point[0].is_finite() || !point[1].is_finite() {
        log::warn!(
            "non-finite coordinate at sample {index}: input {input}, output {output}, x {}, y {}",
            point[0],
            point[1],
        );
    }
    Ok(point)
}
