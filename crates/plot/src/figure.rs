use fnplot_core::axis::Axis;
use fnplot_sampling::{Error, SampleSet};

/// A titled set of plot points, sorted by x.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    points: Vec<[f64; 2]>,
}

impl Figure {
    /// Creates a figure from points, sorting them by x.
    pub fn new(title: impl Into<String>, mut points: Vec<[f64; 2]>) -> Self {
        points.sort_unstable_by(|a, b| a[0].total_cmp(&b[0]));
        Self {
            title: title.into(),
            points,
        }
    }

    /// Projects a sample set onto the given axes.
    ///
    /// # Errors
    ///
    /// Returns an error if a sample cannot be projected.
    pub fn from_samples<X: Axis, Y: Axis>(
        title: impl Into<String>,
        set: &SampleSet,
        x: X,
        y: Y,
    ) -> Result<Self, Error> {
        Ok(Self {
            title: title.into(),
            points: set.points_on(x, y)?,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Returns the points whose coordinates are both finite, in x order.
    ///
    /// Renderers skip the others.
    pub fn finite_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|p| p[0].is_finite() && p[1].is_finite())
    }
}
