use crate::Scalar;

use super::{Axis, AxisError, Projection, validate_target};

/// A natural-log axis.
///
/// Zero is plotted at 0 rather than negative infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ln;

impl Axis for Ln {
    type Calibrated = Ln;

    fn calibrate(self, _max: &Scalar) -> Ln {
        self
    }
}

impl Projection for Ln {
    fn point(&self, scalar: &Scalar) -> f64 {
        if scalar.is_zero() {
            return 0.0;
        }
        scalar.ln()
    }
}

/// A natural-log axis scaled so the observed maximum lands on `target`.
///
/// Zero is plotted at 0 rather than negative infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LnScaled {
    target: f64,
}

impl LnScaled {
    /// Creates an axis that maps the log of the observed maximum to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not finite.
    pub fn new(target: f64) -> Result<Self, AxisError> {
        validate_target(target).map(|target| Self { target })
    }
}

impl Axis for LnScaled {
    type Calibrated = LnScaledProjection;

    fn calibrate(self, max: &Scalar) -> LnScaledProjection {
        let ratio = self.target / max.ln();
        log::debug!("ln scaling ratio: {ratio}");
        LnScaledProjection { ratio }
    }
}

/// A calibrated [`LnScaled`] axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LnScaledProjection {
    ratio: f64,
}

impl LnScaledProjection {
    /// Returns the ratio applied to each logarithm.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Projection for LnScaledProjection {
    fn point(&self, scalar: &Scalar) -> f64 {
        if scalar.is_zero() {
            return 0.0;
        }
        scalar.ln() * self.ratio
    }
}
