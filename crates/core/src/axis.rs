//! Transforms that map scalars onto a plot axis.
//!
//! An axis is used in two phases. First it is [calibrated](Axis::calibrate)
//! with the largest scalar observed for that axis, which consumes the axis
//! and yields a [`Projection`]. The projection then maps each scalar to a
//! plot coordinate. Because calibration consumes the axis, an uncalibrated
//! axis cannot project and a projection cannot be recalibrated.
//!
//! # Built-in axes
//!
//! | Axis | Calibration | Coordinate of `s` |
//! |---|---|---|
//! | [`Std`] | none | `s` |
//! | [`Scaled`] | `ratio = target / max` | `s × ratio` |
//! | [`Ln`] | none | `ln(s)`, or 0 when `s` is 0 |
//! | [`LnScaled`] | `ratio = target / ln(max)` | `ln(s) × ratio`, or 0 when `s` is 0 |
//!
//! # Example
//!
//! ```rust
//! use fnplot_core::{Scalar, axis::{Axis, Projection, Scaled}};
//!
//! let max = Scalar::from(400_u64);
//! let projection = Scaled::new(100.0).unwrap().calibrate(&max);
//!
//! assert_eq!(projection.point(&max), 100.0);
//! assert_eq!(projection.point(&Scalar::from(200_u64)), 50.0);
//! ```

mod ln;
mod scaled;
mod std_axis;

pub use ln::{Ln, LnScaled, LnScaledProjection};
pub use scaled::{Scaled, ScaledProjection};
pub use std_axis::Std;

use thiserror::Error;

use crate::Scalar;

/// An uncalibrated axis transform.
pub trait Axis {
    /// The calibrated form of this axis.
    type Calibrated: Projection;

    /// Fixes the axis scale from the largest scalar observed on this axis.
    fn calibrate(self, max: &Scalar) -> Self::Calibrated;
}

/// A calibrated axis transform that maps scalars to plot coordinates.
pub trait Projection {
    /// Returns the plot coordinate of `scalar`.
    fn point(&self, scalar: &Scalar) -> f64;
}

/// Errors that can occur when constructing an axis.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AxisError {
    #[error("axis target must be finite, got {target}")]
    NonFiniteTarget { target: f64 },
}

fn validate_target(target: f64) -> Result<f64, AxisError> {
    if target.is_finite() {
        Ok(target)
    } else {
        Err(AxisError::NonFiniteTarget { target })
    }
}
