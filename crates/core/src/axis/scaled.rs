use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::Scalar;

use super::{Axis, AxisError, Projection, validate_target};

/// A linear axis scaled so the observed maximum lands on `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled {
    target: f64,
}

impl Scaled {
    /// Creates an axis that maps the observed maximum to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not finite.
    pub fn new(target: f64) -> Result<Self, AxisError> {
        validate_target(target).map(|target| Self { target })
    }
}

impl Axis for Scaled {
    type Calibrated = ScaledProjection;

    fn calibrate(self, max: &Scalar) -> ScaledProjection {
        let ratio = match (max.as_rational(), BigRational::from_float(self.target)) {
            (Some(max), Some(target)) if !max.is_zero() => Ratio::Exact(target / max),
            // Zero or infinite maximum: follow IEEE semantics.
            _ => Ratio::Approximate(self.target / max.to_f64()),
        };
        let projection = ScaledProjection { ratio };
        log::debug!("scaling ratio: {}", projection.ratio());
        projection
    }
}

/// A calibrated [`Scaled`] axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledProjection {
    ratio: Ratio,
}

#[derive(Debug, Clone, PartialEq)]
enum Ratio {
    Exact(BigRational),
    Approximate(f64),
}

impl ScaledProjection {
    /// Returns the scale ratio, narrowed to `f64`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        match &self.ratio {
            Ratio::Exact(ratio) => ratio.to_f64().unwrap_or(f64::NAN),
            Ratio::Approximate(ratio) => *ratio,
        }
    }
}

impl Projection for ScaledProjection {
    fn point(&self, scalar: &Scalar) -> f64 {
        match (&self.ratio, scalar.as_rational()) {
            (Ratio::Exact(ratio), Some(value)) => (value * ratio).to_f64().unwrap_or(f64::NAN),
            _ => scalar.to_f64() * self.ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_bigint::BigUint;

    use super::*;

    fn scaled(target: f64, max: &Scalar) -> ScaledProjection {
        Scaled::new(target).unwrap().calibrate(max)
    }

    #[test]
    fn maximum_maps_to_target() {
        for (target, max) in [
            (100.0, Scalar::from(1_952_805_748_u64)),
            (1.0, Scalar::from_float(0.3).unwrap()),
            (20.0, Scalar::from(BigUint::from(7_u8) << 3000_u32)),
        ] {
            assert_eq!(scaled(target, &max).point(&max), target);
        }
    }

    #[test]
    fn scales_proportionally() {
        let projection = scaled(10.0, &Scalar::from(1000_u64));
        assert_relative_eq!(projection.ratio(), 0.01);
        assert_relative_eq!(projection.point(&Scalar::from(250_u64)), 2.5);
        assert_eq!(projection.point(&Scalar::zero()), 0.0);
    }

    #[test]
    fn huge_scalars_scale_without_overflow() {
        let max = Scalar::from(BigUint::from(1_u8) << 2000_u32);
        let half = Scalar::from(BigUint::from(1_u8) << 1999_u32);
        assert_relative_eq!(scaled(8.0, &max).point(&half), 4.0);
    }

    #[test]
    fn zero_maximum_gives_infinite_ratio() {
        let projection = scaled(5.0, &Scalar::zero());
        assert_eq!(projection.ratio(), f64::INFINITY);
        assert!(projection.point(&Scalar::zero()).is_nan());
    }

    #[test]
    fn infinite_scalars_stay_infinite() {
        let projection = scaled(5.0, &Scalar::from(10_u64));
        let inf = Scalar::from_float(f64::INFINITY).unwrap();
        assert_eq!(projection.point(&inf), f64::INFINITY);
    }

    #[test]
    fn rejects_non_finite_target() {
        assert_eq!(
            Scaled::new(f64::NAN).map(|_| ()).unwrap_err().to_string(),
            "axis target must be finite, got NaN"
        );
        assert!(Scaled::new(f64::INFINITY).is_err());
    }
}
