use crate::Scalar;

use super::{Axis, Projection};

/// The identity axis: each scalar is plotted at its own value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Std;

impl Axis for Std {
    type Calibrated = Std;

    fn calibrate(self, _max: &Scalar) -> Std {
        self
    }
}

impl Projection for Std {
    fn point(&self, scalar: &Scalar) -> f64 {
        scalar.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plots_scalars_at_their_value() {
        let projection = Std.calibrate(&Scalar::from(10_u64));
        assert_eq!(projection.point(&Scalar::from(3_u64)), 3.0);
        assert_eq!(projection.point(&Scalar::from_float(-2.5).unwrap()), -2.5);
    }

    #[test]
    fn values_beyond_f64_range_are_infinite() {
        let huge = Scalar::from(num_bigint::BigUint::from(1_u8) << 1100_u32);
        assert_eq!(Std.calibrate(&huge).point(&huge), f64::INFINITY);
    }
}
