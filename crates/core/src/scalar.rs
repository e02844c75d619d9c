use std::{f64::consts::LN_2, fmt};

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{Error, Position, Value, Values, encode};

/// An arbitrary-precision number derived from a [`Values`].
///
/// Finite scalars are exact rationals, so every `f32`, `f64`, and arbitrarily
/// long big-endian integer is represented without rounding. Infinities are
/// kept because floating-point inputs may be infinite; NaN has no scalar.
///
/// Scalars are totally ordered, with the infinities at either end.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scalar(Repr);

// Variant order defines the ordering of scalars.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr {
    NegInfinity,
    Finite(BigRational),
    Infinity,
}

impl Scalar {
    /// Returns the zero scalar.
    #[must_use]
    pub fn zero() -> Self {
        Self(Repr::Finite(BigRational::zero()))
    }

    /// Returns the exact scalar value of a float, or `None` for NaN.
    #[must_use]
    pub fn from_float(v: f64) -> Option<Self> {
        if v.is_nan() {
            None
        } else if v == f64::INFINITY {
            Some(Self(Repr::Infinity))
        } else if v == f64::NEG_INFINITY {
            Some(Self(Repr::NegInfinity))
        } else {
            BigRational::from_float(v).map(|r| Self(Repr::Finite(r)))
        }
    }

    /// Returns the value as an exact rational, or `None` if it is infinite.
    #[must_use]
    pub fn as_rational(&self) -> Option<&BigRational> {
        match &self.0 {
            Repr::Finite(r) => Some(r),
            Repr::NegInfinity | Repr::Infinity => None,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_rational().is_some_and(Zero::is_zero)
    }

    /// Narrows the scalar to the nearest `f64`.
    ///
    /// Magnitudes beyond the `f64` range become infinite.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match &self.0 {
            Repr::NegInfinity => f64::NEG_INFINITY,
            Repr::Finite(r) => r.to_f64().unwrap_or(f64::NAN),
            Repr::Infinity => f64::INFINITY,
        }
    }

    /// Returns the natural logarithm, narrowed to `f64`.
    ///
    /// The logarithm is taken on the full-precision value, so scalars far
    /// outside the `f64` range still have finite logarithms. Zero gives
    /// negative infinity and negative scalars give NaN.
    #[must_use]
    pub fn ln(&self) -> f64 {
        match &self.0 {
            Repr::NegInfinity => f64::NAN,
            Repr::Infinity => f64::INFINITY,
            Repr::Finite(r) if r.is_zero() => f64::NEG_INFINITY,
            Repr::Finite(r) if r.is_negative() => f64::NAN,
            Repr::Finite(r) => ln_positive(r.numer()) - ln_positive(r.denom()),
        }
    }
}

/// Natural log of a positive integer of any size.
fn ln_positive(n: &BigInt) -> f64 {
    // Keep the top 64 bits; f64 holds 53 of them, so nothing significant is lost.
    let shift = n.bits().saturating_sub(64);
    let top = (n >> shift).to_f64().unwrap_or(f64::NAN);
    #[allow(clippy::cast_precision_loss)]
    let shift = shift as f64;
    top.ln() + shift * LN_2
}

impl From<BigUint> for Scalar {
    fn from(v: BigUint) -> Self {
        Self(Repr::Finite(BigRational::from_integer(BigInt::from(v))))
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Self::from(BigUint::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self(Repr::Finite(BigRational::from_integer(BigInt::from(v))))
    }
}

impl TryFrom<f64> for Scalar {
    type Error = Error;

    fn try_from(v: f64) -> Result<Self, Error> {
        Self::from_float(v).ok_or(Error::NotANumber)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::NegInfinity => f.write_str("-inf"),
            Repr::Infinity => f.write_str("+inf"),
            Repr::Finite(r) if r.is_integer() => write!(f, "{}", r.numer()),
            Repr::Finite(_) => write!(f, "{}", self.to_f64()),
        }
    }
}

impl Values {
    /// Reduces the values to a single [`Scalar`].
    ///
    /// - No values give zero.
    /// - A single `f32` or `f64` value, possibly behind references, is
    ///   returned exactly.
    /// - Anything else is [`encode`]d value by value into one buffer, which is
    ///   read as a big-endian unsigned integer.
    ///
    /// Scalars of same-shaped values roughly follow the values' magnitude or
    /// lexicographic order, which is all plotting needs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotANumber`] for a single NaN value, or an
    /// [`Error::Conversion`] naming the index of the value that failed to
    /// encode.
    pub fn scalar(&self) -> Result<Scalar, Error> {
        match &self[..] {
            [] => return Ok(Scalar::zero()),
            [value] => match value.resolve() {
                Value::F32(v) => return Scalar::try_from(f64::from(*v)),
                Value::F64(v) => return Scalar::try_from(*v),
                _ => {}
            },
            _ => {}
        }

        let mut buf = Vec::new();
        for (index, value) in self.iter().enumerate() {
            encode(value, &mut buf).map_err(|err| Error::at(Position::Index(index), err))?;
        }
        Ok(Scalar::from(BigUint::from_bytes_be(&buf)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use approx::assert_relative_eq;

    use super::*;
    use crate::values;

    fn scalar(values: &Values) -> Scalar {
        values.scalar().expect("values should convert")
    }

    #[test]
    fn empty_values_are_zero() {
        assert_eq!(scalar(&values![]), Scalar::zero());
        assert!(scalar(&values![]).is_zero());
    }

    #[test]
    fn single_floats_are_exact() {
        for v in [123.456, -0.1, f64::MIN_POSITIVE, f64::MAX, 1e-300] {
            let s = scalar(&values![v]);
            assert_eq!(s, Scalar::from_float(v).unwrap());
            assert_eq!(s.to_f64(), v);
        }

        let s = scalar(&values![0.1_f32]);
        assert_eq!(s.to_f64(), f64::from(0.1_f32));
    }

    #[test]
    fn floats_behind_references_are_exact() {
        let vs = values![Value::reference(Value::reference(2.75_f64))];
        assert_eq!(scalar(&vs).to_f64(), 2.75);
    }

    #[test]
    fn infinite_floats_are_kept() {
        assert_eq!(scalar(&values![f64::INFINITY]).to_f64(), f64::INFINITY);
        assert!(scalar(&values![f64::NEG_INFINITY]) < scalar(&values![f64::MIN]));
    }

    #[test]
    fn nan_is_rejected() {
        let err = values![f64::NAN].scalar().unwrap_err();
        assert!(matches!(err, Error::NotANumber));
    }

    #[test]
    fn byte_shapes_read_as_big_endian_integers() {
        assert_eq!(scalar(&values![Value::Byte(b'd')]), Scalar::from(100_u64));
        assert_eq!(
            scalar(&values![&b"test"[..]]),
            Scalar::from(1_952_805_748_u64)
        );
        assert_eq!(scalar(&values!["test"]), Scalar::from(1_952_805_748_u64));
        assert_eq!(scalar(&values!['æ']), Scalar::from(50_086_u64));
    }

    #[test]
    fn nulls_contribute_nothing() {
        assert_eq!(
            scalar(&values![Value::Null, "test", Value::Null]),
            scalar(&values!["test"])
        );
    }

    #[test]
    fn wide_integers_are_not_truncated() {
        assert_eq!(scalar(&values![1_isize << 31]), Scalar::from(2_147_483_648_u64));
        assert_eq!(scalar(&values![1_usize << 32]), Scalar::from(4_294_967_296_u64));
        assert_eq!(scalar(&values![123_isize]), Scalar::from(123_u64));
    }

    #[test]
    fn maps_write_key_then_value() {
        let map = BTreeMap::from([("a", 1_isize)]);
        assert_eq!(scalar(&values![map]), Scalar::from(24_833_u64));
    }

    #[test]
    fn map_scalars_depend_on_entry_order() {
        let forward = Value::map([("a", 1_u8), ("b", 2_u8)]);
        let backward = Value::map([("b", 2_u8), ("a", 1_u8)]);
        assert_ne!(scalar(&values![forward]), scalar(&values![backward]));
    }

    #[test]
    fn multiple_values_concatenate() {
        // 0x01 0x02 -> 258
        assert_eq!(scalar(&values![1_u8, 2_u8]), Scalar::from(258_u64));
        // A float alongside other values is encoded by its bits.
        let bits = u64::from(1.0_f32.to_bits());
        assert_eq!(scalar(&values![1.0_f32, Value::Null]), Scalar::from(bits));
    }

    #[test]
    fn long_buffers_exceed_f64_range() {
        let s = scalar(&values![vec![0xff_u8; 200]]);
        assert_eq!(s.to_f64(), f64::INFINITY);
        assert_relative_eq!(s.ln(), 1600.0 * LN_2, max_relative = 1e-12);
    }

    #[test]
    fn ordering_spans_infinities_and_rationals() {
        let neg = Scalar::from_float(f64::NEG_INFINITY).unwrap();
        let small = Scalar::from_float(-1.5).unwrap();
        let big = Scalar::from(BigUint::from(1_u8) << 2000_u32);
        let pos = Scalar::from_float(f64::INFINITY).unwrap();
        assert!(neg < small && small < Scalar::zero() && Scalar::zero() < big && big < pos);
    }

    #[test]
    fn ln_handles_special_values() {
        assert_eq!(Scalar::zero().ln(), f64::NEG_INFINITY);
        assert!(Scalar::from(-3_i64).ln().is_nan());
        assert_relative_eq!(Scalar::from(1000_u64).ln(), 1000_f64.ln());
        assert_relative_eq!(
            Scalar::from_float(0.25).unwrap().ln(),
            0.25_f64.ln(),
            max_relative = 1e-15
        );
    }

    #[test]
    fn display_prints_integers_exactly() {
        let big = Scalar::from(BigUint::from(1_u8) << 70_u32);
        assert_eq!(big.to_string(), "1180591620717411303424");
        assert_eq!(Scalar::from_float(0.5).unwrap().to_string(), "0.5");
    }
}
