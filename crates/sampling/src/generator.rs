//! Random input generators for the sampling driver.
//!
//! A [`Generator`] produces one [`Value`] per call from a random number
//! generator. The driver calls one generator per function argument to build
//! each sample's input. Any `Fn(&mut dyn RngCore) -> Value` closure is a
//! generator; [`from_fn`] helps the compiler infer such closures.

use rand::{Rng, RngCore};

use fnplot_core::Value;

/// Longest string produced by the string generators.
pub const MAX_STRING_LEN: usize = 32;

const ALPHA_NUM: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Produces random values for one function argument.
pub trait Generator: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore) -> Value;
}

impl<F> Generator for F
where
    F: Fn(&mut dyn RngCore) -> Value + Send + Sync,
{
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        self(rng)
    }
}

/// Creates a generator from a closure.
pub fn from_fn<F>(f: F) -> F
where
    F: Fn(&mut dyn RngCore) -> Value + Send + Sync,
{
    f
}

// --- Floats ---

/// Any finite `f64`, drawn uniformly over bit patterns.
pub fn float64() -> impl Generator {
    from_fn(|rng| loop {
        let v = f64::from_bits(rng.next_u64());
        if v.is_finite() {
            return Value::F64(v);
        }
    })
}

/// A uniform `f64` in `[min, max]`. The bounds may be given in either order.
///
/// # Panics
///
/// Panics if either bound is not finite.
pub fn float64_range(min: f64, max: f64) -> impl Generator {
    assert!(
        min.is_finite() && max.is_finite(),
        "float range bounds must be finite"
    );
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    from_fn(move |rng| Value::F64(rng.gen_range(low..=high)))
}

/// Any finite `f32`, drawn uniformly over bit patterns.
pub fn float32() -> impl Generator {
    from_fn(|rng| loop {
        let v = f32::from_bits(rng.next_u32());
        if v.is_finite() {
            return Value::F32(v);
        }
    })
}

/// A uniform `f32` in `[min, max]`. The bounds may be given in either order.
///
/// # Panics
///
/// Panics if either bound is not finite.
pub fn float32_range(min: f32, max: f32) -> impl Generator {
    assert!(
        min.is_finite() && max.is_finite(),
        "float range bounds must be finite"
    );
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    from_fn(move |rng| Value::F32(rng.gen_range(low..=high)))
}

// --- Characters ---

/// Any Unicode scalar value.
pub fn rune() -> impl Generator {
    from_fn(|rng| Value::Char(rng.r#gen()))
}

/// A character in `[min, max]`, skipping surrogates. The bounds may be given
/// in either order.
pub fn rune_range(min: char, max: char) -> impl Generator {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    from_fn(move |rng| Value::Char(rng.gen_range(low..=high)))
}

/// Any Unicode scalar value that is not a control character.
pub fn rune_no_control() -> impl Generator {
    from_fn(|rng| loop {
        let c: char = rng.r#gen();
        if !c.is_control() {
            return Value::Char(c);
        }
    })
}

/// An ASCII digit.
pub fn num_char() -> impl Generator {
    from_fn(|rng| Value::Char(digit(rng)))
}

/// An ASCII uppercase letter.
pub fn alpha_upper_char() -> impl Generator {
    from_fn(|rng| Value::Char(rng.gen_range('A'..='Z')))
}

/// An ASCII lowercase letter.
pub fn alpha_lower_char() -> impl Generator {
    from_fn(|rng| Value::Char(alpha_lower(rng)))
}

/// An ASCII letter of either case.
pub fn alpha_char() -> impl Generator {
    from_fn(|rng| Value::Char(alpha(rng)))
}

/// An ASCII letter or digit.
pub fn alpha_num_char() -> impl Generator {
    from_fn(|rng| Value::Char(alpha_num(rng)))
}

// --- Strings ---

/// A string of up to [`MAX_STRING_LEN`] arbitrary Unicode characters.
pub fn any_string() -> impl Generator {
    from_fn(|rng| Value::Str(string_of(rng, |rng| rng.r#gen())))
}

/// A string of up to [`MAX_STRING_LEN`] ASCII letters.
pub fn alpha_string() -> impl Generator {
    from_fn(|rng| Value::Str(string_of(rng, alpha)))
}

/// A string of up to [`MAX_STRING_LEN`] ASCII digits.
pub fn num_string() -> impl Generator {
    from_fn(|rng| Value::Str(string_of(rng, digit)))
}

/// A lowercase letter followed by up to [`MAX_STRING_LEN`] - 1 letters or digits.
pub fn identifier() -> impl Generator {
    from_fn(|rng| {
        let head = alpha_lower(rng);
        let mut s = String::from(head);
        s.push_str(&string_of(rng, alpha_num));
        s.truncate(MAX_STRING_LEN);
        Value::Str(s)
    })
}

fn string_of(
    rng: &mut dyn RngCore,
    mut next: impl FnMut(&mut dyn RngCore) -> char,
) -> String {
    let len = rng.gen_range(0..=MAX_STRING_LEN);
    (0..len).map(|_| next(&mut *rng)).collect()
}

fn digit(rng: &mut dyn RngCore) -> char {
    rng.gen_range('0'..='9')
}

fn alpha_lower(rng: &mut dyn RngCore) -> char {
    rng.gen_range('a'..='z')
}

fn alpha(rng: &mut dyn RngCore) -> char {
    if rng.gen_bool(0.5) {
        rng.gen_range('A'..='Z')
    } else {
        alpha_lower(rng)
    }
}

fn alpha_num(rng: &mut dyn RngCore) -> char {
    char::from(ALPHA_NUM[rng.gen_range(0..ALPHA_NUM.len())])
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn draw(generator: &impl Generator, n: usize) -> Vec<Value> {
        let mut rng = StdRng::seed_from_u64(42);
        (0..n).map(|_| generator.generate(&mut rng)).collect()
    }

    fn chars(values: &[Value]) -> impl Iterator<Item = char> + '_ {
        values.iter().map(|v| match v {
            Value::Char(c) => *c,
            other => panic!("expected a char, got {other:?}"),
        })
    }

    fn strings(values: &[Value]) -> impl Iterator<Item = &str> + '_ {
        values.iter().map(|v| match v {
            Value::Str(s) => s.as_str(),
            other => panic!("expected a string, got {other:?}"),
        })
    }

    #[test]
    fn float_ranges_stay_in_bounds() {
        for v in draw(&float64_range(5.0, -5.0), 500) {
            let Value::F64(v) = v else { panic!("expected f64") };
            assert!((-5.0..=5.0).contains(&v));
        }
        for v in draw(&float32_range(0.0, 1.0), 500) {
            let Value::F32(v) = v else { panic!("expected f32") };
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn unbounded_floats_are_finite() {
        assert!(draw(&float64(), 500).iter().all(|v| matches!(v, Value::F64(v) if v.is_finite())));
        assert!(draw(&float32(), 500).iter().all(|v| matches!(v, Value::F32(v) if v.is_finite())));
    }

    #[test]
    #[should_panic(expected = "float range bounds must be finite")]
    fn non_finite_float_range_panics() {
        let _ = float64_range(0.0, f64::INFINITY);
    }

    #[test]
    fn character_classes_are_respected() {
        assert!(chars(&draw(&num_char(), 200)).all(|c| c.is_ascii_digit()));
        assert!(chars(&draw(&alpha_upper_char(), 200)).all(|c| c.is_ascii_uppercase()));
        assert!(chars(&draw(&alpha_lower_char(), 200)).all(|c| c.is_ascii_lowercase()));
        assert!(chars(&draw(&alpha_char(), 200)).all(|c| c.is_ascii_alphabetic()));
        assert!(chars(&draw(&alpha_num_char(), 200)).all(|c| c.is_ascii_alphanumeric()));
        assert!(chars(&draw(&rune_no_control(), 200)).all(|c| !c.is_control()));
        assert!(chars(&draw(&rune_range('z', 'a'), 200)).all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn alpha_char_produces_both_cases() {
        let drawn: Vec<char> = chars(&draw(&alpha_char(), 200)).collect();
        assert!(drawn.iter().any(char::is_ascii_uppercase));
        assert!(drawn.iter().any(char::is_ascii_lowercase));
    }

    #[test]
    fn strings_respect_length_and_class() {
        let drawn = draw(&alpha_string(), 200);
        for s in strings(&drawn) {
            assert!(s.chars().count() <= MAX_STRING_LEN);
            assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
        }
        let drawn = draw(&num_string(), 200);
        assert!(strings(&drawn).all(|s| s.chars().all(|c| c.is_ascii_digit())));
        let drawn = draw(&any_string(), 200);
        assert!(strings(&drawn).all(|s| s.chars().count() <= MAX_STRING_LEN));
    }

    #[test]
    fn identifiers_start_with_a_lowercase_letter() {
        let drawn = draw(&identifier(), 200);
        for s in strings(&drawn) {
            let mut chars = s.chars();
            assert!(chars.next().is_some_and(|c| c.is_ascii_lowercase()));
            assert!(chars.all(|c| c.is_ascii_alphanumeric()));
            assert!(s.len() <= MAX_STRING_LEN);
        }
    }

    #[test]
    fn closures_are_generators() {
        let constant = from_fn(|_| Value::U8(7));
        assert_eq!(draw(&constant, 3), vec![Value::U8(7); 3]);
    }

    #[test]
    fn same_seed_gives_same_values() {
        assert_eq!(draw(&any_string(), 20), draw(&any_string(), 20));
    }
}
