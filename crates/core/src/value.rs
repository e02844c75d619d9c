//! Values observed as function inputs and outputs.

mod encode;
mod ser;

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    hash::BuildHasher,
    ops::Deref,
};

pub use encode::encode;
pub use ser::to_value;

/// A single input or output value of a sampled function.
///
/// The variants form a closed set of shapes. Each one has a canonical byte
/// encoding (see [`encode`]), which is how compound values are reduced to a
/// [`Scalar`](crate::Scalar).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An absent value. Contributes no bytes.
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),

    /// A signed integer of platform-dependent width.
    ///
    /// Encoded at the narrowest fixed width that holds the value exactly, so
    /// the encoding does not depend on the platform.
    Int(i64),

    /// An unsigned integer of platform-dependent width, narrowed like [`Value::Int`].
    Uint(u64),

    F32(f32),
    F64(f64),
    Byte(u8),
    Bytes(Vec<u8>),

    /// A character, encoded as UTF-8.
    Char(char),

    Str(String),
    Seq(Vec<Value>),

    /// Key-value entries, encoded in the order they are stored.
    Map(Vec<(Value, Value)>),

    /// An indirection, resolved before the value is encoded.
    Ref(Box<Value>),
}

impl Value {
    /// Wraps a value in a [`Value::Ref`].
    pub fn reference(value: impl Into<Value>) -> Self {
        Self::Ref(Box::new(value.into()))
    }

    /// Follows [`Value::Ref`] indirections until a non-reference is reached.
    #[must_use]
    pub fn resolve(&self) -> &Value {
        let mut value = self;
        while let Self::Ref(inner) = value {
            value = inner;
        }
        value
    }

    /// Builds a [`Value::Map`] from key-value pairs, keeping their order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => Str,
    Vec<u8> => Bytes,
    Vec<Value> => Seq,
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Self::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Uint(v as u64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(v: Box<T>) -> Self {
        Self::Ref(Box::new((*v).into()))
    }
}

/// Entries are stored in ascending key order, so the encoding is deterministic.
impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::map(v)
    }
}

/// Entries are stored in the hash map's iteration order, which is unspecified.
///
/// Two equal hash maps may therefore produce different encodings and
/// scalars. Convert through a [`BTreeMap`] when a stable scalar is needed.
impl<K: Into<Value>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Self::map(v)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Seq(iter.into_iter().collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) | Self::Int(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) | Self::Uint(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v:#04x}"),
            Self::Bytes(v) => write!(f, "b\"{}\"", v.escape_ascii()),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Ref(inner) => write!(f, "{inner}"),
        }
    }
}

/// The ordered values of one function call's arguments or results.
///
/// See [`Values::scalar`] for how a `Values` reduces to a single number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(Vec<Value>);

impl Values {
    /// Creates an empty `Values`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the values as a vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for Values {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Values {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Values {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Values {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Builds a [`Values`] from expressions convertible into [`Value`].
///
/// ```rust
/// use fnplot_core::{Value, values};
///
/// let vs = values![1_u8, "a", Value::Null];
/// assert_eq!(vs.len(), 3);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::Values::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Values::from(vec![$($crate::Value::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_follows_nested_references() {
        let value = Value::reference(Value::reference(1.5_f64));
        assert_eq!(value.resolve(), &Value::F64(1.5));
    }

    #[test]
    fn option_converts_to_null_or_inner() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(7_u16)), Value::U16(7));
    }

    #[test]
    fn platform_width_integers_use_variable_width_variants() {
        assert_eq!(Value::from(-3_isize), Value::Int(-3));
        assert_eq!(Value::from(3_usize), Value::Uint(3));
    }

    #[test]
    fn btree_map_entries_are_sorted_by_key() {
        let map = BTreeMap::from([("b", 2_u8), ("a", 1_u8)]);
        assert_eq!(
            Value::from(map),
            Value::Map(vec![
                (Value::from("a"), Value::U8(1)),
                (Value::from("b"), Value::U8(2)),
            ])
        );
    }

    #[test]
    fn hash_map_entries_keep_iteration_order() {
        let map = HashMap::from([("x", 1_u8), ("y", 2_u8), ("z", 3_u8)]);
        let expected: Vec<_> = map
            .iter()
            .map(|(k, v)| (Value::from(*k), Value::U8(*v)))
            .collect();
        assert_eq!(Value::from(map), Value::Map(expected));
    }

    #[test]
    fn display_renders_compound_values() {
        let value = Value::Seq(vec![
            Value::from("a"),
            Value::map([('k', 1_i32)]),
            Value::Bytes(b"hi".to_vec()),
            Value::Null,
        ]);
        assert_eq!(value.to_string(), r#"["a", {'k': 1}, b"hi", null]"#);
    }

    #[test]
    fn values_macro_converts_each_expression() {
        let vs = values![1_u8, "x", Value::Null];
        assert_eq!(
            vs.into_inner(),
            vec![Value::U8(1), Value::from("x"), Value::Null]
        );
        assert!(values![].is_empty());
    }
}
