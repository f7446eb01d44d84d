use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value stored in an extended error's property map.
///
/// Serializes untagged, so every JSON value maps onto one variant and unknown
/// top-level fields of a serialized [`Error`] survive a round trip through the
/// extension map.
///
/// Floats compare and hash by bit pattern, which keeps `Eq` and `Hash`
/// lawful (`NaN == NaN`, `0.0 != -0.0`).
///
/// [`Error`]: super::Error
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone)]
pub enum ExtensionValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ExtensionValue>),
    Object(BTreeMap<String, ExtensionValue>),
}

impl PartialEq for ExtensionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ExtensionValue {}

impl Hash for ExtensionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {},
            Self::Bool(value) => value.hash(state),
            Self::Integer(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::String(value) => value.hash(state),
            Self::List(values) => values.hash(state),
            Self::Object(entries) => entries.hash(state),
        }
    }
}

impl Display for ExtensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::List(values) => {
                f.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },
            Self::Object(entries) => {
                f.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
        }
    }
}

impl From<bool> for ExtensionValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ExtensionValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for ExtensionValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ExtensionValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ExtensionValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ExtensionValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<V: Into<ExtensionValue>> From<Vec<V>> for ExtensionValue {
    fn from(values: Vec<V>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<ExtensionValue>> From<BTreeMap<String, V>> for ExtensionValue {
    fn from(entries: BTreeMap<String, V>) -> Self {
        Self::Object(entries.into_iter().map(|(key, value)| (key, value.into())).collect())
    }
}

impl<V: Into<ExtensionValue>> From<Option<V>> for ExtensionValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Conversion used by [`Error::try_get`](super::Error::try_get).
pub trait FromExtension: Sized {
    fn from_extension(value: &ExtensionValue) -> Option<Self>;
}

impl FromExtension for ExtensionValue {
    #[inline]
    fn from_extension(value: &ExtensionValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromExtension for bool {
    #[inline]
    fn from_extension(value: &ExtensionValue) -> Option<Self> {
        match value {
            ExtensionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromExtension for i64 {
    #[inline]
    fn from_extension(value: &ExtensionValue) -> Option<Self> {
        match value {
            ExtensionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl FromExtension for i32 {
    #[inline]
    fn from_extension(value: &ExtensionValue) -> Option<Self> {
        i64::from_extension(value).and_then(|value| i32::try_from(value).ok())
    }
}

/// Integers widen to floats; floats never narrow to integers.
impl FromExtension for f64 {
    #[inline]
    fn from_extension(value: &ExtensionValue) -> Option<Self> {
        match value {
            ExtensionValue::Float(value) => Some(*value),
            ExtensionValue::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }
}

impl FromExtension for String {
    #[inline]
    fn from_extension(value: &ExtensionValue) -> Option<Self> {
        match value {
            ExtensionValue::String(value) => Some(value.clone()),
            _ => None,
        }
    }
}

impl<T: FromExtension> FromExtension for Vec<T> {
    fn from_extension(value: &ExtensionValue) -> Option<Self> {
        match value {
            ExtensionValue::List(values) => values.iter().map(T::from_extension).collect(),
            _ => None,
        }
    }
}

impl<T: FromExtension> FromExtension for BTreeMap<String, T> {
    fn from_extension(value: &ExtensionValue) -> Option<Self> {
        match value {
            ExtensionValue::Object(entries) => entries
                .iter()
                .map(|(key, value)| T::from_extension(value).map(|value| (key.clone(), value)))
                .collect(),
            _ => None,
        }
    }
}
