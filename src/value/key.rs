//! Property keys.
//!
//! A [`Key`] names a property of a [`Value`](super::Value): either a string
//! name (`root.label`) or a non-negative integer index (`root[0]`).

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// A property key: a name or an integer index.
///
/// Names that are canonical decimal integers (`"0"`, `"12"`, but not `"012"`)
/// address the same property as the corresponding index, the way property
/// keys behave in dynamic languages.
///
/// # Examples
///
/// ```rust
/// use pointfree::value::Key;
///
/// assert_eq!(Key::from("label").to_string(), "label");
/// assert_eq!(Key::index(3).as_index(), Some(3));
/// assert_eq!(Key::from("3").as_index(), Some(3));
/// assert_eq!(Key::from("03").as_index(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A named property.
    Name(Rc<str>),
    /// An integer-indexed property.
    Index(usize),
}

impl Key {
    /// Creates a named key.
    pub fn name(name: impl Into<Rc<str>>) -> Self {
        Self::Name(name.into())
    }

    /// Creates an index key.
    pub const fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Returns the integer index this key addresses, if any.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(name) => name
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == **name),
        }
    }

    /// Returns the name this key addresses on an object.
    pub fn to_name(&self) -> Cow<'_, str> {
        match self {
            Self::Name(name) => Cow::Borrowed(name),
            Self::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// Returns `true` if this key is the given name.
    pub fn is_name(&self, expected: &str) -> bool {
        matches!(self, Self::Name(name) if &**name == expected)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => formatter.write_str(name),
            Self::Index(index) => write!(formatter, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(Rc::from(name))
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(Rc::from(name))
    }
}

impl From<Rc<str>> for Key {
    fn from(name: Rc<str>) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Name(name) => serializer.serialize_str(name),
            Self::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

#[cfg(feature = "serde")]
struct KeyVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a property name or a non-negative index")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Key::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        usize::try_from(value)
            .map(Key::Index)
            .map_err(|_| E::custom("index does not fit in usize"))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        usize::try_from(value)
            .map(Key::Index)
            .map_err(|_| E::custom("index must be non-negative"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}
