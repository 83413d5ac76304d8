//! Immutable property maps.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::{Function, Value};
use crate::evaluate::Result;

/// An immutable, reference-counted map from property names to values.
///
/// Cloning an `Object` is O(1); [`Object::with`] copies the map only when it
/// is shared. Properties iterate in name order.
///
/// # Examples
///
/// ```rust
/// use pointfree::value::{Object, Value};
///
/// let object = Object::builder()
///     .property("label", "object1")
///     .property("weight", 3)
///     .build();
///
/// assert_eq!(object.get("weight"), Some(&Value::from(3)));
/// assert_eq!(object.len(), 2);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Object {
    properties: Rc<BTreeMap<Rc<str>, Value>>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building an object.
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::default()
    }

    /// Returns the property with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Returns `true` if the object has its own property `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (&**name, value))
    }

    /// Returns a copy of this object with `name` set to `value`.
    #[must_use]
    pub fn with(&self, name: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        let mut properties = Rc::clone(&self.properties);
        Rc::make_mut(&mut properties).insert(name.into(), value.into());
        Self { properties }
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<Rc<str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self {
            properties: Rc::new(
                entries
                    .into_iter()
                    .map(|(name, value)| (name.into(), value.into()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Builder for [`Object`].
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    properties: BTreeMap<Rc<str>, Value>,
}

impl ObjectBuilder {
    /// Sets a property.
    #[must_use]
    pub fn property(mut self, name: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Sets a property to a receiver-aware function.
    #[must_use]
    pub fn method<F>(self, name: &str, function: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + 'static,
    {
        let function = Function::method(function).named(name);
        self.property(name, Value::Function(function))
    }

    /// Finishes the object.
    pub fn build(self) -> Object {
        Object {
            properties: Rc::new(self.properties),
        }
    }
}
