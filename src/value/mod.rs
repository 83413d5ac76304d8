//! Dynamic values that chains are replayed against.
//!
//! Rust has no dynamic objects, so the engine carries its own small value
//! model: a [`Value`] is a primitive, an array, an [`Object`] with named
//! properties, or a callable [`Function`]. Property lookup follows the
//! familiar dynamic-language rules:
//!
//! - objects expose their own properties by name (an index key addresses the
//!   property named by its decimal digits);
//! - arrays and strings expose elements by index and a `length` property;
//! - every value except `undefined` and `null` exposes a fixed set of
//!   built-in methods (`toString`, `concat`, `substr`, `map`, ...).
//!
//! Strings are indexed by Unicode scalar value.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::value::{Key, Value};
//!
//! let subject = Value::object([("data", Value::object([("weight", 3)]))]);
//! let data = subject.get(&Key::from("data")).unwrap();
//! assert_eq!(data.get(&Key::from("weight")), Some(Value::from(3)));
//!
//! let word = Value::from("abc");
//! assert_eq!(word.get(&Key::index(1)), Some(Value::from("b")));
//! assert_eq!(word.get(&Key::from("length")), Some(Value::from(3)));
//! ```

mod builtins;
mod function;
mod key;
mod object;
#[cfg(feature = "serde")]
mod serialization;

pub use function::Function;
pub use key::Key;
pub use object::{Object, ObjectBuilder};

use std::fmt;
use std::fmt::Write as _;
use std::rc::Rc;

/// Longest rendering produced by [`Value::render`] before truncation.
const RENDER_LIMIT: usize = 96;

/// A dynamically typed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// An immutable array.
    Array(Rc<[Value]>),
    /// An object with named properties.
    Object(Object),
    /// A callable value.
    Function(Function),
}

impl Value {
    /// Creates an array value.
    pub fn array<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Array(elements.into_iter().map(Into::into).collect())
    }

    /// Creates an object value from `(name, value)` pairs.
    pub fn object<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Rc<str>>,
        V: Into<Self>,
    {
        Self::Object(properties.into_iter().collect())
    }

    /// Creates a function value that ignores its receiver.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&[Self]) -> crate::evaluate::Result<Self> + 'static,
    {
        Self::Function(Function::new(function))
    }

    /// Returns the name of this value's kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for [`Value::Function`].
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the boolean, if this is one.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the object, if this is one.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the function, if this is one.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Looks up a property.
    ///
    /// Returns `None` when the property is absent or holds `undefined`.
    pub fn get(&self, key: &Key) -> Option<Self> {
        let own = match self {
            Self::Undefined | Self::Null => return None,
            Self::Object(object) => object.get(&key.to_name()).cloned(),
            Self::Array(elements) => match key.as_index() {
                Some(index) => elements.get(index).cloned(),
                None if key.is_name("length") => Some(Self::from(elements.len())),
                None => None,
            },
            Self::String(text) => match key.as_index() {
                Some(index) => text.chars().nth(index).map(Self::from),
                None if key.is_name("length") => Some(Self::from(text.chars().count())),
                None => None,
            },
            Self::Bool(_) | Self::Number(_) | Self::Function(_) => None,
        };
        own.or_else(|| builtins::lookup(self, key))
            .filter(|value| !value.is_undefined())
    }

    /// Returns the truthiness of this value.
    ///
    /// `undefined`, `null`, `false`, `0`, `NaN` and the empty string are
    /// falsy; everything else is truthy.
    pub fn truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Converts this value to a number.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Object(_) | Self::Function(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(value) => f64::from(u8::from(*value)),
            Self::Number(value) => *value,
            Self::String(text) => parse_number(text),
            Self::Array(_) => parse_number(&self.to_display_string()),
        }
    }

    /// Converts this value to its string form (`toString`).
    pub fn to_display_string(&self) -> String {
        match self {
            Self::String(text) => text.to_string(),
            Self::Number(value) => format_number(*value),
            Self::Bool(value) => value.to_string(),
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::Array(elements) => elements
                .iter()
                .map(|element| match element {
                    Self::Undefined | Self::Null => String::new(),
                    other => other.to_display_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Object(_) => "[object Object]".to_string(),
            Self::Function(function) => match function.name() {
                Some(name) => format!("function {name}"),
                None => "function".to_string(),
            },
        }
    }

    /// Renders this value as bounded JSON-like text for diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::value::Value;
    ///
    /// let value = Value::object([("a", Value::array([1, 2]))]);
    /// assert_eq!(value.render(), r#"{"a":[1,2]}"#);
    /// ```
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        self.render_into(&mut rendered);
        if rendered.chars().count() > RENDER_LIMIT {
            let mut truncated: String = rendered.chars().take(RENDER_LIMIT).collect();
            truncated.push_str("...");
            truncated
        } else {
            rendered
        }
    }

    fn render_into(&self, output: &mut String) {
        match self {
            Self::String(text) => {
                let _ = write!(output, "{:?}", &**text);
            }
            Self::Array(elements) => {
                output.push('[');
                for (position, element) in elements.iter().enumerate() {
                    if position > 0 {
                        output.push(',');
                    }
                    element.render_into(output);
                }
                output.push(']');
            }
            Self::Object(object) => {
                output.push('{');
                for (position, (name, value)) in object.iter().enumerate() {
                    if position > 0 {
                        output.push(',');
                    }
                    let _ = write!(output, "{name:?}:");
                    value.render_into(output);
                }
                output.push('}');
            }
            Self::Function(_) => output.push_str("[Function]"),
            other => output.push_str(&other.to_display_string()),
        }
    }
}

/// Formats a number the way `toString` does: integral values without a
/// fractional part, `NaN` and `Infinity` spelled out.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        String::from(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed.chars().any(char::is_alphabetic) && !trimmed.contains(['e', 'E']) => {
            f64::NAN
        }
        _ => trimmed.parse().unwrap_or(f64::NAN),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_display_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::String(Rc::from(value.to_string()))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<Rc<str>> for Value {
    fn from(value: Rc<str>) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Self::array(elements)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(elements: I) -> Self {
        Self::Array(elements.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, "1")]
    #[case(-3.0, "-3")]
    #[case(0.5, "0.5")]
    #[case(-0.0, "0")]
    #[case(1e20, "100000000000000000000")]
    #[case(f64::NAN, "NaN")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    fn test_format_number(#[case] input: f64, #[case] expected: &str) {
        assert_eq!(format_number(input), expected);
    }

    #[rstest]
    #[case(Value::Undefined, false)]
    #[case(Value::Null, false)]
    #[case(Value::from(0), false)]
    #[case(Value::from(f64::NAN), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from("0"), true)]
    #[case(Value::array(Vec::<Value>::new()), true)]
    #[case(Value::from(true), true)]
    fn test_truthy(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.truthy(), expected);
    }

    #[rstest]
    #[case(Value::from(" 42 "), 42.0)]
    #[case(Value::from(""), 0.0)]
    #[case(Value::Null, 0.0)]
    #[case(Value::from(true), 1.0)]
    #[case(Value::from("1e3"), 1000.0)]
    fn test_to_number(#[case] value: Value, #[case] expected: f64) {
        assert!((value.to_number() - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_to_number_of_garbage_is_nan() {
        assert!(Value::from("abc").to_number().is_nan());
        assert!(Value::Undefined.to_number().is_nan());
    }

    #[rstest]
    fn test_array_display_joins_with_commas() {
        let value = Value::array([Value::from(1), Value::Null, Value::from("x")]);
        assert_eq!(value.to_string(), "1,,x");
    }

    #[rstest]
    fn test_get_index_on_object_uses_decimal_name() {
        let value = Value::object([("0", "zero")]);
        assert_eq!(value.get(&Key::index(0)), Some(Value::from("zero")));
    }

    #[rstest]
    fn test_get_treats_undefined_property_as_absent() {
        let value = Value::object([("missing", Value::Undefined)]);
        assert_eq!(value.get(&Key::from("missing")), None);
    }

    #[rstest]
    fn test_get_on_null_is_absent() {
        assert_eq!(Value::Null.get(&Key::from("toString")), None);
    }

    #[rstest]
    fn test_own_property_shadows_builtin() {
        let value = Value::object([("toString", "shadowed")]);
        assert_eq!(
            value.get(&Key::from("toString")),
            Some(Value::from("shadowed"))
        );
    }

    #[rstest]
    fn test_render_truncates_long_values() {
        let value = Value::from("x".repeat(200));
        let rendered = value.render();
        assert!(rendered.ends_with("..."));
        assert_eq!(rendered.chars().count(), RENDER_LIMIT + 3);
    }

    #[rstest]
    fn test_render_nested() {
        let value = Value::object([
            ("label", Value::from("a")),
            ("items", Value::array([Value::Null, Value::from(true)])),
        ]);
        assert_eq!(value.render(), r#"{"items":[null,true],"label":"a"}"#);
    }
}
