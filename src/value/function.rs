//! Callable values.

use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::evaluate::Result;

type NativeFunction = dyn Fn(&Value, &[Value]) -> Result<Value>;

/// A callable value.
///
/// A `Function` wraps a native closure that receives the receiver (the value
/// that owned the function when it was looked up as a method, or
/// [`Value::Undefined`] for a plain call) and the argument list.
///
/// Functions compare equal only to clones of themselves.
///
/// # Examples
///
/// ```rust
/// use pointfree::value::{Function, Value};
///
/// let add = Function::new(|arguments| {
///     let sum: f64 = arguments.iter().map(Value::to_number).sum();
///     Ok(Value::from(sum))
/// });
///
/// let result = add.call(&Value::Undefined, &[Value::from(1), Value::from(2)]);
/// assert_eq!(result, Ok(Value::from(3)));
/// ```
#[derive(Clone)]
pub struct Function {
    name: Option<Rc<str>>,
    body: Rc<NativeFunction>,
}

impl Function {
    /// Creates a function that ignores its receiver.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self {
            name: None,
            body: Rc::new(move |_receiver: &Value, arguments: &[Value]| function(arguments)),
        }
    }

    /// Creates a function that reads its receiver, like a method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::value::{Function, Key, Value};
    ///
    /// let scale = Function::method(|receiver, arguments| {
    ///     let factor = receiver.get(&Key::from("factor")).unwrap_or_default();
    ///     Ok(Value::from(factor.to_number() * arguments[0].to_number()))
    /// });
    ///
    /// let owner = Value::object([("factor", 2)]);
    /// assert_eq!(scale.call(&owner, &[Value::from(21)]), Ok(Value::from(42)));
    /// ```
    pub fn method<F>(function: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + 'static,
    {
        Self {
            name: None,
            body: Rc::new(function),
        }
    }

    /// Attaches a name used when the function is rendered.
    #[must_use]
    pub fn named(mut self, name: impl Into<Rc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the function's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invokes the function with `receiver` bound as its receiver.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body raises.
    pub fn call(&self, receiver: &Value, arguments: &[Value]) -> Result<Value> {
        (self.body)(receiver, arguments)
    }

    /// Returns `true` if both functions share the same body.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(formatter, "Function({name})"),
            None => formatter.write_str("Function(<anonymous>)"),
        }
    }
}
