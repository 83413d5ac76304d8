//! The root placeholder.

use super::{Argument, Token};
use crate::evaluate::Result;
use crate::value::{Function, Key, Value};
use crate::wrap::FunctionWrapper;

/// The root from which every placeholder and chain is built.
///
/// `Accessor` carries no state; the constant [`__`] is the usual way to reach
/// it. Each method starts a brand-new token, so chains started from the root
/// never share anything with each other.
///
/// # Examples
///
/// ```rust
/// use pointfree::prelude::*;
///
/// let weights = [
///     Value::object([("data", Value::object([("weight", 3)]))]),
///     Value::object([("data", Value::object([("weight", 9)]))]),
/// ];
///
/// let path = __.property("data").property("weight");
/// let mapped: Result<Vec<Value>, _> = weights.iter().map(path.mapper()).collect();
///
/// assert_eq!(mapped, Ok(vec![Value::from(3), Value::from(9)]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Accessor;

/// The root accessor.
pub const __: Accessor = Accessor;

impl Accessor {
    /// Returns the root accessor.
    pub const fn new() -> Self {
        Self
    }

    /// Returns a fresh identity placeholder.
    pub const fn token(self) -> Token {
        Token::identity()
    }

    /// Starts a chain with a property read.
    pub fn property(self, key: impl Into<Key>) -> Token {
        self.token().property(key)
    }

    /// Starts a chain with an integer index read.
    pub fn index(self, index: usize) -> Token {
        self.token().index(index)
    }

    /// Starts a chain with a method call on the subject.
    pub fn method<I, A>(self, name: impl Into<Key>, arguments: I) -> Token
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        self.token().method(name, arguments)
    }

    /// Returns a named placeholder bound to absolute argument `index`.
    ///
    /// ```rust
    /// use pointfree::prelude::*;
    ///
    /// let swapped = __.nth(1).method("concat", args![__.nth(0)]);
    /// let result = swapped.evaluate(&[Value::from("a"), Value::from("b")]);
    /// assert_eq!(result, Ok(Value::from("ba")));
    /// ```
    pub const fn nth(self, index: usize) -> Token {
        Token::named(index)
    }

    /// Prepares `function` for partial application with placeholders.
    pub const fn wrap(self, function: Function) -> FunctionWrapper {
        FunctionWrapper::new(function)
    }

    /// Evaluates the identity placeholder, returning the first argument.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::ArgumentPoolExhausted`] when `arguments` is
    /// empty.
    ///
    /// [`EvaluationError::ArgumentPoolExhausted`]: crate::evaluate::EvaluationError::ArgumentPoolExhausted
    pub fn evaluate(self, arguments: &[Value]) -> Result<Value> {
        self.token().evaluate(arguments)
    }
}

impl From<Accessor> for Token {
    fn from(accessor: Accessor) -> Self {
        accessor.token()
    }
}

/// Returns a fresh identity placeholder.
pub const fn placeholder() -> Token {
    Token::identity()
}

/// Returns a placeholder bound to absolute argument `index`.
pub const fn named_placeholder(index: usize) -> Token {
    Token::named(index)
}
