//! Adapters that turn tokens into ordinary closures.
//!
//! A token is evaluated against a slice of arguments. The adapters below fix
//! the shape of that slice for the common collection callbacks so a token can
//! be handed straight to `Iterator::map`, `Iterator::filter`, `fold` or
//! `sort_by`.

use std::cmp::Ordering;

use super::Token;
use crate::evaluate::Result;
use crate::value::{Function, Value};

impl Token {
    /// Returns a unary closure suitable for `Iterator::map`.
    ///
    /// ```rust
    /// use pointfree::prelude::*;
    ///
    /// let subjects = [Value::from(1), Value::from(2), Value::from(3)];
    /// let strings: Result<Vec<Value>, _> = subjects
    ///     .iter()
    ///     .map(__.method("toString", args![]).mapper())
    ///     .collect();
    ///
    /// assert_eq!(
    ///     strings,
    ///     Ok(vec![Value::from("1"), Value::from("2"), Value::from("3")])
    /// );
    /// ```
    pub fn mapper(&self) -> impl Fn(&Value) -> Result<Value> + '_ {
        move |subject| self.apply(subject)
    }

    /// Evaluates the token with `subject` and returns the truthiness of the
    /// result.
    ///
    /// # Errors
    ///
    /// Propagates any evaluation error.
    pub fn predicate(&self, subject: &Value) -> Result<bool> {
        self.apply(subject).map(|value| value.truthy())
    }

    /// Returns a binary closure suitable for `Iterator::try_fold`.
    ///
    /// The accumulator is the subject and the element is the next argument.
    pub fn reducer(&self) -> impl Fn(Value, Value) -> Result<Value> + '_ {
        move |accumulator, element| self.evaluate(&[accumulator, element])
    }

    /// Evaluates the token with `(left, right)` and interprets the numeric
    /// result the way a sort comparator does: negative is `Less`, positive is
    /// `Greater`, anything else (zero or `NaN`) is `Equal`.
    ///
    /// # Errors
    ///
    /// Propagates any evaluation error.
    pub fn comparator(&self, left: &Value, right: &Value) -> Result<Ordering> {
        let number = self
            .evaluate(&[left.clone(), right.clone()])?
            .to_number();
        Ok(number.partial_cmp(&0.0).unwrap_or(Ordering::Equal))
    }

    /// Converts the token into a callable [`Function`].
    ///
    /// The function ignores its receiver and evaluates the token against its
    /// argument list, which lets a token serve as the callback of the built-in
    /// array methods.
    ///
    /// ```rust
    /// use pointfree::prelude::*;
    ///
    /// let words = Value::array(["Hello, ", "kind ", "stranger!"]);
    /// let join = __.method("concat", args![__]).into_function();
    /// let sentence = __.method("reduce", args![join]).apply(&words);
    ///
    /// assert_eq!(sentence, Ok(Value::from("Hello, kind stranger!")));
    /// ```
    pub fn into_function(self) -> Function {
        Function::new(move |arguments| self.evaluate(arguments))
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        Self::Function(token.into_function())
    }
}

impl From<Token> for Function {
    fn from(token: Token) -> Self {
        token.into_function()
    }
}
