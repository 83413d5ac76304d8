//! Partial application of functions with placeholder arguments.
//!
//! [`FunctionWrapper`] fixes some positional arguments of a [`Function`] and
//! leaves the others to be supplied later. Positions holding a placeholder are
//! filled from the evaluation-time arguments in left-to-right, depth-first
//! order; literal positions pass through unchanged.
//!
//! Binding only literals calls the function immediately and yields
//! [`Bound::Value`]. Binding at least one placeholder yields
//! [`Bound::Deferred`], a token that calls the function when evaluated and
//! can itself be recorded as an argument of another chain.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let at_most = Function::new(|arguments| {
//!     Ok(Value::from(arguments[0].to_number() <= arguments[1].to_number()))
//! });
//!
//! let below_twenty = placeholderify(at_most).bind(args![__, 20]).unwrap();
//! let kept: Vec<i32> = [12, 16, 23]
//!     .into_iter()
//!     .filter(|number| below_twenty.evaluate(&[Value::from(*number)]) == Ok(Value::from(true)))
//!     .collect();
//!
//! assert_eq!(kept, vec![12, 16]);
//! ```

use crate::evaluate::Result;
use crate::placeholder::{Argument, Token};
use crate::value::{Function, Value};

/// A function prepared for partial application.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionWrapper {
    function: Function,
}

impl FunctionWrapper {
    /// Wraps `function`.
    pub const fn new(function: Function) -> Self {
        Self { function }
    }

    /// Returns the wrapped function.
    pub const fn function(&self) -> &Function {
        &self.function
    }

    /// Binds `arguments` to the wrapped function.
    ///
    /// # Errors
    ///
    /// When every argument is a literal the function is called right away, and
    /// any error it raises is returned. Binding placeholders never fails.
    pub fn bind<I, A>(&self, arguments: I) -> Result<Bound>
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        let arguments: Vec<Argument> = arguments.into_iter().map(Into::into).collect();
        let literals: Option<Vec<Value>> = arguments
            .iter()
            .map(|argument| match argument {
                Argument::Literal(value) => Some(value.clone()),
                Argument::Placeholder(_) => None,
            })
            .collect();

        match literals {
            Some(values) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(arguments = values.len(), "calling wrapped function eagerly");

                self.function.call(&Value::Undefined, &values).map(Bound::Value)
            }
            None => {
                let token = Token::applied(self.function.clone(), arguments);

                #[cfg(feature = "tracing")]
                tracing::trace!(arity = token.arity(), "deferring wrapped function");

                Ok(Bound::Deferred(token))
            }
        }
    }
}

impl From<Function> for FunctionWrapper {
    fn from(function: Function) -> Self {
        Self::new(function)
    }
}

/// The outcome of [`FunctionWrapper::bind`].
#[derive(Debug, Clone)]
pub enum Bound {
    /// Every argument was a literal and the function has already run.
    Value(Value),
    /// At least one argument was a placeholder.
    Deferred(Token),
}

impl Bound {
    /// Returns `true` for [`Bound::Deferred`].
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Returns the summed arity of the placeholder arguments, or zero once the
    /// function has run. See [`Token::arity`] for how named placeholders count.
    pub const fn arity(&self) -> usize {
        match self {
            Self::Value(_) => 0,
            Self::Deferred(token) => token.arity(),
        }
    }

    /// Returns the deferred token, if any.
    pub fn into_token(self) -> Option<Token> {
        match self {
            Self::Deferred(token) => Some(token),
            Self::Value(_) => None,
        }
    }

    /// Returns the eagerly computed value, if any.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// Produces the final value: the eager result as is, or the deferred token
    /// evaluated against `arguments`.
    ///
    /// # Errors
    ///
    /// Propagates any evaluation error of a deferred token.
    pub fn evaluate(&self, arguments: &[Value]) -> Result<Value> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Deferred(token) => token.evaluate(arguments),
        }
    }
}

impl From<Bound> for Argument {
    fn from(bound: Bound) -> Self {
        match bound {
            Bound::Value(value) => Self::Literal(value),
            Bound::Deferred(token) => Self::Placeholder(token),
        }
    }
}

/// Prepares `function` for partial application with placeholders.
pub const fn placeholderify(function: Function) -> FunctionWrapper {
    FunctionWrapper::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::evaluate::EvaluationError;
    use crate::placeholder::__;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn add() -> Function {
        Function::new(|arguments| {
            Ok(Value::from(
                arguments.iter().map(Value::to_number).sum::<f64>(),
            ))
        })
    }

    #[rstest]
    fn test_literals_call_immediately() {
        let calls = Rc::new(Cell::new(0));
        let counted = {
            let calls = Rc::clone(&calls);
            Function::new(move |arguments| {
                calls.set(calls.get() + 1);
                Ok(Value::from(arguments.len()))
            })
        };

        let bound = placeholderify(counted).bind(args![1, 2]).unwrap();

        assert_eq!(calls.get(), 1);
        assert!(!bound.is_deferred());
        assert_eq!(bound.into_value(), Some(Value::from(2)));
    }

    #[rstest]
    fn test_placeholder_defers_call() {
        let bound = placeholderify(add()).bind(args![__, 7]).unwrap();
        assert!(bound.is_deferred());
        assert_eq!(bound.arity(), 1);
        assert_eq!(bound.evaluate(&[Value::from(2)]), Ok(Value::from(9)));
    }

    #[rstest]
    fn test_property_placeholder_as_bound_argument() {
        let bound = placeholderify(add())
            .bind(args![__.property("attr2"), 7])
            .unwrap();
        let subject = Value::object([("attr2", 2)]);
        assert_eq!(bound.evaluate(&[subject]), Ok(Value::from(9)));
    }

    #[rstest]
    fn test_arity_sums_bound_placeholders() {
        let nested = __.method("concat", args![__]);
        let bound = placeholderify(add())
            .bind(args![__, nested, "x", __])
            .unwrap();
        assert_eq!(bound.arity(), 4);
    }

    #[rstest]
    fn test_deferred_requires_every_argument() {
        let bound = placeholderify(add()).bind(args![__, __]).unwrap();
        assert_eq!(
            bound.evaluate(&[Value::from(1)]),
            Err(EvaluationError::ArgumentPoolExhausted {
                requested: 1,
                remaining: 0
            })
        );
    }

    #[rstest]
    fn test_eager_errors_propagate() {
        let failing = Function::new(|_| Err(EvaluationError::thrown("nope")));
        assert_eq!(
            placeholderify(failing).bind(args![1]).unwrap_err(),
            EvaluationError::thrown("nope")
        );
    }

    #[rstest]
    fn test_deferred_token_composes_inside_chain() {
        let doubled = placeholderify(add()).bind(args![__, __.nth(1)]).unwrap();
        let token = __.method("concat", args![doubled]);
        assert_eq!(token.arity(), 3);
        assert_eq!(
            token.evaluate(&[Value::from("n="), Value::from(4)]),
            Ok(Value::from("n=8"))
        );
    }

    #[rstest]
    fn test_wrapper_is_reusable() {
        let wrapper = __.wrap(add());
        let first = wrapper.bind(args![__, 1]).unwrap();
        let second = wrapper.bind(args![__, 2]).unwrap();
        assert_eq!(first.evaluate(&[Value::from(1)]), Ok(Value::from(2)));
        assert_eq!(second.evaluate(&[Value::from(1)]), Ok(Value::from(3)));
        assert_eq!(wrapper.function(), FunctionWrapper::from(wrapper.function().clone()).function());
    }
}
