//! Call arguments: literal values or placeholders.

use std::rc::Rc;

use super::{Accessor, Token};
use crate::value::{Function, Object, Value};

/// An argument recorded for a method call or a wrapped function.
///
/// Literals are passed through unchanged at evaluation time; placeholders
/// are replaced by the value they evaluate to.
#[derive(Debug, Clone)]
pub enum Argument {
    /// A fixed value.
    Literal(Value),
    /// A value supplied at evaluation time.
    Placeholder(Token),
}

impl Argument {
    /// Returns `true` for [`Argument::Placeholder`].
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Returns the arity this argument contributes to its enclosing token.
    pub const fn arity(&self) -> usize {
        match self {
            Self::Literal(_) => 0,
            Self::Placeholder(token) => token.arity(),
        }
    }

    /// Returns how many pool positions this argument withdraws.
    pub(crate) const fn demand(&self) -> usize {
        match self {
            Self::Literal(_) => 0,
            Self::Placeholder(token) => token.demand(),
        }
    }
}

impl From<Token> for Argument {
    fn from(token: Token) -> Self {
        Self::Placeholder(token)
    }
}

impl From<&Token> for Argument {
    fn from(token: &Token) -> Self {
        Self::Placeholder(token.clone())
    }
}

impl From<Accessor> for Argument {
    fn from(accessor: Accessor) -> Self {
        Self::Placeholder(accessor.token())
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&Value> for Argument {
    fn from(value: &Value) -> Self {
        Self::Literal(value.clone())
    }
}

macro_rules! literal_argument {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Argument {
                fn from(value: $source) -> Self {
                    Self::Literal(Value::from(value))
                }
            }
        )*
    };
}

literal_argument!(
    bool,
    f64,
    i32,
    u32,
    i64,
    usize,
    char,
    &str,
    String,
    Rc<str>,
    Object,
    Function
);

/// Builds a `Vec<Argument>` from a mix of literals and placeholders.
///
/// Each element is converted with [`Argument::from`], so tokens, the root
/// accessor `__`, and anything convertible into a [`Value`] can be mixed.
///
/// # Examples
///
/// ```rust
/// use pointfree::prelude::*;
///
/// let joined = __.method("concat", args![",", __]);
/// let result = joined.evaluate(&[Value::from("apple"), Value::from("banana")]);
/// assert_eq!(result, Ok(Value::from("apple,banana")));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::placeholder::Argument>::new()
    };
    ($($argument:expr),+ $(,)?) => {
        ::std::vec![$($crate::placeholder::Argument::from($argument)),+]
    };
}
