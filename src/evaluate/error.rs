//! Errors raised while replaying a chain.
//!
//! Building a chain never inspects a subject, so it cannot fail; every error
//! in this module surfaces when a token is evaluated.

use crate::value::{Key, Value};

/// A specialized `Result` for evaluation.
pub type Result<T, E = EvaluationError> = std::result::Result<T, E>;

/// The ways evaluating a token can fail.
///
/// # Examples
///
/// ```rust
/// use pointfree::prelude::*;
///
/// let path = __.property("data").property("weight");
/// let error = path.apply(&Value::object([("label", "x")])).unwrap_err();
///
/// assert_eq!(
///     error.to_string(),
///     r#"property data is undefined in {"label":"x"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// A read or invoke operation named a property that is absent.
    #[error("property {key} is undefined in {subject}")]
    PropertyUndefined {
        /// The missing property.
        key: Key,
        /// Rendering of the value the property was looked up on.
        subject: String,
    },

    /// An invoke operation named a property that is not a function.
    #[error("property {key} is not a function in {subject}")]
    NotCallable {
        /// The property that was invoked.
        key: Key,
        /// Rendering of the value the property was looked up on.
        subject: String,
    },

    /// Fewer evaluation-time arguments were supplied than placeholders need.
    #[error(
        "argument pool exhausted: {requested} argument(s) requested but only {remaining} remain"
    )]
    ArgumentPoolExhausted {
        /// How many arguments the placeholder needed.
        requested: usize,
        /// How many were left in the pool.
        remaining: usize,
    },

    /// An invoked function raised an error.
    #[error("{message}")]
    Thrown {
        /// The error message.
        message: String,
    },
}

impl EvaluationError {
    /// Creates the error a function raises to abort evaluation.
    pub fn thrown(message: impl Into<String>) -> Self {
        Self::Thrown {
            message: message.into(),
        }
    }

    pub(crate) fn property_undefined(key: &Key, subject: &Value) -> Self {
        Self::PropertyUndefined {
            key: key.clone(),
            subject: subject.render(),
        }
    }

    pub(crate) fn not_callable(key: &Key, subject: &Value) -> Self {
        Self::NotCallable {
            key: key.clone(),
            subject: subject.render(),
        }
    }
}
