//! # pointfree
//!
//! Point-free mappers, predicates and reducers built from recorded property
//! chains.
//!
//! ## Overview
//!
//! Instead of writing a closure such as `|subject| subject.data.weight`, record
//! the access once against the placeholder [`__`] and reuse the resulting
//! [`Token`](placeholder::Token) as an ordinary function:
//!
//! - **Placeholders**: `__`, `__.nth(i)`, and the chains built from them
//! - **Chains**: property reads and method calls, replayed lazily
//! - **Evaluation**: argument pools with strict left-to-right consumption
//! - **Wrapping**: partial application of any [`Function`](value::Function)
//!   with placeholder arguments
//! - **Values**: a small dynamic value model with built-in methods
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `tracing` events while evaluating
//! - `serde`: `Serialize`/`Deserialize` for [`Value`](value::Value) and
//!   [`Key`](value::Key)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let subjects = [
//!     Value::object([("data", Value::object([("weight", 3)]))]),
//!     Value::object([("data", Value::object([("weight", 9)]))]),
//! ];
//! let weights: Result<Vec<Value>, _> = subjects
//!     .iter()
//!     .map(__.property("data").property("weight").mapper())
//!     .collect();
//! assert_eq!(weights, Ok(vec![Value::from(3), Value::from(9)]));
//!
//! let greeting = Value::array(["Hello, ", "kind ", "stranger!"]);
//! let joined = __.method("reduce", args![__.method("concat", args![__]).into_function()]);
//! assert_eq!(joined.apply(&greeting), Ok(Value::from("Hello, kind stranger!")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and the `args!` macro.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::args;
    pub use crate::evaluate::EvaluationError;
    pub use crate::placeholder::{Accessor, Argument, Token, __, named_placeholder, placeholder};
    pub use crate::value::{Function, Key, Object, Value};
    pub use crate::wrap::{Bound, FunctionWrapper, placeholderify};
}

pub mod evaluate;
pub mod placeholder;
pub mod value;
pub mod wrap;

pub use placeholder::{__, named_placeholder, placeholder};
pub use wrap::placeholderify;
