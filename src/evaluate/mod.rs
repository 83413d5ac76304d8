//! Evaluation of recorded chains.
//!
//! A token is evaluated against a flat list of arguments:
//!
//! - [`ArgumentPool`]: sequential cursor that placeholders withdraw from
//! - [`ChainEvaluator`]: replays a token's chain against its subject
//! - [`EvaluationError`]: everything that can go wrong while replaying
//!
//! # Examples
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let describe = __.method("fun", args![__]);
//! let subject = Value::object([(
//!     "fun",
//!     Value::function(|arguments| Ok(Value::from(format!("arg: {}", arguments[0])))),
//! )]);
//!
//! assert_eq!(
//!     describe.evaluate(&[subject, Value::from("x")]),
//!     Ok(Value::from("arg: x"))
//! );
//! ```

mod error;
mod evaluator;
mod pool;

pub use error::{EvaluationError, Result};
pub use evaluator::ChainEvaluator;
pub use pool::ArgumentPool;
