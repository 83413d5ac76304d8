//! Placeholders and recorded chains.
//!
//! Everything starts at the root accessor [`__`]. Reading a property, indexing
//! or calling a method on it records an [`Operation`] instead of performing
//! it, producing a [`Token`] that replays the recorded [`Chain`] once a subject
//! is supplied.
//!
//! - [`__.property(key)`](Accessor::property) / [`Token::property`]: record a read
//! - [`__.index(i)`](Accessor::index) / [`Token::index`]: record an index read
//! - [`Token::call`] / [`Token::method`]: record an invocation
//! - [`__.nth(i)`](Accessor::nth): a placeholder bound to argument `i`
//!
//! # Examples
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let first_letter = __.method("substr", args![0, 1]);
//! let letters: Result<Vec<Value>, _> = ["abc", "def"]
//!     .map(Value::from)
//!     .iter()
//!     .map(first_letter.mapper())
//!     .collect();
//!
//! assert_eq!(letters, Ok(vec![Value::from("a"), Value::from("d")]));
//! ```

mod accessor;
mod adapter;
mod argument;
mod chain;
mod token;

pub use accessor::{Accessor, __, named_placeholder, placeholder};
pub use argument::Argument;
pub use chain::{Arguments, Chain, Operation};
pub use token::Token;

pub(crate) use token::Source;

static_assertions::assert_not_impl_any!(Token: Send, Sync);
static_assertions::assert_impl_all!(Accessor: Copy, Send, Sync);
