//! Sequential cursor over evaluation-time arguments.

use super::{EvaluationError, Result};
use crate::value::Value;

/// A cursor over a window of the evaluation-time argument list.
///
/// Sequential placeholders withdraw arguments from the pool in order. Every
/// pool, including the scoped sub-pools returned by [`withdraw`](Self::withdraw),
/// keeps a view of the full argument list so that named placeholders can read
/// by absolute position at any nesting depth.
///
/// # Examples
///
/// ```rust
/// use pointfree::evaluate::ArgumentPool;
/// use pointfree::value::Value;
///
/// let arguments = [Value::from(1), Value::from(2), Value::from(3)];
/// let mut pool = ArgumentPool::new(&arguments);
///
/// let first_two = pool.withdraw(2).unwrap();
/// assert_eq!(first_two.window(), &arguments[..2]);
/// assert_eq!(pool.remaining(), 1);
/// assert_eq!(pool.named(0), Value::from(1));
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentPool<'a> {
    arguments: &'a [Value],
    cursor: usize,
    end: usize,
}

impl<'a> ArgumentPool<'a> {
    /// Creates a pool over the whole argument list.
    pub const fn new(arguments: &'a [Value]) -> Self {
        Self {
            arguments,
            cursor: 0,
            end: arguments.len(),
        }
    }

    /// Returns the full argument list, independent of the window.
    pub const fn arguments(&self) -> &'a [Value] {
        self.arguments
    }

    /// Returns the arguments not yet withdrawn from this pool.
    pub fn window(&self) -> &'a [Value] {
        &self.arguments[self.cursor..self.end]
    }

    /// Returns the absolute position of the cursor.
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Returns how many arguments are left.
    pub const fn remaining(&self) -> usize {
        self.end - self.cursor
    }

    /// Withdraws the next `count` arguments as a scoped sub-pool.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::ArgumentPoolExhausted`] if fewer than
    /// `count` arguments remain; the cursor does not move in that case.
    pub fn withdraw(&mut self, count: usize) -> Result<Self> {
        let remaining = self.remaining();
        if remaining < count {
            return Err(EvaluationError::ArgumentPoolExhausted {
                requested: count,
                remaining,
            });
        }
        let scoped = Self {
            arguments: self.arguments,
            cursor: self.cursor,
            end: self.cursor + count,
        };
        self.cursor += count;
        Ok(scoped)
    }

    /// Withdraws a single argument.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::ArgumentPoolExhausted`] if the pool is empty.
    pub fn next_argument(&mut self) -> Result<Value> {
        let scoped = self.withdraw(1)?;
        Ok(scoped.window()[0].clone())
    }

    /// Reads the argument at absolute position `index`.
    ///
    /// Out-of-range positions yield [`Value::Undefined`].
    pub fn named(&self, index: usize) -> Value {
        self.arguments.get(index).cloned().unwrap_or_default()
    }
}
