//! Chain replay.

use super::{ArgumentPool, EvaluationError, Result};
use crate::placeholder::{Argument, Operation, Source, Token};
use crate::value::Value;

/// Replays recorded chains against evaluation-time arguments.
///
/// Evaluation proceeds in two steps. First the token's subject is resolved:
///
/// - a plain token withdraws the next argument from the pool;
/// - a named token reads its bound position from the full argument list
///   without moving the pool;
/// - an application token calls its wrapped function with the substituted
///   bound arguments.
///
/// Then every recorded operation is replayed in order. A read replaces the
/// current value with one of its properties. An invoke looks the method up on
/// the current value, substitutes its placeholder arguments and calls the
/// method with the current value as receiver.
///
/// Placeholder arguments withdraw exactly their own demand from the pool they
/// are evaluated in, left to right, so consumption is depth-first across the
/// whole chain.
///
/// # Examples
///
/// ```rust
/// use pointfree::evaluate::{ArgumentPool, ChainEvaluator};
/// use pointfree::prelude::*;
///
/// let evaluator = ChainEvaluator::new();
/// let token = __.method("concat", args![__, "!"]);
/// let arguments = [Value::from("hi"), Value::from(" there"), Value::from("ignored")];
///
/// let mut pool = ArgumentPool::new(&arguments);
/// assert_eq!(evaluator.evaluate(&token, &mut pool), Ok(Value::from("hi there!")));
/// assert_eq!(pool.remaining(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainEvaluator;

#[allow(clippy::unused_self)]
impl ChainEvaluator {
    /// Creates an evaluator.
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates `token` against a fresh pool over `arguments`.
    ///
    /// # Errors
    ///
    /// Returns the first [`EvaluationError`] raised while replaying the chain.
    pub fn run(&self, token: &Token, arguments: &[Value]) -> Result<Value> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            arity = token.arity(),
            arguments = arguments.len(),
            operations = token.chain().len(),
            "evaluating token"
        );

        let mut pool = ArgumentPool::new(arguments);
        let result = self.evaluate(token, &mut pool);

        #[cfg(feature = "tracing")]
        if let Err(error) = &result {
            tracing::debug!(%error, "evaluation failed");
        }

        result
    }

    /// Evaluates `token`, withdrawing its arguments from `pool`.
    ///
    /// # Errors
    ///
    /// Returns the first [`EvaluationError`] raised while replaying the chain.
    pub fn evaluate(&self, token: &Token, pool: &mut ArgumentPool<'_>) -> Result<Value> {
        let subject = self.subject(token, pool)?;
        token
            .chain()
            .operations()
            .into_iter()
            .try_fold(subject, |current, operation| {
                self.replay(operation, current, pool)
            })
    }

    fn subject(&self, token: &Token, pool: &mut ArgumentPool<'_>) -> Result<Value> {
        match token.source() {
            Source::Sequential => pool.next_argument(),
            Source::Named(index) => Ok(pool.named(*index)),
            Source::Applied(application) => {
                let arguments = self.substitute(&application.arguments, pool)?;
                application.function.call(&Value::Undefined, &arguments)
            }
        }
    }

    fn replay(
        &self,
        operation: &Operation,
        current: Value,
        pool: &mut ArgumentPool<'_>,
    ) -> Result<Value> {
        let key = operation.key();

        #[cfg(feature = "tracing")]
        tracing::trace!(%key, invoked = operation.is_invoked(), "replaying operation");

        let property = current
            .get(key)
            .ok_or_else(|| EvaluationError::property_undefined(key, &current))?;
        if !operation.is_invoked() {
            return Ok(property);
        }

        let Value::Function(method) = property else {
            return Err(EvaluationError::not_callable(key, &current));
        };
        let arguments = self.substitute(operation.arguments(), pool)?;
        method.call(&current, &arguments)
    }

    fn substitute(
        &self,
        arguments: &[Argument],
        pool: &mut ArgumentPool<'_>,
    ) -> Result<Vec<Value>> {
        arguments
            .iter()
            .map(|argument| match argument {
                Argument::Literal(value) => Ok(value.clone()),
                Argument::Placeholder(token) => {
                    let mut scoped = pool.withdraw(token.demand())?;
                    self.evaluate(token, &mut scoped)
                }
            })
            .collect()
    }
}
