//! Placeholder tokens.

use std::fmt;
use std::rc::Rc;

use super::chain::{Arguments, Chain, Operation};
use super::Argument;
use crate::evaluate::{ChainEvaluator, Result};
use crate::value::{Function, Key, Value};

/// Where a token's subject comes from.
#[derive(Clone)]
pub(crate) enum Source {
    /// Withdrawn from the argument pool.
    Sequential,
    /// Read from a fixed absolute position of the argument list.
    Named(usize),
    /// The result of a wrapped function applied to its bound arguments.
    Applied(Rc<Application>),
}

/// A function together with the arguments bound to it.
pub(crate) struct Application {
    pub(crate) function: Function,
    pub(crate) arguments: Vec<Argument>,
}

/// A placeholder for a value supplied at evaluation time, optionally
/// followed by a recorded chain of property reads and method calls.
///
/// Tokens are immutable: [`property`](Self::property), [`index`](Self::index),
/// [`call`](Self::call) and [`method`](Self::method) return a new token that
/// shares the recorded prefix with the original. Branching from a stored
/// intermediate token therefore never affects the other branches.
///
/// # Arity
///
/// A token consumes evaluation-time arguments when it is evaluated or when it
/// appears as a call argument. A plain placeholder consumes one. Recording a
/// placeholder argument into a call adds that argument's arity. A named
/// placeholder reports arity one but reads its subject by absolute position
/// instead of withdrawing it.
///
/// # Examples
///
/// ```rust
/// use pointfree::prelude::*;
///
/// let weight = __.property("data").property("weight");
/// let subject = Value::object([("data", Value::object([("weight", 3)]))]);
/// assert_eq!(weight.apply(&subject), Ok(Value::from(3)));
///
/// let greet = __.method("concat", args![__]);
/// assert_eq!(greet.arity(), 2);
/// assert_eq!(
///     greet.evaluate(&[Value::from("Hello, "), Value::from("world")]),
///     Ok(Value::from("Hello, world"))
/// );
/// ```
#[derive(Clone)]
pub struct Token {
    source: Source,
    chain: Chain,
    arity: usize,
    demand: usize,
}

impl Token {
    /// Creates a plain placeholder: arity one, empty chain.
    pub const fn identity() -> Self {
        Self {
            source: Source::Sequential,
            chain: Chain::new(),
            arity: 1,
            demand: 1,
        }
    }

    /// Creates a named placeholder bound to absolute argument `index`.
    pub const fn named(index: usize) -> Self {
        Self {
            source: Source::Named(index),
            chain: Chain::new(),
            arity: 1,
            demand: 0,
        }
    }

    /// Creates a token that applies `function` to `arguments` when evaluated.
    pub(crate) fn applied(function: Function, arguments: Vec<Argument>) -> Self {
        let arity = arguments.iter().map(Argument::arity).sum();
        let demand = arguments.iter().map(Argument::demand).sum();
        Self {
            source: Source::Applied(Rc::new(Application {
                function,
                arguments,
            })),
            chain: Chain::new(),
            arity,
            demand,
        }
    }

    /// Records a property read.
    #[must_use]
    pub fn property(&self, key: impl Into<Key>) -> Self {
        Self {
            chain: self.chain.push(Operation::read(key.into())),
            ..self.clone()
        }
    }

    /// Records a read of integer index `index`.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.property(Key::Index(index))
    }

    /// Marks the last recorded property as invoked with `arguments`.
    ///
    /// Every placeholder among the arguments adds its arity to the returned
    /// token. Calling a property that is already invoked replaces its
    /// recorded arguments, and the replaced arguments no longer count. A
    /// token with an empty chain has no property to invoke; calling it
    /// returns the token unchanged.
    #[must_use]
    pub fn call<I, A>(&self, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        let Some(last) = self.chain.last() else {
            return self.clone();
        };
        let replaced = last.arguments();
        let arguments: Arguments = arguments.into_iter().map(Into::into).collect();
        let arity = self.arity - replaced.iter().map(Argument::arity).sum::<usize>()
            + arguments.iter().map(Argument::arity).sum::<usize>();
        let demand = self.demand - replaced.iter().map(Argument::demand).sum::<usize>()
            + arguments.iter().map(Argument::demand).sum::<usize>();
        let invoked = Operation::invoke(last.key().clone(), arguments);
        match self.chain.replace_last(invoked) {
            Some(chain) => Self {
                source: self.source.clone(),
                chain,
                arity,
                demand,
            },
            None => self.clone(),
        }
    }

    /// Records a method call: `property(name)` followed by `call(arguments)`.
    #[must_use]
    pub fn method<I, A>(&self, name: impl Into<Key>, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        self.property(name).call(arguments)
    }

    /// Returns the token's arity: one for its own subject plus the arity of
    /// every placeholder recorded as a call argument.
    ///
    /// Named placeholders count towards the arity but read their argument by
    /// absolute position, so a token that contains them may evaluate with
    /// fewer arguments than its arity.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of pool positions this token withdraws.
    pub(crate) const fn demand(&self) -> usize {
        self.demand
    }

    /// Returns the absolute argument index of a named placeholder.
    pub const fn bound_index(&self) -> Option<usize> {
        match self.source {
            Source::Named(index) => Some(index),
            Source::Sequential | Source::Applied(_) => None,
        }
    }

    /// Returns `true` if this token was produced by a function wrapper.
    pub const fn is_applied(&self) -> bool {
        matches!(self.source, Source::Applied(_))
    }

    /// Returns the recorded chain.
    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    pub(crate) const fn source(&self) -> &Source {
        &self.source
    }

    /// Evaluates the token against the full argument list.
    ///
    /// For a plain token the first argument is the subject and the rest feed
    /// the placeholders recorded in the chain. Surplus arguments are ignored,
    /// so a token can serve as a callback that receives extra positional
    /// arguments such as an element index.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`](crate::evaluate::EvaluationError) if a
    /// property is absent, an invoked property is not callable, too few
    /// arguments are supplied, or an invoked function fails.
    pub fn evaluate(&self, arguments: &[Value]) -> Result<Value> {
        ChainEvaluator::new().run(self, arguments)
    }

    /// Evaluates the token with `subject` as its only argument.
    ///
    /// # Errors
    ///
    /// See [`evaluate`](Self::evaluate).
    pub fn apply(&self, subject: &Value) -> Result<Value> {
        self.evaluate(std::slice::from_ref(subject))
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Token");
        match &self.source {
            Source::Sequential => {}
            Source::Named(index) => {
                debug.field("bound_index", index);
            }
            Source::Applied(application) => {
                debug
                    .field("function", &application.function)
                    .field("arguments", &application.arguments);
            }
        }
        debug
            .field("arity", &self.arity)
            .field("chain", &self.chain)
            .finish()
    }
}
