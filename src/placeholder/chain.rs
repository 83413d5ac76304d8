//! Recorded operation chains.
//!
//! A [`Chain`] is a persistent list of [`Operation`]s. Appending returns a
//! new chain that shares every existing link with the original:
//!
//! ```text
//! base     = [data]
//! weight   = base.push(weight) : [data] <- weight
//! length   = base.push(length) : [data] <- length   // shares [data]
//! ```
//!
//! Continuing two chains from the same intermediate chain therefore yields
//! two independent continuations; the intermediate chain is never mutated.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use super::Argument;
use crate::value::Key;

/// Inline capacity for recorded call arguments.
const INLINE_ARGUMENTS: usize = 4;

/// Arguments recorded for an invocation.
pub type Arguments = SmallVec<[Argument; INLINE_ARGUMENTS]>;

/// A single recorded step: read a property, or invoke it as a method.
#[derive(Clone)]
pub struct Operation {
    key: Key,
    invoked: bool,
    arguments: Arguments,
}

impl Operation {
    /// Creates a property read.
    pub fn read(key: Key) -> Self {
        Self {
            key,
            invoked: false,
            arguments: SmallVec::new(),
        }
    }

    /// Creates a method invocation.
    pub fn invoke(key: Key, arguments: Arguments) -> Self {
        Self {
            key,
            invoked: true,
            arguments,
        }
    }

    /// Returns the property key.
    pub const fn key(&self) -> &Key {
        &self.key
    }

    /// Returns `true` if the property is invoked as a method.
    pub const fn is_invoked(&self) -> bool {
        self.invoked
    }

    /// Returns the recorded call arguments.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.invoked {
            formatter
                .debug_tuple("Invoke")
                .field(&self.key)
                .field(&self.arguments.as_slice())
                .finish()
        } else {
            formatter.debug_tuple("Read").field(&self.key).finish()
        }
    }
}

struct Link {
    operation: Operation,
    previous: Option<Rc<Self>>,
}

/// A persistent, append-only list of operations.
#[derive(Clone, Default)]
pub struct Chain {
    last: Option<Rc<Link>>,
    length: usize,
}

impl Chain {
    /// Creates an empty chain.
    pub const fn new() -> Self {
        Self {
            last: None,
            length: 0,
        }
    }

    /// Returns the number of operations.
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if no operation has been recorded.
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the most recently recorded operation.
    pub fn last(&self) -> Option<&Operation> {
        self.last.as_ref().map(|link| &link.operation)
    }

    /// Returns a new chain with `operation` appended.
    #[must_use]
    pub fn push(&self, operation: Operation) -> Self {
        Self {
            last: Some(Rc::new(Link {
                operation,
                previous: self.last.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a new chain whose last operation is replaced, or `None` if the
    /// chain is empty.
    #[must_use]
    pub fn replace_last(&self, operation: Operation) -> Option<Self> {
        let last = self.last.as_ref()?;
        Some(Self {
            last: Some(Rc::new(Link {
                operation,
                previous: last.previous.clone(),
            })),
            length: self.length,
        })
    }

    /// Returns the operations in recording order.
    pub fn operations(&self) -> Vec<&Operation> {
        let mut operations = Vec::with_capacity(self.length);
        let mut cursor = self.last.as_deref();
        while let Some(link) = cursor {
            operations.push(&link.operation);
            cursor = link.previous.as_deref();
        }
        operations.reverse();
        operations
    }

    /// Returns `true` if `other` continues this chain without copying it.
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        let Some(own) = &self.last else {
            return true;
        };
        let mut cursor = other.last.as_ref();
        while let Some(link) = cursor {
            if Rc::ptr_eq(link, own) {
                return true;
            }
            cursor = link.previous.as_ref();
        }
        false
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // Unlink iteratively so that long chains do not overflow the stack.
        let mut cursor = self.last.take();
        while let Some(link) = cursor {
            match Rc::try_unwrap(link) {
                Ok(mut owned) => cursor = owned.previous.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.operations()).finish()
    }
}
