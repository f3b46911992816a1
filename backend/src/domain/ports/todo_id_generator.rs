//! Port supplying identifiers for new todos.

use crate::domain::TodoId;

/// Source of fresh todo identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait TodoIdGenerator: Send + Sync {
    /// Produce an identifier not used by any stored todo.
    fn next_id(&self) -> TodoId;
}

/// Generator backed by random UUIDv4 values.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTodoIdGenerator;

impl TodoIdGenerator for RandomTodoIdGenerator {
    fn next_id(&self) -> TodoId {
        TodoId::random()
    }
}
