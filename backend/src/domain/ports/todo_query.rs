//! Driving port for todo reads.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoId};

/// Read-only access to todos for inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// Every stored todo, oldest first. Empty when nothing is stored.
    async fn list_todos(&self) -> Result<Vec<Todo>, Error>;

    /// The todo identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no todo has `id`.
    async fn get_todo(&self, id: TodoId) -> Result<Todo, Error>;
}
