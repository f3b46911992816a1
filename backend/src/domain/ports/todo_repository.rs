//! Port for todo persistence.
//!
//! The [`TodoRepository`] trait is the only way the domain reaches stored
//! todos. Adapters translate between their storage model and [`Todo`] and
//! report failures through [`TodoRepositoryError`].

use async_trait::async_trait;

use crate::domain::{Todo, TodoId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by todo repository adapters.
    pub enum TodoRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "todo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "todo repository query failed: {message}",
        /// A todo with the same identifier is already stored.
        Duplicate { id: TodoId } =>
            "todo {id} already exists",
    }
}

/// Port for todo storage and retrieval.
///
/// Listing order is ascending creation time, ties broken by identifier.
/// `update` and `delete` report whether a row was affected so callers can
/// distinguish a missing todo from a storage failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Store a new todo.
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError>;

    /// Fetch a todo by identifier, `None` when absent.
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Fetch every stored todo.
    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Overwrite the stored row matching `todo.id()`.
    ///
    /// Returns `false` when no such row exists.
    async fn update(&self, todo: &Todo) -> Result<bool, TodoRepositoryError>;

    /// Remove the todo with the given identifier.
    ///
    /// Returns `false` when no such row exists.
    async fn delete(&self, id: &TodoId) -> Result<bool, TodoRepositoryError>;
}
