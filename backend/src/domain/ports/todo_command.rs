//! Driving port for todo mutations.
//!
//! HTTP handlers call [`TodoCommand`] to create, replace and delete todos.
//! Requests carry raw client values; title validation and field projection
//! happen inside the domain.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Error, Todo, TodoId};

/// Request to create a todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
}

/// Request to overwrite every editable field of an existing todo.
///
/// Optional fields left unset are cleared on the stored todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
}

/// Driving port for todo mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Create a todo and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error when the title is blank and an
    /// internal error when storage fails.
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<Todo, Error>;

    /// Replace the editable fields of the todo identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no todo has `id`, an invalid-request
    /// error when the title is blank and an internal error when storage fails.
    async fn update_todo(&self, id: TodoId, request: UpdateTodoRequest) -> Result<Todo, Error>;

    /// Permanently remove the todo identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no todo has `id`, including on a
    /// repeated delete.
    async fn delete_todo(&self, id: TodoId) -> Result<(), Error>;
}
