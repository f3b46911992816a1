//! Process-local `TodoRepository` used when no database is configured.
//!
//! Todos are kept in insertion order, which matches the creation-time
//! ordering of the Diesel adapter because the service stamps `created_at`
//! immediately before inserting. State is lost on restart.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoId};

/// In-memory implementation of the `TodoRepository` port.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> TodoRepositoryError {
    TodoRepositoryError::query("in-memory todo store lock poisoned")
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError> {
        let mut todos = self.todos.write().map_err(poisoned)?;
        if todos.iter().any(|stored| stored.id() == todo.id()) {
            return Err(TodoRepositoryError::duplicate(todo.id()));
        }
        todos.push(todo.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let todos = self.todos.read().map_err(poisoned)?;
        Ok(todos.iter().find(|todo| todo.id() == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let todos = self.todos.read().map_err(poisoned)?;
        Ok(todos.clone())
    }

    async fn update(&self, todo: &Todo) -> Result<bool, TodoRepositoryError> {
        let mut todos = self.todos.write().map_err(poisoned)?;
        match todos.iter_mut().find(|stored| stored.id() == todo.id()) {
            Some(stored) => {
                *stored = todo.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, TodoRepositoryError> {
        let mut todos = self.todos.write().map_err(poisoned)?;
        let before = todos.len();
        todos.retain(|todo| todo.id() != *id);
        Ok(todos.len() != before)
    }
}
