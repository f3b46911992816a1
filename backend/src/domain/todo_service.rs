//! Todo lifecycle service.
//!
//! Implements the [`TodoCommand`] and [`TodoQuery`] driving ports on top of a
//! [`TodoRepository`]. The service owns identifier generation and timestamp
//! stamping; callers only ever supply editable fields.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{error, info};

use crate::domain::ports::{
    CreateTodoRequest, TodoCommand, TodoIdGenerator, TodoQuery, TodoRepository,
    TodoRepositoryError, UpdateTodoRequest,
};
use crate::domain::{Error, Todo, TodoDetails, TodoId, TodoValidationError};

/// Todo service implementing the driving ports.
#[derive(Clone)]
pub struct TodoService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn TodoIdGenerator>,
}

impl<R> TodoService<R> {
    /// Create a new service.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use backend::domain::TodoService;
    /// use backend::domain::ports::RandomTodoIdGenerator;
    /// use backend::outbound::memory::InMemoryTodoRepository;
    ///
    /// let service = TodoService::new(
    ///     Arc::new(InMemoryTodoRepository::new()),
    ///     Arc::new(DefaultClock),
    ///     Arc::new(RandomTodoIdGenerator),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>, ids: Arc<dyn TodoIdGenerator>) -> Self {
        Self { repo, clock, ids }
    }
}

fn map_repository_error(error: TodoRepositoryError) -> Error {
    match error {
        TodoRepositoryError::Connection { message } => {
            error!(%message, "todo repository unavailable");
            Error::internal(format!("todo repository unavailable: {message}"))
        }
        TodoRepositoryError::Query { message } => {
            Error::internal(format!("todo repository error: {message}"))
        }
        TodoRepositoryError::Duplicate { id } => {
            error!(todo_id = %id, "generated todo id collided with a stored todo");
            Error::internal(format!("todo {id} already exists"))
        }
    }
}

fn map_validation_error(error: TodoValidationError) -> Error {
    match error {
        TodoValidationError::EmptyTitle => {
            Error::invalid_request(error.to_string()).with_details(json!({
                "field": "title",
                "code": "empty_field",
            }))
        }
    }
}

fn todo_not_found(id: TodoId) -> Error {
    Error::not_found(format!("No todo item with id {id} found"))
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    async fn fetch_existing(&self, id: TodoId) -> Result<Todo, Error> {
        self.repo
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| todo_not_found(id))
    }
}

#[async_trait]
impl<R> TodoCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<Todo, Error> {
        let details = TodoDetails::try_from(request).map_err(map_validation_error)?;
        let todo = Todo::new(self.ids.next_id(), details, self.clock.utc());

        self.repo
            .insert(&todo)
            .await
            .map_err(map_repository_error)?;

        info!(todo_id = %todo.id(), "todo created");
        Ok(todo)
    }

    async fn update_todo(&self, id: TodoId, request: UpdateTodoRequest) -> Result<Todo, Error> {
        let details = TodoDetails::try_from(request).map_err(map_validation_error)?;
        let mut todo = self.fetch_existing(id).await?;
        todo.replace_details(details, self.clock.utc());

        let updated = self
            .repo
            .update(&todo)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(todo_not_found(id));
        }

        info!(todo_id = %id, "todo updated");
        Ok(todo)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), Error> {
        let deleted = self.repo.delete(&id).await.map_err(map_repository_error)?;
        if !deleted {
            return Err(todo_not_found(id));
        }

        info!(todo_id = %id, "todo deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> TodoQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn list_todos(&self) -> Result<Vec<Todo>, Error> {
        self.repo.find_all().await.map_err(map_repository_error)
    }

    async fn get_todo(&self, id: TodoId) -> Result<Todo, Error> {
        self.fetch_existing(id).await
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
