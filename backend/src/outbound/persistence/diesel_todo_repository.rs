//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoDetails, TodoId, TodoTitle};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewTodoRow, TodoRow, TodoUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    map_basic_pool_error(error, TodoRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TodoRepositoryError {
    map_basic_diesel_error(
        error,
        TodoRepositoryError::query,
        TodoRepositoryError::connection,
    )
}

impl TryFrom<TodoRow> for Todo {
    type Error = TodoRepositoryError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let title = TodoTitle::new(row.title).map_err(|err| {
            warn!(todo_id = %row.id, "stored todo failed validation");
            TodoRepositoryError::query(format!("stored todo {} is invalid: {err}", row.id))
        })?;
        let details = TodoDetails {
            title,
            description: row.description,
            is_complete: row.is_complete,
            priority: row.priority,
            due_date: row.due_date,
        };
        Ok(Todo::restore(
            TodoId::from_uuid(row.id),
            details,
            row.created_at,
            row.updated_at,
        ))
    }
}

fn new_row(todo: &Todo) -> NewTodoRow<'_> {
    NewTodoRow {
        id: *todo.id().as_uuid(),
        title: todo.title().as_str(),
        description: todo.description(),
        is_complete: todo.is_complete(),
        priority: todo.priority(),
        due_date: todo.due_date(),
        created_at: todo.created_at(),
        updated_at: todo.updated_at(),
    }
}

fn changeset(todo: &Todo) -> TodoUpdate<'_> {
    TodoUpdate {
        title: todo.title().as_str(),
        description: todo.description(),
        is_complete: todo.is_complete(),
        priority: todo.priority(),
        due_date: todo.due_date(),
        updated_at: todo.updated_at(),
    }
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(todos::table)
            .values(&new_row(todo))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                if is_unique_violation(&err) {
                    TodoRepositoryError::duplicate(todo.id())
                } else {
                    map_diesel_error(err)
                }
            })
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TodoRow> = todos::table
            .filter(todos::id.eq(id.as_uuid()))
            .select(TodoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(Todo::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .order((todos::created_at.asc(), todos::id.asc()))
            .select(TodoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    async fn update(&self, todo: &Todo) -> Result<bool, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(todos::table.filter(todos::id.eq(todo.id().as_uuid())))
            .set(&changeset(todo))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(todos::table.filter(todos::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn row() -> TodoRow {
        let created_at = Utc::now();
        TodoRow {
            id: Uuid::new_v4(),
            title: "Buy milk".to_owned(),
            description: Some("2%".to_owned()),
            is_complete: false,
            priority: 2,
            due_date: None,
            created_at,
            updated_at: created_at + Duration::seconds(30),
        }
    }

    #[rstest]
    fn row_converts_to_domain(row: TodoRow) {
        let expected_id = row.id;
        let expected_updated = row.updated_at;
        let todo = Todo::try_from(row).expect("valid row");

        assert_eq!(*todo.id().as_uuid(), expected_id);
        assert_eq!(todo.title().as_str(), "Buy milk");
        assert_eq!(todo.description(), Some("2%"));
        assert_eq!(todo.priority(), 2);
        assert_eq!(todo.updated_at(), expected_updated);
    }

    #[rstest]
    fn blank_stored_title_is_a_query_error(mut row: TodoRow) {
        row.title = "  ".to_owned();
        let err = Todo::try_from(row).expect_err("blank title rejected");

        assert!(matches!(err, TodoRepositoryError::Query { .. }));
    }

    #[rstest]
    fn domain_round_trips_through_rows(row: TodoRow) {
        let todo = Todo::try_from(row).expect("valid row");
        let insert = new_row(&todo);
        let update = changeset(&todo);

        assert_eq!(insert.id, *todo.id().as_uuid());
        assert_eq!(insert.created_at, todo.created_at());
        assert_eq!(update.title, "Buy milk");
        assert_eq!(update.updated_at, todo.updated_at());
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, TodoRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }
}
