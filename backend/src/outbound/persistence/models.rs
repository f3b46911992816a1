//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::todos;

/// Row struct for reading from the todos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub is_complete: bool,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset for replacing the editable fields of a todo.
///
/// `treat_none_as_null` makes a cleared description or due date overwrite the
/// stored value instead of being skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct TodoUpdate<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub is_complete: bool,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}
