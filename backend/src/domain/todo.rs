//! Todo item aggregate.
//!
//! A [`Todo`] couples server-owned identity and timestamps with the set of
//! client-editable fields held in [`TodoDetails`]. Only [`Todo::new`] and
//! [`Todo::replace_details`] write timestamps; both take the clock reading
//! from the caller so the service stays deterministic under test.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Validation errors raised while constructing todo values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoValidationError {
    /// Title was empty or contained only whitespace.
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Stable todo identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Non-blank todo title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate and construct a title.
    ///
    /// The value is stored as given; only blank input is rejected.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::TodoTitle;
    ///
    /// assert!(TodoTitle::new("Buy milk").is_ok());
    /// assert!(TodoTitle::new("   ").is_err());
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, TodoValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }

    /// Borrow the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TodoTitle> for String {
    fn from(value: TodoTitle) -> Self {
        value.0
    }
}

/// Client-editable fields of a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDetails {
    pub title: TodoTitle,
    pub description: Option<String>,
    pub is_complete: bool,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
}

impl TodoDetails {
    /// Details with the given title and every other field at its default.
    #[must_use]
    pub fn titled(title: TodoTitle) -> Self {
        Self {
            title,
            description: None,
            is_complete: false,
            priority: 0,
            due_date: None,
        }
    }
}

/// A stored todo item.
///
/// ## Invariants
/// - `id` and `created_at` never change after construction.
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    details: TodoDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a brand new todo stamped at `now`.
    #[must_use]
    pub fn new(id: TodoId, details: TodoDetails, now: DateTime<Utc>) -> Self {
        Self {
            id,
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a todo from persisted state.
    ///
    /// An `updated_at` earlier than `created_at` is lifted to `created_at`.
    #[must_use]
    pub fn restore(
        id: TodoId,
        details: TodoDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    /// Overwrite every editable field and refresh `updated_at`.
    ///
    /// A clock reading older than `created_at` is clamped so the ordering
    /// invariant holds even when the wall clock steps backwards.
    pub fn replace_details(&mut self, details: TodoDetails, now: DateTime<Utc>) {
        self.details = details;
        self.updated_at = now.max(self.created_at);
    }

    /// Server-assigned identifier.
    #[must_use]
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Borrow the editable fields.
    #[must_use]
    pub fn details(&self) -> &TodoDetails {
        &self.details
    }

    /// Validated title.
    #[must_use]
    pub fn title(&self) -> &TodoTitle {
        &self.details.title
    }

    /// Optional free-form description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    /// Whether the todo has been completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.details.is_complete
    }

    /// Client-chosen priority, `0` by default.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.details.priority
    }

    /// Optional due date.
    #[must_use]
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.details.due_date
    }

    /// Creation timestamp, fixed for the todo's lifetime.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the last write.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
