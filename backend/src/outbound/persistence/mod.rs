//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the durable [`TodoRepository`](crate::domain::ports::TodoRepository)
//! implementation backed by `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: Diesel and pool failures are mapped to
//!   [`TodoRepositoryError`](crate::domain::ports::TodoRepositoryError).
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};
//!
//! run_pending_migrations("postgres://localhost/todos").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/todos")).await?;
//! let repo = DieselTodoRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_todo_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::DieselTodoRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
