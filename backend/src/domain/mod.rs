//! Domain primitives, aggregates and services.
//!
//! Purpose: define the todo aggregate, the ports adapters plug into and the
//! lifecycle service that enforces identity and timestamp ownership. Nothing
//! here depends on HTTP or database frameworks.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - Todo, TodoDetails, TodoId, TodoTitle: the todo aggregate.
//! - TodoService: implementation of the driving ports.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod todo;
mod todo_mapping;
pub mod todo_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::todo::{Todo, TodoDetails, TodoId, TodoTitle, TodoValidationError};
pub use self::todo_service::TodoService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
