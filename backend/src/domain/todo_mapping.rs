//! Projection of client requests onto editable todo fields.
//!
//! [`TodoDetails`] has no identity or timestamp fields, so these conversions
//! cannot overwrite server-owned state.

use super::ports::{CreateTodoRequest, UpdateTodoRequest};
use super::{TodoDetails, TodoTitle, TodoValidationError};

impl TryFrom<CreateTodoRequest> for TodoDetails {
    type Error = TodoValidationError;

    fn try_from(request: CreateTodoRequest) -> Result<Self, Self::Error> {
        let CreateTodoRequest {
            title,
            description,
            is_complete,
            priority,
            due_date,
        } = request;
        Ok(Self {
            title: TodoTitle::new(title)?,
            description,
            is_complete,
            priority,
            due_date,
        })
    }
}

impl TryFrom<UpdateTodoRequest> for TodoDetails {
    type Error = TodoValidationError;

    fn try_from(request: UpdateTodoRequest) -> Result<Self, Self::Error> {
        let UpdateTodoRequest {
            title,
            description,
            is_complete,
            priority,
            due_date,
        } = request;
        Ok(Self {
            title: TodoTitle::new(title)?,
            description,
            is_complete,
            priority,
            due_date,
        })
    }
}
