//! Todo HTTP handlers.
//!
//! ```text
//! POST   /todo
//! GET    /todo
//! GET    /todo/{id}
//! PUT    /todo/{id}
//! DELETE /todo/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateTodoRequest, UpdateTodoRequest};
use crate::domain::{Error, Todo, TodoId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_optional_rfc3339_timestamp, parse_uuid,
};

const ID_FIELD: FieldName = FieldName::new("id");
const TITLE_FIELD: FieldName = FieldName::new("title");
const DUE_DATE_FIELD: FieldName = FieldName::new("dueDate");

/// Request payload for creating a todo.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequestBody {
    #[schema(example = "Buy milk")]
    pub title: Option<String>,
    #[schema(example = "2%")]
    pub description: Option<String>,
    pub is_complete: Option<bool>,
    pub priority: Option<i32>,
    /// RFC 3339 timestamp.
    #[schema(example = "2025-03-01T12:00:00Z")]
    pub due_date: Option<String>,
}

/// Request payload replacing every editable field of a todo.
///
/// Omitted optional fields are cleared.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequestBody {
    #[schema(example = "Buy milk")]
    pub title: Option<String>,
    #[schema(example = "skim")]
    pub description: Option<String>,
    pub is_complete: Option<bool>,
    pub priority: Option<i32>,
    /// RFC 3339 timestamp.
    pub due_date: Option<String>,
}

/// Todo representation returned to clients.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_complete: bool,
    pub priority: i32,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(value: Todo) -> Self {
        Self {
            id: value.id().to_string(),
            title: value.title().to_string(),
            description: value.description().map(str::to_owned),
            is_complete: value.is_complete(),
            priority: value.priority(),
            due_date: value.due_date().map(|due| due.to_rfc3339()),
            created_at: value.created_at().to_rfc3339(),
            updated_at: value.updated_at().to_rfc3339(),
        }
    }
}

/// Confirmation returned after creating a todo.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoResponse {
    #[schema(example = "Todo item successfully created")]
    pub message: String,
    pub id: String,
}

/// Confirmation returned after updating or deleting a todo.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TodoMessageResponse {
    pub message: String,
}

#[derive(Debug)]
struct ParsedTodo {
    title: String,
    description: Option<String>,
    is_complete: bool,
    priority: i32,
    due_date: Option<DateTime<Utc>>,
}

fn parse_todo_fields(
    title: Option<String>,
    description: Option<String>,
    is_complete: Option<bool>,
    priority: Option<i32>,
    due_date: Option<&str>,
) -> Result<ParsedTodo, Error> {
    Ok(ParsedTodo {
        title: title.ok_or_else(|| missing_field_error(TITLE_FIELD))?,
        description,
        is_complete: is_complete.unwrap_or(false),
        priority: priority.unwrap_or(0),
        due_date: parse_optional_rfc3339_timestamp(due_date, DUE_DATE_FIELD)?,
    })
}

impl TryFrom<CreateTodoRequestBody> for CreateTodoRequest {
    type Error = Error;

    fn try_from(body: CreateTodoRequestBody) -> Result<Self, Self::Error> {
        let parsed = parse_todo_fields(
            body.title,
            body.description,
            body.is_complete,
            body.priority,
            body.due_date.as_deref(),
        )?;
        Ok(Self {
            title: parsed.title,
            description: parsed.description,
            is_complete: parsed.is_complete,
            priority: parsed.priority,
            due_date: parsed.due_date,
        })
    }
}

impl TryFrom<UpdateTodoRequestBody> for UpdateTodoRequest {
    type Error = Error;

    fn try_from(body: UpdateTodoRequestBody) -> Result<Self, Self::Error> {
        let parsed = parse_todo_fields(
            body.title,
            body.description,
            body.is_complete,
            body.priority,
            body.due_date.as_deref(),
        )?;
        Ok(Self {
            title: parsed.title,
            description: parsed.description,
            is_complete: parsed.is_complete,
            priority: parsed.priority,
            due_date: parsed.due_date,
        })
    }
}

fn parse_todo_id(raw: &str) -> Result<TodoId, Error> {
    parse_uuid(raw, ID_FIELD).map(TodoId::from_uuid)
}

/// Create a todo.
#[utoipa::path(
    post,
    path = "/todo",
    request_body = CreateTodoRequestBody,
    responses(
        (status = 200, description = "Todo created", body = CreateTodoResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todo")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTodoRequestBody>,
) -> ApiResult<web::Json<CreateTodoResponse>> {
    let request = CreateTodoRequest::try_from(payload.into_inner())?;
    let todo = state.todos.create_todo(request).await?;
    Ok(web::Json(CreateTodoResponse {
        message: "Todo item successfully created".to_owned(),
        id: todo.id().to_string(),
    }))
}

/// List every todo, oldest first.
#[utoipa::path(
    get,
    path = "/todo",
    responses(
        (status = 200, description = "All todos", body = [TodoResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todo")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TodoResponse>>> {
    let todos = state.todos_query.list_todos().await?;
    Ok(web::Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Fetch one todo.
#[utoipa::path(
    get,
    path = "/todo/{id}",
    params(("id" = String, Path, description = "Todo identifier (UUID)")),
    responses(
        (status = 200, description = "The todo", body = TodoResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No todo with this identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/todo/{id}")]
pub async fn get_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TodoResponse>> {
    let id = parse_todo_id(&path)?;
    let todo = state.todos_query.get_todo(id).await?;
    Ok(web::Json(TodoResponse::from(todo)))
}

/// Replace the editable fields of a todo.
#[utoipa::path(
    put,
    path = "/todo/{id}",
    params(("id" = String, Path, description = "Todo identifier (UUID)")),
    request_body = UpdateTodoRequestBody,
    responses(
        (status = 200, description = "Todo updated", body = TodoMessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No todo with this identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/todo/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTodoRequestBody>,
) -> ApiResult<web::Json<TodoMessageResponse>> {
    let id = parse_todo_id(&path)?;
    let request = UpdateTodoRequest::try_from(payload.into_inner())?;
    state.todos.update_todo(id, request).await?;
    Ok(web::Json(TodoMessageResponse {
        message: format!("Todo item with id {id} successfully updated"),
    }))
}

/// Permanently delete a todo.
#[utoipa::path(
    delete,
    path = "/todo/{id}",
    params(("id" = String, Path, description = "Todo identifier (UUID)")),
    responses(
        (status = 200, description = "Todo deleted", body = TodoMessageResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No todo with this identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/todo/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TodoMessageResponse>> {
    let id = parse_todo_id(&path)?;
    state.todos.delete_todo(id).await?;
    Ok(web::Json(TodoMessageResponse {
        message: format!("Todo item with id {id} successfully deleted"),
    }))
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;
