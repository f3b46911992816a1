//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every todo and health endpoint together with the
//! schema wrappers that describe domain types without coupling them to
//! utoipa. The document backs Swagger UI in debug builds and is printed by
//! the `openapi-dump` binary.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::todos::{
    CreateTodoRequestBody, CreateTodoResponse, TodoMessageResponse, TodoResponse,
    UpdateTodoRequestBody,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo backend API",
        description = "CRUD interface for todo items plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::get_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CreateTodoRequestBody,
        UpdateTodoRequestBody,
        TodoResponse,
        CreateTodoResponse,
        TodoMessageResponse
    )),
    tags(
        (name = "todos", description = "Create, read, update and delete todo items"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
