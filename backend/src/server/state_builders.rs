//! Builders for HTTP state from the configured repository.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use backend::domain::TodoService;
use backend::domain::ports::{RandomTodoIdGenerator, TodoRepository};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryTodoRepository;
use backend::outbound::persistence::DieselTodoRepository;

use super::ServerConfig;

fn state_for_repository<R>(repo: R) -> HttpState
where
    R: TodoRepository + 'static,
{
    let service = TodoService::new(
        Arc::new(repo),
        Arc::new(DefaultClock),
        Arc::new(RandomTodoIdGenerator),
    );
    HttpState::from_service(Arc::new(service))
}

/// Build HTTP state backed by PostgreSQL when a pool is configured, otherwise
/// by the process-local in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("serving todos from PostgreSQL");
            state_for_repository(DieselTodoRepository::new(pool.clone()))
        }
        None => {
            info!("no database configured; serving todos from memory");
            state_for_repository(InMemoryTodoRepository::new())
        }
    };
    web::Data::new(state)
}
