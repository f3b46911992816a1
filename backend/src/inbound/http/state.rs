//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TodoCommand, TodoQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos: Arc<dyn TodoCommand>,
    pub todos_query: Arc<dyn TodoQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(todos: Arc<dyn TodoCommand>, todos_query: Arc<dyn TodoQuery>) -> Self {
        Self { todos, todos_query }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use backend::domain::TodoService;
    /// use backend::domain::ports::RandomTodoIdGenerator;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryTodoRepository;
    ///
    /// let service = Arc::new(TodoService::new(
    ///     Arc::new(InMemoryTodoRepository::new()),
    ///     Arc::new(DefaultClock),
    ///     Arc::new(RandomTodoIdGenerator),
    /// ));
    /// let state = HttpState::from_service(service);
    /// # let _ = state;
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: TodoCommand + TodoQuery + 'static,
    {
        Self {
            todos: service.clone(),
            todos_query: service,
        }
    }
}
