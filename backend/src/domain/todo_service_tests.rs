//! Tests for the todo lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::MockClock;
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::*;
use crate::domain::ports::{MockTodoIdGenerator, MockTodoRepository};
use crate::domain::{ErrorCode, TodoTitle};

const TODO_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn todo_id() -> TodoId {
    TodoId::from_uuid(Uuid::parse_str(TODO_ID).expect("valid uuid"))
}

#[fixture]
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn clock_at(now: DateTime<Utc>) -> Arc<dyn Clock> {
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(now);
    Arc::new(clock)
}

fn fixed_ids(id: TodoId) -> Arc<dyn TodoIdGenerator> {
    let mut ids = MockTodoIdGenerator::new();
    ids.expect_next_id().return_const(id);
    Arc::new(ids)
}

fn make_service(
    repo: MockTodoRepository,
    now: DateTime<Utc>,
    id: TodoId,
) -> TodoService<MockTodoRepository> {
    TodoService::new(Arc::new(repo), clock_at(now), fixed_ids(id))
}

fn stored_todo(id: TodoId, created_at: DateTime<Utc>) -> Todo {
    let details = TodoDetails {
        title: TodoTitle::new("Buy milk").expect("valid title"),
        description: Some("2%".to_owned()),
        is_complete: false,
        priority: 1,
        due_date: None,
    };
    Todo::new(id, details, created_at)
}

fn create_request(title: &str) -> CreateTodoRequest {
    CreateTodoRequest {
        title: title.to_owned(),
        description: Some("2%".to_owned()),
        ..CreateTodoRequest::default()
    }
}

#[rstest]
#[tokio::test]
async fn create_stamps_identity_and_timestamps(todo_id: TodoId, created_at: DateTime<Utc>) {
    let mut repo = MockTodoRepository::new();
    repo.expect_insert()
        .withf(move |todo| todo.id() == todo_id && todo.created_at() == created_at)
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(repo, created_at, todo_id);
    let todo = service
        .create_todo(create_request("Buy milk"))
        .await
        .expect("create succeeds");

    assert_eq!(todo.id(), todo_id);
    assert_eq!(todo.title().as_str(), "Buy milk");
    assert_eq!(todo.description(), Some("2%"));
    assert_eq!(todo.created_at(), todo.updated_at());
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn create_rejects_blank_title_without_persisting(
    #[case] title: &str,
    todo_id: TodoId,
    created_at: DateTime<Utc>,
) {
    let mut repo = MockTodoRepository::new();
    repo.expect_insert().never();

    let service = make_service(repo, created_at, todo_id);
    let error = service
        .create_todo(create_request(title))
        .await
        .expect_err("blank title rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().and_then(|details| details.get("field")),
        Some(&serde_json::json!("title"))
    );
}

#[rstest]
#[tokio::test]
async fn create_maps_duplicate_ids_to_internal_error(todo_id: TodoId, created_at: DateTime<Utc>) {
    let mut repo = MockTodoRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(move |_| Err(TodoRepositoryError::duplicate(todo_id)));

    let service = make_service(repo, created_at, todo_id);
    let error = service
        .create_todo(create_request("Buy milk"))
        .await
        .expect_err("duplicate surfaces");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn list_returns_empty_vector_when_store_is_empty(
    todo_id: TodoId,
    created_at: DateTime<Utc>,
) {
    let mut repo = MockTodoRepository::new();
    repo.expect_find_all().times(1).return_once(|| Ok(Vec::new()));

    let service = make_service(repo, created_at, todo_id);
    let todos = service.list_todos().await.expect("list succeeds");

    assert!(todos.is_empty());
}

#[rstest]
#[tokio::test]
async fn get_reports_not_found_for_unknown_id(todo_id: TodoId, created_at: DateTime<Utc>) {
    let mut repo = MockTodoRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = make_service(repo, created_at, todo_id);
    let error = service.get_todo(todo_id).await.expect_err("missing todo");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), format!("No todo item with id {TODO_ID} found"));
}

#[rstest]
#[tokio::test]
async fn get_surfaces_connection_failures_as_internal(
    todo_id: TodoId,
    created_at: DateTime<Utc>,
) {
    let mut repo = MockTodoRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(TodoRepositoryError::connection("pool exhausted")));

    let service = make_service(repo, created_at, todo_id);
    let error = service.get_todo(todo_id).await.expect_err("storage failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn update_overwrites_fields_and_refreshes_updated_at(
    todo_id: TodoId,
    created_at: DateTime<Utc>,
) {
    let later = created_at + Duration::minutes(10);
    let existing = stored_todo(todo_id, created_at);
    let mut repo = MockTodoRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_update()
        .withf(move |todo| todo.updated_at() == later && todo.created_at() == created_at)
        .times(1)
        .return_once(|_| Ok(true));

    let service = make_service(repo, later, todo_id);
    let request = UpdateTodoRequest {
        title: "Buy milk".to_owned(),
        description: Some("skim".to_owned()),
        is_complete: true,
        priority: 0,
        due_date: None,
    };
    let todo = service
        .update_todo(todo_id, request)
        .await
        .expect("update succeeds");

    assert_eq!(todo.id(), todo_id);
    assert_eq!(todo.description(), Some("skim"));
    assert!(todo.is_complete());
    assert_eq!(todo.priority(), 0);
    assert_eq!(todo.created_at(), created_at);
    assert_eq!(todo.updated_at(), later);
}

#[rstest]
#[tokio::test]
async fn update_reports_not_found_without_writing(todo_id: TodoId, created_at: DateTime<Utc>) {
    let mut repo = MockTodoRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_update().never();

    let service = make_service(repo, created_at, todo_id);
    let request = UpdateTodoRequest {
        title: "Buy milk".to_owned(),
        ..UpdateTodoRequest::default()
    };
    let error = service
        .update_todo(todo_id, request)
        .await
        .expect_err("missing todo");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_reports_not_found_when_row_vanishes(todo_id: TodoId, created_at: DateTime<Utc>) {
    let existing = stored_todo(todo_id, created_at);
    let mut repo = MockTodoRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_update().times(1).return_once(|_| Ok(false));

    let service = make_service(repo, created_at, todo_id);
    let request = UpdateTodoRequest {
        title: "Buy milk".to_owned(),
        ..UpdateTodoRequest::default()
    };
    let error = service
        .update_todo(todo_id, request)
        .await
        .expect_err("row deleted concurrently");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_validates_title_before_lookup(todo_id: TodoId, created_at: DateTime<Utc>) {
    let mut repo = MockTodoRepository::new();
    repo.expect_find_by_id().never();
    repo.expect_update().never();

    let service = make_service(repo, created_at, todo_id);
    let error = service
        .update_todo(todo_id, UpdateTodoRequest::default())
        .await
        .expect_err("blank title");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn delete_removes_existing_todo(todo_id: TodoId, created_at: DateTime<Utc>) {
    let mut repo = MockTodoRepository::new();
    repo.expect_delete()
        .withf(move |id| *id == todo_id)
        .times(1)
        .return_once(|_| Ok(true));

    let service = make_service(repo, created_at, todo_id);
    service.delete_todo(todo_id).await.expect("delete succeeds");
}

#[rstest]
#[tokio::test]
async fn repeated_delete_reports_not_found(todo_id: TodoId, created_at: DateTime<Utc>) {
    let mut repo = MockTodoRepository::new();
    let mut seq = mockall::Sequence::new();
    repo.expect_delete()
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_| Ok(true));
    repo.expect_delete()
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_| Ok(false));

    let service = make_service(repo, created_at, todo_id);
    service.delete_todo(todo_id).await.expect("first delete");
    let error = service
        .delete_todo(todo_id)
        .await
        .expect_err("second delete");

    assert_eq!(error.code(), ErrorCode::NotFound);
}
