//! Integration tests for the board REST API

mod common;

use common::{TestClient, create_test_app_state, create_test_user, id_of};

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn given_registered_user_when_creating_board_then_starter_columns_are_numbered_from_zero() {
    // Given
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool).await;
    let client = TestClient::new(&state, user);

    // When
    let (status, json) = client
        .post("/api/v1/boards", json!({ "name": "  Launch plan  " }))
        .await;

    // Then
    assert_eq!(status, StatusCode::CREATED);
    let board = &json["board"];
    assert_eq!(board["name"], "Launch plan");
    assert_eq!(board["owner_id"], user.to_string());
    assert_eq!(board["column_count"], 3);

    let columns: Vec<(&str, i64)> = board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["name"].as_str().unwrap(), c["order"].as_i64().unwrap()))
        .collect();
    assert_eq!(
        columns,
        vec![("To Do", 0), ("In Progress", 1), ("Done", 2)]
    );
}

#[tokio::test]
async fn given_unregistered_user_when_creating_board_then_not_found() {
    let state = create_test_app_state().await;
    let client = TestClient::new(&state, Uuid::new_v4());

    let (status, json) = client
        .post("/api/v1/boards", json!({ "name": "Orphan" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn given_blank_name_when_creating_board_then_validation_error_on_name() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool).await;
    let client = TestClient::new(&state, user);

    let (status, json) = client.post("/api/v1/boards", json!({ "name": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn given_malformed_json_when_creating_board_then_bad_request() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool).await;
    let client = TestClient::new(&state, user);

    let (status, json) = client.post("/api/v1/boards", json!({ "title": 42 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn given_two_users_when_listing_boards_then_each_sees_only_their_own() {
    // Given
    let state = create_test_app_state().await;
    let alice = TestClient::new(&state, create_test_user(&state.pool).await);
    let bob = TestClient::new(&state, create_test_user(&state.pool).await);
    alice.create_board("First").await;
    alice.create_board("Second").await;
    bob.create_board("Bob's").await;

    // When
    let (status, json) = alice.get("/api/v1/boards").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    let boards = json["boards"].as_array().unwrap();
    let names: Vec<&str> = boards.iter().map(|b| b["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Second", "First"]);
    assert!(boards.iter().all(|b| b["column_count"] == 3));
    assert!(boards.iter().all(|b| b.get("columns").is_none()));
}

#[tokio::test]
async fn given_another_users_board_when_fetching_then_not_found() {
    let state = create_test_app_state().await;
    let alice = TestClient::new(&state, create_test_user(&state.pool).await);
    let bob = TestClient::new(&state, create_test_user(&state.pool).await);
    let board = alice.create_board("Private").await;

    let (status, _) = bob.get(&format!("/api/v1/boards/{}", id_of(&board))).await;
    let (missing_status, _) = bob
        .get(&format!("/api/v1/boards/{}", Uuid::new_v4()))
        .await;

    // Foreign and missing look the same
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_malformed_board_id_when_fetching_then_validation_error() {
    let state = create_test_app_state().await;
    let client = TestClient::new(&state, create_test_user(&state.pool).await);

    let (status, json) = client.get("/api/v1/boards/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "board_id");
}

#[tokio::test]
async fn given_board_with_tasks_when_deleted_then_tasks_are_gone() {
    // Given
    let state = create_test_app_state().await;
    let client = TestClient::new(&state, create_test_user(&state.pool).await);
    let board = client.create_board("Doomed").await;
    let task = client
        .create_task(&common::column_id(&board, 0), "Write tests")
        .await;

    // When
    let (status, body) = client
        .delete(&format!("/api/v1/boards/{}", id_of(&board)))
        .await;

    // Then
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
    let (board_status, _) = client
        .get(&format!("/api/v1/boards/{}", id_of(&board)))
        .await;
    let (task_status, _) = client.get(&format!("/api/v1/tasks/{}", id_of(&task))).await;
    assert_eq!(board_status, StatusCode::NOT_FOUND);
    assert_eq!(task_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_another_users_board_when_deleting_then_not_found_and_board_survives() {
    let state = create_test_app_state().await;
    let alice = TestClient::new(&state, create_test_user(&state.pool).await);
    let bob = TestClient::new(&state, create_test_user(&state.pool).await);
    let board = alice.create_board("Keep").await;

    let (status, _) = bob
        .delete(&format!("/api/v1/boards/{}", id_of(&board)))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let (alice_status, _) = alice
        .get(&format!("/api/v1/boards/{}", id_of(&board)))
        .await;
    assert_eq!(alice_status, StatusCode::OK);
}
