mod common;

use common::create_test_pool;

use kb_core::User;
use kb_db::UserRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_new_user_when_created_then_found_by_id_and_email() {
    // Given
    let pool = create_test_pool().await;
    let user = User::new(Uuid::new_v4(), "ada@example.com".to_string(), "Ada".to_string());

    // When
    UserRepository::create(&pool, &user).await.unwrap();

    // Then
    let by_id = UserRepository::find_by_id(&pool, user.id).await.unwrap();
    assert_that!(by_id, some(anything()));
    assert_that!(by_id.unwrap().name, eq("Ada"));

    let by_email = UserRepository::find_by_email(&pool, "ADA@example.com")
        .await
        .unwrap();
    assert_that!(by_email.map(|u| u.id), some(eq(user.id)));
}

#[tokio::test]
async fn given_existing_email_when_created_again_then_unique_violation() {
    // Given
    let pool = create_test_pool().await;
    let first = User::new(Uuid::new_v4(), "dup@example.com".to_string(), "One".to_string());
    UserRepository::create(&pool, &first).await.unwrap();

    // When
    let second = User::new(Uuid::new_v4(), "dup@example.com".to_string(), "Two".to_string());
    let result = UserRepository::create(&pool, &second).await;

    // Then
    let err = result.unwrap_err();
    assert_that!(err.is_unique_violation(), eq(true));
}

#[tokio::test]
async fn given_existing_user_when_ensure_exists_then_row_is_left_alone() {
    // Given
    let pool = create_test_pool().await;
    let user = User::new(Uuid::new_v4(), "keep@example.com".to_string(), "Keep".to_string());
    UserRepository::create(&pool, &user).await.unwrap();

    // When
    UserRepository::ensure_exists(&pool, user.id, "other@example.com", "Other")
        .await
        .unwrap();

    // Then
    let found = UserRepository::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_that!(found.email, eq("keep@example.com"));
    assert_that!(found.name, eq("Keep"));
}

#[tokio::test]
async fn given_unknown_id_when_find_by_id_then_none() {
    let pool = create_test_pool().await;

    let result = UserRepository::find_by_id(&pool, Uuid::new_v4()).await.unwrap();

    assert_that!(result, none());
}
