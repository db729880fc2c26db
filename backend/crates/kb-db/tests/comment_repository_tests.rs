mod common;

use common::{create_test_comment, create_test_pool, create_test_user, seed_board_with_column, seed_tasks};

use kb_db::{CommentRepository, TaskRepository};

use googletest::prelude::*;
use sqlx::SqlitePool;
use uuid::Uuid;

async fn seed_task(pool: &SqlitePool, owner_id: Uuid) -> Uuid {
    let (_, column) = seed_board_with_column(pool, owner_id).await;
    seed_tasks(pool, column.id, owner_id, &[0]).await[0].id
}

#[tokio::test]
async fn given_valid_comment_when_created_then_detail_includes_author() {
    // Given
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;
    let task_id = seed_task(&pool, user_id).await;
    let comment = create_test_comment(task_id, user_id);

    // When
    CommentRepository::create(&pool, &comment).await.unwrap();

    // Then
    let result = CommentRepository::find_detail(&pool, comment.id).await.unwrap();
    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.comment.content, eq(&comment.content));
    assert_that!(found.author.id, eq(user_id));
    assert_that!(found.author.name, eq("Test User"));
}

#[tokio::test]
async fn given_multiple_comments_when_find_by_task_then_oldest_first() {
    // Given
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;
    let task_id = seed_task(&pool, user_id).await;
    let mut ids = Vec::new();
    for _ in 0..3 {
        let comment = create_test_comment(task_id, user_id);
        CommentRepository::create(&pool, &comment).await.unwrap();
        ids.push(comment.id);
    }

    // When
    let comments = CommentRepository::find_by_task(&pool, task_id).await.unwrap();

    // Then
    let found: Vec<Uuid> = comments.iter().map(|c| c.comment.id).collect();
    assert_that!(found, eq(&ids));
}

#[tokio::test]
async fn given_comment_by_other_user_when_find_for_author_then_none() {
    // Given
    let pool = create_test_pool().await;
    let author_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();
    create_test_user(&pool, author_id).await;
    create_test_user(&pool, other_id).await;
    let task_id = seed_task(&pool, author_id).await;
    let comment = create_test_comment(task_id, author_id);
    CommentRepository::create(&pool, &comment).await.unwrap();

    // When
    let as_other = CommentRepository::find_for_author(&pool, comment.id, other_id)
        .await
        .unwrap();
    let as_author = CommentRepository::find_for_author(&pool, comment.id, author_id)
        .await
        .unwrap();

    // Then
    assert_that!(as_other, none());
    assert_that!(as_author, some(anything()));
}

#[tokio::test]
async fn given_task_with_comments_when_task_deleted_then_comments_cascade() {
    // Given
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;
    let task_id = seed_task(&pool, user_id).await;
    let comment = create_test_comment(task_id, user_id);
    CommentRepository::create(&pool, &comment).await.unwrap();

    // When
    TaskRepository::delete(&pool, task_id).await.unwrap();

    // Then
    let found = CommentRepository::find_detail(&pool, comment.id).await.unwrap();
    assert_that!(found, none());
}

#[tokio::test]
async fn given_comment_when_deleted_then_task_comment_count_drops() {
    // Given
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;
    let task_id = seed_task(&pool, user_id).await;
    let comment = create_test_comment(task_id, user_id);
    CommentRepository::create(&pool, &comment).await.unwrap();
    let before = TaskRepository::find_detail(&pool, task_id).await.unwrap().unwrap();

    // When
    let deleted = CommentRepository::delete(&pool, comment.id).await.unwrap();

    // Then
    assert_that!(deleted, eq(true));
    assert_that!(before.comment_count, eq(1));
    let after = TaskRepository::find_detail(&pool, task_id).await.unwrap().unwrap();
    assert_that!(after.comment_count, eq(0));
}
