mod common;

use common::{create_test_pool, create_test_profile, create_test_user};

use reader_db::{ProfileRepository, UserRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_created_profile_when_found_by_user_then_matches() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user("profile@example.com");
    UserRepository::create(&pool, &user).await.unwrap();
    let profile = create_test_profile(user.id, "profiler");

    // When
    ProfileRepository::create(&pool, &profile).await.unwrap();

    // Then
    let found = ProfileRepository::find_by_user_id(&pool, user.id)
        .await
        .unwrap();
    assert_that!(found, some(anything()));
    assert_eq!(found.unwrap(), profile);
}

#[tokio::test]
async fn given_taken_username_when_creating_profile_then_error() {
    // Given: Two users, the first already owns "shared"
    let pool = create_test_pool().await;
    let first = create_test_user("first@example.com");
    let second = create_test_user("second@example.com");
    UserRepository::create(&pool, &first).await.unwrap();
    UserRepository::create(&pool, &second).await.unwrap();
    ProfileRepository::create(&pool, &create_test_profile(first.id, "shared"))
        .await
        .unwrap();

    // When
    let result = ProfileRepository::create(&pool, &create_test_profile(second.id, "shared")).await;

    // Then
    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_missing_user_when_creating_profile_then_foreign_key_error() {
    let pool = create_test_pool().await;

    let result = ProfileRepository::create(&pool, &create_test_profile(Uuid::new_v4(), "ghost")).await;

    assert_that!(result, err(anything()));
}
