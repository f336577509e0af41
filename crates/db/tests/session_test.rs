//! Integration tests for the Session repository.

mod common;

use chrono::{Duration, Utc};
use common::{create_test_user, setup_db};
use condos_db::{SessionRepository, entities::sessions};
use sea_orm::{EntityTrait, PaginatorTrait, Set};

#[tokio::test]
async fn test_session_create_stores_hash() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let repo = SessionRepository::new(db.clone());

    let (raw_token, session) = repo
        .create(&user.id, Utc::now() + Duration::days(30))
        .await
        .expect("Failed to create session");

    assert_ne!(session.session_token, raw_token);
    assert_eq!(session.session_token, SessionRepository::hash_token(&raw_token));
    assert_eq!(session.user_id, user.id);
}

#[tokio::test]
async fn test_session_find_with_user() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let repo = SessionRepository::new(db.clone());

    let (raw_token, _) = repo
        .create(&user.id, Utc::now() + Duration::days(30))
        .await
        .expect("Failed to create session");

    let (session, found_user) = repo
        .find_with_user(&raw_token)
        .await
        .expect("Query failed")
        .expect("Session should exist");

    assert_eq!(session.user_id, user.id);
    assert_eq!(found_user.name.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn test_session_unknown_token() {
    let db = setup_db().await;
    let repo = SessionRepository::new(db.clone());

    let found = repo.find_with_user("not-a-token").await.expect("Query failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_session_expired_is_not_found() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let repo = SessionRepository::new(db.clone());

    let (raw_token, _) = repo
        .create(&user.id, Utc::now() - Duration::minutes(1))
        .await
        .expect("Failed to create session");

    let found = repo.find_with_user(&raw_token).await.expect("Query failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_session_extend_revives_expired() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let repo = SessionRepository::new(db.clone());

    let (raw_token, _) = repo
        .create(&user.id, Utc::now() - Duration::minutes(1))
        .await
        .expect("Failed to create session");

    let extended = repo
        .extend(&raw_token, Utc::now() + Duration::days(1))
        .await
        .expect("Failed to extend session");
    assert!(extended.is_some());

    let found = repo.find_with_user(&raw_token).await.expect("Query failed");
    assert!(found.is_some());

    let unknown = repo
        .extend("not-a-token", Utc::now() + Duration::days(1))
        .await
        .expect("Failed to extend session");
    assert!(unknown.is_none());
}

#[tokio::test]
async fn test_session_delete() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let repo = SessionRepository::new(db.clone());

    let (raw_token, _) = repo
        .create(&user.id, Utc::now() + Duration::days(30))
        .await
        .expect("Failed to create session");

    assert!(repo.delete(&raw_token).await.expect("Delete failed"));
    assert!(!repo.delete(&raw_token).await.expect("Delete failed"));

    let found = repo.find_with_user(&raw_token).await.expect("Query failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_session_delete_expired_keeps_live_sessions() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let repo = SessionRepository::new(db.clone());

    let (live, _) = repo
        .create(&user.id, Utc::now() + Duration::days(30))
        .await
        .expect("Failed to create session");
    for _ in 0..2 {
        repo.create(&user.id, Utc::now() - Duration::hours(1))
            .await
            .expect("Failed to create session");
    }

    let removed = repo.delete_expired().await.expect("Cleanup failed");
    assert_eq!(removed, 2);

    let found = repo.find_with_user(&live).await.expect("Query failed");
    assert!(found.is_some());
}

#[tokio::test]
async fn test_session_delete_expired_beyond_bind_limit() {
    const EXPIRED: usize = 34_000;

    let db = setup_db().await;
    let user = create_test_user(&db, "Ana").await;
    let expires = Utc::now() - Duration::hours(1);

    for batch in 0..EXPIRED / 1_000 {
        let rows = (0..1_000).map(|i| sessions::ActiveModel {
            session_token: Set(format!("expired-{batch}-{i}")),
            user_id: Set(user.id.clone()),
            expires: Set(expires.into()),
        });
        sessions::Entity::insert_many(rows)
            .exec(&db)
            .await
            .expect("Failed to insert sessions");
    }

    let repo = SessionRepository::new(db.clone());
    let (live, _) = repo
        .create(&user.id, Utc::now() + Duration::days(30))
        .await
        .expect("Failed to create session");

    let removed = repo.delete_expired().await.expect("Cleanup failed");
    assert_eq!(removed, EXPIRED as u64);

    let remaining = sessions::Entity::find()
        .count(&db)
        .await
        .expect("Failed to count sessions");
    assert_eq!(remaining, 1);
    assert!(
        repo.find_with_user(&live)
            .await
            .expect("Query failed")
            .is_some()
    );
}

#[test]
fn test_generated_tokens_are_unique_and_url_safe() {
    let a = SessionRepository::generate_token();
    let b = SessionRepository::generate_token();

    assert_ne!(a, b);
    assert!(
        a.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn test_hash_token_is_hex_sha256() {
    let hash = SessionRepository::hash_token("token");
    assert_eq!(hash.len(), 64);
    assert_eq!(hash, SessionRepository::hash_token("token"));
    assert_ne!(hash, SessionRepository::hash_token("other"));
}
