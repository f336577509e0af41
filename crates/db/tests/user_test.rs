//! Integration tests for users, linked accounts and verification tokens.

mod common;

use chrono::{Duration, Utc};
use common::{create_test_user, setup_db};
use condos_db::{
    AccountRepository, CreateUserInput, LinkAccountInput, UserRepository,
    VerificationTokenRepository,
};

fn discord_account(user_id: &str, account_id: &str) -> LinkAccountInput {
    LinkAccountInput {
        user_id: user_id.to_string(),
        account_type: "oauth".to_string(),
        provider: "discord".to_string(),
        provider_account_id: account_id.to_string(),
        access_token: Some("access".to_string()),
        token_type: Some("bearer".to_string()),
        scope: Some("identify email".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_user_create_and_find() {
    let db = setup_db().await;
    let repo = UserRepository::new(db.clone());

    let user = repo
        .create(CreateUserInput {
            name: Some("Rui".to_string()),
            email: "Rui@Example.com".to_string(),
            image: None,
        })
        .await
        .expect("Failed to create user");

    assert_eq!(user.email, "rui@example.com");
    assert!(user.email_verified.is_none());

    let by_id = repo.find_by_id(&user.id).await.expect("Query failed");
    assert_eq!(by_id.map(|u| u.email), Some("rui@example.com".to_string()));

    let by_email = repo
        .find_by_email("RUI@example.com")
        .await
        .expect("Query failed");
    assert_eq!(by_email.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_account_link_and_lookup() {
    let db = setup_db().await;
    let user = create_test_user(&db, "Rui").await;
    let accounts = AccountRepository::new(db.clone());
    let users = UserRepository::new(db.clone());

    accounts
        .link(discord_account(&user.id, "1234"))
        .await
        .expect("Failed to link account");

    let linked = accounts
        .find_for_user(&user.id)
        .await
        .expect("Query failed");
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].account_type, "oauth");

    let owner = users
        .find_by_account("discord", "1234")
        .await
        .expect("Query failed");
    assert_eq!(owner.map(|u| u.id), Some(user.id));

    let nobody = users
        .find_by_account("discord", "9999")
        .await
        .expect("Query failed");
    assert!(nobody.is_none());
}

#[tokio::test]
async fn test_account_cannot_be_linked_twice() {
    let db = setup_db().await;
    let first = create_test_user(&db, "Rui").await;
    let second = create_test_user(&db, "Eva").await;
    let accounts = AccountRepository::new(db.clone());

    accounts
        .link(discord_account(&first.id, "1234"))
        .await
        .expect("Failed to link account");

    let result = accounts.link(discord_account(&second.id, "1234")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_verification_token_single_use() {
    let db = setup_db().await;
    let repo = VerificationTokenRepository::new(db.clone());

    let raw = repo
        .create("rui@example.com", Utc::now() + Duration::hours(24))
        .await
        .expect("Failed to create token");

    assert!(
        !repo
            .consume("eva@example.com", &raw)
            .await
            .expect("Consume failed")
    );
    assert!(
        repo.consume("rui@example.com", &raw)
            .await
            .expect("Consume failed")
    );
    assert!(
        !repo
            .consume("rui@example.com", &raw)
            .await
            .expect("Consume failed")
    );
}

#[tokio::test]
async fn test_verification_token_expired_is_rejected_and_removed() {
    let db = setup_db().await;
    let repo = VerificationTokenRepository::new(db.clone());

    let raw = repo
        .create("rui@example.com", Utc::now() - Duration::minutes(5))
        .await
        .expect("Failed to create token");

    assert!(
        !repo
            .consume("rui@example.com", &raw)
            .await
            .expect("Consume failed")
    );
    assert!(
        !repo
            .consume("rui@example.com", &raw)
            .await
            .expect("Consume failed")
    );
}
