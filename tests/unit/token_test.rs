//! Personal access tokens and the token guard, without HTTP

use std::time::Duration;

use actix_web::http::header::HeaderValue;
use chrono::{TimeDelta, Utc};
use lighter_sanctum::Error;
use lighter_sanctum::config::AuthConfig;
use lighter_sanctum::entities::v1::{personal_access_tokens::Model as Token, users};
use lighter_sanctum::middlewares::v1::auth::TokenGuard;
use lighter_sanctum::testing::setup;

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

#[actix_web::test]
async fn test_issue_stores_only_the_hash() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;

    let issued = Token::issue(&db, alice.id, "laptop", &[], None, "lsm_")
        .await
        .unwrap();

    let (id, secret) = issued.plain_text.split_once('|').unwrap();
    assert_eq!(id, issued.token.id.to_string());
    assert!(secret.starts_with("lsm_"));
    assert_eq!(issued.token.token, Token::hash(secret));
    assert_ne!(issued.token.token, secret);
    assert_eq!(issued.token.name, "laptop");
    assert_eq!(issued.token.abilities(), vec!["*"]);
}

#[actix_web::test]
async fn test_issue_keeps_explicit_abilities() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;
    let abilities = vec!["user:read".to_string()];

    let issued = Token::issue(&db, alice.id, "reader", &abilities, None, "")
        .await
        .unwrap();

    assert!(issued.token.can("user:read"));
    assert!(issued.token.cant("user:write"));
}

#[actix_web::test]
async fn test_find_token_by_id_and_secret() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;
    let issued = setup::issue(&db, &alice, None).await;
    let (id, secret) = issued.plain_text.split_once('|').unwrap();

    let found = Token::find_token(&db, &issued.plain_text).await.unwrap();
    assert_eq!(found, Some(issued.token.clone()));

    let found = Token::find_token(&db, secret).await.unwrap();
    assert_eq!(found, Some(issued.token.clone()));

    let found = Token::find_token(&db, &format!("{id}|{secret}x")).await.unwrap();
    assert_eq!(found, None, "a wrong secret must not match even with a valid id");

    let found = Token::find_token(&db, &format!("x{id}|{secret}")).await.unwrap();
    assert_eq!(found, None);
}

#[actix_web::test]
async fn test_token_resolves_its_owner() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;
    let issued = setup::issue(&db, &alice, None).await;

    assert_eq!(issued.token.user(&db).await.unwrap(), Some(alice.clone()));
    assert_eq!(alice.tokens(&db).await.unwrap(), vec![issued.token]);
}

#[actix_web::test]
async fn test_revoke_reports_whether_token_existed() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;
    let issued = setup::issue(&db, &alice, None).await;

    assert!(Token::revoke(&db, issued.token.id).await.unwrap());
    assert!(!Token::revoke(&db, issued.token.id).await.unwrap());
    assert_eq!(Token::find_token(&db, &issued.plain_text).await.unwrap(), None);
}

#[actix_web::test]
async fn test_users_are_normalized_and_found_by_email() {
    let db = setup::database().await;

    let alice = users::Model::create(&db, " alice ", " Alice@Example.com ")
        .await
        .unwrap();

    assert_eq!(alice.name, "alice");
    assert_eq!(alice.email, "alice@example.com");
    assert_eq!(
        users::Model::find_by_email(&db, "ALICE@example.com").await.unwrap(),
        Some(alice)
    );
}

#[actix_web::test]
async fn test_guard_attaches_user_and_token() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;
    let issued = setup::issue(&db, &alice, None).await;

    let principal = TokenGuard::default()
        .authenticate(&db, Some(&bearer(&issued.plain_text)))
        .await
        .unwrap();

    assert_eq!(principal.user, alice);
    assert_eq!(principal.token, issued.token);
}

#[actix_web::test]
async fn test_guard_rejects_missing_header() {
    let db = setup::database().await;

    let result = TokenGuard::default().authenticate(&db, None).await;

    assert!(matches!(result, Err(Error::Unauthorized { .. })));
}

#[actix_web::test]
async fn test_guard_applies_configured_expiration() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;
    let issued = setup::issue(&db, &alice, None).await;
    setup::backdate(&db, &issued.token, Utc::now() - TimeDelta::minutes(30)).await;

    let lenient = TokenGuard::new(&AuthConfig {
        expiration: Some(60),
        ..AuthConfig::default()
    });
    let strict = TokenGuard::new(&AuthConfig {
        expiration: Some(10),
        ..AuthConfig::default()
    });
    let header = bearer(&issued.plain_text);

    assert!(lenient.authenticate(&db, Some(&header)).await.is_ok());
    assert!(matches!(
        strict.authenticate(&db, Some(&header)).await,
        Err(Error::Unauthorized { .. })
    ));
}

#[actix_web::test]
async fn test_guard_accepts_tokens_under_an_unrepresentable_expiration() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;
    let issued = setup::issue(&db, &alice, None).await;

    let guard = TokenGuard::new(&AuthConfig {
        expiration: Some(9_223_372_036_854_775_807),
        ..AuthConfig::default()
    });

    let principal = guard
        .authenticate(&db, Some(&bearer(&issued.plain_text)))
        .await
        .unwrap();
    assert_eq!(principal.user, alice);
}

#[actix_web::test]
async fn test_expires_at_wins_over_missing_global_expiration() {
    let db = setup::database().await;
    let alice = setup::create_user(&db, "alice", "alice@example.com").await;
    let issued = setup::issue(&db, &alice, Some(Utc::now() - TimeDelta::seconds(1))).await;

    assert!(issued.token.is_expired(Utc::now(), None));
    assert!(!issued.token.is_expired(
        Utc::now() - TimeDelta::hours(1),
        Some(Duration::from_secs(7200))
    ));

    let result = TokenGuard::default()
        .authenticate(&db, Some(&bearer(&issued.plain_text)))
        .await;

    assert!(matches!(result, Err(Error::Unauthorized { .. })));
}
