use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::database;
use crate::entities::v1::{personal_access_tokens, users};
use crate::models::v1::token::NewAccessToken;

/// Returns an in-memory SQLite database with all migrations applied
///
/// Each call returns a fresh database, so tests never share state.
///
/// # Panics
/// Panics if the connection or a migration fails. Tests should fail fast
/// when setup is broken.
pub async fn database() -> DatabaseConnection {
    let db = database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    database::migrate(&db)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn create_user(db: &DatabaseConnection, name: &str, email: &str) -> users::Model {
    users::Model::create(db, name, email)
        .await
        .expect("Failed to create test user")
}

/// Insert a user with a fixed primary key
pub async fn create_user_with_id(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    email: &str,
) -> users::Model {
    let now = Utc::now();
    let user = users::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        email_verified_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user.insert(db).await.expect("Failed to create test user")
}

/// A never-expiring, all-abilities token for `user`, in `{id}|{secret}` form
pub async fn token(db: &DatabaseConnection, user: &users::Model) -> String {
    issue(db, user, None).await.plain_text
}

pub async fn issue(
    db: &DatabaseConnection,
    user: &users::Model,
    expires_at: Option<DateTime<Utc>>,
) -> NewAccessToken {
    personal_access_tokens::Model::issue(db, user.id, "test", &[], expires_at, "")
        .await
        .expect("Failed to issue test token")
}

/// Move a token's creation time, for exercising the global expiration
pub async fn backdate(
    db: &DatabaseConnection,
    token: &personal_access_tokens::Model,
    created_at: DateTime<Utc>,
) -> personal_access_tokens::Model {
    let mut model: personal_access_tokens::ActiveModel = token.clone().into();
    model.created_at = Set(created_at);

    model.update(db).await.expect("Failed to backdate test token")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn database_is_migrated() {
    let db = database().await;

    assert!(db.ping().await.is_ok());
    assert!(
        users::Model::find_by_email(&db, "nobody@example.com")
            .await
            .unwrap()
            .is_none()
    );
}
