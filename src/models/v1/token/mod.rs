use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use sea_orm::prelude::*;
use sea_orm::{NotSet, Set};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::entities::v1::personal_access_tokens::{ActiveModel, Column, Entity, Model};
use crate::entities::v1::users;

/// Length of the random part of a token secret
pub const SECRET_LENGTH: usize = 40;

/// Ability granted to tokens issued without an explicit list
pub const WILDCARD: &str = "*";

/// A freshly issued token, the only place the plain-text secret ever exists
#[derive(Clone, Debug)]
pub struct NewAccessToken {
    pub token: Model,
    /// `{id}|{secret}`, handed to the client once
    pub plain_text: String,
}

impl Model {
    /// Hex encoded SHA-256, the form secrets are stored in
    pub fn hash(secret: &str) -> String {
        hex::encode(Sha256::digest(secret.as_bytes()))
    }

    pub fn generate_secret(prefix: &str) -> String {
        let entropy: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SECRET_LENGTH)
            .map(char::from)
            .collect();

        format!("{prefix}{entropy}")
    }

    #[::tracing::instrument(skip(db, abilities, prefix))]
    pub async fn issue(
        db: &DatabaseConnection,
        user_id: i32,
        name: &str,
        abilities: &[String],
        expires_at: Option<DateTimeUtc>,
        prefix: &str,
    ) -> Result<NewAccessToken, DbErr> {
        let secret = Self::generate_secret(prefix);
        let abilities = if abilities.is_empty() {
            vec![WILDCARD.to_string()]
        } else {
            abilities.to_vec()
        };
        let abilities =
            serde_json::to_string(&abilities).map_err(|e| DbErr::Custom(e.to_string()))?;

        let token = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            name: Set(name.to_string()),
            token: Set(Self::hash(&secret)),
            abilities: Set(Some(abilities)),
            expires_at: Set(expires_at),
            created_at: Set(Utc::now()),
        };

        let token = token.insert(db).await?;
        let plain_text = format!("{}|{}", token.id, secret);

        ::tracing::info!(token_id = token.id, "Token issued");

        Ok(NewAccessToken { token, plain_text })
    }

    /// Resolve a plain-text token to its row
    ///
    /// `{id}|{secret}` loads the row by id and compares hashes in constant
    /// time. A bare secret is looked up by its hash.
    pub async fn find_token(db: &DatabaseConnection, token: &str) -> Result<Option<Self>, DbErr> {
        let Some((id, secret)) = token.split_once('|') else {
            return Entity::find()
                .filter(Column::Token.eq(Self::hash(token)))
                .one(db)
                .await;
        };

        let Ok(id) = id.parse::<i32>() else {
            return Ok(None);
        };

        let Some(model) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let hashed = Self::hash(secret);

        if bool::from(model.token.as_bytes().ct_eq(hashed.as_bytes())) {
            Ok(Some(model))
        } else {
            Ok(None)
        }
    }

    pub fn abilities(&self) -> Vec<String> {
        self.abilities
            .as_deref()
            .and_then(|abilities| serde_json::from_str(abilities).ok())
            .unwrap_or_default()
    }

    pub fn can(&self, ability: &str) -> bool {
        self.abilities()
            .iter()
            .any(|granted| granted == WILDCARD || granted == ability)
    }

    pub fn cant(&self, ability: &str) -> bool {
        !self.can(ability)
    }

    /// `expiration` is the global lifetime counted from `created_at`
    pub fn is_expired(&self, now: DateTimeUtc, expiration: Option<Duration>) -> bool {
        if self.expires_at.is_some_and(|expires_at| expires_at <= now) {
            return true;
        }

        match expiration.map(chrono::Duration::from_std) {
            Some(Ok(lifetime)) => self
                .created_at
                .checked_add_signed(lifetime)
                .is_some_and(|deadline| deadline <= now),
            // a lifetime too large for chrono never elapses
            Some(Err(_)) | None => false,
        }
    }

    pub async fn user(&self, db: &DatabaseConnection) -> Result<Option<users::Model>, DbErr> {
        self.find_related(users::Entity).one(db).await
    }

    /// Delete a token, returns whether it existed
    #[::tracing::instrument(skip(db))]
    pub async fn revoke(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;

        Ok(result.rows_affected > 0)
    }
}
