use std::time::{Duration, Instant};

use actix_web::http::header::HeaderValue;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::config::AuthConfig;
use crate::entities::v1::personal_access_tokens;
use crate::error::Error;

use super::Principal;

pub const BEARER: &str = "Bearer";

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(header: Option<&HeaderValue>) -> Option<&str> {
    let value = header?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER) {
        return None;
    }

    let token = token.trim();

    (!token.is_empty()).then_some(token)
}

/// Resolves bearer credentials to principals
#[derive(Clone, Debug, Default)]
pub struct TokenGuard {
    expiration: Option<Duration>,
}

impl TokenGuard {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            expiration: config.expiration(),
        }
    }

    /// Every credential problem collapses into [`Error::unauthenticated`],
    /// the reason is only logged. Database failures stay 500.
    #[::tracing::instrument(skip_all)]
    pub async fn authenticate(
        &self,
        db: &DatabaseConnection,
        header: Option<&HeaderValue>,
    ) -> Result<Principal, Error> {
        let start = Instant::now();

        let Some(plain) = bearer_token(header) else {
            ::tracing::debug!("Missing or malformed bearer token");

            return Err(Error::unauthenticated());
        };

        let Some(token) = personal_access_tokens::Model::find_token(db, plain).await? else {
            ::tracing::debug!("Token not found");

            return Err(Error::unauthenticated());
        };

        if token.is_expired(Utc::now(), self.expiration) {
            ::tracing::debug!(token_id = token.id, "Token expired");

            return Err(Error::unauthenticated());
        }

        let Some(user) = token.user(db).await? else {
            ::tracing::warn!(token_id = token.id, "Token owner not found");

            return Err(Error::unauthenticated());
        };

        ::tracing::debug!(
            user_id = user.id,
            token_id = token.id,
            elapsed = ?start.elapsed(),
            "Authenticated"
        );

        Ok(Principal { user, token })
    }
}
