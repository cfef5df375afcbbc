use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned for every credential failure.
pub const UNAUTHENTICATED: &str = "Unauthenticated.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    InternalServerError { message: String },
}

impl Error {
    /// The single rejection a caller without a usable credential ever sees.
    pub fn unauthenticated() -> Self {
        Self::Unauthorized {
            message: UNAUTHENTICATED.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalServerError {
            message: message.into(),
        }
    }
}

impl From<DbErr> for Error {
    fn from(e: DbErr) -> Self {
        ::tracing::error!(error = %e, "Database error");

        Self::internal("Database error")
    }
}

/// Body of every error response
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    #[schema(example = "Unauthenticated.")]
    pub message: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.to_string(),
        })
    }
}
