use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::entities::v1::{personal_access_tokens, users};
use crate::error::Error;

/// The caller behind the current request, attached by [`super::Authenticate`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal {
    pub user: users::Model,
    pub token: personal_access_tokens::Model,
}

impl FromRequest for Principal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let principal = req.extensions().get::<Self>().cloned();

        ready(principal.ok_or_else(|| {
            ::tracing::warn!(path = %req.path(), "No principal attached, route is missing the token guard");

            Error::unauthenticated()
        }))
    }
}
