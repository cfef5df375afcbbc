use actix_web::http::header::ALLOW;
use actix_web::{HttpResponse, Resource, Responder, web};

use crate::error::ErrorResponse;
use crate::middlewares::v1::auth::{Authenticate, Principal};
use crate::responses::v1::user::User;
use crate::services;

pub const PATH: &str = "/user";

/// Get the authenticated user
///
/// Fail if:
/// - authorization header is missing or not a bearer token
/// - token not found
/// - token is expired
#[utoipa::path(
    get,
    path = "/user",
    tag = "User",
    security(("token" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = User),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
pub async fn current(principal: Principal) -> impl Responder {
    services::v1::user::current::current(principal)
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((ALLOW, "GET, HEAD"))
        .json(ErrorResponse {
            message: "Method not allowed.".to_string(),
        })
}

/// `/user`, with the token guard on the read routes only so that other
/// methods are refused by routing before any credential is looked at
pub fn resource() -> Resource {
    web::resource(PATH)
        .route(web::get().to(current).wrap(Authenticate))
        .route(web::head().to(current).wrap(Authenticate))
        .default_service(web::to(method_not_allowed))
}
