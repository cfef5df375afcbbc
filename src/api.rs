use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::controllers;
use crate::error::ErrorResponse;
use crate::responses::v1::user::User;

/// Registers the `token` bearer scheme referenced by guarded paths
pub struct Authentication;

impl Modify for Authentication {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("{id}|{secret}")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "User"),
        (name = "Health"),
    ),
    modifiers(&Authentication),
    paths(
        controllers::v1::user::current,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        User,
        ErrorResponse,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
