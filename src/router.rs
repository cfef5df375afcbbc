use actix_web::web::{self, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::Definition;
use crate::controllers;

pub fn route(app: &mut ServiceConfig) {
    // User
    app.service(controllers::v1::user::resource());

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);
}

/// OpenAPI document at `/api.json` and Swagger UI under `/docs/`
pub fn docs(app: &mut ServiceConfig) {
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").url("/api.json", Definition::openapi()));
}
