//! Helpers shared by unit and integration tests

pub mod setup;

/// Build an initialized test service over a fresh in-memory database
///
/// Returns `(service, db)`. An [`AuthConfig`](crate::config::AuthConfig)
/// may be passed to change the token guard settings.
#[macro_export]
macro_rules! service {
    () => {
        $crate::service!($crate::config::AuthConfig::default())
    };
    ($auth:expr) => {{
        let db = $crate::testing::setup::database().await;
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new($auth))
            .configure($crate::router::route)
            .configure($crate::router::docs);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
