use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::AUTHORIZATION;
use actix_web::web::Data;
use actix_web::{HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use sea_orm::DatabaseConnection;

use crate::config::AuthConfig;
use crate::error::Error;

use super::TokenGuard;

/// Token guard middleware
///
/// Reads the `Data<DatabaseConnection>` and (optionally) `Data<AuthConfig>`
/// registered on the app.
#[derive(Clone, Debug, Default)]
pub struct Authenticate;

impl<S, B> Transform<S, ServiceRequest> for Authenticate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthenticateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(db) = req.app_data::<Data<DatabaseConnection>>().cloned() else {
                ::tracing::error!("Failed to get database connection");

                return Ok(reject(req, Error::internal("Failed to get database connection")));
            };

            let guard = req
                .app_data::<Data<AuthConfig>>()
                .map(|config| TokenGuard::new(config))
                .unwrap_or_default();

            let result = guard
                .authenticate(&db, req.headers().get(AUTHORIZATION))
                .await;

            match result {
                Ok(principal) => {
                    req.extensions_mut().insert(principal);

                    let res = service.call(req).await?;

                    Ok(res.map_into_left_body())
                }
                Err(e) => Ok(reject(req, e)),
            }
        })
    }
}

fn reject<B>(req: ServiceRequest, error: Error) -> ServiceResponse<EitherBody<B>> {
    req.into_response(error.error_response()).map_into_right_body()
}
