use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, ResponseError,
};
use futures::future::LocalBoxFuture;
use secrecy::{ExposeSecret, SecretString};

use crate::{constants::messages, errors::AppError};

pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Shared-secret gate. With no token configured every request passes;
/// otherwise the `x-access-token` header must match exactly.
#[derive(Clone)]
pub struct AccessTokenMiddleware {
    expected: Option<SecretString>,
}

impl AccessTokenMiddleware {
    pub fn new(expected: Option<SecretString>) -> Self {
        Self { expected }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessTokenMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessTokenMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessTokenMiddlewareService {
            service: Rc::new(service),
            expected: self.expected.clone(),
        }))
    }
}

pub struct AccessTokenMiddlewareService<S> {
    service: Rc<S>,
    expected: Option<SecretString>,
}

impl<S> AccessTokenMiddlewareService<S> {
    fn is_authorized(&self, req: &ServiceRequest) -> bool {
        let Some(expected) = &self.expected else {
            return true;
        };

        req.headers()
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .is_some_and(|received| received == expected.expose_secret())
    }
}

impl<S, B> Service<ServiceRequest> for AccessTokenMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.is_authorized(&req) {
            log::warn!("Rejected {} {} without a valid access token", req.method(), req.path());
            let response = AppError::Unauthorized(messages::UNAUTHORIZED.to_string()).error_response();
            return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
        }

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
