use std::future::{Ready, ready};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Correlation id of the current request, stored in the request extensions.
#[derive(Debug, Clone)]
pub struct CorrelationId(pub String);

// Middleware factory
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddlewareService { service }))
    }
}

pub struct RequestIdMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Reuse the caller's id when it is a valid header value
        let header_value = req
            .headers()
            .get(CORRELATION_HEADER)
            .filter(|value| value.to_str().is_ok())
            .cloned()
            .unwrap_or_else(|| {
                HeaderValue::from_str(&Uuid::new_v4().to_string())
                    .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
            });

        let correlation_id = header_value.to_str().unwrap_or("unknown").to_string();
        req.extensions_mut().insert(CorrelationId(correlation_id));

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            res.headers_mut()
                .insert(HeaderName::from_static(CORRELATION_HEADER), header_value);

            Ok(res)
        })
    }
}

// Extension trait to easily get correlation ID from request
pub trait RequestIdExt {
    fn correlation_id(&self) -> Option<String>;
}

impl RequestIdExt for actix_web::HttpRequest {
    fn correlation_id(&self) -> Option<String> {
        self.extensions()
            .get::<CorrelationId>()
            .map(|id| id.0.clone())
    }
}

impl RequestIdExt for ServiceRequest {
    fn correlation_id(&self) -> Option<String> {
        self.extensions()
            .get::<CorrelationId>()
            .map(|id| id.0.clone())
    }
}
