//! Security middleware adding protective response headers.
//!
//! Pages of the sign-in flow carry session state, so besides the usual
//! hardening headers every response is marked `no-store`:
//! - Content type sniffing and framing disabled
//! - CSP restricting forms to this origin
//! - No caching of pages or redirects
//! - HSTS in production

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use otp_shared::Environment;

/// Security middleware factory
#[derive(Debug, Clone, Copy)]
pub struct SecurityMiddleware {
    /// Whether to add security headers
    add_security_headers: bool,
    /// Whether to add Strict-Transport-Security
    add_hsts: bool,
}

impl SecurityMiddleware {
    /// Headers on outside development, HSTS only in production
    pub fn for_environment(environment: Environment) -> Self {
        let middleware = Self {
            add_security_headers: !environment.is_development(),
            add_hsts: environment.is_production(),
        };

        tracing::info!(
            %environment,
            add_headers = middleware.add_security_headers,
            hsts = middleware.add_hsts,
            "Security middleware configured"
        );

        middleware
    }

    /// Creates a security middleware for development (no headers)
    pub fn development() -> Self {
        Self {
            add_security_headers: false,
            add_hsts: false,
        }
    }

    /// Creates a security middleware for production (all headers)
    pub fn production() -> Self {
        Self {
            add_security_headers: true,
            add_hsts: true,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            add_security_headers: self.add_security_headers,
            add_hsts: self.add_hsts,
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    add_security_headers: bool,
    add_hsts: bool,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let add_security_headers = self.add_security_headers;
        let add_hsts = self.add_hsts;

        Box::pin(async move {
            let mut response = service.call(req).await?;

            if add_security_headers {
                add_security_response_headers(&mut response, add_hsts);
            }

            Ok(response)
        })
    }
}

/// Adds security headers to the response
fn add_security_response_headers<B>(response: &mut ServiceResponse<B>, add_hsts: bool) {
    let headers = response.headers_mut();

    if add_hsts {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    // Prevent MIME type sniffing
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    // Prevent clickjacking
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("same-origin"),
    );

    // No scripts or external resources; forms may only post back here
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'none'; form-action 'self'; frame-ancestors 'none'; base-uri 'none'",
        ),
    );

    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
}
