//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
    web, App,
};

use otp_api::{create_app, middleware::SecurityMiddleware, AppState, SessionSettings};
use otp_core::SignInService;
use otp_infra::MockVerificationProvider;
use otp_shared::{SessionConfig, VerificationConfig};

pub const COOKIE_NAME: &str = "otp_session";
pub const APPROVED_CODE: &str = "000000";

/// App wired to `provider`, default country code `1`
pub fn test_app(
    provider: &MockVerificationProvider,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let sign_in = SignInService::new(Arc::new(provider.clone()), VerificationConfig::new("1"));
    let session = SessionSettings::from_config(&SessionConfig::new(
        "test-session-secret-that-is-long-enough-for-signing",
    ));

    create_app(
        web::Data::new(AppState::new(sign_in)),
        &session,
        SecurityMiddleware::production(),
    )
}

/// Session cookie set by `resp`, if any
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == COOKIE_NAME)
        .map(|c| c.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
