//! Application state and factory
//!
//! This module holds the state shared by the handlers and builds the
//! Actix-web application: routes, cookie sessions, request tracing and
//! security headers.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use otp_core::{SignInService, VerificationProvider};

use crate::middleware::SecurityMiddleware;
use crate::routes::auth::{
    send_code, send_code_fallback, sign_in, verify_code, verify_code_fallback, verify_form,
};
use crate::routes::health::health_check;
use crate::session::SessionSettings;

/// Application state that holds shared services
pub struct AppState<P: VerificationProvider> {
    pub sign_in: SignInService<P>,
}

impl<P: VerificationProvider> AppState<P> {
    pub fn new(sign_in: SignInService<P>) -> Self {
        Self { sign_in }
    }
}

/// Register the sign-in routes and the health check
pub fn configure<P>(cfg: &mut web::ServiceConfig)
where
    P: VerificationProvider + 'static,
{
    cfg.route("/", web::get().to(sign_in))
        .service(
            web::resource("/send-otp")
                .route(web::post().to(send_code::<P>))
                .default_service(web::route().to(send_code_fallback)),
        )
        .route("/verify", web::get().to(verify_form))
        .service(
            web::resource("/verify-otp")
                .route(web::post().to(verify_code::<P>))
                .default_service(web::route().to(verify_code_fallback)),
        )
        .route("/health", web::get().to(health_check));
}

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
    session: &SessionSettings,
    security: SecurityMiddleware,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: VerificationProvider + 'static,
{
    App::new()
        .app_data(app_state)
        // Last wrapped runs first: tracing span, then headers, then sessions
        .wrap(session.middleware())
        .wrap(security)
        .wrap(TracingLogger::default())
        .configure(configure::<P>)
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(actix_web::http::header::ContentType::plaintext())
        .body("Not Found")
}
