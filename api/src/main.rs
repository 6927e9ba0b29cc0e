use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use otp_api::{create_app, middleware::SecurityMiddleware, telemetry, AppState, SessionSettings};
use otp_core::SignInService;
use otp_infra::TwilioVerifyClient;
use otp_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Invalid configuration aborts startup with a non-zero exit
    let config = AppConfig::load().context("Invalid configuration")?;

    telemetry::init_tracing(&config.logging).context("Failed to initialize tracing")?;

    tracing::info!(
        environment = %config.environment,
        "Starting OTP sign-in server"
    );

    let provider = TwilioVerifyClient::new(&config.provider)
        .context("Failed to create Twilio Verify client")?;
    let sign_in = SignInService::new(Arc::new(provider), config.verification.clone());
    let app_state = web::Data::new(AppState::new(sign_in));

    let session = SessionSettings::from_config(&config.session);
    let security = SecurityMiddleware::for_environment(config.environment);

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind to address");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &session, security));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}
