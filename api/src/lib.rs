//! HTTP layer of the phone-number sign-in service
//!
//! Library exports for the server binary and the integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod telemetry;
pub mod views;

pub use app::{configure, create_app, AppState};
pub use session::SessionSettings;
