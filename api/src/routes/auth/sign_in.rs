use actix_web::{http::StatusCode, HttpResponse};

use crate::views;

/// Handler for GET /
///
/// Renders the phone number form. Session state is left untouched, so a
/// pending verification survives a visit to the start page.
pub async fn sign_in() -> HttpResponse {
    views::html(StatusCode::OK, views::sign_in_page(None))
}
