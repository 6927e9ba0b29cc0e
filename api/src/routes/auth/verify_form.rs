use actix_session::Session;
use actix_web::{http::StatusCode, HttpResponse};

use crate::session;
use crate::views;

/// Handler for GET /verify
///
/// Shows the code form for the pending number. Without one (never sent,
/// expired or already used) an error page linking back to `/` is shown.
pub async fn verify_form(session: Session) -> HttpResponse {
    match session::pending_phone_or_discard(&session) {
        Some(phone) => views::html(
            StatusCode::OK,
            views::verify_page(Some(&phone.masked()), None),
        ),
        None => {
            tracing::info!(
                state = %session::sign_in_state(&session),
                "Code form requested without a pending verification"
            );
            views::html(
                StatusCode::BAD_REQUEST,
                views::no_pending_verification_page(),
            )
        }
    }
}
