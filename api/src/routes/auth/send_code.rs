use actix_session::Session;
use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use otp_core::{DomainError, VerificationProvider};

use crate::app::AppState;
use crate::dto::SendCodeForm;
use crate::handlers::error::{self, error_response, see_other, FormPage};
use crate::session;
use crate::views;

/// Handler for POST /send-otp
///
/// Normalizes the submitted number, stores it in the session as the
/// pending verification and asks the provider to send a code.
///
/// # Form Fields
///
/// * `phone` - Local number or full E.164 number
///
/// # Responses
///
/// * `303 See Other` to `/verify` - The provider accepted the request
/// * `400 Bad Request` - Empty or malformed number; the form is shown again
///   and the provider is not called
/// * `503 Service Unavailable` - The provider failed or timed out
pub async fn send_code<P>(
    state: web::Data<AppState<P>>,
    session: Session,
    form: web::Form<SendCodeForm>,
) -> HttpResponse
where
    P: VerificationProvider + 'static,
{
    let form = form.into_inner();

    if let Err(validation_errors) = form.validate() {
        tracing::warn!(
            errors = ?validation_errors.field_errors().keys().collect::<Vec<_>>(),
            "Send-code form failed validation"
        );
        return views::html(
            StatusCode::BAD_REQUEST,
            views::sign_in_page(Some(error::PHONE_INVALID)),
        );
    }

    let phone = match state.sign_in.normalize_phone(&form.phone) {
        Ok(phone) => phone,
        Err(e) => return error_response(&e, FormPage::SignIn),
    };

    if let Err(e) = session::set_pending_phone(&session, &phone) {
        return error_response(&DomainError::from(e), FormPage::SignIn);
    }

    match state.sign_in.send_code(&phone).await {
        Ok(result) => {
            tracing::info!(
                phone = %result.phone.masked(),
                sid = %result.handle.sid,
                "Verification code sent, redirecting to code entry"
            );
            see_other("/verify")
        }
        Err(e) => error_response(&e, FormPage::SignIn),
    }
}

/// Any other method on /send-otp goes back to the start page
pub async fn send_code_fallback() -> HttpResponse {
    see_other("/")
}
