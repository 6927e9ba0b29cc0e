use actix_session::Session;
use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use otp_core::{DomainError, VerificationProvider};

use crate::app::AppState;
use crate::dto::VerifyCodeForm;
use crate::handlers::error::{self, error_response, see_other, FormPage};
use crate::session;
use crate::views;

/// Handler for POST /verify-otp
///
/// Checks the submitted code against the pending number in the session.
///
/// # Form Fields
///
/// * `code` - The code the user received
///
/// # Responses
///
/// * `200 OK` `Verification successful!` - Code approved; the pending
///   verification is consumed and the session id rotated
/// * `200 OK` `Verification failed.` - Code rejected; the user may retry
/// * `400 Bad Request` - Empty code; the form is shown again and the
///   provider is not called
/// * `303 See Other` to `/` - No pending verification in the session
/// * `503 Service Unavailable` - The provider failed or timed out
pub async fn verify_code<P>(
    state: web::Data<AppState<P>>,
    session: Session,
    form: web::Form<VerifyCodeForm>,
) -> HttpResponse
where
    P: VerificationProvider + 'static,
{
    let form = form.into_inner();
    let pending = session::pending_phone_or_discard(&session);
    let masked = pending.as_ref().map(|phone| phone.masked());
    let page = FormPage::Verify {
        masked_phone: masked.as_deref(),
    };

    if form.validate().is_err() {
        tracing::warn!("Verify-code form failed validation");
        return views::html(
            StatusCode::BAD_REQUEST,
            views::verify_page(masked.as_deref(), Some(error::CODE_INVALID)),
        );
    }

    let result = match state.sign_in.verify_code(pending.as_ref(), &form.code).await {
        Ok(result) => result,
        Err(e) => return error_response(&e, page),
    };

    if !result.is_approved() {
        return views::plain_text(views::VERIFICATION_FAILURE);
    }

    if let Err(e) = session::complete_sign_in(&session, &result.phone) {
        return error_response(&DomainError::from(e), page);
    }

    tracing::info!(
        phone = %result.phone.masked(),
        state = %session::sign_in_state(&session),
        "Phone number verified"
    );
    views::plain_text(views::VERIFICATION_SUCCESS)
}

/// Any other method on /verify-otp goes back to the code form
pub async fn verify_code_fallback() -> HttpResponse {
    see_other("/verify")
}
