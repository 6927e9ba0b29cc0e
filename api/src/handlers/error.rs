//! Mapping of domain errors onto HTTP responses
//!
//! Every failure of a sign-in request ends here. Users only ever see the
//! fixed messages below; provider and session details go to the logs.

use actix_web::{http::header, http::StatusCode, HttpResponse};

use otp_core::{DomainError, ProviderError, SessionError, ValidationError};

use crate::views;

pub const PHONE_REQUIRED: &str = "Please enter your phone number.";
pub const PHONE_INVALID: &str = "Please enter a valid phone number.";
pub const CODE_REQUIRED: &str = "Please enter the verification code.";
pub const CODE_INVALID: &str = "Please enter the code exactly as you received it.";
pub const PROVIDER_UNAVAILABLE: &str =
    "We could not reach the verification service. Please try again.";

/// Form the failed request came from, re-rendered with the error message
#[derive(Debug, Clone, Copy)]
pub enum FormPage<'a> {
    SignIn,
    Verify { masked_phone: Option<&'a str> },
}

impl FormPage<'_> {
    fn render(&self, message: &str) -> String {
        match self {
            FormPage::SignIn => views::sign_in_page(Some(message)),
            FormPage::Verify { masked_phone } => views::verify_page(*masked_phone, Some(message)),
        }
    }
}

/// 303 See Other to `location`
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// User-facing message for a validation failure
pub fn validation_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::RequiredField { field } if field == "phone" => PHONE_REQUIRED,
        ValidationError::RequiredField { field } if field == "code" => CODE_REQUIRED,
        ValidationError::RequiredField { .. } => PHONE_INVALID,
        ValidationError::InvalidPhoneNumber { .. } => PHONE_INVALID,
    }
}

/// Convert a domain error into the response for `page`
///
/// - validation errors re-render the form with a message (400)
/// - provider errors re-render the form with a generic message (503)
/// - session errors send the user back to the start (303 to `/`)
pub fn error_response(error: &DomainError, page: FormPage<'_>) -> HttpResponse {
    match error {
        DomainError::Validation(e) => {
            tracing::info!(error = %e, "Rejected form input");
            views::html(StatusCode::BAD_REQUEST, page.render(validation_message(e)))
        }
        DomainError::Provider(e) => {
            match e {
                ProviderError::Timeout { .. } | ProviderError::Transport { .. } => {
                    tracing::error!(error = %e, "Verification provider unavailable")
                }
                ProviderError::Rejected { .. } | ProviderError::InvalidResponse { .. } => {
                    tracing::warn!(error = %e, "Verification provider refused the request")
                }
            }
            views::html(
                StatusCode::SERVICE_UNAVAILABLE,
                page.render(PROVIDER_UNAVAILABLE),
            )
        }
        DomainError::Session(e) => {
            match e {
                SessionError::NoPendingVerification => {
                    tracing::info!(error = %e, "No pending verification, restarting sign-in")
                }
                SessionError::Storage { .. } => {
                    tracing::warn!(error = %e, "Session unusable, restarting sign-in")
                }
            }
            see_other("/")
        }
    }
}
