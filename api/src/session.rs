//! Cookie session state of the sign-in flow
//!
//! The session holds at most one pending phone number (set by send-code,
//! consumed by a successful verify-code) and, after success, the
//! authenticated number. Everything lives in a signed cookie; the server
//! keeps no per-user state.

use actix_session::{
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
    Session, SessionMiddleware,
};
use actix_web::cookie::{time::Duration, Key, SameSite};

use otp_core::{PendingVerification, PhoneNumber, SessionError, SignInState};
use otp_shared::SessionConfig;

/// Session key of the number awaiting a code
pub const PENDING_PHONE_KEY: &str = "pending_phone";
/// Session key of the number that completed verification
pub const AUTHENTICATED_PHONE_KEY: &str = "authenticated_phone";

/// Cookie settings shared by every worker
#[derive(Clone)]
pub struct SessionSettings {
    key: Key,
    cookie_name: String,
    ttl_secs: i64,
    secure: bool,
}

impl SessionSettings {
    /// Derive the signing key and cookie attributes from configuration
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            key: Key::derive_from(config.secret_bytes()),
            cookie_name: config.cookie_name.clone(),
            ttl_secs: config.ttl_secs,
            secure: config.secure,
        }
    }

    /// Build the session middleware for one worker
    pub fn middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name(self.cookie_name.clone())
            .cookie_secure(self.secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .cookie_content_security(CookieContentSecurity::Signed)
            .session_lifecycle(
                PersistentSession::default().session_ttl(Duration::seconds(self.ttl_secs)),
            )
            .build()
    }
}

fn storage_error(e: impl std::fmt::Display) -> SessionError {
    SessionError::Storage {
        message: e.to_string(),
    }
}

/// Read the pending phone number
///
/// A value that no longer parses is reported as `SessionError::Storage`.
pub fn pending_phone(session: &Session) -> Result<Option<PhoneNumber>, SessionError> {
    let pending = session
        .get::<PendingVerification>(PENDING_PHONE_KEY)
        .map_err(storage_error)?;
    Ok(pending.map(|pending| pending.phone))
}

/// Read the pending phone number, dropping a value that cannot be read
pub fn pending_phone_or_discard(session: &Session) -> Option<PhoneNumber> {
    match pending_phone(session) {
        Ok(phone) => phone,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable pending phone number");
            session.remove(PENDING_PHONE_KEY);
            None
        }
    }
}

/// Store `phone` as the number awaiting a code, replacing any earlier one
pub fn set_pending_phone(session: &Session, phone: &PhoneNumber) -> Result<(), SessionError> {
    session.remove(AUTHENTICATED_PHONE_KEY);
    session
        .insert(PENDING_PHONE_KEY, PendingVerification::new(phone.clone()))
        .map_err(storage_error)
}

/// Mark `phone` as signed in and consume the pending verification
pub fn complete_sign_in(session: &Session, phone: &PhoneNumber) -> Result<(), SessionError> {
    session.remove(PENDING_PHONE_KEY);
    session
        .insert(AUTHENTICATED_PHONE_KEY, phone)
        .map_err(storage_error)?;
    session.renew();
    Ok(())
}

/// Where this session stands in the sign-in flow
pub fn sign_in_state(session: &Session) -> SignInState {
    let pending = pending_phone(session).ok().flatten();
    let authenticated = session
        .get::<PhoneNumber>(AUTHENTICATED_PHONE_KEY)
        .ok()
        .flatten();
    SignInState::from_session(pending.as_ref(), authenticated.as_ref())
}
