//! Sign-in flow routes
//!
//! - `GET /` - phone number form
//! - `POST /send-otp` - start a verification, remember the number in the session
//! - `GET /verify` - code form for the pending number
//! - `POST /verify-otp` - check the code against the pending number

pub mod send_code;
pub mod sign_in;
pub mod verify_code;
pub mod verify_form;

pub use send_code::{send_code, send_code_fallback};
pub use sign_in::sign_in;
pub use verify_code::{verify_code, verify_code_fallback};
pub use verify_form::verify_form;
