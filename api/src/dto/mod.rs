pub mod auth;

pub use auth::{SendCodeForm, VerifyCodeForm};
