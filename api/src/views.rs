//! HTML pages of the sign-in flow
//!
//! Interpolated values are limited to the static messages in
//! `handlers::error` and masked E.164 numbers (`+`, `*` and digits), so the
//! templates need no escaping.

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};

/// Text returned after an approved code
pub const VERIFICATION_SUCCESS: &str = "Verification successful!";
/// Text returned after a rejected code
pub const VERIFICATION_FAILURE: &str = "Verification failed.";

const LAYOUT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Sign in</title>
</head>
<body>
"#;

const LAYOUT_TAIL: &str = "</body>\n</html>\n";

fn layout(body: &str) -> String {
    format!("{}{}{}", LAYOUT_HEAD, body, LAYOUT_TAIL)
}

fn alert(message: Option<&str>) -> String {
    message
        .map(|m| format!("<p class=\"error\" role=\"alert\">{}</p>\n", m))
        .unwrap_or_default()
}

/// Phone number entry form, posting to `/send-otp`
pub fn sign_in_page(message: Option<&str>) -> String {
    layout(&format!(
        r#"<h1>Sign in</h1>
{}<form method="post" action="/send-otp">
<label for="phone">Phone number</label>
<input type="tel" id="phone" name="phone" autocomplete="tel" required>
<button type="submit">Send code</button>
</form>
"#,
        alert(message)
    ))
}

/// Code entry form, posting to `/verify-otp`
pub fn verify_page(masked_phone: Option<&str>, message: Option<&str>) -> String {
    let sent_to = masked_phone
        .map(|phone| format!("<p>We sent a code to {}.</p>\n", phone))
        .unwrap_or_default();

    layout(&format!(
        r#"<h1>Enter your code</h1>
{}{}<form method="post" action="/verify-otp">
<label for="code">Verification code</label>
<input type="text" id="code" name="code" inputmode="numeric" autocomplete="one-time-code" required>
<button type="submit">Verify</button>
</form>
<p><a href="/">Use a different number</a></p>
"#,
        sent_to,
        alert(message)
    ))
}

/// Shown on `/verify` when the session holds no pending number
pub fn no_pending_verification_page() -> String {
    layout(
        r#"<h1>No verification in progress</h1>
<p>Your session has no pending sign-in. It may have expired.</p>
<p><a href="/">Start again</a></p>
"#,
    )
}

/// Wrap a rendered page in an HTML response
pub fn html(status: StatusCode, page: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(page)
}

/// Plain-text outcome of a verification
pub fn plain_text(message: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_page_posts_phone() {
        let page = sign_in_page(None);
        assert!(page.contains(r#"action="/send-otp""#));
        assert!(page.contains(r#"name="phone""#));
        assert!(!page.contains("role=\"alert\""));
    }

    #[test]
    fn test_sign_in_page_shows_message() {
        let page = sign_in_page(Some("Please enter your phone number."));
        assert!(page.contains("Please enter your phone number."));
    }

    #[test]
    fn test_verify_page_shows_masked_phone() {
        let page = verify_page(Some("+****1234"), None);
        assert!(page.contains(r#"action="/verify-otp""#));
        assert!(page.contains(r#"name="code""#));
        assert!(page.contains("+****1234"));
    }

    #[test]
    fn test_no_pending_page_links_home() {
        assert!(no_pending_verification_page().contains(r#"href="/""#));
    }
}
