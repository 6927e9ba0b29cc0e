//! Integration tests for the send-code endpoint

mod common;

use actix_web::{body::MessageBody, dev::ServiceResponse, http::StatusCode, test};

use otp_infra::MockVerificationProvider;

use common::{location, session_cookie, test_app};

async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_empty_phone_is_rejected_without_provider_call() {
    let provider = MockVerificationProvider::default();
    let app = test::init_service(test_app(&provider)).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_form([("phone", "   ")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(location(&resp).is_none());
    assert!(body_text(resp).await.contains("Please enter your phone number."));
    assert!(provider.started().is_empty());
}

#[actix_web::test]
async fn test_missing_phone_field_is_rejected() {
    let provider = MockVerificationProvider::default();
    let app = test::init_service(test_app(&provider)).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_form([("other", "value")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(provider.started().is_empty());
}

#[actix_web::test]
async fn test_malformed_phone_is_rejected() {
    let provider = MockVerificationProvider::default();
    let app = test::init_service(test_app(&provider)).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_form([("phone", "+0123")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("Please enter a valid phone number."));
    assert!(provider.started().is_empty());
}

#[actix_web::test]
async fn test_overlong_phone_is_rejected() {
    let provider = MockVerificationProvider::default();
    let app = test::init_service(test_app(&provider)).await;

    let phone = "5".repeat(40);
    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_form([("phone", phone.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(provider.started().is_empty());
}

#[actix_web::test]
async fn test_formatted_input_is_normalized() {
    let provider = MockVerificationProvider::default();
    let app = test::init_service(test_app(&provider)).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_form([("phone", "(555) 123-4567")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(provider.started()[0].0, "+15551234567");
}

#[actix_web::test]
async fn test_provider_failure_does_not_redirect() {
    let provider = MockVerificationProvider::default();
    provider.set_simulate_failure(true);
    let app = test::init_service(test_app(&provider)).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_form([("phone", "5551234")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(location(&resp).is_none());
    let body = body_text(resp).await;
    assert!(body.contains("Please try again."));
    assert!(!body.contains("simulated provider outage"));
    assert_eq!(provider.started().len(), 1);
}

#[actix_web::test]
async fn test_resend_replaces_pending_number() {
    let provider = MockVerificationProvider::default();
    let app = test::init_service(test_app(&provider)).await;

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .set_form([("phone", "5551234")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = session_cookie(&resp).unwrap();

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .cookie(cookie)
        .set_form([("phone", "5559876")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = session_cookie(&resp).unwrap();

    let req = test::TestRequest::get()
        .uri("/verify")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let page = body_text(resp).await;

    assert!(page.contains("****9876"));
    assert_eq!(provider.started().len(), 2);
}

#[actix_web::test]
async fn test_get_send_otp_redirects_home() {
    let provider = MockVerificationProvider::default();
    let app = test::init_service(test_app(&provider)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/send-otp").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/"));
    assert!(provider.started().is_empty());
}
