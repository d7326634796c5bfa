use fake::{Fake, faker::internet::en::SafeEmail};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_201_when_no_domains_are_configured() {
    let app = TestApp::new().await;
    let email: String = SafeEmail().fake();

    let response = app
        .post_register(&serde_json::json!({ "username": "jane", "email": email }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert!(body["user_id"].is_string());
}

#[tokio::test]
async fn should_reject_denied_domain_with_default_message() {
    let app = TestApp::new().await;
    app.restrict_to(&["gmail.com"], "").await;

    let response = app
        .post_register(&serde_json::json!({ "username": "jane", "email": "jane@yahoo.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "errors": [{
                "code": "domain_restriction_error",
                "message": "Your email domain is not allowed."
            }]
        })
    );
}

#[tokio::test]
async fn should_accept_allowed_domain() {
    let app = TestApp::new().await;
    app.restrict_to(&["gmail.com", "company.example"], "Staff only")
        .await;

    let response = app
        .post_register(&serde_json::json!({ "username": "jane", "email": "jane@company.example" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn should_not_create_user_when_rejected() {
    let app = TestApp::new().await;
    app.restrict_to(&["gmail.com"], "Staff only").await;

    let rejected = app
        .post_register(&serde_json::json!({ "username": "jane", "email": "jane@yahoo.com" }))
        .await;
    assert_eq!(rejected.status().as_u16(), 400);

    // Lifting the restriction lets the same account through
    app.restrict_to(&[], "").await;
    let accepted = app
        .post_register(&serde_json::json!({ "username": "jane", "email": "jane@yahoo.com" }))
        .await;
    assert_eq!(accepted.status().as_u16(), 201);
}

#[tokio::test]
async fn should_use_custom_message_for_both_flows() {
    let app = TestApp::new().await;
    app.restrict_to(&["x.com"], "Custom msg").await;

    let standard = app
        .post_register(&serde_json::json!({ "username": "a", "email": "a@y.com" }))
        .await;
    let shop = app
        .post_shop_register(&serde_json::json!({ "email": "a@y.com" }))
        .await;

    assert_eq!(standard.status().as_u16(), 400);
    assert_eq!(shop.status().as_u16(), 400);

    let standard: serde_json::Value = standard.json().await.unwrap();
    let shop: serde_json::Value = shop.json().await.unwrap();
    assert_eq!(standard["errors"][0]["message"], "Custom msg");
    assert_eq!(standard, shop);
}

#[tokio::test]
async fn should_match_last_at_sign_and_case_exactly() {
    let app = TestApp::new().await;
    app.restrict_to(&["gmail.com"], "").await;

    let upper = app
        .post_shop_register(&serde_json::json!({ "email": "jane@GMAIL.com" }))
        .await;
    assert_eq!(upper.status().as_u16(), 400);

    let exact = app
        .post_shop_register(&serde_json::json!({ "email": "jane@gmail.com" }))
        .await;
    assert_eq!(exact.status().as_u16(), 201);
}

#[tokio::test]
async fn should_report_host_errors_before_the_gate() {
    let app = TestApp::new().await;
    app.restrict_to(&["gmail.com"], "").await;

    let response = app
        .post_register(&serde_json::json!({ "username": "", "email": "nobody" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    let codes: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| error["code"].as_str().unwrap())
        .collect();
    assert_eq!(
        codes,
        vec!["empty_username", "invalid_email", "domain_restriction_error"]
    );
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let app = TestApp::new().await;
    let body = serde_json::json!({ "username": "jane", "email": "jane@example.com" });

    assert_eq!(app.post_register(&body).await.status().as_u16(), 201);

    let response = app
        .post_register(&serde_json::json!({ "username": "john", "email": "JANE@example.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"][0]["code"], "email_exists");
}

#[tokio::test]
async fn should_derive_customer_username_from_email() {
    let app = TestApp::new().await;

    let response = app
        .post_shop_register(&serde_json::json!({ "email": "jane.doe@shop.example" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["username"], "jane.doe");
}

#[tokio::test]
async fn should_accept_padded_email_on_allowed_domain() {
    let app = TestApp::new().await;
    app.restrict_to(&["gmail.com"], "").await;

    let standard = app
        .post_register(&serde_json::json!({ "username": "jane", "email": " jane@gmail.com " }))
        .await;
    let shop = app
        .post_shop_register(&serde_json::json!({ "email": "john@gmail.com  " }))
        .await;

    assert_eq!(standard.status().as_u16(), 201);
    assert_eq!(shop.status().as_u16(), 201);
}
