use crate::helpers::{ADMIN_TOKEN, TestApp};

#[tokio::test]
async fn should_return_401_without_credentials() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/admin/settings", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_403_for_wrong_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/admin/settings", &app.address))
        .bearer_auth("guess")
        .form(&[("allowed_domains[]", "evil.example")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 403);

    // Nothing was stored
    let page = app.get_settings_page("").await.text().await.unwrap();
    assert!(!page.contains("evil.example"));
}

#[tokio::test]
async fn should_accept_admin_cookie() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/admin/settings", &app.address))
        .header("cookie", format!("domain_guard_admin={ADMIN_TOKEN}"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_refuse_cross_site_cookie_post() {
    let app = TestApp::new().await;
    app.restrict_to(&["company.example"], "").await;

    let response = app
        .post_settings_with_cookie(
            &[("denied_message", "")],
            &[("origin", "https://evil.example")],
        )
        .await;

    assert_eq!(response.status().as_u16(), 403);

    // The allow-list survived the forged submission
    let registration = app
        .post_register(&serde_json::json!({ "username": "mallory", "email": "mallory@evil.example" }))
        .await;
    assert_eq!(registration.status().as_u16(), 400);
}

#[tokio::test]
async fn should_accept_same_origin_cookie_post() {
    let app = TestApp::new().await;

    let response = app
        .post_settings_with_cookie(
            &[("allowed_domains[]", "company.example")],
            &[("sec-fetch-site", "same-origin")],
        )
        .await;

    assert_eq!(response.status().as_u16(), 303);
    let page = app.get_settings_page("").await.text().await.unwrap();
    assert!(page.contains("company.example"));
}

#[tokio::test]
async fn should_render_empty_form() {
    let app = TestApp::new().await;

    let response = app.get_settings_page("").await;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));

    let page = response.text().await.unwrap();
    assert!(page.contains("Domain Settings"));
    assert!(page.contains("Add Entry"));
    assert!(!page.contains(r#"name="allowed_domains[]""#));
    assert!(!page.contains("Settings saved."));
}

#[tokio::test]
async fn should_save_and_redirect() {
    let app = TestApp::new().await;

    let response = app
        .post_settings(&[
            ("allowed_domains[]", " gmail.com "),
            ("allowed_domains[]", "company.example"),
            ("denied_message", "Only <b>staff</b>"),
        ])
        .await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(
        response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/admin/settings?updated=true")
    );

    let page = app
        .get_settings_page("?updated=true")
        .await
        .text()
        .await
        .unwrap();
    assert!(page.contains("Settings saved."));
    assert!(page.contains(r#"value="gmail.com""#));
    assert!(page.contains(r#"value="company.example""#));
    assert!(page.contains(">Only staff</textarea>"));
}

#[tokio::test]
async fn should_clear_domains_when_none_are_submitted() {
    let app = TestApp::new().await;
    app.restrict_to(&["gmail.com"], "Staff only").await;

    app.restrict_to(&[], "Staff only").await;

    let page = app.get_settings_page("").await.text().await.unwrap();
    assert!(!page.contains(r#"name="allowed_domains[]""#));

    let response = app
        .post_register(&serde_json::json!({ "username": "jane", "email": "jane@yahoo.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn should_escape_stored_values() {
    let app = TestApp::new().await;
    app.restrict_to(&["a\"onmouseover=\"alert(1)"], "").await;

    let page = app.get_settings_page("").await.text().await.unwrap();

    assert!(!page.contains("\"onmouseover=\""));
}
