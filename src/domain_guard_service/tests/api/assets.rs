use crate::helpers::TestApp;

#[tokio::test]
async fn should_serve_list_editor_script() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/admin/assets/domain-list-editor.js", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(
        content_type.as_deref(),
        Some("text/javascript; charset=utf-8")
    );
    assert!(response.text().await.unwrap().contains("remove-entry"));
}

#[tokio::test]
async fn should_report_health() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/health", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}
