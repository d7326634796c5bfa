use domain_guard_adapters::{
    AdminStrings, AdminTokenConfig, AdminTokenValidator, HashMapOptionStore, HashMapUserStore,
    config::test,
};
use domain_guard_service::DomainGuardService;
use secrecy::Secret;

pub const ADMIN_TOKEN: &str = "test-admin-token";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let validator = AdminTokenValidator::new(AdminTokenConfig {
            token: Some(Secret::new(ADMIN_TOKEN.to_string())),
            ..AdminTokenConfig::default()
        });

        let router = DomainGuardService::new(
            HashMapUserStore::new(),
            HashMapOptionStore::new(),
            validator,
            AdminStrings::default(),
        )
        .as_nested_router(None);

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server failed")
        });

        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
        }
    }

    pub async fn post_register<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_shop_register<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/shop/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_settings_page(&self, query: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/admin/settings{}", &self.address, query))
            .bearer_auth(ADMIN_TOKEN)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_settings(&self, form: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .post(format!("{}/admin/settings", &self.address))
            .bearer_auth(ADMIN_TOKEN)
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Posts the settings form the way a browser does, with the admin cookie
    /// and whatever fetch headers the caller supplies.
    pub async fn post_settings_with_cookie(
        &self,
        form: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/admin/settings", &self.address))
            .header("cookie", format!("domain_guard_admin={ADMIN_TOKEN}"))
            .form(form);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Saves the allow-list and custom message through the admin form.
    pub async fn restrict_to(&self, domains: &[&str], message: &str) {
        let mut form: Vec<(&str, &str)> = domains
            .iter()
            .map(|domain| ("allowed_domains[]", *domain))
            .collect();
        form.push(("denied_message", message));

        let response = self.post_settings(&form).await;
        assert_eq!(response.status().as_u16(), 303);
    }
}
