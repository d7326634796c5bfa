//! Zero-cost HTTP abstraction traits for the registration gate.
//!
//! Frameworks implement these traits on newtype wrappers of their own types,
//! so handlers and capability validators stay framework-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  domain_guard_core: Defines HTTP traits  │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  domain_guard_axum: Newtype wrappers     │
//! │  struct AxumRequestParts(Parts)          │
//! │  impl HostRequest for AxumRequestParts   │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  Handlers and validators use the trait   │
//! │  methods (generic over framework)        │
//! └──────────────────────────────────────────┘
//! ```

/// Read access to an incoming HTTP request.
///
/// Implementations return `&str` references straight from the framework's
/// data structures. Header lookup must be case-insensitive.
pub trait HostRequest {
    /// Get a header value by name. `None` if missing or not valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a cookie value by name from the `Cookie` header.
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;

    /// Bearer token from the `Authorization` header, if any.
    fn bearer_token(&self) -> Option<&str> {
        self.header("authorization")?
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// Builder for HTTP responses produced by framework-agnostic handlers.
///
/// ```ignore
/// builder
///     .status(201)
///     .json_body(json!({"status": "success"}))
///     .build()
/// ```
pub trait ResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Serialize `body` as JSON and set `Content-Type: application/json`
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Use `body` as an HTML document and set `Content-Type: text/html; charset=utf-8`
    fn html_body(self, body: String) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Shorthands for the responses the handlers emit.
///
/// Automatically implemented for every `ResponseBuilder`.
pub trait ResponseHelpers: ResponseBuilder {
    /// 200 OK with a JSON body
    fn ok_json(self, body: serde_json::Value) -> Self::Response {
        self.status(200).json_body(body).build()
    }

    /// 201 Created with a JSON body
    fn created_json(self, body: serde_json::Value) -> Self::Response {
        self.status(201).json_body(body).build()
    }

    /// 400 Bad Request with a JSON body
    fn bad_request_json(self, body: serde_json::Value) -> Self::Response {
        self.status(400).json_body(body).build()
    }

    /// 200 OK with an HTML document
    fn html_page(self, body: String) -> Self::Response {
        self.status(200).html_body(body).build()
    }

    /// 303 See Other pointing at `location`
    fn see_other(self, location: &str) -> Self::Response {
        self.status(303).header("location", location).build()
    }

    /// 500 Internal Server Error
    fn internal_error(self, message: &str) -> Self::Response {
        self.status(500)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }
}

// Blanket implementation for all ResponseBuilder types
impl<T: ResponseBuilder> ResponseHelpers for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // Mock request for testing
    struct MockRequest {
        headers: HashMap<String, String>,
        cookies: HashMap<String, String>,
        method: String,
        path: String,
    }

    impl HostRequest for MockRequest {
        fn header(&self, name: &str) -> Option<&str> {
            let name_lower = name.to_lowercase();
            self.headers
                .iter()
                .find(|(k, _)| k.to_lowercase() == name_lower)
                .map(|(_, v)| v.as_str())
        }

        fn cookie(&self, name: &str) -> Option<&str> {
            self.cookies.get(name).map(|s| s.as_str())
        }

        fn method(&self) -> &str {
            &self.method
        }

        fn path(&self) -> &str {
            &self.path
        }
    }

    #[derive(Default)]
    struct RecordingBuilder {
        status: u16,
        headers: Vec<(String, String)>,
        body: Option<String>,
    }

    impl ResponseBuilder for RecordingBuilder {
        type Response = RecordingBuilder;

        fn status(mut self, code: u16) -> Self {
            self.status = code;
            self
        }

        fn header(mut self, name: &str, value: &str) -> Self {
            self.headers.push((name.to_string(), value.to_string()));
            self
        }

        fn json_body(mut self, body: serde_json::Value) -> Self {
            self.body = Some(body.to_string());
            self.header("content-type", "application/json")
        }

        fn html_body(mut self, body: String) -> Self {
            self.body = Some(body);
            self.header("content-type", "text/html; charset=utf-8")
        }

        fn build(self) -> Self::Response {
            self
        }
    }

    fn request_with_headers(headers: &[(&str, &str)]) -> MockRequest {
        MockRequest {
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            cookies: HashMap::new(),
            method: "GET".to_string(),
            path: "/admin/settings".to_string(),
        }
    }

    #[test]
    fn test_host_request_trait() {
        let mut req = request_with_headers(&[("Content-Type", "application/json")]);
        req.cookies
            .insert("session".to_string(), "abc123".to_string());

        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "/admin/settings");
        assert_eq!(req.header("content-type"), Some("application/json")); // case-insensitive
        assert_eq!(req.cookie("session"), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_extraction() {
        let req = request_with_headers(&[("Authorization", "Bearer s3cret")]);
        assert_eq!(req.bearer_token(), Some("s3cret"));

        let req = request_with_headers(&[("Authorization", "Basic Zm9vOmJhcg==")]);
        assert_eq!(req.bearer_token(), None);

        let req = request_with_headers(&[("Authorization", "Bearer ")]);
        assert_eq!(req.bearer_token(), None);
    }

    #[test]
    fn test_see_other_sets_location() {
        let resp = RecordingBuilder::default().see_other("/admin/settings?updated=true");
        assert_eq!(resp.status, 303);
        assert_eq!(
            resp.headers,
            vec![(
                "location".to_string(),
                "/admin/settings?updated=true".to_string()
            )]
        );
    }
}
