//! Axum implementations of the `HostRequest` and `ResponseBuilder` traits.
//!
//! Newtype wrappers keep the orphan rule happy; they add no runtime cost.

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Response, StatusCode, request::Parts};
use domain_guard_core::{HostRequest, ResponseBuilder};

/// Newtype wrapper around the head of an Axum request.
///
/// Only the parts are wrapped: credentials live in headers and cookies,
/// and the body is not `Sync`.
#[repr(transparent)]
pub struct AxumRequestParts(pub Parts);

impl From<Parts> for AxumRequestParts {
    fn from(parts: Parts) -> Self {
        AxumRequestParts(parts)
    }
}

impl From<AxumRequestParts> for Parts {
    fn from(wrapper: AxumRequestParts) -> Self {
        wrapper.0
    }
}

impl HostRequest for AxumRequestParts {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers.get(name)?.to_str().ok()
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        let cookie_header = self.header("cookie")?;

        for cookie_pair in cookie_header.split(';') {
            let parts: Vec<&str> = cookie_pair.trim().splitn(2, '=').collect();
            if parts.len() == 2 && parts[0] == name {
                return Some(parts[1]);
            }
        }

        None
    }

    fn method(&self) -> &str {
        self.0.method.as_str()
    }

    fn path(&self) -> &str {
        self.0.uri.path()
    }
}

/// `ResponseBuilder` producing Axum responses.
///
/// Invalid status codes or headers never panic: an unknown status becomes
/// `500` and an unrepresentable header is dropped with a warning.
pub struct AxumResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::try_from(name),
            HeaderValue::try_from(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(header = name, "Dropping invalid response header"),
        }
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
        let mut response = Response::new(Body::from(self.body.unwrap_or_default()));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Convenience constructor for route handlers.
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
