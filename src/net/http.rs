//! Session HTTP client: the single point of contact with the backend.
//!
//! Every request goes out with browser credentials included, so the
//! backend-issued session cookie rides along automatically. If a
//! `csrftoken` cookie is present its value is copied into the
//! `X-CSRFToken` header (the backend's CSRF middleware matches on that
//! exact name). The token is re-read from the cookie store on every send,
//! so a rotated cookie is picked up without any client-side caching.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as one `ApiError` taxonomy: transport failures,
//! 401/403 auth rejections, and other non-2xx statuses. The client never
//! retries and never swallows an error; callers decide what to show.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`, with every request
//! and response logged for operator debugging. Server-side (SSR): `send`
//! is a stub returning `ApiError::Unavailable`, since these endpoints are
//! only meaningful in the browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

/// Backend origin. The service is an external collaborator with a fixed
/// host/port contract.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Name of the CSRF cookie issued by the backend.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Request header the backend's CSRF middleware checks on unsafe methods.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP methods used by the gateways.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A successful (2xx) backend response: status plus parsed JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: serde_json::Value,
}

/// Uniform failure taxonomy for every backend call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server, or no response came back.
    #[error("network error: {0}")]
    Network(String),
    /// The session cookie is missing, expired, or not an admin session.
    #[error("authentication required (status {status})")]
    AuthRequired { status: u16, body: serde_json::Value },
    /// Any other failure status, including 400 validation rejections.
    #[error("request failed with status {status}")]
    Http { status: u16, body: serde_json::Value },
    /// A 2xx response whose body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// HTTP is browser-only; SSR code paths land here.
    #[error("http requests are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Response status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthRequired { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403 rejections, which the shell treats as "go log in".
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::AuthRequired { .. })
    }
}

/// Extract the `csrftoken` cookie value from a raw cookie string.
///
/// Returns the substring between the `csrftoken=` marker and the next `;`
/// (or end of string), respecting cookie-name boundaries. Absent marker
/// means no token, and the caller sends no CSRF header.
pub fn csrf_token_from(cookies: &str) -> Option<String> {
    for pair in cookies.split(';') {
        let pair = pair.trim_start();
        if let Some(rest) = pair.strip_prefix(CSRF_COOKIE) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value.trim().to_owned());
            }
        }
    }
    None
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a failure status to the error taxonomy: 401/403 mean the session
/// is gone, everything else is a plain HTTP failure.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, body: serde_json::Value) -> ApiError {
    if status == 401 || status == 403 {
        ApiError::AuthRequired { status, body }
    } else {
        ApiError::Http { status, body }
    }
}

/// Parse a response body leniently: empty bodies become JSON null and
/// non-JSON bodies are kept as a raw string. The backend always wraps
/// errors in JSON, but proxies in between may not.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body(text: &str) -> serde_json::Value {
    if text.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_owned()))
}

/// Where cookies come from. Production reads the browser cookie store;
/// tests inject a fixed string. The client only ever reads cookies, it
/// never writes them.
pub trait CookieSource: Send + Sync {
    fn cookies(&self) -> Option<String>;
}

/// The browser's `document.cookie` store. Returns `None` outside a
/// browser environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieSource for BrowserCookies {
    fn cookies(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let doc = web_sys::window()?.document()?;
            let doc = doc.dyn_into::<web_sys::HtmlDocument>().ok()?;
            doc.cookie().ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Explicitly constructed session client, provided to gateways via
/// context rather than a global singleton so tests can substitute both
/// the cookie source and the client instance.
#[derive(Clone)]
pub struct HttpClient {
    base: String,
    cookies: Arc<dyn CookieSource>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").field("base", &self.base).finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Client against `base`, reading cookies from the browser store.
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_cookie_source(base, Arc::new(BrowserCookies))
    }

    /// Client with an injected cookie source (test doubles).
    pub fn with_cookie_source(base: impl Into<String>, cookies: Arc<dyn CookieSource>) -> Self {
        Self { base: base.into(), cookies }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Absolute URL for a backend path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Current CSRF token, if the cookie store has one.
    pub fn csrf_token(&self) -> Option<String> {
        self.cookies.cookies().and_then(|c| csrf_token_from(&c))
    }

    /// Issue one HTTP request against the backend.
    ///
    /// Resolves with `ApiResponse` for statuses in [200, 300); everything
    /// else becomes an `ApiError`. Request and response are both logged.
    ///
    /// # Errors
    ///
    /// `Network` when the request never completes, `AuthRequired` on
    /// 401/403, `Http` on other failure statuses, `Unavailable` outside
    /// the browser.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url_for(path);
            let token = self.csrf_token();
            log::debug!(
                "--> {} {} (csrf header: {}) body: {:?}",
                method.as_str(),
                url,
                token.is_some(),
                body
            );

            let mut builder = match method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Delete => gloo_net::http::Request::delete(&url),
            }
            .credentials(web_sys::RequestCredentials::Include);
            if let Some(token) = &token {
                builder = builder.header(CSRF_HEADER, token);
            }

            let request = match body {
                Some(json) => builder.json(json).map_err(|e| ApiError::Network(e.to_string()))?,
                None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
            };
            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    log::error!("<-- {} {url} network failure: {e}", method.as_str());
                    return Err(ApiError::Network(e.to_string()));
                }
            };

            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let data = parse_body(&text);
            if is_success(status) {
                log::debug!("<-- {status} {url} data: {data:?}");
                Ok(ApiResponse { status, data })
            } else {
                log::error!("<-- {status} {url} error body: {data:?}");
                Err(classify_failure(status, data))
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }
}
