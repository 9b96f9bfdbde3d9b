//! Authenticated fetch wrapper for the GauchAI backend.
//!
//! Attaches a bearer token from the shared [`TokenCell`], normalizes
//! non-success responses into [`FetchError`], and resolves relative paths
//! against a configured base URL.
//!
//! ERROR HANDLING
//! ==============
//! Every HTTP-status or transport failure is surfaced to the user through
//! the notifier hook exactly once, here, before the error propagates, so
//! callers never have to remember to toast. Decode failures on an
//! already-successful response propagate without notifying.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use std::rc::Rc;

use super::types::{ApiBody, FetchError, RequestOptions, TokenCell};
#[cfg(feature = "web")]
use super::types::{Credentials, Method, RequestBody};
use crate::util::toast::{self, ToastKind};

/// Message surfaced to the user whenever a request fails.
const FAILURE_NOTICE: &str = "Network or server error";

/// Static configuration for the API client.
#[derive(Clone, Debug, Default)]
pub struct ApiConfig {
    /// Prefix for relative request paths; `None` leaves paths untouched.
    pub base_url: Option<String>,
}

/// Hook invoked once per failed request, defaulting to an error toast.
pub type FailureNotifier = Rc<dyn Fn(&str, ToastKind)>;

/// HTTP client for the application backend.
pub struct ApiClient {
    config: ApiConfig,
    token: TokenCell,
    notifier: FailureNotifier,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, token: TokenCell) -> Self {
        Self::with_notifier(config, token, Rc::new(|message, kind| toast::show_toast(message, kind)))
    }

    /// Like [`ApiClient::new`] with a caller-supplied failure notifier.
    #[must_use]
    pub fn with_notifier(config: ApiConfig, token: TokenCell, notifier: FailureNotifier) -> Self {
        Self { config, token, notifier }
    }

    /// Issue a request to `url`, returning the decoded body.
    ///
    /// # Errors
    ///
    /// [`FetchError::Http`] for non-success status codes (the body text,
    /// or the status phrase when the body is unreadable, becomes the
    /// message) and [`FetchError::Network`] for transport failures.
    pub async fn request(&self, url: &str, options: RequestOptions) -> Result<ApiBody, FetchError> {
        #[cfg(feature = "web")]
        {
            let has_form_body = options.body.as_ref().is_some_and(RequestBody::is_form);
            let headers = merge_headers(&options.headers, has_form_body, self.token.get().as_deref());

            let mut builder = builder_for(options.method, url);
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }
            builder = builder.credentials(web_credentials(options.credentials.unwrap_or(Credentials::SameOrigin)));

            let sent = match options.body {
                None => builder.send().await,
                Some(RequestBody::Json(value)) => match builder.json(&value) {
                    Ok(request) => request.send().await,
                    Err(err) => Err(err),
                },
                Some(RequestBody::Text(text)) => match builder.body(text) {
                    Ok(request) => request.send().await,
                    Err(err) => Err(err),
                },
                Some(RequestBody::Form(form)) => match builder.body(form) {
                    Ok(request) => request.send().await,
                    Err(err) => Err(err),
                },
            };

            let response = match sent {
                Ok(response) => response,
                Err(err) => return Err(self.fail(FetchError::Network(err.to_string()))),
            };

            if !response.ok() {
                let status = response.status();
                let body = match response.text().await {
                    Ok(text) => text,
                    Err(_) => status_fallback_text(&response.status_text()),
                };
                return Err(self.fail(FetchError::Http { status, body }));
            }

            let content_type = response.headers().get("content-type").unwrap_or_default();
            if is_json_content_type(&content_type) {
                response
                    .json::<serde_json::Value>()
                    .await
                    .map(ApiBody::Json)
                    .map_err(|err| FetchError::Network(err.to_string()))
            } else {
                response
                    .text()
                    .await
                    .map(ApiBody::Text)
                    .map_err(|err| FetchError::Network(err.to_string()))
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (url, options);
            Err(self.fail(FetchError::Network("not available off-browser".to_owned())))
        }
    }

    /// Issue a request to `path`, prefixing the configured base URL when
    /// the path is not already absolute. Delegates to [`ApiClient::request`].
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request`].
    pub async fn api_request(&self, path: &str, options: RequestOptions) -> Result<ApiBody, FetchError> {
        let url = resolve_url(self.config.base_url.as_deref(), path);
        self.request(&url, options).await
    }

    fn fail(&self, err: FetchError) -> FetchError {
        log::error!("fetch failed: {err}");
        (self.notifier)(FAILURE_NOTICE, ToastKind::Error);
        err
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

pub(crate) fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Resolve `path` against an optional base; absolute URLs pass through
/// and a single trailing slash is stripped from the base.
pub(crate) fn resolve_url(base: Option<&str>, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_owned();
    }
    let base = base.unwrap_or("");
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}{path}")
}

/// Merge caller headers with the defaults: JSON content type unless the
/// caller set one or the body is form data, and a bearer token when one
/// is present (replacing any caller-supplied authorization).
#[cfg(any(test, feature = "web"))]
pub(crate) fn merge_headers(
    caller: &[(String, String)],
    has_form_body: bool,
    token: Option<&str>,
) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = caller.to_vec();
    let has_content_type = headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
    if !has_content_type && !has_form_body {
        headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
    }
    if let Some(token) = token {
        headers.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }
    headers
}

#[cfg(any(test, feature = "web"))]
pub(crate) fn is_json_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("application/json")
}

#[cfg(any(test, feature = "web"))]
pub(crate) fn status_fallback_text(status_text: &str) -> String {
    if status_text.is_empty() {
        "error".to_owned()
    } else {
        status_text.to_owned()
    }
}

// =============================================================================
// BROWSER GLUE
// =============================================================================

#[cfg(feature = "web")]
fn builder_for(method: Method, url: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

#[cfg(feature = "web")]
fn web_credentials(credentials: Credentials) -> web_sys::RequestCredentials {
    match credentials {
        Credentials::SameOrigin => web_sys::RequestCredentials::SameOrigin,
        Credentials::Include => web_sys::RequestCredentials::Include,
        Credentials::Omit => web_sys::RequestCredentials::Omit,
    }
}
