//! Request/response model and error kinds for the fetch wrapper.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the fetch wrapper.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request produced no response at all (transport failure).
    #[error("network error: {0}")]
    Network(String),
}

// =============================================================================
// RESPONSE BODY
// =============================================================================

/// Decoded response payload.
///
/// The wrapper returns structured data when the response declares a JSON
/// content type and the raw text otherwise; callers match instead of
/// guessing which one they got.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiBody {
    Json(serde_json::Value),
    Text(String),
}

impl ApiBody {
    /// The decoded JSON value, if this body was structured.
    #[must_use]
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, if this body was unstructured.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }
}

// =============================================================================
// REQUEST MODEL
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Cookie-forwarding policy, defaulting to same-origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credentials {
    SameOrigin,
    Include,
    Omit,
}

/// Request payload.
#[derive(Debug)]
pub enum RequestBody {
    /// Serialized as JSON; carries an implicit JSON content type.
    Json(serde_json::Value),
    /// Sent verbatim; pair with a caller-supplied `Content-Type` header
    /// when the default JSON one is wrong.
    Text(String),
    /// Multipart form data. The browser supplies the content type, so the
    /// default JSON header is suppressed.
    #[cfg(feature = "web")]
    Form(web_sys::FormData),
}

impl RequestBody {
    #[cfg(any(test, feature = "web"))]
    pub(crate) fn is_form(&self) -> bool {
        #[cfg(feature = "web")]
        {
            matches!(self, Self::Form(_))
        }
        #[cfg(not(feature = "web"))]
        {
            false
        }
    }
}

/// Caller-controlled knobs for a single request.
#[derive(Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    /// `None` means same-origin.
    pub credentials: Option<Credentials>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            headers: Vec::new(),
            body: None,
            credentials: None,
        }
    }
}

impl RequestOptions {
    /// A plain GET with default headers and credentials.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying a JSON payload.
    #[must_use]
    pub fn post_json(value: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(RequestBody::Json(value)),
            ..Self::default()
        }
    }
}

// =============================================================================
// TOKEN BRIDGE
// =============================================================================

/// Shared bearer-token slot bridging the session provider into the API
/// client. Clones observe the same slot.
#[derive(Clone, Debug, Default)]
pub struct TokenCell(Rc<RefCell<Option<String>>>);

impl TokenCell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: String) {
        *self.0.borrow_mut() = Some(token);
    }

    pub fn clear(&self) {
        *self.0.borrow_mut() = None;
    }

    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}
