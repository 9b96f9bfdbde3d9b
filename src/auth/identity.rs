//! Identity-provider contract: configuration, user shape, and the
//! service trait the session provider depends on.

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Static identity-provider configuration supplied by the hosting
/// application.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

/// The authenticated identity reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

/// Errors raised by interactive identity flows.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The interactive sign-in flow did not complete.
    #[error("auth flow failed: {0}")]
    AuthFlowFailed(String),

    /// Sign-out did not complete.
    #[error("sign-out failed: {0}")]
    SignOutFailed(String),
}

/// Provider-neutral identity service contract.
///
/// The real provider and test doubles both implement this, so session
/// logic never depends on an external network-backed sign-in flow.
/// Errors are plain cause descriptions; the session provider wraps them
/// into [`AuthError`] kinds.
#[async_trait::async_trait(?Send)]
pub trait IdentityService {
    /// Register the provider's change stream. The provider serializes
    /// callback invocations; each carries the new identity or `None`
    /// after sign-out.
    fn subscribe(&self, callback: Box<dyn FnMut(Option<AuthUser>)>);

    /// Run the interactive popup sign-in flow to completion.
    ///
    /// # Errors
    ///
    /// A description of the underlying cause when the flow fails or is
    /// dismissed.
    async fn sign_in_with_popup(&self) -> Result<(), String>;

    /// Sign the current user out.
    ///
    /// # Errors
    ///
    /// A description of the underlying cause.
    async fn sign_out(&self) -> Result<(), String>;

    /// Request a fresh bearer token, refreshing transparently if needed.
    /// `Ok(None)` when the provider has no signed-in user.
    ///
    /// # Errors
    ///
    /// A description of the underlying cause.
    async fn fresh_token(&self) -> Result<Option<String>, String>;
}
