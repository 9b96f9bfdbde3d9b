//! Session provider: last-known user plus login/logout/token flows.
//!
//! ARCHITECTURE
//! ============
//! The provider caches the most recent identity reported by the change
//! stream, so `current_session` is non-blocking and may trail the
//! provider by one notification round-trip. The subscription closure is
//! the sole writer of that cache.
//!
//! TRADE-OFFS
//! ==========
//! Flow failures are logged and re-raised without retry; token refresh
//! failures degrade to `None` so callers fall back to unauthenticated
//! requests instead of crashing the page.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use super::identity::{AuthError, AuthUser, IdentityService};

/// Tracks the current session over any [`IdentityService`].
pub struct SessionProvider {
    service: Rc<dyn IdentityService>,
    current: Rc<RefCell<Option<AuthUser>>>,
}

impl SessionProvider {
    #[must_use]
    pub fn new(service: Rc<dyn IdentityService>) -> Self {
        Self { service, current: Rc::new(RefCell::new(None)) }
    }

    /// The last identity reported by the change stream, if any.
    #[must_use]
    pub fn current_session(&self) -> Option<AuthUser> {
        self.current.borrow().clone()
    }

    /// Register for identity changes. On every provider event the cached
    /// session is replaced wholesale, then `callback` observes the new
    /// value.
    pub fn subscribe(&self, mut callback: impl FnMut(Option<AuthUser>) + 'static) {
        let current = Rc::clone(&self.current);
        self.service.subscribe(Box::new(move |user| {
            *current.borrow_mut() = user.clone();
            callback(user);
        }));
    }

    /// Run the interactive sign-in flow.
    ///
    /// # Errors
    ///
    /// [`AuthError::AuthFlowFailed`] carrying the underlying cause; the
    /// failure is logged before it is re-raised.
    pub async fn login(&self) -> Result<(), AuthError> {
        self.service.sign_in_with_popup().await.map_err(|cause| {
            log::error!("login failed: {cause}");
            AuthError::AuthFlowFailed(cause)
        })
    }

    /// Sign the current user out.
    ///
    /// # Errors
    ///
    /// [`AuthError::SignOutFailed`] carrying the underlying cause; the
    /// failure is logged before it is re-raised.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.service.sign_out().await.map_err(|cause| {
            log::error!("logout failed: {cause}");
            AuthError::SignOutFailed(cause)
        })
    }

    /// A fresh bearer token for the current session, or `None` when no
    /// session is current or the refresh fails.
    pub async fn token(&self) -> Option<String> {
        if self.current.borrow().is_none() {
            return None;
        }
        match self.service.fresh_token().await {
            Ok(token) => token,
            Err(cause) => {
                log::warn!("token refresh failed: {cause}");
                None
            }
        }
    }
}
