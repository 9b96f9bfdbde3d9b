//! Session handling over an external identity provider.
//!
//! ARCHITECTURE
//! ============
//! `identity` defines the provider contract (trait, config, errors);
//! `session` keeps the last-known user and exposes login/logout/token on
//! top of any [`identity::IdentityService`]; `popup` binds the contract
//! to the identity bridge the hosting page installs.

pub mod identity;
#[cfg(feature = "web")]
pub mod popup;
pub mod session;
