//! Authenticated HTTP access to the GauchAI backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the fetch wrapper and base-URL resolution; `types` defines
//! the request/response model and error kinds shared with callers.

pub mod api;
pub mod types;
