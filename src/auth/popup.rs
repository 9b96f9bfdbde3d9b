//! Browser binding to the identity bridge installed by the hosting page.
//!
//! The page loads the provider SDK as an ES module and exposes its
//! popup sign-in surface at `window.gauchIdentity`; this module adapts
//! that bridge to [`IdentityService`]. Every call tolerates a missing or
//! broken bridge by reporting the thrown value as the cause.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::identity::{AuthUser, IdentityConfig, IdentityService};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "gauchIdentity"], js_name = init)]
    fn bridge_init(config: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "gauchIdentity"], js_name = onAuthChanged)]
    fn bridge_on_auth_changed(callback: &js_sys::Function) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "gauchIdentity"], js_name = signInWithPopup)]
    fn bridge_sign_in_with_popup() -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "gauchIdentity"], js_name = signOut)]
    fn bridge_sign_out() -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "gauchIdentity"], js_name = freshToken)]
    fn bridge_fresh_token() -> Result<js_sys::Promise, JsValue>;
}

/// [`IdentityService`] backed by the page's popup sign-in bridge.
pub struct PopupIdentityService;

impl PopupIdentityService {
    /// Hand the provider configuration to the page bridge.
    #[must_use]
    pub fn new(config: &IdentityConfig) -> Self {
        if let Ok(json) = serde_json::to_string(config) {
            if let Ok(value) = js_sys::JSON::parse(&json) {
                let _ = bridge_init(value);
            }
        }
        Self
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityService for PopupIdentityService {
    fn subscribe(&self, mut callback: Box<dyn FnMut(Option<AuthUser>)>) {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            callback(user_from_js(&value));
        });
        let _ = bridge_on_auth_changed(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    async fn sign_in_with_popup(&self) -> Result<(), String> {
        let promise = bridge_sign_in_with_popup().map_err(|err| js_error_string(&err))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| js_error_string(&err))
    }

    async fn sign_out(&self) -> Result<(), String> {
        let promise = bridge_sign_out().map_err(|err| js_error_string(&err))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| js_error_string(&err))
    }

    async fn fresh_token(&self) -> Result<Option<String>, String> {
        let promise = bridge_fresh_token().map_err(|err| js_error_string(&err))?;
        JsFuture::from(promise)
            .await
            .map(|value| value.as_string())
            .map_err(|err| js_error_string(&err))
    }
}

fn user_from_js(value: &JsValue) -> Option<AuthUser> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let json = js_sys::JSON::stringify(value).ok()?;
    serde_json::from_str(&String::from(json)).ok()
}

fn js_error_string(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    err.dyn_ref::<js_sys::Error>()
        .map_or_else(|| format!("{err:?}"), |e| String::from(e.message()))
}
