//! Stacks Connect, reached through `assets/stacks_bridge.js`.

use async_trait::async_trait;
use nexus_core::{
    ConnectOptions, FinishCallback, IdentityProvider, SessionError, SessionResult, SiteConfig,
    UserProfile,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/assets/stacks_bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = configure, catch)]
    fn bridge_configure(scopes_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = isSignInPending, catch)]
    fn bridge_is_sign_in_pending() -> Result<bool, JsValue>;

    #[wasm_bindgen(js_name = isUserSignedIn, catch)]
    fn bridge_is_user_signed_in() -> Result<bool, JsValue>;

    #[wasm_bindgen(js_name = loadUserData, catch)]
    fn bridge_load_user_data() -> Result<String, JsValue>;

    #[wasm_bindgen(js_name = handlePendingSignIn, catch)]
    async fn bridge_handle_pending_sign_in() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = openConnect, catch)]
    fn bridge_open_connect(options_json: &str, on_finish: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = signUserOut, catch)]
    fn bridge_sign_user_out(redirect_to: &str) -> Result<(), JsValue>;
}

/// Readable message for a thrown JS value.
fn describe(err: JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

/// [`IdentityProvider`] backed by the Stacks Connect `UserSession`.
#[derive(Debug)]
pub struct StacksConnect;

impl StacksConnect {
    /// Creates the library's `UserSession` with the configured scopes.
    pub fn new(config: &SiteConfig) -> SessionResult<Self> {
        let scopes = serde_json::to_string(&config.scopes)
            .map_err(|e| SessionError::bridge(e.to_string()))?;
        bridge_configure(&scopes).map_err(|e| SessionError::bridge(describe(e)))?;
        tracing::debug!("Stacks Connect configured with scopes {}", scopes);
        Ok(Self)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for StacksConnect {
    fn is_sign_in_pending(&self) -> SessionResult<bool> {
        bridge_is_sign_in_pending().map_err(|e| SessionError::decode(describe(e)))
    }

    fn is_user_signed_in(&self) -> SessionResult<bool> {
        bridge_is_user_signed_in().map_err(|e| SessionError::decode(describe(e)))
    }

    fn load_user_data(&self) -> SessionResult<UserProfile> {
        let json = bridge_load_user_data().map_err(|e| SessionError::decode(describe(e)))?;
        UserProfile::from_user_data_json(&json)
    }

    async fn handle_pending_sign_in(&self) -> SessionResult<UserProfile> {
        let value = bridge_handle_pending_sign_in()
            .await
            .map_err(|e| SessionError::pending(describe(e)))?;
        let json = value
            .as_string()
            .ok_or_else(|| SessionError::decode("pending sign-in returned no user data"))?;
        UserProfile::from_user_data_json(&json)
    }

    fn show_connect(&self, options: ConnectOptions, on_finish: FinishCallback) -> SessionResult<()> {
        let options_json =
            serde_json::to_string(&options).map_err(|e| SessionError::Connect(e.to_string()))?;
        let callback = Closure::once_into_js(move || on_finish());
        bridge_open_connect(&options_json, &callback).map_err(|e| SessionError::Connect(describe(e)))
    }

    fn sign_user_out(&self, redirect_to: &str) -> SessionResult<()> {
        bridge_sign_user_out(redirect_to).map_err(|e| SessionError::SignOut(describe(e)))
    }
}
