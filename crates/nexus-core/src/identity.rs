//! The seam between the site and the external wallet library.
//!
//! The production implementation wraps Stacks Connect in the browser; tests
//! use [`crate::mock::MockIdentity`].

use async_trait::async_trait;
use serde::Serialize;

use crate::config::{Scope, SiteConfig};
use crate::error::SessionResult;
use crate::profile::UserProfile;

/// Callback invoked once the wallet reports a finished connect flow.
pub type FinishCallback = Box<dyn FnOnce()>;

/// Application metadata displayed by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppDetails {
    pub name: String,
    pub icon: String,
}

/// Everything the connect flow needs besides the completion callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    pub app_details: AppDetails,
    pub redirect_to: String,
    pub scopes: Vec<Scope>,
}

impl ConnectOptions {
    /// Builds connect options from the site config and the current origin.
    pub fn from_config(config: &SiteConfig, origin: &str) -> Self {
        Self {
            app_details: AppDetails {
                name: config.app_name.clone(),
                icon: config.icon_url(origin),
            },
            redirect_to: config.redirect_to.clone(),
            scopes: config.scopes.clone(),
        }
    }
}

/// Capabilities consumed from the wallet identity library.
///
/// Single-threaded: implementations live on the browser's main thread.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Whether a redirect-based sign-in is waiting to be resolved.
    fn is_sign_in_pending(&self) -> SessionResult<bool>;

    /// Whether a persisted session exists.
    fn is_user_signed_in(&self) -> SessionResult<bool>;

    /// Loads and decodes the persisted profile.
    fn load_user_data(&self) -> SessionResult<UserProfile>;

    /// Completes a pending sign-in and returns the new profile.
    async fn handle_pending_sign_in(&self) -> SessionResult<UserProfile>;

    /// Opens the interactive connect flow.
    fn show_connect(&self, options: ConnectOptions, on_finish: FinishCallback) -> SessionResult<()>;

    /// Signs out and redirects to `redirect_to`.
    fn sign_user_out(&self, redirect_to: &str) -> SessionResult<()>;
}
