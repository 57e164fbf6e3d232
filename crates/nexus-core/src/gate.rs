//! Session gate: decides on mount whether the visitor is signed in.
//!
//! Resolution order is pending sign-in, then persisted session, then
//! signed-out. Any failure along the way is treated as corrupted local
//! state: storage is wiped and the host is told to reload, after which the
//! gate resolves to signed-out. There is no retry and no partial recovery.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::error::SessionResult;
use crate::identity::{ConnectOptions, IdentityProvider};
use crate::profile::UserProfile;
use crate::session::{Restored, SessionState};
use crate::storage::LocalStore;

/// Mediates every session operation between the views and the wallet library.
#[derive(Clone)]
pub struct SessionGate {
    identity: Rc<dyn IdentityProvider>,
    store: Rc<dyn LocalStore>,
    config: SiteConfig,
}

impl SessionGate {
    /// Creates a gate over the given wallet library and storage.
    pub fn new(
        identity: Rc<dyn IdentityProvider>,
        store: Rc<dyn LocalStore>,
        config: SiteConfig,
    ) -> Self {
        Self {
            identity,
            store,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Synchronous part of the mount check.
    ///
    /// Returns [`Restored::Pending`] when a redirect sign-in must still be
    /// awaited with [`Self::complete_pending`].
    pub fn restore(&self) -> Restored {
        match self.inspect() {
            Ok(Some(restored)) => restored,
            Ok(None) => Restored::SignedOut,
            Err(e) => self.reset(e),
        }
    }

    fn inspect(&self) -> SessionResult<Option<Restored>> {
        if self.identity.is_sign_in_pending()? {
            tracing::info!("Sign-in pending, awaiting wallet response");
            return Ok(Some(Restored::Pending));
        }
        if self.identity.is_user_signed_in()? {
            let profile = self.identity.load_user_data()?;
            tracing::info!("Restored session for {}", profile.badge_label());
            return Ok(Some(Restored::SignedIn(profile)));
        }
        tracing::debug!("No wallet session found");
        Ok(None)
    }

    /// Awaits a pending redirect sign-in.
    pub async fn complete_pending(&self) -> Restored {
        match self.identity.handle_pending_sign_in().await {
            Ok(profile) => {
                tracing::info!("Pending sign-in resolved for {}", profile.badge_label());
                Restored::SignedIn(profile)
            }
            Err(e) => self.reset(e),
        }
    }

    /// Full mount check, awaiting a pending sign-in when there is one.
    pub async fn resolve(&self) -> Restored {
        match self.restore() {
            Restored::Pending => self.complete_pending().await,
            restored => restored,
        }
    }

    fn reset(&self, cause: crate::SessionError) -> Restored {
        tracing::error!("Session corrupted, resetting: {}", cause);
        if let Err(e) = self.store.clear() {
            tracing::error!("Failed to clear local storage: {}", e);
        }
        Restored::Reset
    }

    /// Opens the wallet connect flow.
    ///
    /// `on_finish` receives the freshly loaded profile once the wallet
    /// reports completion.
    pub fn connect<F>(&self, origin: &str, on_finish: F) -> SessionResult<()>
    where
        F: FnOnce(SessionResult<UserProfile>) + 'static,
    {
        let options = ConnectOptions::from_config(&self.config, origin);
        tracing::info!("Opening wallet connect for {}", options.app_details.name);

        let identity = Rc::clone(&self.identity);
        self.identity.show_connect(
            options,
            Box::new(move || on_finish(identity.load_user_data())),
        )
    }

    /// Signs out through the wallet library and clears `state`.
    ///
    /// Local state is cleared even if the library reports a failure.
    pub fn disconnect(&self, state: &mut SessionState) -> SessionResult<()> {
        tracing::info!("Disconnecting wallet");
        let result = self.identity.sign_user_out(&self.config.redirect_to);
        state.clear();
        result
    }
}
