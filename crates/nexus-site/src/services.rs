//! Wiring of the session gate to the platform it runs on.

use std::rc::Rc;

use async_trait::async_trait;
use nexus_core::{
    ConnectOptions, FinishCallback, IdentityProvider, LocalStore, SessionError, SessionGate,
    SessionResult, SiteConfig, UserProfile,
};

use crate::host::PageHost;

/// Services shared with every component through context.
#[derive(Clone)]
pub struct SiteServices {
    pub gate: SessionGate,
    pub host: Rc<dyn PageHost>,
}

impl SiteServices {
    pub fn new(gate: SessionGate, host: Rc<dyn PageHost>) -> Self {
        Self { gate, host }
    }

    pub fn config(&self) -> &SiteConfig {
        self.gate.config()
    }
}

impl PartialEq for SiteServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.host, &other.host)
    }
}

/// Stand-in used when the wallet library cannot be loaded.
///
/// Always signed out; connecting fails and is logged by the caller.
#[derive(Debug, Default)]
pub struct UnavailableIdentity;

#[async_trait(?Send)]
impl IdentityProvider for UnavailableIdentity {
    fn is_sign_in_pending(&self) -> SessionResult<bool> {
        Ok(false)
    }

    fn is_user_signed_in(&self) -> SessionResult<bool> {
        Ok(false)
    }

    fn load_user_data(&self) -> SessionResult<UserProfile> {
        Err(SessionError::bridge("wallet library unavailable"))
    }

    async fn handle_pending_sign_in(&self) -> SessionResult<UserProfile> {
        Err(SessionError::bridge("wallet library unavailable"))
    }

    fn show_connect(&self, _options: ConnectOptions, _on_finish: FinishCallback) -> SessionResult<()> {
        Err(SessionError::Connect("wallet library unavailable".to_string()))
    }

    fn sign_user_out(&self, _redirect_to: &str) -> SessionResult<()> {
        Ok(())
    }
}

/// Builds the services for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn platform_services(config: SiteConfig) -> SiteServices {
    use crate::browser::{BrowserStorage, StacksConnect};
    use crate::host::BrowserHost;

    let identity: Rc<dyn IdentityProvider> = match StacksConnect::new(&config) {
        Ok(connect) => Rc::new(connect),
        Err(e) => {
            tracing::error!("Wallet library unavailable: {}", e);
            Rc::new(UnavailableIdentity)
        }
    };
    let store: Rc<dyn LocalStore> = Rc::new(BrowserStorage);
    SiteServices::new(
        SessionGate::new(identity, store, config),
        Rc::new(BrowserHost),
    )
}

/// Builds the services for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_services(config: SiteConfig) -> SiteServices {
    use crate::host::DetachedHost;
    use nexus_core::MemoryStore;

    tracing::warn!("Not running in a browser; wallet connect is disabled");
    let store: Rc<dyn LocalStore> = Rc::new(MemoryStore::new());
    SiteServices::new(
        SessionGate::new(Rc::new(UnavailableIdentity), store, config),
        Rc::new(DetachedHost::default()),
    )
}
