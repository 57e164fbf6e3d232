//! Mock wallet library for testing
//!
//! Persists its session into a shared [`MemoryStore`] under
//! [`SESSION_STORAGE_KEY`], the way Stacks Connect uses `localStorage`, so
//! corrupted data and storage wipes behave like they do in the browser.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let store = Rc::new(MemoryStore::new());
//! let identity = Rc::new(MockIdentity::signed_in(store.clone(), profile));
//! let gate = SessionGate::new(identity, store, SiteConfig::default());
//! assert!(matches!(gate.restore(), Restored::SignedIn(_)));
//! ```

use std::rc::Rc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{SessionError, SessionResult};
use crate::identity::{ConnectOptions, FinishCallback, IdentityProvider};
use crate::profile::UserProfile;
use crate::storage::{LocalStore, MemoryStore, SESSION_STORAGE_KEY};

/// A call observed by [`MockIdentity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityCall {
    IsSignInPending,
    IsUserSignedIn,
    LoadUserData,
    HandlePendingSignIn,
    ShowConnect(ConnectOptions),
    SignUserOut(String),
}

/// In-memory stand-in for the wallet identity library.
pub struct MockIdentity {
    store: Rc<MemoryStore>,
    /// Outcome of the redirect sign-in, if one is pending
    pending: Mutex<Option<Result<UserProfile, String>>>,
    /// Completion callback of an open connect flow
    connect_callback: Mutex<Option<FinishCallback>>,
    /// Error returned by the next sign-out
    sign_out_error: Mutex<Option<String>>,
    calls: Mutex<Vec<IdentityCall>>,
}

impl MockIdentity {
    /// Creates a mock with no session.
    pub fn signed_out(store: Rc<MemoryStore>) -> Self {
        Self {
            store,
            pending: Mutex::new(None),
            connect_callback: Mutex::new(None),
            sign_out_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock with `profile` already persisted.
    pub fn signed_in(store: Rc<MemoryStore>, profile: &UserProfile) -> SessionResult<Self> {
        let mock = Self::signed_out(store);
        mock.persist(profile)?;
        Ok(mock)
    }

    /// Creates a mock whose redirect sign-in resolves to `outcome`.
    pub fn pending(store: Rc<MemoryStore>, outcome: Result<UserProfile, String>) -> Self {
        let mock = Self::signed_out(store);
        *mock.pending.lock() = Some(outcome);
        mock
    }

    /// Creates a mock whose persisted session holds undecodable data.
    pub fn corrupted(store: Rc<MemoryStore>, raw: &str) -> SessionResult<Self> {
        store.set(SESSION_STORAGE_KEY, raw)?;
        Ok(Self::signed_out(store))
    }

    /// Makes the next sign-out fail with `message`.
    pub fn fail_next_sign_out(&self, message: impl Into<String>) {
        *self.sign_out_error.lock() = Some(message.into());
    }

    /// Simulates the wallet approving an open connect flow.
    ///
    /// Returns `false` if no connect flow was open.
    pub fn finish_connect(&self, profile: &UserProfile) -> SessionResult<bool> {
        self.persist(profile)?;
        let callback = self.connect_callback.lock().take();
        match callback {
            Some(on_finish) => {
                on_finish();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether a connect flow is waiting for the wallet.
    pub fn connect_open(&self) -> bool {
        self.connect_callback.lock().is_some()
    }

    /// Calls observed so far.
    pub fn calls(&self) -> Vec<IdentityCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: IdentityCall) {
        self.calls.lock().push(call);
    }

    fn persist(&self, profile: &UserProfile) -> SessionResult<()> {
        self.store
            .set(SESSION_STORAGE_KEY, &profile.to_user_data_json()?)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MockIdentity {
    fn is_sign_in_pending(&self) -> SessionResult<bool> {
        self.record(IdentityCall::IsSignInPending);
        Ok(self.pending.lock().is_some())
    }

    fn is_user_signed_in(&self) -> SessionResult<bool> {
        self.record(IdentityCall::IsUserSignedIn);
        Ok(self.store.get(SESSION_STORAGE_KEY)?.is_some())
    }

    fn load_user_data(&self) -> SessionResult<UserProfile> {
        self.record(IdentityCall::LoadUserData);
        let raw = self
            .store
            .get(SESSION_STORAGE_KEY)?
            .ok_or_else(|| SessionError::decode("no persisted session"))?;
        UserProfile::from_user_data_json(&raw)
    }

    async fn handle_pending_sign_in(&self) -> SessionResult<UserProfile> {
        self.record(IdentityCall::HandlePendingSignIn);
        let outcome = self
            .pending
            .lock()
            .take()
            .ok_or_else(|| SessionError::pending("no sign-in pending"))?;
        let profile = outcome.map_err(SessionError::pending)?;
        self.persist(&profile)?;
        Ok(profile)
    }

    fn show_connect(&self, options: ConnectOptions, on_finish: FinishCallback) -> SessionResult<()> {
        self.record(IdentityCall::ShowConnect(options));
        *self.connect_callback.lock() = Some(on_finish);
        Ok(())
    }

    fn sign_user_out(&self, redirect_to: &str) -> SessionResult<()> {
        self.record(IdentityCall::SignUserOut(redirect_to.to_string()));
        if let Some(message) = self.sign_out_error.lock().take() {
            return Err(SessionError::SignOut(message));
        }
        self.store.remove(SESSION_STORAGE_KEY)
    }
}
