//! View-side copy of the wallet session.

use crate::profile::UserProfile;

/// Outcome of inspecting the persisted session on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restored {
    /// A profile is available.
    SignedIn(UserProfile),
    /// No session exists.
    SignedOut,
    /// A redirect sign-in is resolving; await [`crate::SessionGate::complete_pending`].
    Pending,
    /// Persisted state was unreadable and has been wiped; the page must reload.
    Reset,
}

impl Restored {
    /// Whether the host must reload the page.
    pub fn requires_reload(&self) -> bool {
        matches!(self, Restored::Reset)
    }
}

/// Transient, non-owning cache of the signed-in profile.
///
/// Owned by the root view and handed down by context; the wallet library's
/// storage remains the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    profile: Option<UserProfile>,
}

impl SessionState {
    /// Creates a signed-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the initial state for a restore outcome.
    pub fn from_restored(restored: &Restored) -> Self {
        match restored {
            Restored::SignedIn(profile) => Self {
                profile: Some(profile.clone()),
            },
            _ => Self::default(),
        }
    }

    /// Adopts a freshly loaded profile.
    pub fn adopt(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Drops the cached profile.
    pub fn clear(&mut self) {
        self.profile = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Full wallet address, if signed in.
    pub fn wallet_address(&self) -> Option<&str> {
        self.profile.as_ref().map(UserProfile::wallet_address)
    }

    /// Truncated address for the navbar badge, if signed in.
    pub fn badge_label(&self) -> Option<String> {
        self.profile.as_ref().map(UserProfile::badge_label)
    }
}
