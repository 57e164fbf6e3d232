//! Session state owned by the root component and the hooks that reach it.

use dioxus::prelude::*;
use nexus_core::{Restored, SessionState, UserProfile};
use tokio::sync::mpsc;

use crate::services::SiteServices;

/// Session changes arriving from outside the render cycle.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The connect flow finished and the profile loaded.
    Connected(UserProfile),
    /// A pending sign-in resolved.
    Resolved(Restored),
}

/// Sender for [`SessionEvent`]s, shared through context.
///
/// Wallet callbacks fire from JavaScript, outside any Dioxus scope, so they
/// post here and the root task applies them to the session signal.
#[derive(Clone)]
pub struct SessionEvents(mpsc::UnboundedSender<SessionEvent>);

impl SessionEvents {
    pub fn send(&self, event: SessionEvent) {
        if self.0.send(event).is_err() {
            tracing::warn!("Session event dropped: root component is gone");
        }
    }
}

/// Runs the session gate and provides the session to the tree.
///
/// Must be called once, from the root component. The signed-in and
/// signed-out outcomes are known on the first render; a pending sign-in is
/// awaited in a task; corrupted state triggers a reload.
pub fn use_session_root(services: SiteServices) -> Signal<SessionState> {
    let services = use_context_provider(|| services);
    let restored = use_hook(|| services.gate.restore());
    let session = use_signal(|| SessionState::from_restored(&restored));
    use_context_provider(|| session);

    let events = use_hook(|| {
        let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();
        let host = services.host.clone();
        let mut session = session;

        spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    SessionEvent::Connected(profile)
                    | SessionEvent::Resolved(Restored::SignedIn(profile)) => {
                        tracing::info!("Wallet connected: {}", profile.badge_label());
                        session.write().adopt(profile);
                    }
                    SessionEvent::Resolved(restored) if restored.requires_reload() => host.reload(),
                    SessionEvent::Resolved(_) => {}
                }
            }
        });

        SessionEvents(tx)
    });
    use_context_provider(|| events.clone());

    use_hook(|| {
        if restored.requires_reload() {
            services.host.reload();
        } else if restored == Restored::Pending {
            let gate = services.gate.clone();
            let events = events.clone();
            spawn(async move {
                events.send(SessionEvent::Resolved(gate.complete_pending().await));
            });
        }
    });

    session
}

/// Session operations available to views.
#[derive(Clone)]
pub struct Wallet {
    services: SiteServices,
    session: Signal<SessionState>,
    events: SessionEvents,
}

impl Wallet {
    pub fn session(&self) -> Signal<SessionState> {
        self.session
    }

    /// Opens the wallet connect flow; the profile is adopted when it finishes.
    pub fn connect(&self) {
        let events = self.events.clone();
        let origin = self.services.host.origin();
        let result = self.services.gate.connect(&origin, move |loaded| match loaded {
            Ok(profile) => events.send(SessionEvent::Connected(profile)),
            Err(e) => tracing::error!("Failed to load profile after connect: {}", e),
        });
        if let Err(e) = result {
            tracing::error!("Failed to open wallet connect: {}", e);
        }
    }

    /// Signs out and clears the session immediately.
    pub fn disconnect(&self) {
        let mut session = self.session;
        if let Err(e) = self.services.gate.disconnect(&mut session.write()) {
            tracing::warn!("Wallet sign-out reported an error: {}", e);
        }
    }
}

/// Gets the [`Wallet`] provided by [`use_session_root`].
pub fn use_wallet() -> Wallet {
    Wallet {
        services: use_context::<SiteServices>(),
        session: use_context::<Signal<SessionState>>(),
        events: use_context::<SessionEvents>(),
    }
}
