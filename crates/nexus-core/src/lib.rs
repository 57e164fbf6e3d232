//! Platform-free core of the Stacks Nexus site.
//!
//! Holds everything that does not need a browser: the wallet session gate
//! and its seams, the bounty catalogue, navbar styling rules and the site
//! configuration. The Dioxus front end in `nexus-site` wires these to the
//! DOM and to Stacks Connect.
//!
//! # Session gate
//!
//! ```ignore
//! use nexus_core::{SessionGate, Restored, SiteConfig};
//!
//! let gate = SessionGate::new(identity, store, SiteConfig::default());
//! match gate.restore() {
//!     Restored::Pending => { /* await gate.complete_pending() */ }
//!     Restored::Reset => { /* reload the page */ }
//!     restored => { /* render signed-in or signed-out */ }
//! }
//! ```

pub mod bounty;
pub mod config;
pub mod error;
pub mod gate;
pub mod identity;
pub mod mock;
pub mod navbar;
pub mod profile;
pub mod session;
pub mod storage;

pub use bounty::{bounties, Bounty, BountyAction, Difficulty, APPLICATION_SUBMITTED};
pub use config::{Scope, SiteConfig};
pub use error::{ConfigError, SessionError, SessionResult};
pub use gate::SessionGate;
pub use identity::{AppDetails, ConnectOptions, FinishCallback, IdentityProvider};
pub use mock::{IdentityCall, MockIdentity};
pub use navbar::{is_scrolled, NavStyle, CONNECT_LABEL};
pub use profile::{StxAddress, UserProfile};
pub use session::{Restored, SessionState};
pub use storage::{LocalStore, MemoryStore, SESSION_STORAGE_KEY};
