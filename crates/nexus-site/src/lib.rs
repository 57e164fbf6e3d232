//! Stacks Nexus landing site
//!
//! A Dioxus web application with two routes: the hero page at `/` and the
//! bounty board at `/earn`. Wallet sessions come from Stacks Connect
//! through the session gate in `nexus-core`.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod components;
pub mod host;
pub mod route;
pub mod scroll;
pub mod services;
pub mod session;

pub use components::App;
pub use host::{DetachedHost, PageHost};
pub use route::Route;
pub use services::{platform_services, SiteServices, UnavailableIdentity};
pub use session::{use_session_root, use_wallet, SessionEvent, SessionEvents, Wallet};
