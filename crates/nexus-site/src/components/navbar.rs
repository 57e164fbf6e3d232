//! Fixed navbar with logo, page links and the wallet control.

use dioxus::prelude::*;
use nexus_core::{NavStyle, CONNECT_LABEL};

use crate::route::Route;
use crate::scroll::ScrollFlag;
use crate::session::use_wallet;

/// Top navigation bar.
///
/// Transparent over the home hero until the visitor scrolls, solid
/// everywhere else.
#[component]
pub fn Navbar(on_home: bool) -> Element {
    let ScrollFlag(scrolled) = use_context::<ScrollFlag>();
    let style = NavStyle::resolve(on_home, scrolled());

    rsx! {
        nav {
            class: "{style.css_class()}",

            div {
                class: "logo-group",
                div {
                    class: "logo-icon",
                    "⚡"
                }
                Link {
                    to: Route::Home {},
                    class: "nav-link-logo",
                    "Stacks Nexus"
                }
            }

            div {
                class: "nav-links",
                Link { to: Route::Home {}, class: "link", "Mission" }
                Link { to: Route::Earn {}, class: "link", "Bounties" }
                WalletControl {}
            }
        }
    }
}

/// Wallet badge with a disconnect button, or the connect button.
#[component]
pub fn WalletControl() -> Element {
    let wallet = use_wallet();
    let session = wallet.session();
    let session = session.read();

    match (session.badge_label(), session.wallet_address()) {
        (Some(label), Some(address)) => rsx! {
            div {
                class: "wallet-badge",
                title: "{address}",
                span { class: "status-dot" }
                "{label}"
                button {
                    class: "btn-disconnect",
                    title: "Disconnect",
                    onclick: move |_| wallet.disconnect(),
                    "×"
                }
            }
        },
        _ => rsx! {
            button {
                class: "btn-primary",
                onclick: move |_| wallet.connect(),
                "{CONNECT_LABEL}"
            }
        },
    }
}
