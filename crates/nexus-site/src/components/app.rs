//! Root application component.

use dioxus::prelude::*;

use crate::route::Route;
use crate::scroll::{use_scroll_flag, ScrollFlag};
use crate::services::SiteServices;
use crate::session::use_session_root;

/// Root application component.
///
/// Owns the session and the scroll flag and hands both down by context.
#[component]
pub fn App(services: SiteServices) -> Element {
    let threshold = services.config().scroll_threshold_px;
    use_session_root(services);

    let scrolled = use_scroll_flag(threshold);
    use_context_provider(|| ScrollFlag(scrolled));

    rsx! {
        div {
            class: "app-container",
            Router::<Route> {}
        }
    }
}
