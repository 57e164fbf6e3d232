//! Shared page layout.

use dioxus::prelude::*;

use crate::route::Route;

use super::Navbar;

/// Layout wrapping every route: fixed navbar above the page.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Navbar { on_home: route.is_home() }
        Outlet::<Route> {}
    }
}
