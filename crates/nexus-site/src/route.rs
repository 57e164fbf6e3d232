//! Client-side routes.

use dioxus::prelude::*;

use crate::components::{Earn, Home, Shell};

/// The two pages of the site, rendered inside [`Shell`].
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/earn")]
        Earn {},
}

impl Route {
    /// Whether this is the hero page, where the navbar starts transparent.
    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home {})
    }
}
