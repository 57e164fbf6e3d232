//! Navbar appearance derived from the route and scroll position.

/// Whether the page has scrolled far enough for a solid navbar.
///
/// Offsets at or above `threshold` count as scrolled.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y >= threshold
}

/// Visual style of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavStyle {
    /// Blends into the hero video.
    #[default]
    Transparent,
    /// Dark background with a bottom border.
    Solid,
}

impl NavStyle {
    /// Transparent only on the home route before the visitor scrolls.
    pub fn resolve(on_home: bool, scrolled: bool) -> Self {
        if on_home && !scrolled {
            NavStyle::Transparent
        } else {
            NavStyle::Solid
        }
    }

    /// Returns the CSS class list for the `nav` element.
    pub fn css_class(&self) -> &'static str {
        match self {
            NavStyle::Transparent => "navbar navbar-transparent",
            NavStyle::Solid => "navbar navbar-solid",
        }
    }
}

/// Label of the navbar's connect button when signed out.
pub const CONNECT_LABEL: &str = "Connect Wallet";
