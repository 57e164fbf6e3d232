//! The page hosting the app: origin lookup and full reloads.

use std::cell::Cell;

/// Page-level effects the session gate asks for.
pub trait PageHost {
    /// Origin of the current page, e.g. `https://nexus.example`.
    fn origin(&self) -> String;

    /// Forces a full reload of the application.
    fn reload(&self);
}

/// Host used outside a browser: fixed origin, reloads are only counted.
#[derive(Debug)]
pub struct DetachedHost {
    origin: String,
    reloads: Cell<usize>,
}

impl DetachedHost {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            reloads: Cell::new(0),
        }
    }

    /// Number of reloads requested so far.
    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl Default for DetachedHost {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

impl PageHost for DetachedHost {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn reload(&self) {
        tracing::warn!("Reload requested outside a browser");
        self.reloads.set(self.reloads.get() + 1);
    }
}

/// The real browser window.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserHost;

#[cfg(target_arch = "wasm32")]
impl PageHost for BrowserHost {
    fn origin(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }

    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window to reload");
            return;
        };
        if let Err(e) = window.location().reload() {
            tracing::error!("Page reload failed: {:?}", e);
        }
    }
}
