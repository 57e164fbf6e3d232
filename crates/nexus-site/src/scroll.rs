//! Window scroll subscription feeding the navbar's scroll flag.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use nexus_core::is_scrolled;
use tokio::sync::mpsc;

/// Context handle for the shared scroll flag.
#[derive(Clone, Copy)]
pub struct ScrollFlag(pub Signal<bool>);

/// Tracks whether the window has scrolled past `threshold` pixels.
///
/// The listener is attached on first render and removed when the calling
/// component unmounts.
pub fn use_scroll_flag(threshold: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| false);

    let subscription = use_hook(|| {
        let (tx, mut rx) = mpsc::unbounded_channel::<f64>();

        spawn(async move {
            while let Some(offset) = rx.recv().await {
                let next = is_scrolled(offset, threshold);
                if *scrolled.peek() != next {
                    tracing::debug!("Scroll flag -> {} at {}px", next, offset);
                    scrolled.set(next);
                }
            }
        });

        Rc::new(RefCell::new(ScrollSubscription::attach(move |offset| {
            // Receiver only goes away with the component
            let _ = tx.send(offset);
        })))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    scrolled
}

/// Hands `current` to `on_scroll` before any scroll event arrives, so a page
/// restored mid-scroll starts with the right flag.
fn report_initial<F: FnMut(f64)>(current: Option<f64>, mut on_scroll: F) -> F {
    if let Some(offset) = current {
        on_scroll(offset);
    }
    on_scroll
}

#[cfg(target_arch = "wasm32")]
pub use browser::ScrollSubscription;

#[cfg(not(target_arch = "wasm32"))]
pub use detached::ScrollSubscription;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::report_initial;

    /// A `scroll` listener on the window, removed on drop.
    pub struct ScrollSubscription {
        window: web_sys::Window,
        listener: Closure<dyn FnMut()>,
    }

    impl ScrollSubscription {
        /// Attaches `on_scroll`, which receives `window.scrollY` now and on
        /// every scroll.
        pub fn attach(on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let mut on_scroll = report_initial(window.scroll_y().ok(), on_scroll);
            let source = window.clone();
            let listener = Closure::<dyn FnMut()>::new(move || {
                if let Ok(offset) = source.scroll_y() {
                    on_scroll(offset);
                }
            });

            if let Err(e) = window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                tracing::error!("Failed to attach scroll listener: {:?}", e);
                return None;
            }

            Some(Self { window, listener })
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                "scroll",
                self.listener.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod detached {
    use super::report_initial;

    /// No window to listen to; never attaches.
    pub struct ScrollSubscription;

    impl ScrollSubscription {
        pub fn attach(on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
            report_initial(None, on_scroll);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_offset_reported_before_events() {
        let mut seen = Vec::new();
        let mut on_scroll = report_initial(Some(72.0), |offset| seen.push(offset));
        on_scroll(10.0);
        drop(on_scroll);

        assert_eq!(seen, vec![72.0, 10.0]);
        assert!(is_scrolled(seen[0], 50.0));
    }

    #[test]
    fn test_no_window_reports_nothing() {
        let mut seen = Vec::new();
        drop(report_initial(None, |offset| seen.push(offset)));
        assert!(seen.is_empty());
    }
}
