//! Entry point for the Stacks Nexus site.

use std::sync::OnceLock;

use dioxus::prelude::*;
use nexus_core::SiteConfig;
use nexus_site::{platform_services, App};

/// Site configuration embedded at compile time.
const SITE_JSON: &str = include_str!("../assets/site.json");

const STYLES_CSS: Asset = asset!("/assets/styles.css");

/// Parsed configuration, set once before launch.
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let config = SiteConfig::load_or_default(SITE_JSON);

    // Initialize logging
    dioxus::logger::init(config.tracing_level()).ok();

    tracing::info!("Starting {}", config.app_name);
    CONFIG.set(config).ok();

    dioxus::launch(Root);
}

/// Builds the platform services and mounts the app.
#[component]
fn Root() -> Element {
    let services = use_hook(|| {
        let config = CONFIG.get().cloned().unwrap_or_default();
        platform_services(config)
    });

    rsx! {
        document::Stylesheet { href: STYLES_CSS }
        App { services }
    }
}
