//! Home page: full-screen hero over a looping background video.

use dioxus::prelude::*;

use crate::route::Route;
use crate::services::SiteServices;

#[component]
pub fn Home() -> Element {
    let services = use_context::<SiteServices>();
    let hero_video = services.config().hero_video.clone();

    rsx! {
        div {
            class: "page-container",
            div {
                class: "hero-container",
                div { class: "video-overlay" }
                video {
                    class: "video-bg",
                    autoplay: true,
                    r#loop: true,
                    muted: true,
                    playsinline: true,
                    source { src: "{hero_video}", r#type: "video/mp4" }
                }

                div {
                    class: "hero-content",
                    span {
                        class: "hero-tag",
                        "THE BITCOIN LAYER FOR SMART CONTRACTS"
                    }
                    h1 {
                        class: "hero-title",
                        "Build on the "
                        br {}
                        " World's Most Secure Blockchain."
                    }
                    p {
                        class: "hero-sub",
                        "Activate the Bitcoin economy. Write Clarity smart contracts, launch sBTC apps, and earn Bitcoin yield via Proof of Transfer (PoX)."
                    }
                    div {
                        class: "hero-buttons",
                        Link {
                            to: Route::Earn {},
                            button {
                                class: "btn-hero-primary",
                                "View Bounties"
                            }
                        }
                    }
                }
            }
        }
    }
}
