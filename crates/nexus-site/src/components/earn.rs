//! Earn page: the bounty board.

use dioxus::prelude::*;
use nexus_core::{bounties, Bounty, BountyAction, APPLICATION_SUBMITTED};

use crate::session::{use_wallet, Wallet};

/// Board state: the wallet plus the bounty last applied for.
#[derive(Clone)]
pub struct BountyBoard {
    wallet: Wallet,
    acknowledged: Signal<Option<u32>>,
}

impl PartialEq for BountyBoard {
    fn eq(&self, other: &Self) -> bool {
        self.acknowledged == other.acknowledged
    }
}

impl BountyBoard {
    pub fn signed_in(&self) -> bool {
        self.wallet.session().read().is_signed_in()
    }

    /// Bounty whose application banner is showing.
    pub fn acknowledged(&self) -> Option<u32> {
        *self.acknowledged.read()
    }

    /// Handles a card button press.
    ///
    /// Applying is local only: nothing is submitted anywhere.
    pub fn act(&self, id: u32, action: BountyAction) {
        match action {
            BountyAction::Apply => {
                tracing::info!("Application acknowledged for bounty {}", id);
                let mut acknowledged = self.acknowledged;
                acknowledged.set(Some(id));
            }
            BountyAction::Connect => self.wallet.connect(),
        }
    }

    pub fn dismiss(&self) {
        let mut acknowledged = self.acknowledged;
        acknowledged.set(None);
    }
}

/// Creates the board for the calling component.
pub fn use_bounty_board() -> BountyBoard {
    let wallet = use_wallet();
    let acknowledged = use_signal(|| None::<u32>);
    BountyBoard { wallet, acknowledged }
}

#[component]
pub fn Earn() -> Element {
    let board = use_bounty_board();
    rsx! { BountyList { board } }
}

/// Page body: header, application banner and the card grid.
#[component]
pub fn BountyList(board: BountyBoard) -> Element {
    let signed_in = board.signed_in();
    let on_action = use_callback({
        let board = board.clone();
        move |(id, action): (u32, BountyAction)| board.act(id, action)
    });

    rsx! {
        div {
            class: "page-content",

            div {
                class: "header-group",
                h1 { class: "page-title", "Developer Bounties" }
                p {
                    class: "page-sub",
                    "Contribute to open source Stacks projects and get funded."
                }
            }

            if board.acknowledged().is_some() {
                div {
                    class: "toast",
                    "role": "status",
                    onclick: {
                        let board = board.clone();
                        move |_| board.dismiss()
                    },
                    "{APPLICATION_SUBMITTED}"
                }
            }

            div {
                class: "grid",
                for bounty in bounties().iter().copied() {
                    BountyCard {
                        key: "{bounty.id}",
                        bounty,
                        signed_in,
                        on_action,
                    }
                }
            }
        }
    }
}

/// A single bounty with its session-dependent action button.
#[component]
pub fn BountyCard(
    bounty: Bounty,
    signed_in: bool,
    on_action: EventHandler<(u32, BountyAction)>,
) -> Element {
    let action = BountyAction::for_session(signed_in);

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                span {
                    class: "tag {bounty.difficulty.css_class()}",
                    "{bounty.difficulty.display_name()}"
                }
            }
            h3 { class: "card-title", "{bounty.title}" }
            p { class: "card-desc", "{bounty.description}" }
            div {
                class: "card-footer",
                span { class: "reward", "{bounty.reward}" }
                button {
                    class: "{action.css_class()}",
                    onclick: move |_| on_action.call((bounty.id, action)),
                    "{action.label()}"
                }
            }
        }
    }
}
