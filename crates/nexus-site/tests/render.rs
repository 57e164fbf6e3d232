//! Server-side render tests for the session-dependent views
//!
//! Each test mounts a view under `use_session_root` with the mock wallet
//! library and inspects the first render. The async tests then drive the
//! session through the wallet and let the runtime settle before rendering
//! again.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use nexus_core::{
    BountyAction, IdentityCall, LocalStore, MemoryStore, MockIdentity, SessionGate, SiteConfig,
    UserProfile,
};
use nexus_site::components::{use_bounty_board, BountyBoard, BountyList, Earn, WalletControl};
use nexus_site::{use_session_root, use_wallet, DetachedHost, SiteServices, Wallet};

const MAINNET: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";

struct Fixture {
    services: SiteServices,
    identity: Rc<MockIdentity>,
    host: Rc<DetachedHost>,
    store: Rc<MemoryStore>,
}

fn fixture(build: impl FnOnce(Rc<MemoryStore>) -> MockIdentity) -> Fixture {
    let store = Rc::new(MemoryStore::new());
    let identity = Rc::new(build(store.clone()));
    let host = Rc::new(DetachedHost::new("https://nexus.example"));
    let gate = SessionGate::new(identity.clone(), store.clone(), SiteConfig::default());
    Fixture {
        services: SiteServices::new(gate, host.clone()),
        identity,
        host,
        store,
    }
}

fn profile() -> UserProfile {
    UserProfile::new(MAINNET, "ST2J6ZY48GV1")
}

fn signed_in() -> Fixture {
    fixture(|store| {
        MockIdentity::signed_in(store, &profile()).unwrap()
    })
}

fn signed_out() -> Fixture {
    fixture(MockIdentity::signed_out)
}

#[component]
fn EarnHarness(services: SiteServices) -> Element {
    use_session_root(services);
    rsx! { Earn {} }
}

#[component]
fn WalletHarness(services: SiteServices) -> Element {
    use_session_root(services);
    rsx! { WalletControl {} }
}

/// Hands a value created inside the tree back to the test.
#[derive(Clone)]
struct Slot<T>(Rc<RefCell<Option<T>>>);

impl<T: Clone> Slot<T> {
    fn new() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    fn set(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    fn get(&self) -> T {
        self.0.borrow().clone().expect("harness has rendered")
    }
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
fn CapturingWalletHarness(services: SiteServices, slot: Slot<Wallet>) -> Element {
    use_session_root(services);
    let wallet = use_wallet();
    use_hook(move || slot.set(wallet));
    rsx! { WalletControl {} }
}

#[component]
fn CapturingBoardHarness(services: SiteServices, slot: Slot<BountyBoard>) -> Element {
    use_session_root(services);
    let board = use_bounty_board();
    use_hook({
        let board = board.clone();
        move || slot.set(board)
    });
    rsx! { BountyList { board } }
}

fn mount_wallet(services: SiteServices) -> (VirtualDom, Wallet) {
    let slot = Slot::new();
    let props = CapturingWalletHarnessProps { services, slot: slot.clone() };
    let mut dom = VirtualDom::new_with_props(CapturingWalletHarness, props);
    dom.rebuild_in_place();
    (dom, slot.get())
}

fn mount_board(services: SiteServices) -> (VirtualDom, BountyBoard) {
    let slot = Slot::new();
    let props = CapturingBoardHarnessProps { services, slot: slot.clone() };
    let mut dom = VirtualDom::new_with_props(CapturingBoardHarness, props);
    dom.rebuild_in_place();
    (dom, slot.get())
}

/// Runs spawned tasks until a scope is dirty (or nothing is left to do),
/// then re-renders.
async fn settle(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work()).await;
    dom.render_immediate(&mut NoOpMutations);
}

fn render_earn(services: SiteServices) -> String {
    let mut dom = VirtualDom::new_with_props(EarnHarness, EarnHarnessProps { services });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_wallet(services: SiteServices) -> String {
    let mut dom = VirtualDom::new_with_props(WalletHarness, WalletHarnessProps { services });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

// ============================================================================
// Earn page
// ============================================================================

#[test]
fn test_earn_lists_three_bounties() {
    let html = render_earn(signed_out().services);

    assert_eq!(html.matches("class=\"card\"").count(), 3);
    assert!(html.contains("Create sBTC Swap UI"));
    assert!(html.contains("Clarinet Test Suite"));
    assert!(html.contains("Discord Verification Bot"));
    assert!(html.contains("1,500 STX"));
    assert!(html.contains("Developer Bounties"));
}

#[test]
fn test_earn_signed_out_buttons_connect() {
    let html = render_earn(signed_out().services);

    assert_eq!(html.matches("Connect Wallet").count(), 3);
    assert!(!html.contains("Apply Now"));
    assert!(!html.contains("Application Submitted!"));
}

#[test]
fn test_earn_signed_in_buttons_apply() {
    let html = render_earn(signed_in().services);

    assert_eq!(html.matches("Apply Now").count(), 3);
    assert_eq!(html.matches("btn-claim").count(), 3);
    assert!(!html.contains("Connect Wallet"));
}

// ============================================================================
// Wallet control
// ============================================================================

#[test]
fn test_wallet_control_signed_in_shows_badge() {
    let html = render_wallet(signed_in().services);

    assert!(html.contains("wallet-badge"));
    assert!(html.contains("SP2J..."));
    // Full address only as the tooltip
    assert_eq!(html.matches(MAINNET).count(), 1);
    assert!(html.contains(&format!("title=\"{}\"", MAINNET)));
    assert!(!html.contains("Connect Wallet"));
}

#[test]
fn test_wallet_control_signed_out_shows_connect() {
    let html = render_wallet(signed_out().services);

    assert!(html.contains("Connect Wallet"));
    assert!(!html.contains("wallet-badge"));
}

// ============================================================================
// Mount edge cases
// ============================================================================

#[test]
fn test_corrupted_session_reloads_with_empty_storage() {
    let fixture = fixture(|store| MockIdentity::corrupted(store, "%%garbage%%").unwrap());

    let html = render_wallet(fixture.services.clone());

    assert_eq!(fixture.host.reloads(), 1);
    assert!(fixture.store.is_empty().unwrap());
    assert!(html.contains("Connect Wallet"));
}

#[test]
fn test_pending_sign_in_renders_signed_out_until_resolved() {
    let fixture = fixture(|store| MockIdentity::pending(store, Ok(profile())));

    let html = render_wallet(fixture.services.clone());

    assert!(html.contains("Connect Wallet"));
    assert_eq!(fixture.host.reloads(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn test_pending_sign_in_resolves_into_badge() {
    let fixture = fixture(|store| MockIdentity::pending(store, Ok(profile())));
    let (mut dom, _) = mount_wallet(fixture.services.clone());
    assert!(dioxus_ssr::render(&dom).contains("Connect Wallet"));

    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("wallet-badge"));
    assert!(html.contains("SP2J..."));
    assert!(!html.contains("Connect Wallet"));
    assert_eq!(fixture.host.reloads(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn test_rejected_pending_sign_in_wipes_and_reloads() {
    let fixture = fixture(|store| {
        store.set("stale-entry", "1").unwrap();
        MockIdentity::pending(store, Err("authResponse expired".to_string()))
    });
    let (mut dom, _) = mount_wallet(fixture.services.clone());
    assert_eq!(fixture.host.reloads(), 0);

    settle(&mut dom).await;

    assert_eq!(fixture.host.reloads(), 1);
    assert!(fixture.store.is_empty().unwrap());
    assert!(dioxus_ssr::render(&dom).contains("Connect Wallet"));
}

// ============================================================================
// Wallet operations
// ============================================================================

#[tokio::test(flavor = "current_thread")]
async fn test_disconnect_swaps_badge_for_connect_button() {
    let fixture = signed_in();
    let (mut dom, wallet) = mount_wallet(fixture.services.clone());
    assert!(dioxus_ssr::render(&dom).contains("wallet-badge"));

    dom.in_runtime(|| wallet.disconnect());
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Connect Wallet"));
    assert!(!html.contains("wallet-badge"));
    assert!(fixture
        .identity
        .calls()
        .iter()
        .any(|call| matches!(call, IdentityCall::SignUserOut(_))));
}

#[tokio::test(flavor = "current_thread")]
async fn test_connect_shows_badge_once_wallet_approves() {
    let fixture = signed_out();
    let (mut dom, wallet) = mount_wallet(fixture.services.clone());

    dom.in_runtime(|| wallet.connect());
    assert!(fixture.identity.connect_open());
    assert!(dioxus_ssr::render(&dom).contains("Connect Wallet"));

    assert!(fixture.identity.finish_connect(&profile()).unwrap());
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("wallet-badge"));
    assert!(html.contains("SP2J..."));
}

// ============================================================================
// Bounty actions
// ============================================================================

#[tokio::test(flavor = "current_thread")]
async fn test_apply_shows_banner_without_wallet_calls() {
    let fixture = signed_in();
    let (mut dom, board) = mount_board(fixture.services.clone());
    let calls_before = fixture.identity.calls().len();

    dom.in_runtime(|| board.act(1, BountyAction::Apply));
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert_eq!(html.matches("Application Submitted!").count(), 1);
    assert_eq!(dom.in_runtime(|| board.acknowledged()), Some(1));
    assert_eq!(fixture.identity.calls().len(), calls_before);

    dom.in_runtime(|| board.dismiss());
    settle(&mut dom).await;
    assert!(!dioxus_ssr::render(&dom).contains("Application Submitted!"));
}

#[tokio::test(flavor = "current_thread")]
async fn test_connect_action_opens_wallet() {
    let fixture = signed_out();
    let (mut dom, board) = mount_board(fixture.services.clone());

    dom.in_runtime(|| board.act(2, BountyAction::Connect));

    assert!(fixture.identity.connect_open());
    assert!(fixture
        .identity
        .calls()
        .iter()
        .any(|call| matches!(call, IdentityCall::ShowConnect(_))));
    settle(&mut dom).await;
    assert!(!dioxus_ssr::render(&dom).contains("Application Submitted!"));
}
