//! End-to-end header flow over a headless key source: the same handler the
//! landing page registers on `window`, driven by synthetic key presses.

use std::cell::RefCell;
use std::rc::Rc;

use codophile_core::shortcut::action_handler;
use codophile_core::{HeaderAction, HeaderState, KeyChord, KeySubscription, MemoryKeySource, NavItem};
use pretty_assertions::assert_eq;

struct MountedHeader {
    state: Rc<RefCell<HeaderState>>,
    subscription: KeySubscription<MemoryKeySource>,
}

fn mount(source: &MemoryKeySource) -> MountedHeader {
    let state = Rc::new(RefCell::new(HeaderState::default()));
    let sink = state.clone();
    let subscription = KeySubscription::subscribe(
        source.clone(),
        action_handler(move |action| sink.borrow_mut().apply(action)),
    )
    .expect("memory source never rejects listeners");

    MountedHeader { state, subscription }
}

/// Links the mobile overlay renders while the menu is open.
fn mobile_links(state: &HeaderState) -> Vec<(&'static str, String)> {
    if !state.menu_open {
        return Vec::new();
    }
    NavItem::ALL.iter().map(|item| (item.label(), item.href())).collect()
}

#[test]
fn shortcut_escape_and_mobile_menu_scenario() {
    let source = MemoryKeySource::new();
    let header = mount(&source);

    assert!(!header.state.borrow().search_open);
    assert!(!header.state.borrow().menu_open);

    source.dispatch(&KeyChord::new("k").with_ctrl());
    assert!(header.state.borrow().search_open);

    source.dispatch(&KeyChord::escape());
    assert!(!header.state.borrow().search_open);

    header.state.borrow_mut().apply(HeaderAction::ToggleMenu);
    let links = mobile_links(&header.state.borrow());
    assert_eq!(
        links,
        vec![
            ("Playground", "/playground".to_string()),
            ("Templates", "/templates".to_string()),
            ("Effects", "/effects".to_string()),
            ("Docs", "/docs".to_string()),
            ("About", "/about".to_string()),
        ]
    );

    header.state.borrow_mut().apply(HeaderAction::CloseMenu);
    assert!(mobile_links(&header.state.borrow()).is_empty());
}

#[test]
fn repeated_shortcuts_are_idempotent() {
    let source = MemoryKeySource::new();
    let header = mount(&source);

    for _ in 0..3 {
        source.dispatch(&KeyChord::new("K").with_meta());
        assert!(header.state.borrow().search_open);
    }
    for _ in 0..3 {
        source.dispatch(&KeyChord::escape());
        assert!(!header.state.borrow().search_open);
    }
}

#[test]
fn unmounted_header_ignores_key_presses() {
    let source = MemoryKeySource::new();
    let MountedHeader { state, subscription } = mount(&source);
    assert_eq!(source.listener_count(), 1);

    drop(subscription);
    assert_eq!(source.listener_count(), 0);

    let before = *state.borrow();
    assert_eq!(source.dispatch(&KeyChord::search()), 0);
    assert_eq!(*state.borrow(), before);
}

#[test]
fn remounting_keeps_a_single_listener() {
    let source = MemoryKeySource::new();

    let first = mount(&source);
    drop(first);
    let second = mount(&source);

    assert_eq!(source.listener_count(), 1);
    assert!(second.subscription.is_active());
    source.dispatch(&KeyChord::search());
    assert!(second.state.borrow().search_open);
}

#[test]
fn menu_and_search_can_be_open_together() {
    let source = MemoryKeySource::new();
    let header = mount(&source);

    header.state.borrow_mut().apply(HeaderAction::ToggleMenu);
    source.dispatch(&KeyChord::search());

    let state = *header.state.borrow();
    assert!(state.menu_open);
    assert!(state.search_open);
}
