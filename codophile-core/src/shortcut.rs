//! Global keyboard shortcuts of the header.
//!
//! Two keys matter:
//!
//! | Keys             | Action                      | Default prevented |
//! |------------------|-----------------------------|-------------------|
//! | Cmd/Ctrl + K     | [`HeaderAction::OpenSearch`]  | yes               |
//! | Escape           | [`HeaderAction::CloseSearch`] | no                |
//!
//! Everything else passes through untouched.

use crate::header::HeaderAction;
use crate::subscription::KeyHandler;

/// Key that opens search when combined with Cmd or Ctrl.
pub const SEARCH_KEY: &str = "k";

/// `KeyboardEvent.key` value of the Escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// The subset of a keydown event the shortcut matcher reads.
///
/// The landing crate implements this over `web_sys::KeyboardEvent`;
/// [`KeyChord`] implements it for headless use.
pub trait KeyPress {
    /// `KeyboardEvent.key` (e.g. `"k"`, `"K"`, `"Escape"`).
    fn key(&self) -> String;
    fn meta_key(&self) -> bool;
    fn ctrl_key(&self) -> bool;
    /// Suppress the host's own handling of this key press.
    fn prevent_default(&self);
}

/// Result of matching a key press against the header shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutMatch {
    pub action: HeaderAction,
    pub prevent_default: bool,
}

/// Match a key press without side effects.
pub fn match_key(press: &dyn KeyPress) -> Option<ShortcutMatch> {
    let key = press.key();

    if (press.meta_key() || press.ctrl_key()) && key.to_lowercase() == SEARCH_KEY {
        return Some(ShortcutMatch {
            action: HeaderAction::OpenSearch,
            prevent_default: true,
        });
    }

    if key == ESCAPE_KEY {
        return Some(ShortcutMatch {
            action: HeaderAction::CloseSearch,
            prevent_default: false,
        });
    }

    None
}

/// Match a key press and, for Cmd/Ctrl+K, prevent the default browser
/// handling. Returns the action to apply.
pub fn resolve(press: &dyn KeyPress) -> Option<HeaderAction> {
    let matched = match_key(press)?;
    if matched.prevent_default {
        press.prevent_default();
    }
    Some(matched.action)
}

/// Build the keydown handler the header registers: every matched press is
/// handed to `apply`.
pub fn action_handler(mut apply: impl FnMut(HeaderAction) + 'static) -> KeyHandler {
    Box::new(move |press: &dyn KeyPress| {
        if let Some(action) = resolve(press) {
            apply(action);
        }
    })
}

/// A synthetic key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Ctrl+K.
    pub fn search() -> Self {
        Self::new(SEARCH_KEY).with_ctrl()
    }

    pub fn escape() -> Self {
        Self::new(ESCAPE_KEY)
    }
}

impl KeyPress for KeyChord {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn meta_key(&self) -> bool {
        self.meta
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl
    }

    fn prevent_default(&self) {}
}
