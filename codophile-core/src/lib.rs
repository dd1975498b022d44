//! Headless core of the Codophile landing page.
//!
//! Everything the page header decides lives here, free of any browser
//! binding, so it can be exercised with plain `cargo test`:
//!
//! - [`header`] - overlay flags and the actions that change them
//! - [`shortcut`] - mapping of key presses onto header actions
//! - [`subscription`] - keyboard listener ownership (register on mount,
//!   release on drop)
//! - [`nav`] - the fixed navigation items and page anchors
//! - [`config`] - site copy loaded from JSON
//! - [`search`] - entries behind the built-in search modal
//!
//! The `codophile-landing` crate renders these with Leptos and plugs
//! `web_sys::Window` in as a [`subscription::KeySource`].
//!
//! Developed by the Codophile Team (c)2025

pub mod config;
pub mod error;
pub mod header;
pub mod nav;
pub mod search;
pub mod shortcut;
pub mod subscription;

pub use config::{HeroCopy, SiteConfig};
pub use error::{ConfigError, KeyboardError};
pub use header::{HeaderAction, HeaderState};
pub use nav::NavItem;
pub use search::{SearchEntry, SearchIndex};
pub use shortcut::{KeyChord, KeyPress, ShortcutMatch};
pub use subscription::{KeyHandler, KeySource, KeySubscription, MemoryKeySource};
