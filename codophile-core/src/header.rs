//! Overlay state owned by the page header.
//!
//! DESIGN
//! ======
//! The header holds a handful of booleans and every input (click or key
//! press) is reduced to a [`HeaderAction`] before touching them. The Leptos
//! component keeps one `RwSignal<HeaderState>` and calls [`HeaderState::apply`]
//! from its event handlers; tests drive the same reducer directly.
//!
//! The mobile menu and the search modal may be open at the same time.
//! Nothing here closes one when the other opens.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Visibility flags of the header overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Mobile navigation overlay is visible.
    pub menu_open: bool,
    /// Search modal is mounted.
    pub search_open: bool,
    /// Beta banner was dismissed by the visitor.
    pub banner_dismissed: bool,
}

/// Every state change the header knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    /// Mobile toggle button: flip the menu.
    ToggleMenu,
    /// A link inside the mobile overlay was followed.
    CloseMenu,
    /// Desktop search trigger or Cmd/Ctrl+K.
    OpenSearch,
    /// Escape, or the modal's close callback.
    CloseSearch,
    /// Close button on the beta banner.
    DismissBanner,
}

impl HeaderState {
    /// Apply `action` in place. Total and idempotent for every action except
    /// [`HeaderAction::ToggleMenu`], which is an involution.
    pub fn apply(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::ToggleMenu => self.menu_open = !self.menu_open,
            HeaderAction::CloseMenu => self.menu_open = false,
            HeaderAction::OpenSearch => self.search_open = true,
            HeaderAction::CloseSearch => self.search_open = false,
            HeaderAction::DismissBanner => self.banner_dismissed = true,
        }

        tracing::debug!(
            ?action,
            menu_open = self.menu_open,
            search_open = self.search_open,
            "header action applied"
        );
    }

    /// Builder-style variant of [`apply`](Self::apply).
    #[must_use]
    pub fn applied(mut self, action: HeaderAction) -> Self {
        self.apply(action);
        self
    }

    /// Whether the beta banner should still be rendered.
    pub fn banner_visible(&self) -> bool {
        !self.banner_dismissed
    }

    /// Both overlays are open at once.
    pub fn overlays_stacked(&self) -> bool {
        self.menu_open && self.search_open
    }
}
