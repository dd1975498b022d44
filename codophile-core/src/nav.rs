//! Navigation targets shown in the header and the mobile overlay.

use serde::{Deserialize, Serialize};

/// Anchor ids the page shell reserves for sections that are not built yet.
pub const SECTION_ANCHORS: [&str; 3] = ["features", "playground", "templates"];

/// One entry of the main navigation.
///
/// The order of [`NavItem::ALL`] is the order both the desktop list and the
/// mobile overlay render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavItem {
    Playground,
    Templates,
    Effects,
    Docs,
    About,
}

impl NavItem {
    /// Every navigation item, in display order.
    pub const ALL: [NavItem; 5] = [
        NavItem::Playground,
        NavItem::Templates,
        NavItem::Effects,
        NavItem::Docs,
        NavItem::About,
    ];

    /// Human-readable label rendered in the link.
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Playground => "Playground",
            NavItem::Templates => "Templates",
            NavItem::Effects => "Effects",
            NavItem::Docs => "Docs",
            NavItem::About => "About",
        }
    }

    /// Route of the item: the lower-cased label under the site root.
    pub fn href(&self) -> String {
        format!("/{}", self.label().to_lowercase())
    }

    /// Search keywords for the item, used by the built-in search index.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            NavItem::Playground => &["editor", "live", "sandbox", "code"],
            NavItem::Templates => &["starter", "components", "layouts"],
            NavItem::Effects => &["animation", "css", "motion", "shaders"],
            NavItem::Docs => &["documentation", "guide", "reference"],
            NavItem::About => &["team", "codophile", "contact"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_keep_display_order() {
        let labels: Vec<_> = NavItem::ALL.iter().map(NavItem::label).collect();
        assert_eq!(labels, ["Playground", "Templates", "Effects", "Docs", "About"]);
    }

    #[test]
    fn href_is_lowercased_label() {
        assert_eq!(NavItem::Playground.href(), "/playground");
        assert_eq!(NavItem::Docs.href(), "/docs");
        assert_eq!(NavItem::About.href(), "/about");
    }

    #[test]
    fn every_item_has_keywords() {
        for item in NavItem::ALL {
            assert!(!item.keywords().is_empty(), "{item:?} has no keywords");
        }
    }
}
