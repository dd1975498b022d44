//! Site copy and outbound links.
//!
//! The landing crate embeds `site.json` at compile time and parses it with
//! [`SiteConfig::load_or_default`]. Every field falls back to the defaults
//! below, so the JSON only needs the keys it wants to change.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Header and banner copy, plus the outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub banner_badge: String,
    pub banner_message: String,
    pub github_url: String,
    pub cta_label: String,
    pub cta_href: String,
    pub search_placeholder: String,
    pub hero: HeroCopy,
}

/// Copy of the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    pub badge: String,
    pub title: String,
    pub title_accent: String,
    pub description: String,
    pub primary_label: String,
    pub primary_href: String,
    pub secondary_label: String,
    pub secondary_href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Codophile".into(),
            logo_src: "/logo.png".into(),
            logo_alt: "Codophile Logo".into(),
            banner_badge: "Beta".into(),
            banner_message: "Codophile is currently in active development. Features may change rapidly! 🚀".into(),
            github_url: "https://github.com/digicraft-one".into(),
            cta_label: "Get Started".into(),
            cta_href: "/docs".into(),
            search_placeholder: "Search documentation, templates…".into(),
            hero: HeroCopy::default(),
        }
    }
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            badge: "Now in beta".into(),
            title: "Build interfaces".into(),
            title_accent: "that feel alive.".into(),
            description: "Codophile is a playground of templates, effects and docs for developers who care about the details. Copy, tweak and ship.".into(),
            primary_label: "Get Started".into(),
            primary_href: "/docs".into(),
            secondary_label: "Explore Playground".into(),
            secondary_href: "/playground".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON document, falling back to [`SiteConfig::default`] when it
    /// is malformed.
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json_str(json) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "falling back to default site configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = SiteConfig::from_json_str(
            r#"{ "brand": "Codophile Labs", "hero": { "title": "Ship faster" } }"#,
        )
        .unwrap();

        assert_eq!(config.brand, "Codophile Labs");
        assert_eq!(config.github_url, "https://github.com/digicraft-one");
        assert_eq!(config.hero.title, "Ship faster");
        assert_eq!(config.hero.secondary_href, "/playground");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = SiteConfig::from_json_str("{ brand: ").unwrap_err();
        assert!(err.to_string().starts_with("invalid site configuration"));
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        assert_eq!(SiteConfig::load_or_default("not json"), SiteConfig::default());
    }

    #[test]
    fn defaults_match_shipped_copy() {
        let config = SiteConfig::default();
        assert_eq!(config.brand, "Codophile");
        assert_eq!(config.banner_badge, "Beta");
        assert_eq!(config.cta_label, "Get Started");
    }
}
