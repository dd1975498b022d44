//! Entries listed by the built-in search modal.
//!
//! Matching is a case-insensitive substring test over title, section and
//! tags. An empty query lists everything; results keep index order.

use serde::{Deserialize, Serialize};

use crate::nav::{NavItem, SECTION_ANCHORS};

/// One searchable destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub title: String,
    pub href: String,
    /// Group heading shown next to the result (e.g. "Pages").
    pub section: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SearchEntry {
    pub fn new(title: impl Into<String>, href: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            section: section.into(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the entry matches `query` (already trimmed, any case).
    pub fn matches(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();

        self.title.to_lowercase().contains(&query_lower)
            || self.section.to_lowercase().contains(&query_lower)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&query_lower))
    }
}

/// Ordered collection of [`SearchEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    /// Navigation pages followed by the on-page sections.
    pub fn builtin() -> Self {
        let pages = NavItem::ALL.iter().map(|item| {
            SearchEntry::new(item.label(), item.href(), "Pages").with_tags(item.keywords().iter().copied())
        });

        let sections = SECTION_ANCHORS.iter().map(|anchor| {
            let mut title = anchor.to_string();
            if let Some(first) = title.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            SearchEntry::new(title, format!("/#{anchor}"), "On this page")
        });

        Self::new(pages.chain(sections).collect())
    }

    /// Entries matching `query`, in index order.
    pub fn query(&self, query: &str) -> Vec<&SearchEntry> {
        let query = query.trim();
        if query.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries.iter().filter(|entry| entry.matches(query)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
