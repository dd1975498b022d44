//! Search overlay mounted by the header while search is open.
//!
//! The header only knows the [`SearchSurface`] contract: render something
//! and call `on_close` when the visitor dismisses it. [`DocsSearch`] is the
//! surface used when the page does not plug in its own.

use codophile_core::{SearchEntry, SearchIndex, SiteConfig};
use leptos::prelude::*;

use super::icons::{ICON_SEARCH, Icon};

/// Anything the header can mount in its search slot.
pub trait SearchSurface: Send + Sync {
    /// Build the overlay. `on_close` must be called once per user-initiated
    /// close; the header unmounts the view afterwards.
    fn render(&self, on_close: Callback<()>) -> AnyView;
}

/// Built-in search over the site's pages and sections.
#[derive(Clone)]
pub struct DocsSearch {
    index: SearchIndex,
}

impl DocsSearch {
    pub fn new(index: SearchIndex) -> Self {
        Self { index }
    }
}

impl Default for DocsSearch {
    fn default() -> Self {
        Self::new(SearchIndex::builtin())
    }
}

impl SearchSurface for DocsSearch {
    fn render(&self, on_close: Callback<()>) -> AnyView {
        view! { <SearchModal index=self.index.clone() on_close=on_close /> }.into_any()
    }
}

/// Command-palette style modal: query input plus filtered results.
///
/// Clicking the backdrop, the close button or a result calls `on_close`.
/// Escape is handled by the header's global shortcut.
#[component]
pub fn SearchModal(index: SearchIndex, on_close: Callback<()>) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let (query, set_query) = signal(String::new());
    let index = StoredValue::new(index);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let results = move || {
        let query = query.get();
        let hits: Vec<SearchEntry> =
            index.with_value(|index| index.query(&query).into_iter().cloned().collect());

        if hits.is_empty() {
            return view! {
                <p class="search-modal__empty">"No results for “" {query} "”"</p>
            }
            .into_any();
        }

        hits.into_iter()
            .map(|SearchEntry { title, href, section, .. }| {
                view! {
                    <a href=href class="search-modal__result" on:click=move |_| on_close.run(())>
                        <span class="search-modal__result-title">{title}</span>
                        <span class="search-modal__result-section">{section}</span>
                    </a>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="search-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="search-modal"
                role="dialog"
                aria-modal="true"
                aria-label="Search"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="search-modal__header">
                    <Icon path=ICON_SEARCH size="18" class="search-modal__icon" />
                    <input
                        node_ref=input_ref
                        type="search"
                        class="search-modal__input"
                        placeholder=config.search_placeholder
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <button class="search-modal__close" on:click=move |_| on_close.run(())>
                        "Esc"
                    </button>
                </div>
                <div class="search-modal__results">{results}</div>
            </div>
        </div>
    }
}
