//! Fixed page header: banner, logo, search trigger, navigation and the two
//! overlays (mobile menu, search modal).
//!
//! All overlay state is one `RwSignal<HeaderState>`; every handler below
//! goes through `HeaderState::apply`. The menu and search flags are
//! independent, so both overlays may be open at once.

use std::sync::Arc;

use codophile_core::{HeaderAction, HeaderState, NavItem, SiteConfig};
use leptos::prelude::*;

use super::icons::{ICON_COMMAND, ICON_GITHUB, ICON_MENU, ICON_SEARCH, ICON_X, Icon};
use super::{BetaBanner, DocsSearch, MobileMenu, SearchSurface};
use crate::keyboard::register_search_shortcut;

#[component]
pub fn Header(
    /// Surface mounted while search is open. Defaults to [`DocsSearch`].
    #[prop(optional)]
    search: Option<Arc<dyn SearchSurface>>,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let state = RwSignal::new(HeaderState::default());
    let dispatch = move |action: HeaderAction| state.update(|s| s.apply(action));

    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open));
    let search_open = Memo::new(move |_| state.with(|s| s.search_open));
    let banner_visible = Memo::new(move |_| state.with(HeaderState::banner_visible));

    register_search_shortcut(state);

    let surface: Arc<dyn SearchSurface> = search.unwrap_or_else(|| Arc::new(DocsSearch::default()));
    let close_search = Callback::new(move |()| dispatch(HeaderAction::CloseSearch));
    let close_menu = Callback::new(move |()| dispatch(HeaderAction::CloseMenu));
    let dismiss_banner = Callback::new(move |()| dispatch(HeaderAction::DismissBanner));

    view! {
        <header class="header">
            <Show when=move || banner_visible.get()>
                <BetaBanner on_dismiss=dismiss_banner />
            </Show>

            <div class="header__bar">
                // Logo
                <a href="/" class="header__brand">
                    <img src=config.logo_src.clone() alt=config.logo_alt.clone() class="header__logo" />
                    <span class="header__title">{config.brand.clone()}</span>
                </a>

                // Desktop search trigger
                <div class="header__search">
                    <button
                        class="header__search-trigger"
                        on:click=move |_| dispatch(HeaderAction::OpenSearch)
                    >
                        {config.search_placeholder.clone()}
                    </button>
                    <Icon path=ICON_SEARCH size="16" class="header__search-icon" />
                    <span class="header__search-kbd">
                        <Icon path=ICON_COMMAND size="12" />
                        " K"
                    </span>
                </div>

                // Desktop nav
                <div class="header__desktop">
                    <nav class="header__nav" aria-label="Main navigation">
                        {NavItem::ALL
                            .iter()
                            .map(|item| {
                                view! {
                                    <a href=item.href() class="header__nav-link">
                                        {item.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="header__divider"></div>

                    <a
                        href=config.github_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="header__github"
                        aria-label="GitHub"
                    >
                        <Icon path=ICON_GITHUB />
                    </a>

                    <a href=config.cta_href.clone() class="btn btn-primary header__cta">
                        {config.cta_label.clone()}
                    </a>
                </div>

                // Mobile menu toggle
                <div class="header__mobile">
                    <button
                        class="header__menu-toggle"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| dispatch(HeaderAction::ToggleMenu)
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon path=ICON_X size="24" /> }
                            } else {
                                view! { <Icon path=ICON_MENU size="24" /> }
                            }
                        }}
                    </button>
                </div>
            </div>
        </header>

        <MobileMenu open=menu_open on_navigate=close_menu />

        {move || search_open.get().then(|| surface.render(close_search))}
    }
}
