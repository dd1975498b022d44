use codophile_core::SiteConfig;
use leptos::prelude::*;

use super::icons::{ICON_X, Icon};

/// Development notice above the header bar.
#[component]
pub fn BetaBanner(on_dismiss: Callback<()>) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <div class="beta-banner" role="status">
            <div class="beta-banner__shine"></div>
            <div class="beta-banner__inner">
                <span class="beta-banner__badge">{config.banner_badge}</span>
                <span class="beta-banner__message">{config.banner_message}</span>
                <button
                    class="beta-banner__dismiss"
                    aria-label="Dismiss banner"
                    on:click=move |_| on_dismiss.run(())
                >
                    <Icon path=ICON_X size="14" />
                </button>
            </div>
        </div>
    }
}
