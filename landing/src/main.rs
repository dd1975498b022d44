// Codophile Landing Page — Leptos 0.8 Edition
// Developed by the Codophile Team (c)2025

mod keyboard;
mod sections;

use codophile_core::SiteConfig;
use codophile_core::nav::SECTION_ANCHORS;
use leptos::prelude::*;
use sections::*;

/// Site copy, baked in at compile time. Missing keys use the defaults.
const SITE_CONFIG: &str = include_str!("../site.json");

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(level);

    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    provide_context(SiteConfig::load_or_default(SITE_CONFIG));

    view! {
        <main class="page">
            <Header />
            <Hero />

            // Placeholders for sections linked from the header
            {SECTION_ANCHORS
                .iter()
                .map(|anchor| view! { <div id=*anchor class="page-anchor"></div> })
                .collect_view()}
        </main>
    }
}
