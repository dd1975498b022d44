use codophile_core::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let hero = use_context::<SiteConfig>().unwrap_or_default().hero;

    view! {
        <section class="hero">
            <div class="hero__glow"></div>
            <div class="container">
                <div class="hero__content">
                    <div class="hero__badge">
                        <span class="hero__badge-dot"></span>
                        {hero.badge}
                    </div>
                    <h1 class="hero__title">
                        {hero.title}
                        <br />
                        <span class="hero__title-accent">{hero.title_accent}</span>
                    </h1>
                    <p class="hero__description">{hero.description}</p>
                    <div class="hero__actions">
                        <a href=hero.primary_href class="btn btn-primary">
                            {hero.primary_label}
                        </a>
                        <a href=hero.secondary_href class="btn btn-secondary">
                            {hero.secondary_label}
                            " →"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
