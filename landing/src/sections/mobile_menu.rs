use std::time::Duration;

use codophile_core::NavItem;
use leptos::prelude::*;

/// Matches the `mobile-menu--exit` animation in style/main.css.
const EXIT_ANIMATION: Duration = Duration::from_millis(200);

/// Full-width navigation overlay shown below the large breakpoint.
///
/// Fades and slides in while `open`; on close it plays the exit animation
/// before unmounting. Following a link calls `on_navigate`.
#[component]
pub fn MobileMenu(
    #[prop(into)] open: Signal<bool>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    let (mounted, set_mounted) = signal(open.get_untracked());
    let (leaving, set_leaving) = signal(false);

    Effect::new(move || {
        if open.get() {
            set_leaving.set(false);
            set_mounted.set(true);
        } else if mounted.get_untracked() {
            set_leaving.set(true);
            set_timeout(
                move || {
                    // Reopened while the exit animation was running
                    if open.try_get_untracked() == Some(false) {
                        set_mounted.try_set(false);
                        set_leaving.try_set(false);
                    }
                },
                EXIT_ANIMATION,
            );
        }
    });

    view! {
        <Show when=move || mounted.get()>
            <nav
                class=move || {
                    if leaving.get() {
                        "mobile-menu mobile-menu--exit"
                    } else {
                        "mobile-menu mobile-menu--enter"
                    }
                }
                aria-label="Mobile navigation"
            >
                {NavItem::ALL
                    .iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href()
                                class="mobile-menu__link"
                                on:click=move |_| on_navigate.run(())
                            >
                                {item.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
