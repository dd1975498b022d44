//! Browser binding of the header's keyboard subscription.
//!
//! [`WindowKeySource`] attaches keydown handlers to `window`, and
//! [`register_search_shortcut`] ties one of them to the lifetime of the
//! calling component.

use codophile_core::shortcut::action_handler;
use codophile_core::{HeaderState, KeyHandler, KeyPress, KeySource, KeySubscription, KeyboardError};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

/// Key source backed by the global `window` object.
pub struct WindowKeySource {
    window: web_sys::Window,
}

impl WindowKeySource {
    pub fn current() -> Result<Self, KeyboardError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(KeyboardError::NoWindow)
    }
}

impl KeySource for WindowKeySource {
    type Token = Closure<dyn FnMut(KeyboardEvent)>;

    fn listen(&self, mut handler: KeyHandler) -> Result<Self::Token, KeyboardError> {
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            handler(&BrowserKey(&event));
        }) as Box<dyn FnMut(KeyboardEvent)>);

        self.window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(|err| KeyboardError::Register(format!("{err:?}")))?;

        Ok(closure)
    }

    fn unlisten(&self, token: Self::Token) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("keydown", token.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?err, "failed to remove keydown listener");
        }
    }
}

struct BrowserKey<'a>(&'a KeyboardEvent);

impl KeyPress for BrowserKey<'_> {
    fn key(&self) -> String {
        self.0.key()
    }

    fn meta_key(&self) -> bool {
        self.0.meta_key()
    }

    fn ctrl_key(&self) -> bool {
        self.0.ctrl_key()
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// Register Cmd/Ctrl+K and Escape on `window` for as long as the current
/// reactive owner lives. The listener is removed in `on_cleanup`.
///
/// A failed registration only costs the shortcut; the page keeps working.
pub fn register_search_shortcut(state: RwSignal<HeaderState>) {
    let handler = action_handler(move |action| {
        state.try_update(|s| s.apply(action));
    });

    match WindowKeySource::current().and_then(|source| KeySubscription::subscribe(source, handler)) {
        Ok(subscription) => {
            // Closures are !Send; CSR drops this on the thread that made it.
            let subscription = SendWrapper::new(subscription);
            on_cleanup(move || drop(subscription));
        }
        Err(err) => tracing::warn!(%err, "search shortcut unavailable"),
    }
}
