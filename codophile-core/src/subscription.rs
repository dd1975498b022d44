//! Ownership of the header's global keydown listener.
//!
//! A [`KeySubscription`] registers one handler on a [`KeySource`] when it is
//! created and removes it when dropped. The header keeps the subscription for
//! exactly as long as it is mounted, so remounting never stacks handlers and
//! a torn-down header never sees another key press.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::KeyboardError;
use crate::shortcut::KeyPress;

/// Callback invoked for every keydown delivered by a source.
pub type KeyHandler = Box<dyn FnMut(&dyn KeyPress)>;

/// Something that delivers keydown events to registered handlers.
pub trait KeySource {
    /// Handle kept by the subscription to remove the handler later.
    type Token;

    fn listen(&self, handler: KeyHandler) -> Result<Self::Token, KeyboardError>;

    fn unlisten(&self, token: Self::Token);
}

/// RAII guard for one registered keydown handler.
pub struct KeySubscription<S: KeySource> {
    source: S,
    token: Option<S::Token>,
}

impl<S: KeySource> KeySubscription<S> {
    /// Register `handler` on `source`.
    pub fn subscribe(source: S, handler: KeyHandler) -> Result<Self, KeyboardError> {
        let token = source.listen(handler)?;
        tracing::debug!("keyboard listener registered");
        Ok(Self {
            source,
            token: Some(token),
        })
    }

    /// The handler is still registered.
    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// Remove the handler now instead of at drop time.
    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            self.source.unlisten(token);
            tracing::debug!("keyboard listener released");
        }
    }
}

impl<S: KeySource> Drop for KeySubscription<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Default)]
struct MemoryListeners {
    next_id: u64,
    handlers: Vec<(u64, KeyHandler)>,
}

/// In-process key source for headless hosts and tests.
///
/// Clones share the same listener list. Handlers run while the list is
/// borrowed, so a handler must not subscribe or unsubscribe on the same
/// source.
#[derive(Clone, Default)]
pub struct MemoryKeySource {
    listeners: Rc<RefCell<MemoryListeners>>,
}

impl MemoryKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `press` to every registered handler, in registration order.
    /// Returns how many handlers ran.
    pub fn dispatch(&self, press: &dyn KeyPress) -> usize {
        let mut listeners = self.listeners.borrow_mut();
        for (_, handler) in listeners.handlers.iter_mut() {
            handler(press);
        }
        listeners.handlers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().handlers.len()
    }
}

impl KeySource for MemoryKeySource {
    type Token = u64;

    fn listen(&self, handler: KeyHandler) -> Result<Self::Token, KeyboardError> {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.handlers.push((id, handler));
        Ok(id)
    }

    fn unlisten(&self, token: Self::Token) {
        self.listeners
            .borrow_mut()
            .handlers
            .retain(|(id, _)| *id != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::KeyChord;
    use std::cell::Cell;

    fn counting_handler(hits: Rc<Cell<usize>>) -> KeyHandler {
        Box::new(move |_press: &dyn KeyPress| hits.set(hits.get() + 1))
    }

    #[test]
    fn subscribe_registers_one_listener() {
        let source = MemoryKeySource::new();
        let hits = Rc::new(Cell::new(0));

        let sub = KeySubscription::subscribe(source.clone(), counting_handler(hits.clone()))
            .unwrap();

        assert!(sub.is_active());
        assert_eq!(source.listener_count(), 1);
        assert_eq!(source.dispatch(&KeyChord::new("a")), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn drop_releases_listener() {
        let source = MemoryKeySource::new();
        let hits = Rc::new(Cell::new(0));

        let sub = KeySubscription::subscribe(source.clone(), counting_handler(hits.clone()))
            .unwrap();
        drop(sub);

        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.dispatch(&KeyChord::escape()), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let source = MemoryKeySource::new();
        let hits = Rc::new(Cell::new(0));

        let mut sub =
            KeySubscription::subscribe(source.clone(), counting_handler(hits)).unwrap();
        sub.cancel();
        sub.cancel();

        assert!(!sub.is_active());
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn remount_does_not_stack_handlers() {
        let source = MemoryKeySource::new();
        let hits = Rc::new(Cell::new(0));

        let first = KeySubscription::subscribe(source.clone(), counting_handler(hits.clone()))
            .unwrap();
        drop(first);
        let _second =
            KeySubscription::subscribe(source.clone(), counting_handler(hits.clone())).unwrap();

        source.dispatch(&KeyChord::search());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropping_one_subscription_keeps_the_other() {
        let source = MemoryKeySource::new();
        let a_hits = Rc::new(Cell::new(0));
        let b_hits = Rc::new(Cell::new(0));

        let a = KeySubscription::subscribe(source.clone(), counting_handler(a_hits.clone()))
            .unwrap();
        let _b = KeySubscription::subscribe(source.clone(), counting_handler(b_hits.clone()))
            .unwrap();
        drop(a);

        assert_eq!(source.dispatch(&KeyChord::new("x")), 1);
        assert_eq!(a_hits.get(), 0);
        assert_eq!(b_hits.get(), 1);
    }
}
