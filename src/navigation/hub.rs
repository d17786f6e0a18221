//! Window-wide key delivery
//!
//! Navigation keys are delivered to every mounted widget, not just the one
//! holding focus, because the navigable list does not own input focus.
//! [`KeyboardHub`] holds weak references to its listeners and hands out a
//! [`KeySubscription`] for each; dropping the subscription detaches the
//! listener, so a torn-down widget can never receive a key.
//!
//! Every subscribed listener receives every key. There is no arbitration
//! between simultaneously mounted widgets.

use super::{KeyOutcome, NavKey};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Receiver of window-wide key events
pub trait KeyListener {
    fn on_key(&mut self, key: NavKey) -> KeyOutcome;
}

struct ListenerSlot {
    id: u64,
    listener: Weak<RefCell<dyn KeyListener>>,
}

#[derive(Default)]
struct HubInner {
    next_id: Cell<u64>,
    slots: RefCell<Vec<ListenerSlot>>,
}

/// Broadcasts key events to subscribed listeners
///
/// Cloning yields another handle to the same hub.
#[derive(Clone, Default)]
pub struct KeyboardHub {
    inner: Rc<HubInner>,
}

/// Summary of one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// Listeners that received the key
    pub delivered: usize,
    /// Whether any listener asked to suppress the default action
    pub prevent_default: bool,
}

impl KeyboardHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `listener` until the returned subscription is dropped
    #[must_use = "dropping the subscription detaches the listener immediately"]
    pub fn subscribe<L>(&self, listener: &Rc<RefCell<L>>) -> KeySubscription
    where
        L: KeyListener + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let listener: Rc<RefCell<dyn KeyListener>> = listener.clone();
        self.inner.slots.borrow_mut().push(ListenerSlot {
            id,
            listener: Rc::downgrade(&listener),
        });
        tracing::debug!(id, "key listener attached");

        KeySubscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Number of attached listeners that are still alive
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .slots
            .borrow()
            .iter()
            .filter(|slot| slot.listener.strong_count() > 0)
            .count()
    }

    /// Deliver `key` to every live listener
    ///
    /// Listeners are snapshotted first, so a listener may subscribe or
    /// unsubscribe while handling the key. A listener that is already
    /// borrowed (a key delivered from inside its own handler) is skipped.
    pub fn dispatch(&self, key: NavKey) -> DispatchResult {
        let listeners: Vec<Rc<RefCell<dyn KeyListener>>> = {
            let mut slots = self.inner.slots.borrow_mut();
            slots.retain(|slot| slot.listener.strong_count() > 0);
            slots.iter().filter_map(|slot| slot.listener.upgrade()).collect()
        };

        let mut result = DispatchResult::default();
        for slot in listeners {
            let Ok(mut listener) = slot.try_borrow_mut() else {
                tracing::warn!(%key, "skipping busy key listener");
                continue;
            };
            let outcome = listener.on_key(key);
            result.delivered += 1;
            result.prevent_default |= outcome.prevent_default;
        }
        result
    }
}

impl fmt::Debug for KeyboardHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Scoped attachment of a listener to a [`KeyboardHub`]
///
/// Detaches on drop. Outliving the hub is harmless.
pub struct KeySubscription {
    id: u64,
    hub: Weak<HubInner>,
}

impl KeySubscription {
    /// Detach now
    pub fn unsubscribe(self) {}
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.slots.borrow_mut().retain(|slot| slot.id != self.id);
            tracing::debug!(id = self.id, "key listener detached");
        }
    }
}

impl fmt::Debug for KeySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySubscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        keys: Vec<NavKey>,
    }

    impl KeyListener for Recorder {
        fn on_key(&mut self, key: NavKey) -> KeyOutcome {
            self.keys.push(key);
            if key == NavKey::Tab {
                KeyOutcome::ignored()
            } else {
                KeyOutcome::handled(None)
            }
        }
    }

    #[test]
    fn test_dispatch_reaches_every_listener() {
        let hub = KeyboardHub::new();
        let a = Rc::new(RefCell::new(Recorder::default()));
        let b = Rc::new(RefCell::new(Recorder::default()));
        let _sa = hub.subscribe(&a);
        let _sb = hub.subscribe(&b);

        let result = hub.dispatch(NavKey::ArrowDown);
        assert_eq!(result.delivered, 2);
        assert!(result.prevent_default);
        assert_eq!(a.borrow().keys, [NavKey::ArrowDown]);
        assert_eq!(b.borrow().keys, [NavKey::ArrowDown]);
    }

    #[test]
    fn test_prevent_default_reflects_listeners() {
        let hub = KeyboardHub::new();
        let a = Rc::new(RefCell::new(Recorder::default()));
        let _sa = hub.subscribe(&a);

        assert!(!hub.dispatch(NavKey::Tab).prevent_default);
    }

    #[test]
    fn test_dropping_subscription_detaches() {
        let hub = KeyboardHub::new();
        let a = Rc::new(RefCell::new(Recorder::default()));
        let sub = hub.subscribe(&a);
        assert_eq!(hub.listener_count(), 1);

        drop(sub);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.dispatch(NavKey::Enter).delivered, 0);
        assert!(a.borrow().keys.is_empty());
    }

    #[test]
    fn test_dropped_listener_is_not_called() {
        let hub = KeyboardHub::new();
        let a = Rc::new(RefCell::new(Recorder::default()));
        let _sub = hub.subscribe(&a);

        drop(a);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.dispatch(NavKey::Enter).delivered, 0);
    }

    #[test]
    fn test_busy_listener_is_skipped() {
        let hub = KeyboardHub::new();
        let a = Rc::new(RefCell::new(Recorder::default()));
        let _sub = hub.subscribe(&a);

        let guard = a.borrow_mut();
        assert_eq!(hub.dispatch(NavKey::Home).delivered, 0);
        drop(guard);
        assert_eq!(hub.dispatch(NavKey::Home).delivered, 1);
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let a = Rc::new(RefCell::new(Recorder::default()));
        let sub = {
            let hub = KeyboardHub::new();
            hub.subscribe(&a)
        };
        sub.unsubscribe();
    }
}
