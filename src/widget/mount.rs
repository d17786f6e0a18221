//! Mount lifecycle of a search widget
//!
//! Mounting places a [`SmartSearch`] behind `Rc<RefCell<_>>` and attaches it
//! to a [`KeyboardHub`]. Dropping the [`MountedSearch`] disposes the widget
//! and detaches its key listener, in that order.

use super::SmartSearch;
use crate::navigation::{KeySubscription, KeyboardHub};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A widget attached to a keyboard hub
#[derive(Debug)]
pub struct MountedSearch {
    search: Rc<RefCell<SmartSearch>>,
    subscription: Option<KeySubscription>,
}

impl MountedSearch {
    /// Mount `search`, receiving every key dispatched through `hub`
    #[must_use]
    pub fn mount(search: SmartSearch, hub: &KeyboardHub) -> Self {
        let search = Rc::new(RefCell::new(search));
        let subscription = hub.subscribe(&search);
        tracing::debug!("search widget mounted");
        Self {
            search,
            subscription: Some(subscription),
        }
    }

    /// Shared handle to the widget
    #[must_use]
    pub fn handle(&self) -> Rc<RefCell<SmartSearch>> {
        Rc::clone(&self.search)
    }

    /// Borrow the widget
    ///
    /// # Panics
    ///
    /// Panics if the widget is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, SmartSearch> {
        self.search.borrow()
    }

    /// Borrow the widget mutably
    ///
    /// # Panics
    ///
    /// Panics if the widget is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, SmartSearch> {
        self.search.borrow_mut()
    }
}

impl Drop for MountedSearch {
    fn drop(&mut self) {
        if let Ok(mut search) = self.search.try_borrow_mut() {
            search.dispose();
        }
        self.subscription.take();
        tracing::debug!("search widget unmounted");
    }
}
