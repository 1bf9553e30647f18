//! Synchronous change subscriptions shared by the settings and theme stores.
//!
//! Fan-out is synchronous and runs in registration order; a mutation does
//! not return until every callback has run. A panicking callback propagates
//! out of the mutator and skips the remaining entries. Callbacks must not
//! subscribe or unsubscribe re-entrantly.

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

type Callback<T> = Box<dyn FnMut(&T) + Send>;

struct SubscriberList<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// Registration-ordered list of change callbacks.
pub(crate) struct Subscribers<T> {
    inner: Arc<Mutex<SubscriberList<T>>>,
}

impl<T: 'static> Subscribers<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SubscriberList {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub(crate) fn subscribe(&self, callback: impl FnMut(&T) + Send + 'static) -> Subscription {
        let mut list = self.inner.lock();
        let id = list.next_id;
        list.next_id += 1;
        list.entries.push((id, Box::new(callback)));
        Subscription {
            id,
            list: Arc::downgrade(&self.inner) as Weak<dyn RemoveById + Send + Sync>,
        }
    }

    /// Invoke every callback in registration order with `value`.
    pub(crate) fn notify(&self, value: &T) {
        let mut list = self.inner.lock();
        for (_, callback) in &mut list.entries {
            callback(value);
        }
    }
}

trait RemoveById: Send + Sync {
    fn remove(&self, id: u64);
}

impl<T: 'static> RemoveById for Mutex<SubscriberList<T>> {
    fn remove(&self, id: u64) {
        self.lock().entries.retain(|(entry_id, _)| *entry_id != id);
    }
}

/// Handle returned by `on_settings_change` / `on_theme_change`.
///
/// Removes exactly the subscriber it was created for.
pub struct Subscription {
    id: u64,
    list: Weak<dyn RemoveById + Send + Sync>,
}

impl Subscription {
    /// Unregister the associated callback. Idempotent, and a no-op once the
    /// owning store has been dropped.
    pub fn unsubscribe(&self) {
        if let Some(list) = self.list.upgrade() {
            list.remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
