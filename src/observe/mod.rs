//! Observer registration with explicit lifetime management.
//!
//! Callers get a [`Subscription`] handle back from [`Observers::subscribe`];
//! dropping the handle removes the callback. Notification never runs under the
//! registry lock, so callbacks are free to subscribe or unsubscribe.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;
type Registry<E> = Mutex<BTreeMap<u64, Callback<E>>>;

pub struct Observers<E> {
    registry: Arc<Registry<E>>,
    next_id: AtomicU64,
}

impl<E: 'static> Observers<E> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&E) + Send + Sync + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry
            .lock()
            .expect("observer registry poisoned")
            .insert(id, Arc::new(callback));

        let registry: Weak<Registry<E>> = Arc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.lock().expect("observer registry poisoned").remove(&id);
                }
            })),
        }
    }

    /// Invokes every registered callback in subscription order.
    pub fn notify(&self, event: &E) {
        let callbacks: Vec<Callback<E>> = self
            .registry
            .lock()
            .expect("observer registry poisoned")
            .values()
            .cloned()
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.registry.lock().expect("observer registry poisoned").len()
    }
}

impl<E: 'static> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for a registered observer. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
