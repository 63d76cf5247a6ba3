//! Cache-invalidation channel keyed by URI identity.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use tracing::trace;

/// A subscribed invalidation callback.
type Listener = Arc<dyn Fn(&str) + Send + Sync>;

/// Multicast invalidation channel over URI identity.
///
/// Callers fire [`invalidate`](Self::invalidate) to tell a host document
/// cache "discard what you have for this URI; re-parse and re-resolve on
/// next access". The notifier never resolves content itself.
///
/// Listeners fire synchronously in subscription order; `invalidate`
/// returns without waiting for any downstream re-resolution the listeners
/// kick off. Subscribing, unsubscribing, and invalidating are safe to call
/// concurrently; delivery works from a snapshot of the subscriber set, so
/// a listener may subscribe or unsubscribe re-entrantly.
///
/// # Examples
///
/// ```
/// use lytics_uri::ChangeNotifier;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let notifier = ChangeNotifier::new();
/// let fired = Arc::new(AtomicUsize::new(0));
///
/// let counter = Arc::clone(&fired);
/// let subscription = notifier.subscribe(move |_uri| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// notifier.invalidate("lytics://55/segments/vip.json");
/// assert_eq!(fired.load(Ordering::SeqCst), 1);
///
/// subscription.unsubscribe();
/// notifier.invalidate("lytics://55/segments/vip.json");
/// assert_eq!(fired.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Keyed by a monotonically increasing id, which is subscription order.
    listeners: RwLock<BTreeMap<u64, Listener>>,
    next_id: AtomicU64,
}

impl ChangeNotifier {
    /// Creates a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a listener; it fires on every subsequent invalidation
    /// until the returned [`Subscription`] is unsubscribed or dropped.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber lock is poisoned.
    pub fn subscribe(&self, listener: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .write()
            .expect("lock poisoned")
            .insert(id, Arc::new(listener));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Fires every currently subscribed listener with the URI, in
    /// subscription order, then returns.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber lock is poisoned.
    pub fn invalidate(&self, uri: &str) {
        let snapshot: Vec<Listener> = {
            let listeners = self.inner.listeners.read().expect("lock poisoned");
            listeners.values().cloned().collect()
        };
        trace!(uri, listeners = snapshot.len(), "invalidating");
        for listener in snapshot {
            listener(uri);
        }
    }

    /// Returns the live subscriber count.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.listeners.read().expect("lock poisoned").len()
    }

    /// Returns true if no listener is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to a subscribed listener; unsubscribes on drop.
#[derive(Debug)]
#[must_use = "dropping the subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    inner: Weak<Inner>,
}

impl Subscription {
    /// Removes the listener; subsequent invalidations no longer fire it.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .listeners
                .write()
                .expect("lock poisoned")
                .remove(&self.id);
        }
    }
}
