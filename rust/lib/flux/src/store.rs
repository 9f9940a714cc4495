use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::pattern;
use crate::value::{State, StateValue, SubscriptionId};

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Per-path state store with pattern-matched change notifications.
///
/// Subscribers are called synchronously on the thread that writes, after
/// the write lock has been released, so a handler may read the store.
pub struct StateStore {
    /// Current values keyed by exact path.
    values: RwLock<BTreeMap<String, StateValue>>,
    subscribers: RwLock<Vec<Subscriber>>,
    next_id: AtomicU64,
}

#[derive(Clone)]
struct Subscriber {
    id: SubscriptionId,
    pattern: String,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            subscribers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // ====================================================================
    // Untyped access
    // ====================================================================

    /// Set a value at `path` and notify matching subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    pub fn set_value(&self, path: &str, value: StateValue) {
        {
            let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
            values.insert(path.to_string(), value.clone());
        }
        self.notify(path, &value);
    }

    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.get(path).cloned()
    }

    // ====================================================================
    // Typed access
    // ====================================================================

    /// Read a clone of the state stored at `S::PATH`.
    ///
    /// Returns `None` if nothing is stored there or the stored value is a
    /// different type.
    pub fn read<S: State>(&self) -> Option<S> {
        self.get(S::PATH)
            .and_then(|v| v.cloned::<S>())
    }

    /// Store `value` at `S::PATH` and notify subscribers.
    pub fn write<S: State>(&self, value: S) {
        self.set(S::PATH, value);
    }

    /// Atomically replace the state at `S::PATH` with `f(current)`.
    ///
    /// `current` is `S::default()` when nothing is stored yet. The write
    /// lock is held only while `f` runs, so `f` must not touch the store.
    /// Subscribers are notified after the lock is released. Returns the new
    /// value.
    pub fn update<S, F>(&self, f: F) -> S
    where
        S: State + Default,
        F: FnOnce(S) -> S,
    {
        let (next, value) = {
            let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
            let current = values
                .get(S::PATH)
                .and_then(|v| v.cloned::<S>())
                .unwrap_or_default();
            let next = f(current);
            let value = StateValue::new(next.clone());
            values.insert(S::PATH.to_string(), value.clone());
            (next, value)
        };
        self.notify(S::PATH, &value);
        next
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Subscribe to changes on paths matching `pattern`.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subs = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        subs.push(Subscriber {
            id,
            pattern: pattern.to_string(),
            handler: Arc::new(handler),
        });
        id
    }

    /// Remove a subscription. Returns true if it existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        let before = subs.len();
        subs.retain(|s| s.id != id);
        subs.len() < before
    }

    fn notify(&self, path: &str, value: &StateValue) {
        let matched: Vec<ChangeHandler> = {
            let subs = self.subscribers.read().unwrap_or_else(PoisonError::into_inner);
            subs.iter()
                .filter(|s| pattern::matches(&s.pattern, path))
                .map(|s| Arc::clone(&s.handler))
                .collect()
        };
        trace!(path, subscribers = matched.len(), "state changed");
        for handler in matched {
            handler(path, value);
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
