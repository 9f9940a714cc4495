use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// A type-erased state value shared between the store and its readers.
///
/// Remembers the concrete type name so mismatched reads can be reported.
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StateValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Borrow the value as `T`, or `None` if it holds something else.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clone the value out as `T`.
    pub fn cloned<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Name of the stored type, as reported by `std::any::type_name`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateValue<{}>", self.type_name)
    }
}

/// A state type that lives at one well-known path.
pub trait State: Any + Send + Sync + Clone {
    const PATH: &'static str;
}

/// A request payload routed by path to its handler.
pub trait Request: Any + Send + Sync {
    const PATH: &'static str;
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
