use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::router::{Payload, Router};
use crate::store::StateStore;
use crate::value::{Request, State, StateValue, SubscriptionId};

/// Flux: the client state engine.
///
/// Holds the state store and the request router. All methods take `&self`,
/// so several requests may be in flight at once (e.g. two page loads racing);
/// handlers are responsible for deciding which result wins.
pub struct Flux {
    store: Arc<StateStore>,
    router: Router,
}

impl Flux {
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            router: Router::new(),
        }
    }

    // ====================================================================
    // State: read
    // ====================================================================

    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.store.get(path)
    }

    /// Read a clone of the typed state at `S::PATH`.
    pub fn read<S: State>(&self) -> Option<S> {
        self.store.read::<S>()
    }

    // ====================================================================
    // Requests
    // ====================================================================

    /// Emit a typed request and wait for its handler(s) to complete.
    ///
    /// Emitting a request with no handler is a silent no-op.
    pub async fn emit<R: Request>(&self, req: R) {
        self.emit_payload(R::PATH, Arc::new(req)).await;
    }

    async fn emit_payload(&self, path: &str, payload: Payload) {
        let ran = self
            .router
            .dispatch(path, payload, Arc::clone(&self.store))
            .await;
        if ran == 0 {
            debug!(path, "no handler for request");
        }
    }

    /// Register a typed handler for `R::PATH`.
    ///
    /// The payload is downcast before the handler runs, so handlers receive
    /// `Arc<R>` directly.
    pub fn handle<R, F, Fut>(&self, handler: F)
    where
        R: Request,
        F: Fn(Arc<R>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler = Arc::new(handler);
        self.router.on(R::PATH, move |path, payload, store| {
            let handler = Arc::clone(&handler);
            async move {
                match payload.downcast::<R>() {
                    Ok(req) => (*handler)(req, store).await,
                    Err(_) => warn!(
                        path = %path,
                        expected = std::any::type_name::<R>(),
                        "request payload has unexpected type"
                    ),
                }
            }
        });
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Subscribe to state changes on paths matching `pattern`.
    ///
    /// The handler runs synchronously on the thread that wrote the state.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// The underlying store, for handlers and tests.
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }
}

impl Default for Flux {
    fn default() -> Self {
        Self::new()
    }
}
