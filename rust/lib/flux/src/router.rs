use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock};

use crate::pattern;
use crate::store::StateStore;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased payload carried from `emit` to a handler.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Type-erased handler stored in the router.
///
/// Takes owned values so the returned future can be `'static`.
type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<StateStore>) -> BoxFuture + Send + Sync>;

struct Route {
    pattern: String,
    handler: ErasedHandler,
}

/// Request router: maps path patterns to async handlers.
///
/// Several handlers may match one path; they run sequentially in
/// registration order.
pub struct Router {
    routes: RwLock<Vec<Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(Vec::new()),
        }
    }

    /// Register an async handler for a path pattern.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: ErasedHandler = Arc::new(move |path, payload, store| -> BoxFuture {
            Box::pin(handler(path, payload, store))
        });
        let mut routes = self.routes.write().unwrap_or_else(PoisonError::into_inner);
        routes.push(Route {
            pattern: pattern.to_string(),
            handler,
        });
    }

    /// Dispatch a request to all matching handlers.
    ///
    /// Returns the number of handlers that ran; zero is not an error.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<StateStore>) -> usize {
        // Collect first: the lock must not be held across an await.
        let handlers = self.matching(path);
        for handler in &handlers {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
        handlers.len()
    }

    fn matching(&self, path: &str) -> Vec<ErasedHandler> {
        let routes = self.routes.read().unwrap_or_else(PoisonError::into_inner);
        routes
            .iter()
            .filter(|r| pattern::matches(&r.pattern, path))
            .map(|r| Arc::clone(&r.handler))
            .collect()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn test_store() -> Arc<StateStore> {
        Arc::new(StateStore::new())
    }

    #[tokio::test]
    async fn dispatch_exact_match() {
        let router = Router::new();
        let called = Arc::new(AtomicU64::new(0));
        let c = called.clone();
        router.on("feed/load", move |_, _, _| {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::Relaxed);
            }
        });

        let ran = router.dispatch("feed/load", Arc::new(()), test_store()).await;
        assert_eq!(ran, 1);
        assert_eq!(called.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn dispatch_no_match_is_noop() {
        let router = Router::new();
        router.on("feed/load", |_, _, _| async {});
        let ran = router.dispatch("feed/next", Arc::new(()), test_store()).await;
        assert_eq!(ran, 0);
    }

    #[tokio::test]
    async fn wildcard_and_exact_run_in_order() {
        let router = Router::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let o = order.clone();
        router.on("#", move |path, _, _| {
            let o = o.clone();
            async move {
                o.lock().unwrap().push(format!("any:{path}"));
            }
        });
        let o = order.clone();
        router.on("post/like", move |_, _, _| {
            let o = o.clone();
            async move {
                o.lock().unwrap().push("like".to_string());
            }
        });

        router.dispatch("post/like", Arc::new(()), test_store()).await;
        assert_eq!(*order.lock().unwrap(), vec!["any:post/like", "like"]);
    }

    #[tokio::test]
    async fn handler_receives_payload_and_store() {
        let router = Router::new();
        router.on("feed/load", |_, payload, store: Arc<StateStore>| async move {
            let page = payload.downcast_ref::<u32>().copied().unwrap_or(0);
            store.set("feed/page", page);
        });

        let store = test_store();
        router.dispatch("feed/load", Arc::new(4u32), store.clone()).await;
        assert_eq!(store.get("feed/page").unwrap().downcast_ref::<u32>(), Some(&4));
    }
}
