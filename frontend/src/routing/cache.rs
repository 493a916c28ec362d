use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, FutureExt, Shared};
use log::{info, warn};

use crate::routing::registry::{LoadError, LoadFuture, Resolved};

enum Slot<M> {
    Idle,
    Pending(Shared<LoadFuture<M>>),
    Ready(M),
}

/// Load state of every registry entry, indexed like the registry.
///
/// A load is started at most once while in flight; later callers join it.
/// Failures put the slot back to idle, so the next navigation retries.
pub struct ModuleCache<M> {
    slots: Rc<RefCell<Vec<Slot<M>>>>,
}

impl<M> Clone for ModuleCache<M> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<M> PartialEq for ModuleCache<M> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slots, &other.slots)
    }
}

impl<M: Clone + 'static> ModuleCache<M> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: Rc::new(RefCell::new((0..len).map(|_| Slot::Idle).collect())),
        }
    }

    /// The module for `index` if it has already finished loading.
    pub fn peek(&self, index: usize) -> Option<M> {
        match self.slots.borrow().get(index) {
            Some(Slot::Ready(module)) => Some(module.clone()),
            _ => None,
        }
    }

    pub fn is_pending(&self, index: usize) -> bool {
        matches!(self.slots.borrow().get(index), Some(Slot::Pending(_)))
    }

    pub fn load(&self, resolved: &Resolved<'_, M>) -> LoadFuture<M> {
        let index = resolved.index;
        let mut slots = self.slots.borrow_mut();
        if index >= slots.len() {
            slots.resize_with(index + 1, || Slot::Idle);
        }

        let shared = match &slots[index] {
            Slot::Ready(module) => return future::ready(Ok(module.clone())).boxed_local(),
            Slot::Pending(shared) => shared.clone(),
            Slot::Idle => {
                info!("Loading page module {}", resolved.entry.name);
                let shared = resolved.entry.load().shared();
                slots[index] = Slot::Pending(shared.clone());
                shared
            }
        };
        drop(slots);

        let name = resolved.entry.name;
        let cache = self.clone();
        async move {
            let result = shared.clone().await;
            cache.settle(index, &shared, &result);
            if let Err(err) = &result {
                warn!("Page module {} failed to load: {}", name, err);
            }
            result
        }
        .boxed_local()
    }

    fn settle(&self, index: usize, attempt: &Shared<LoadFuture<M>>, result: &Result<M, LoadError>) {
        let mut slots = self.slots.borrow_mut();
        let Some(slot) = slots.get_mut(index) else {
            return;
        };
        // Only the attempt that currently owns the slot may settle it.
        let owns_slot = matches!(slot, Slot::Pending(current) if current.ptr_eq(attempt));
        if !owns_slot {
            return;
        }
        *slot = match result {
            Ok(module) => Slot::Ready(module.clone()),
            Err(_) => Slot::Idle,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::registry::RouteRegistry;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    type Gate = oneshot::Sender<Result<&'static str, LoadError>>;

    struct Harness {
        registry: RouteRegistry<&'static str>,
        calls: Rc<Cell<usize>>,
        gates: Rc<RefCell<Vec<Gate>>>,
    }

    fn harness() -> Harness {
        let calls = Rc::new(Cell::new(0));
        let gates: Rc<RefCell<Vec<Gate>>> = Rc::new(RefCell::new(Vec::new()));
        let registry = {
            let calls = calls.clone();
            let gates = gates.clone();
            RouteRegistry::builder()
                .route("portfolio", "/portfolio", move || {
                    calls.set(calls.get() + 1);
                    let (tx, rx) = oneshot::channel();
                    gates.borrow_mut().push(tx);
                    async move {
                        rx.await.unwrap_or_else(|_| {
                            Err(LoadError::Network {
                                what: "portfolio".to_string(),
                                reason: "cancelled".to_string(),
                            })
                        })
                    }
                    .boxed_local()
                })
                .catch_all("not-found", || future::ready(Ok("not-found")).boxed_local())
                .build()
                .unwrap()
        };
        Harness {
            registry,
            calls,
            gates,
        }
    }

    fn open_gate(harness: &Harness, result: Result<&'static str, LoadError>) {
        let gate = harness.gates.borrow_mut().remove(0);
        gate.send(result).unwrap();
    }

    fn broken_chunk() -> LoadError {
        LoadError::Status {
            what: "portfolio".to_string(),
            status: 503,
        }
    }

    #[test]
    fn test_concurrent_loads_share_one_fetch() {
        let harness = harness();
        let cache = ModuleCache::new(harness.registry.len());
        let resolved = harness.registry.resolve("/portfolio");

        let first = cache.load(&resolved);
        let second = cache.load(&resolved);
        assert_eq!(harness.calls.get(), 1);
        assert!(cache.is_pending(resolved.index));
        assert_eq!(cache.peek(resolved.index), None);

        open_gate(&harness, Ok("portfolio"));
        let (a, b) = block_on(future::join(first, second));

        assert_eq!(a, Ok("portfolio"));
        assert_eq!(b, Ok("portfolio"));
        assert_eq!(cache.peek(resolved.index), Some("portfolio"));
    }

    #[test]
    fn test_ready_module_is_not_fetched_again() {
        let harness = harness();
        let cache = ModuleCache::new(harness.registry.len());
        let resolved = harness.registry.resolve("/portfolio");

        let first = cache.load(&resolved);
        open_gate(&harness, Ok("portfolio"));
        block_on(first).unwrap();

        assert_eq!(block_on(cache.load(&resolved)), Ok("portfolio"));
        assert_eq!(harness.calls.get(), 1);
    }

    #[test]
    fn test_failed_load_is_reported_and_retried_on_next_load() {
        let harness = harness();
        let cache = ModuleCache::new(harness.registry.len());
        let resolved = harness.registry.resolve("/portfolio");

        let first = cache.load(&resolved);
        open_gate(&harness, Err(broken_chunk()));
        assert_eq!(block_on(first), Err(broken_chunk()));
        assert!(!cache.is_pending(resolved.index));
        assert_eq!(cache.peek(resolved.index), None);

        let retry = cache.load(&resolved);
        assert_eq!(harness.calls.get(), 2);
        open_gate(&harness, Ok("portfolio"));
        assert_eq!(block_on(retry), Ok("portfolio"));
    }

    #[test]
    fn test_abandoned_load_still_settles_for_joiners() {
        let harness = harness();
        let cache = ModuleCache::new(harness.registry.len());
        let resolved = harness.registry.resolve("/portfolio");

        // The first renderer unmounts before the load finishes.
        drop(cache.load(&resolved));
        let joined = cache.load(&resolved);
        assert_eq!(harness.calls.get(), 1);

        open_gate(&harness, Err(broken_chunk()));
        assert!(block_on(joined).is_err());
        assert!(!cache.is_pending(resolved.index));
    }

    #[test]
    fn test_caches_are_compared_by_identity() {
        let cache: ModuleCache<&'static str> = ModuleCache::new(2);
        assert!(cache == cache.clone());
        assert!(cache != ModuleCache::new(2));
    }
}
