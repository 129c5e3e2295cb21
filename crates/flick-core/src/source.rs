//! Pointer event sources.
//!
//! Widgets never attach to ambient global listeners. A host hands them a
//! [`PointerSource`]; subscribing returns a [`Subscription`] guard and the
//! listener stays registered exactly as long as the guard lives.

use crate::event::PointerEvent;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{trace, warn};

/// Callback invoked for every event a source dispatches.
pub type Listener = Box<dyn FnMut(&PointerEvent)>;

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Capability to observe the process-wide pointer event stream.
pub trait PointerSource {
    /// Register a listener. It is removed when the returned guard drops.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, Rc<RefCell<Listener>>)>,
}

impl Registry {
    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

/// Single-threaded pointer event bus.
///
/// Cloning yields another handle to the same bus.
#[derive(Clone, Default)]
pub struct PointerBus {
    inner: Rc<RefCell<Registry>>,
}

impl PointerBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Deliver `event` to every listener in registration order.
    ///
    /// Listeners may subscribe or drop subscriptions while an event is being
    /// delivered. A listener removed mid-dispatch is skipped; one added
    /// mid-dispatch first sees the next event. A listener that is already
    /// running (the event was dispatched from inside it) is skipped.
    ///
    /// Returns the number of listeners that received the event.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let snapshot: Vec<(ListenerId, Rc<RefCell<Listener>>)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.inner.borrow().contains(id) {
                trace!(listener = id.0, "listener removed during dispatch");
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut callback) => {
                    callback(event);
                    delivered += 1;
                }
                Err(_) => warn!(listener = id.0, ?event, "re-entrant pointer event dropped"),
            }
        }
        delivered
    }
}

impl PointerSource for PointerBus {
    fn subscribe(&self, listener: Listener) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry
            .listeners
            .push((id, Rc::new(RefCell::new(listener))));
        trace!(listener = id.0, "listener subscribed");
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }
}

impl fmt::Debug for PointerBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a registered listener; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Identifier of the registered listener.
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Check whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }

    /// Unsubscribe now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                trace!(listener = self.id.0, "listener unsubscribed");
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
