//! Observer registry.
//!
//! Observers are closures invoked synchronously, in subscription order, for
//! every emitted event they are interested in.

use serde::{Deserialize, Serialize};

use super::event::{EventKind, GameEvent};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create a new observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.raw())
    }
}

/// Boxed event callback.
pub type Observer = Box<dyn FnMut(&GameEvent)>;

struct Subscription {
    id: ObserverId,
    /// `None` listens to everything.
    kinds: Option<Vec<EventKind>>,
    observer: Observer,
}

impl Subscription {
    fn wants(&self, kind: EventKind) -> bool {
        self.kinds.as_ref().map_or(true, |kinds| kinds.contains(&kind))
    }
}

/// Registry of event observers.
#[derive(Default)]
pub struct ObserverRegistry {
    subscriptions: Vec<Subscription>,
    next_id: u32,
}

impl ObserverRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe every event.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) -> ObserverId {
        self.insert(None, Box::new(observer))
    }

    /// Observe only events of the given kinds.
    pub fn subscribe_to(
        &mut self,
        kinds: &[EventKind],
        observer: impl FnMut(&GameEvent) + 'static,
    ) -> ObserverId {
        self.insert(Some(kinds.to_vec()), Box::new(observer))
    }

    fn insert(&mut self, kinds: Option<Vec<EventKind>>, observer: Observer) -> ObserverId {
        let id = ObserverId::new(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kinds, observer });
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Deliver an event to every interested observer.
    pub fn emit(&mut self, event: &GameEvent) {
        let kind = event.kind();
        for subscription in self.subscriptions.iter_mut().filter(|s| s.wants(kind)) {
            (subscription.observer)(event);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.subscriptions.iter().map(|s| s.id.raw()).collect();
        f.debug_struct("ObserverRegistry")
            .field("observers", &ids)
            .field("next_id", &self.next_id)
            .finish()
    }
}
