use smallvec::SmallVec;
use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&mut EventContext, u32)>;

/// Handed to a listener while it is being notified. Unsubscriptions made
/// here take effect before the next delivery.
#[derive(Debug)]
pub struct EventContext {
    listener: ListenerId,
    unsubscribed: SmallVec<[ListenerId; 4]>,
    unsubscribe_all: bool,
}

impl EventContext {
    fn new(listener: ListenerId) -> Self {
        Self {
            listener,
            unsubscribed: SmallVec::new(),
            unsubscribe_all: false,
        }
    }

    /// The listener currently being notified.
    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.unsubscribed.push(id);
    }

    pub fn unsubscribe_self(&mut self) {
        self.unsubscribed.push(self.listener);
    }

    pub fn unsubscribe_all(&mut self) {
        self.unsubscribe_all = true;
    }
}

/// Ordered list of collision listeners.
///
/// Delivering a collision may tear down entities, and with them their
/// subscriptions, so [`dispatch`](Self::dispatch) never assumes a delivery
/// it has started will be followed by the rest.
#[derive(Default)]
pub struct CollisionEvent {
    listeners: Vec<(ListenerId, Callback)>,
    next_id: u64,
}

impl CollisionEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&mut EventContext, u32) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.position(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Delivers every collider to every listener, in subscription order.
    ///
    /// Before each delivery the event checks that it still has listeners
    /// (stopping altogether once it has none) and that the listener about to
    /// be called has not been unsubscribed by an earlier delivery. Returns the
    /// number of deliveries made.
    pub fn dispatch<I>(&mut self, colliders: I) -> usize
    where
        I: IntoIterator<Item = u32>,
    {
        let mut delivered = 0;
        for other in colliders {
            if self.listeners.is_empty() {
                trace!(other, "collision dispatch stopped: no listeners left");
                break;
            }
            let targets: SmallVec<[ListenerId; 8]> =
                self.listeners.iter().map(|(id, _)| *id).collect();
            for id in targets {
                let Some(pos) = self.position(id) else {
                    continue;
                };
                let mut context = EventContext::new(id);
                (self.listeners[pos].1)(&mut context, other);
                delivered += 1;
                self.apply(context);
            }
        }
        delivered
    }

    fn apply(&mut self, context: EventContext) {
        if context.unsubscribe_all {
            self.listeners.clear();
            return;
        }
        for id in context.unsubscribed {
            self.unsubscribe(id);
        }
    }

    fn position(&self, id: ListenerId) -> Option<usize> {
        self.listeners.iter().position(|(listener, _)| *listener == id)
    }
}

impl fmt::Debug for CollisionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionEvent")
            .field(
                "listeners",
                &self.listeners.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}
