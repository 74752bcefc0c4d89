use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;
use crate::document::Document;
use crate::event::{DocumentEvent, EventHandler};

/// Identifies a subscription so it can be removed later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

enum Subscriber {
    Handler(Box<dyn EventHandler>),
    Channel(UnboundedSender<DocumentEvent>),
}

/// Subscription list for document change notifications.
///
/// Delivery is synchronous and in subscription order. Nothing is queued or
/// batched except inside channel subscribers, which the host drains itself.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &format!("<{} subscribers>", self.subscribers.len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.subscribers.push((id, Subscriber::Handler(handler)));
        id
    }

    /// Registers a channel subscriber and returns the receiving end
    pub fn channel(&mut self) -> (SubscriptionId, UnboundedReceiver<DocumentEvent>) {
        let (tx, rx) = mpsc::unbounded();
        let id = SubscriptionId::new();
        self.subscribers.push((id, Subscriber::Channel(tx)));
        (id, rx)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Delivers `event` to a single subscriber
    pub fn emit_to(&mut self, id: SubscriptionId, doc: &Document, event: &DocumentEvent) {
        if let Some((_, subscriber)) = self.subscribers.iter_mut().find(|(sub_id, _)| *sub_id == id) {
            deliver(subscriber, doc, event);
        }
    }

    /// Delivers `event` to every subscriber, dropping channels whose receiver is gone
    pub fn emit(&mut self, doc: &Document, event: &DocumentEvent) {
        self.subscribers
            .retain_mut(|(_, subscriber)| deliver(subscriber, doc, event));
    }
}

// Returns false once the subscriber can no longer receive events
fn deliver(subscriber: &mut Subscriber, doc: &Document, event: &DocumentEvent) -> bool {
    match subscriber {
        Subscriber::Handler(handler) => {
            handler.handle_event(doc, event);
            true
        }
        Subscriber::Channel(tx) => tx.unbounded_send(event.clone()).is_ok(),
    }
}
