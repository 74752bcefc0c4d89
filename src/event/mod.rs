mod bus;
mod events;

use crate::document::Document;

pub use bus::{EventBus, SubscriptionId};
pub use events::DocumentEvent;

/// Observer of document changes.
///
/// Handlers run synchronously inside the mutating call, after the state has
/// changed, and may read any derived state from `doc`.
pub trait EventHandler: Send {
    fn handle_event(&mut self, doc: &Document, event: &DocumentEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&Document, &DocumentEvent) + Send,
{
    fn handle_event(&mut self, doc: &Document, event: &DocumentEvent) {
        self(doc, event)
    }
}
