use std::sync::Mutex;

use fleetmaster_types::DocId;

use crate::store::{FleetStore, Subscriber, SubscriptionId};
use crate::{DocKind, FleetDocument, Result};

/// In-memory reference implementation of [`FleetStore`].
///
/// Documents live in a single insertion-ordered list, matching the
/// one-keyspace layout of the document database it stands in for. Intended
/// for tests and embedders; not a storage engine.
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<Vec<FleetDocument>>,
    subscribers: Mutex<Vec<Registration>>,
    next_subscription: Mutex<u64>,
}

struct Registration {
    id: SubscriptionId,
    kind: DocKind,
    subscriber: Box<dyn Subscriber>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a batch of documents, minting ids as needed.
    pub fn with_documents(docs: impl IntoIterator<Item = FleetDocument>) -> Result<Self> {
        let store = Self::new();
        for doc in docs {
            store.put(doc)?;
        }
        Ok(store)
    }

    fn notify(&self, doc: &FleetDocument) {
        let mut subscribers = self.subscribers.lock().expect("subscriber registry poisoned");
        for registration in subscribers.iter_mut() {
            if registration.kind == doc.kind() {
                registration.subscriber.notify(doc);
            }
        }
    }
}

impl FleetStore for MemoryStore {
    fn get_all(&self, kind: DocKind) -> Result<Vec<FleetDocument>> {
        let docs = self.docs.lock().expect("document list poisoned");
        Ok(docs.iter().filter(|d| d.kind() == kind).cloned().collect())
    }

    fn get_by_id(&self, id: &DocId) -> Result<Option<FleetDocument>> {
        if id.is_empty() {
            return Err(crate::Error::MissingId);
        }
        let docs = self.docs.lock().expect("document list poisoned");
        Ok(docs.iter().find(|d| d.id() == id).cloned())
    }

    fn put(&self, mut doc: FleetDocument) -> Result<DocId> {
        if doc.id().is_empty() {
            doc.set_id(DocId::generate());
        }
        let id = doc.id().clone();

        {
            let mut docs = self.docs.lock().expect("document list poisoned");
            match docs.iter_mut().find(|d| *d.id() == id) {
                Some(slot) => *slot = doc.clone(),
                None => docs.push(doc.clone()),
            }
        }

        // Notify outside the document lock so subscribers can re-read.
        self.notify(&doc);
        Ok(id)
    }

    fn subscribe(&self, kind: DocKind, subscriber: Box<dyn Subscriber>) -> SubscriptionId {
        let mut next = self.next_subscription.lock().expect("counter poisoned");
        *next += 1;
        let id = SubscriptionId(*next);
        drop(next);

        let mut subscribers = self.subscribers.lock().expect("subscriber registry poisoned");
        subscribers.push(Registration {
            id,
            kind,
            subscriber,
        });
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.lock().expect("subscriber registry poisoned");
        subscribers.retain(|r| r.id != id);
    }
}
