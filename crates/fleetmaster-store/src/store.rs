use fleetmaster_types::DocId;

use crate::{DocKind, FleetDocument, Result};

/// Handle returned by `subscribe`, used to detach the subscriber later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Change listener for one entity kind.
///
/// Notified after each successful `put` of a matching document. Callbacks
/// run on the writer's call path and must not call back into the store;
/// the intended reaction is to re-read a snapshot afterwards and re-run the
/// engine over it.
pub trait Subscriber: Send {
    /// Diagnostic name of the subscriber.
    fn name(&self) -> &str;

    /// Called with the document as committed.
    fn notify(&mut self, doc: &FleetDocument);
}

/// The persistence collaborator the UI layer reads snapshots from.
///
/// Everything the core consumes is a point-in-time copy; live-query
/// behavior is recreated by re-invoking the engine from `notify`-driven
/// re-reads, not by the store pushing deltas.
pub trait FleetStore {
    /// Snapshot of every document of one kind, in insertion order.
    fn get_all(&self, kind: DocKind) -> Result<Vec<FleetDocument>>;

    /// Single-document lookup; `Ok(None)` when absent.
    fn get_by_id(&self, id: &DocId) -> Result<Option<FleetDocument>>;

    /// Upsert one document and return its id, minting one if the document
    /// arrives without it.
    fn put(&self, doc: FleetDocument) -> Result<DocId>;

    /// Register a change listener for one entity kind.
    fn subscribe(&self, kind: DocKind, subscriber: Box<dyn Subscriber>) -> SubscriptionId;

    /// Detach a listener; unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}
