// Persistence collaborator for the fleet core.
//
// The engine never talks to storage; it consumes snapshots. This crate
// defines the contract those snapshots come from (`FleetStore`), the
// type-tagged document wrapper the underlying document database stores,
// record-level workflow operations, and an in-memory reference
// implementation used by tests and embedders.

mod document;
mod error;
mod memory;
pub mod ops;
mod store;

pub use document::{DocKind, FleetDocument};
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use store::{FleetStore, Subscriber, SubscriptionId};
