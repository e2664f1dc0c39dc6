//! History repository trait.
//!
//! Defines the interface for the search-history store, decoupling callers
//! from the storage mechanism (durable key-value record, in-memory fake).

use async_trait::async_trait;

use super::model::{HistoryFilter, HistoryItem};
use crate::gift::model::{DemographicProfile, GiftProduct};

/// An abstract store over an ordered, newest-first collection of
/// [`HistoryItem`]s.
///
/// # Implementation Notes
///
/// Implementations must keep the in-memory collection as the in-session
/// source of truth: durable-storage failures are logged and swallowed, never
/// surfaced to the caller, and never roll back an in-memory mutation.
/// Unknown ids passed to `archive` and `delete` are harmless no-ops.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Creates a new item for a completed search, prepends it to the
    /// collection and persists the whole collection. Returns the item.
    async fn record(&self, profile: DemographicProfile, results: Vec<GiftProduct>)
    -> HistoryItem;

    /// Marks the item with the given id as archived. No-op if unknown.
    async fn archive(&self, id: &str);

    /// Removes the item with the given id. No-op if unknown; idempotent.
    async fn delete(&self, id: &str);

    /// Lists items passing the filter, newest first.
    async fn list(&self, filter: HistoryFilter) -> Vec<HistoryItem>;
}
