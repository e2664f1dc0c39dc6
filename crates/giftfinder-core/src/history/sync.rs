//! Remote history sync trait.

use async_trait::async_trait;

use super::model::HistoryItem;
use crate::error::Result;

/// Account-scoped remote collaborator for history items.
///
/// The push is best-effort and at-most-once: the store invokes it once per
/// recorded item when a signed-in session exists, logs failures and moves
/// on. Nothing is queued or retried.
#[async_trait]
pub trait RemoteHistorySink: Send + Sync {
    /// Pushes one newly recorded item to the user's remote collection.
    async fn push_item(&self, user_id: &str, item: &HistoryItem) -> Result<()>;
}
