//! Remote history sink placeholder.

use async_trait::async_trait;
use tracing::debug;

use giftfinder_core::error::Result;
use giftfinder_core::history::{HistoryItem, RemoteHistorySink};

/// Sink standing in for the account-scoped remote collection, which does
/// not exist yet. Accepts every item and logs that it was dropped.
#[derive(Debug, Clone, Default)]
pub struct UnimplementedRemoteSink;

#[async_trait]
impl RemoteHistorySink for UnimplementedRemoteSink {
    async fn push_item(&self, user_id: &str, item: &HistoryItem) -> Result<()> {
        debug!(
            user_id,
            item_id = %item.id,
            "remote history sync is not implemented; item not uploaded"
        );
        Ok(())
    }
}
