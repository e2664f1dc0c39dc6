//! Local search-history repository.
//!
//! Owns the `gift_finder_history` storage key. The in-memory collection is
//! the in-session source of truth; storage is a write-behind mirror for
//! the next session. Every mutation re-persists the whole collection, and
//! a persist failure never rolls the mutation back.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use giftfinder_core::gift::{DemographicProfile, GiftProduct};
use giftfinder_core::history::{HistoryFilter, HistoryItem, HistoryRepository, RemoteHistorySink};
use giftfinder_core::identity::CurrentUserSource;

use crate::storage::KeyValueStorage;

/// Storage key owned by this repository. No other component writes it.
pub const HISTORY_STORAGE_KEY: &str = "gift_finder_history";

struct HistoryInner {
    /// Newest-first.
    items: Vec<HistoryItem>,
    /// Millisecond value of the most recently issued id. Ids are derived
    /// from the creation time but forced strictly monotonic, so two
    /// searches in the same millisecond still get distinct ids.
    last_id_millis: i64,
}

/// History repository over durable key-value storage.
///
/// Remote sync is opt-in via [`with_remote_sync`](Self::with_remote_sync):
/// when a signed-in session exists, each newly recorded item is pushed to
/// the account-scoped sink fire-and-forget.
pub struct LocalHistoryRepository {
    storage: Arc<dyn KeyValueStorage>,
    inner: Mutex<HistoryInner>,
    session: Option<Arc<dyn CurrentUserSource>>,
    remote: Option<Arc<dyn RemoteHistorySink>>,
}

impl LocalHistoryRepository {
    /// Creates the repository and loads the stored collection.
    ///
    /// An absent record starts an empty collection silently; an unreadable
    /// or unparsable one does the same with a warning. Timestamps are
    /// revived from their stored string form by the deserializer.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let items = match storage.get(HISTORY_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryItem>>(&raw) {
                Ok(items) => {
                    debug!(count = items.len(), "loaded search history");
                    items
                }
                Err(err) => {
                    warn!("failed to parse stored search history: {}", err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to load search history: {}", err);
                Vec::new()
            }
        };

        // Seed the id counter past every loaded id so a record issued
        // right after startup cannot collide with a loaded item.
        let last_id_millis = items
            .iter()
            .filter_map(|item| item.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            storage,
            inner: Mutex::new(HistoryInner {
                items,
                last_id_millis,
            }),
            session: None,
            remote: None,
        }
    }

    /// Attaches the best-effort remote sync collaborators.
    pub fn with_remote_sync(
        mut self,
        session: Arc<dyn CurrentUserSource>,
        remote: Arc<dyn RemoteHistorySink>,
    ) -> Self {
        self.session = Some(session);
        self.remote = Some(remote);
        self
    }

    /// Writes the whole collection back to storage. Failures are logged
    /// and swallowed; the in-memory collection stays authoritative.
    fn persist(&self, items: &[HistoryItem]) {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize search history: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.set(HISTORY_STORAGE_KEY, &raw) {
            warn!("failed to persist search history: {}", err);
        }
    }

    /// Fire-and-forget push of one item to the remote account collection.
    /// Runs only for signed-in sessions; failures are a log line, nothing
    /// else.
    fn sync_to_remote(&self, item: &HistoryItem) {
        let (Some(session), Some(remote)) = (self.session.as_ref(), self.remote.as_ref()) else {
            return;
        };
        let Some(user) = session.current_user() else {
            return;
        };

        let remote = Arc::clone(remote);
        let item = item.clone();
        tokio::spawn(async move {
            if let Err(err) = remote.push_item(&user.id, &item).await {
                warn!(
                    user_id = %user.id,
                    item_id = %item.id,
                    "failed to sync history item to remote account: {}", err
                );
            }
        });
    }

    fn next_id(inner: &mut HistoryInner, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis().max(inner.last_id_millis + 1);
        inner.last_id_millis = millis;
        millis.to_string()
    }
}

#[async_trait]
impl HistoryRepository for LocalHistoryRepository {
    async fn record(
        &self,
        profile: DemographicProfile,
        results: Vec<GiftProduct>,
    ) -> HistoryItem {
        let now = Utc::now();
        let mut inner = self.inner.lock().await;
        let item = HistoryItem {
            id: Self::next_id(&mut *inner, now),
            timestamp: now,
            profile,
            results,
            archived: false,
        };

        inner.items.insert(0, item.clone());
        self.persist(&inner.items);
        drop(inner);

        self.sync_to_remote(&item);
        item
    }

    async fn archive(&self, id: &str) {
        let mut inner = self.inner.lock().await;
        match inner.items.iter_mut().find(|item| item.id == id) {
            Some(item) => item.archived = true,
            // Stale or unknown ids are harmless.
            None => return,
        }
        self.persist(&inner.items);
    }

    async fn delete(&self, id: &str) {
        let mut inner = self.inner.lock().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        if inner.items.len() != before {
            self.persist(&inner.items);
        }
    }

    async fn list(&self, filter: HistoryFilter) -> Vec<HistoryItem> {
        let inner = self.inner.lock().await;
        inner
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }
}
