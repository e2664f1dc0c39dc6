//! Composition root for the data layer.
//!
//! Builds the stores and services from configuration. The identity
//! provider and recommender are external collaborators and come from the
//! caller; everything else (storage, stores, services) is wired here so
//! the view layer receives explicitly constructed instances instead of
//! module singletons.

use std::sync::Arc;

use giftfinder_core::error::Result;
use giftfinder_core::gift::GiftRecommender;
use giftfinder_core::history::{HistoryRepository, RemoteHistorySink};
use giftfinder_core::identity::{CurrentUserSource, IdentityProvider};
use giftfinder_infrastructure::storage::{FileKeyValueStorage, KeyValueStorage};
use giftfinder_infrastructure::{AppConfig, LayoutStateStore, LocalHistoryRepository};

/// The assembled data layer.
pub struct GiftFinderApp {
    pub session: Arc<crate::SessionService>,
    pub layout: LayoutStateStore,
    pub history: Arc<dyn HistoryRepository>,
    pub search: crate::GiftSearchService,
}

impl GiftFinderApp {
    /// Wires the data layer together.
    ///
    /// File-backed storage lives under the configured directory (or the
    /// platform data directory). The remote sink is attached only when
    /// one is supplied and the config enables remote sync.
    pub fn bootstrap(
        config: &AppConfig,
        provider: Arc<dyn IdentityProvider>,
        recommender: Arc<dyn GiftRecommender>,
        remote: Option<Arc<dyn RemoteHistorySink>>,
    ) -> Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = match &config.storage_dir {
            Some(dir) => Arc::new(FileKeyValueStorage::with_base_dir(dir.clone())),
            None => Arc::new(FileKeyValueStorage::new()?),
        };

        let session = Arc::new(crate::SessionService::new(provider));

        let mut history = LocalHistoryRepository::new(Arc::clone(&storage));
        if config.remote_sync {
            if let Some(remote) = remote {
                let source: Arc<dyn CurrentUserSource> = session.clone();
                history = history.with_remote_sync(source, remote);
            }
        }
        let history: Arc<dyn HistoryRepository> = Arc::new(history);

        let search = crate::GiftSearchService::with_page_size(
            recommender,
            Arc::clone(&history),
            config.result_page_size,
        );

        Ok(Self {
            session,
            layout: LayoutStateStore::new(storage),
            history,
            search,
        })
    }
}
