//! Gift search orchestration.
//!
//! Drives the recommendation collaborator and records completed searches
//! in the history repository. Holds the transient search state the view
//! layer renders: the busy flag, the current result set and the profile
//! behind it.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use giftfinder_core::error::Result;
use giftfinder_core::gift::{DEFAULT_RESULT_COUNT, DemographicProfile, GiftProduct, GiftRecommender};
use giftfinder_core::history::HistoryRepository;

#[derive(Default)]
struct SearchState {
    is_searching: bool,
    results: Vec<GiftProduct>,
    current_profile: Option<DemographicProfile>,
}

/// Use-case service for running gift searches.
pub struct GiftSearchService {
    recommender: Arc<dyn GiftRecommender>,
    history: Arc<dyn HistoryRepository>,
    page_size: usize,
    state: RwLock<SearchState>,
}

impl GiftSearchService {
    pub fn new(
        recommender: Arc<dyn GiftRecommender>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self::with_page_size(recommender, history, DEFAULT_RESULT_COUNT)
    }

    pub fn with_page_size(
        recommender: Arc<dyn GiftRecommender>,
        history: Arc<dyn HistoryRepository>,
        page_size: usize,
    ) -> Self {
        Self {
            recommender,
            history,
            page_size,
            state: RwLock::new(SearchState::default()),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SearchState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SearchState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// True while a search or load-more call is in flight.
    pub fn is_searching(&self) -> bool {
        self.read_state().is_searching
    }

    /// The current result set, newest search first within its pages.
    pub fn search_results(&self) -> Vec<GiftProduct> {
        self.read_state().results.clone()
    }

    /// The profile behind the current result set, if any.
    pub fn current_profile(&self) -> Option<DemographicProfile> {
        self.read_state().current_profile.clone()
    }

    /// Runs a search for `profile`, replaces the current results and
    /// records the completed search in history. Recommender failures
    /// propagate unchanged; the profile is kept so the caller may retry.
    pub async fn search_gifts(&self, profile: DemographicProfile) -> Result<Vec<GiftProduct>> {
        {
            let mut state = self.write_state();
            state.is_searching = true;
            state.current_profile = Some(profile.clone());
        }

        match self.recommender.search(&profile, self.page_size).await {
            Ok(results) => {
                {
                    let mut state = self.write_state();
                    state.results = results.clone();
                    state.is_searching = false;
                }
                let item = self.history.record(profile, results.clone()).await;
                debug!(item_id = %item.id, count = results.len(), "search recorded in history");
                Ok(results)
            }
            Err(err) => {
                self.write_state().is_searching = false;
                Err(err)
            }
        }
    }

    /// Fetches a further page for the current profile and appends it.
    /// Without a current profile this is a no-op. Load-more pages are not
    /// recorded in history.
    pub async fn load_more_gifts(&self) -> Result<Vec<GiftProduct>> {
        let Some(profile) = self.current_profile() else {
            return Ok(Vec::new());
        };

        self.write_state().is_searching = true;

        match self.recommender.search_more(&profile, self.page_size).await {
            Ok(more) => {
                let mut state = self.write_state();
                state.results.extend(more);
                state.is_searching = false;
                Ok(state.results.clone())
            }
            Err(err) => {
                self.write_state().is_searching = false;
                Err(err)
            }
        }
    }

    /// Clears the result set and the current profile.
    pub fn clear_results(&self) {
        let mut state = self.write_state();
        state.results.clear();
        state.current_profile = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use giftfinder_core::GiftError;
    use giftfinder_core::gift::{AgeRange, Gender, Relationship};
    use giftfinder_core::history::HistoryFilter;
    use giftfinder_infrastructure::{
        LocalHistoryRepository, MemoryKeyValueStorage, MockGiftRecommender,
    };

    fn profile() -> DemographicProfile {
        DemographicProfile {
            gender: Gender::Male,
            relationship: Relationship::Friend,
            age_range: AgeRange::Adult,
            interests: vec!["Music".to_string()],
            price_range: None,
            occasion: None,
        }
    }

    fn service() -> (GiftSearchService, Arc<dyn HistoryRepository>) {
        let storage = Arc::new(MemoryKeyValueStorage::new());
        let history: Arc<dyn HistoryRepository> =
            Arc::new(LocalHistoryRepository::new(storage));
        (
            GiftSearchService::new(Arc::new(MockGiftRecommender), history.clone()),
            history,
        )
    }

    #[tokio::test]
    async fn test_search_populates_results_and_history() {
        let (service, history) = service();

        let results = service.search_gifts(profile()).await.unwrap();
        assert_eq!(results.len(), 8);
        assert_eq!(service.search_results().len(), 8);
        assert!(!service.is_searching());
        assert_eq!(service.current_profile(), Some(profile()));

        let items = history.list(HistoryFilter::All).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].results.len(), 8);
        assert_eq!(items[0].profile, profile());
    }

    #[tokio::test]
    async fn test_load_more_appends_without_recording_history() {
        let (service, history) = service();

        service.search_gifts(profile()).await.unwrap();
        let all = service.load_more_gifts().await.unwrap();

        assert_eq!(all.len(), 16);
        assert_eq!(service.search_results().len(), 16);
        assert_eq!(history.list(HistoryFilter::All).await.len(), 1);
    }

    #[tokio::test]
    async fn test_load_more_without_profile_is_a_no_op() {
        let (service, history) = service();
        let results = service.load_more_gifts().await.unwrap();
        assert!(results.is_empty());
        assert!(history.list(HistoryFilter::All).await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_results_resets_profile_and_results() {
        let (service, _history) = service();
        service.search_gifts(profile()).await.unwrap();

        service.clear_results();
        assert!(service.search_results().is_empty());
        assert!(service.current_profile().is_none());
    }

    struct FailingRecommender;

    #[async_trait]
    impl GiftRecommender for FailingRecommender {
        async fn search(
            &self,
            _profile: &DemographicProfile,
            _count: usize,
        ) -> Result<Vec<GiftProduct>> {
            Err(GiftError::recommendation("backend unavailable"))
        }

        async fn search_more(
            &self,
            _profile: &DemographicProfile,
            _count: usize,
        ) -> Result<Vec<GiftProduct>> {
            Err(GiftError::recommendation("backend unavailable"))
        }
    }

    #[tokio::test]
    async fn test_recommender_failure_propagates_and_resets_busy_flag() {
        let storage = Arc::new(MemoryKeyValueStorage::new());
        let history: Arc<dyn HistoryRepository> =
            Arc::new(LocalHistoryRepository::new(storage));
        let service = GiftSearchService::new(Arc::new(FailingRecommender), history.clone());

        let err = service.search_gifts(profile()).await.unwrap_err();
        assert!(matches!(err, GiftError::Recommendation(_)));
        assert!(!service.is_searching());
        assert!(history.list(HistoryFilter::All).await.is_empty());
        // Profile is kept for retry.
        assert!(service.current_profile().is_some());
    }

    #[tokio::test]
    async fn test_custom_page_size_is_passed_through() {
        let storage = Arc::new(MemoryKeyValueStorage::new());
        let history: Arc<dyn HistoryRepository> =
            Arc::new(LocalHistoryRepository::new(storage));
        let service =
            GiftSearchService::with_page_size(Arc::new(MockGiftRecommender), history, 3);

        let results = service.search_gifts(profile()).await.unwrap();
        assert_eq!(results.len(), 3);
    }
}
