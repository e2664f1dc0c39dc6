//! Recommendation collaborator trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::gift::model::{DemographicProfile, GiftProduct};

/// Number of products requested per search when nothing else is configured.
pub const DEFAULT_RESULT_COUNT: usize = 8;

/// Collaborator that produces gift suggestions for a demographic profile.
///
/// The real backend is out of scope for this layer; implementations may be
/// mocked. There is no pagination token in this design: "more" re-issues
/// the query and the implementation decides what a further page means.
#[async_trait]
pub trait GiftRecommender: Send + Sync {
    /// Returns up to `count` suggestions for the profile, best first.
    async fn search(&self, profile: &DemographicProfile, count: usize)
    -> Result<Vec<GiftProduct>>;

    /// Returns up to `count` additional suggestions for the same profile.
    async fn search_more(
        &self,
        profile: &DemographicProfile,
        count: usize,
    ) -> Result<Vec<GiftProduct>>;
}
