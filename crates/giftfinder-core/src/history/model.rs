//! Search history domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gift::model::{DemographicProfile, GiftProduct};

/// One completed search and its results.
///
/// `id` uniquely identifies the item within its store and is derived from
/// the creation time. `timestamp` round-trips through storage as an
/// RFC 3339 string. The collection an item lives in is ordered newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub profile: DemographicProfile,
    pub results: Vec<GiftProduct>,
    /// Archived items stay in the store but are hidden from the active list.
    #[serde(default)]
    pub archived: bool,
}

/// Filter applied when listing history items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFilter {
    All,
    Active,
    Archived,
}

impl HistoryFilter {
    /// Returns true when the item passes this filter.
    pub fn matches(&self, item: &HistoryItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.archived,
            Self::Archived => item.archived,
        }
    }
}
