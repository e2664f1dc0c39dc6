//! Gift search domain models.
//!
//! These records travel opaquely through the history store; nothing in this
//! layer validates them beyond presence. The serialized forms match the
//! wire format of the stored history record exactly, so the variant strings
//! and camelCase field names are part of the contract.

use serde::{Deserialize, Serialize};

/// Gender of the gift recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Relationship between the searcher and the recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    Friend,
    Partner,
    Family,
    Coworker,
    Other,
}

/// Age bracket of the recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    Child,
    Teen,
    #[serde(rename = "Young Adult")]
    YoungAdult,
    Adult,
    Senior,
}

/// Inclusive price bounds for suggestions, in the catalog currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// The demographic query that drives a gift search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicProfile {
    pub gender: Gender,
    pub relationship: Relationship,
    pub age_range: AgeRange,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
}

/// Marketplace a product record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSource {
    Amazon,
    Aliexpress,
}

/// A product record returned by the recommendation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub image_url: String,
    pub product_url: String,
    pub source: ProductSource,
}
