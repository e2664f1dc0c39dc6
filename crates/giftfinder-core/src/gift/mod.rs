//! Gift search domain module.
//!
//! Value models for the demographic query and product records, plus the
//! recommendation collaborator trait.

pub mod model;
pub mod service;

pub use model::{AgeRange, DemographicProfile, Gender, GiftProduct, PriceRange, ProductSource, Relationship};
pub use service::{DEFAULT_RESULT_COUNT, GiftRecommender};
