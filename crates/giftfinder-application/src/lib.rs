//! Use-case services of the GiftFinder data layer.
//!
//! The session service wraps the external identity collaborator into a
//! simplified current-user value; the gift search service orchestrates the
//! recommender and the history repository. `factory` wires the whole layer
//! together from configuration.

pub mod factory;
pub mod gift_search_service;
pub mod session_service;

pub use factory::GiftFinderApp;
pub use gift_search_service::GiftSearchService;
pub use session_service::SessionService;
