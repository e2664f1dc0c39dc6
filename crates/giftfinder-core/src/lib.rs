//! Domain layer of the GiftFinder client data layer.
//!
//! Contains the value models (profiles, products, history items, layout
//! state), the collaborator traits (identity provider, recommender, remote
//! history sink) and the shared error type. No I/O happens in this crate;
//! storage-backed implementations live in `giftfinder-infrastructure`.

pub mod error;
pub mod gift;
pub mod history;
pub mod identity;
pub mod layout;

// Re-export common error type
pub use error::{GiftError, Result};
