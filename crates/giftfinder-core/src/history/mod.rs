//! Search history domain module.
//!
//! # Module Structure
//!
//! - `model`: History item and list filter
//! - `repository`: History repository trait
//! - `sync`: Remote account-scoped sync trait

pub mod model;
pub mod repository;
pub mod sync;

pub use model::{HistoryFilter, HistoryItem};
pub use repository::HistoryRepository;
pub use sync::RemoteHistorySink;
