//! Storage-backed implementations of the GiftFinder data layer.
//!
//! Durable state lives in a key-value storage abstraction (one JSON file
//! per key, or an in-memory fake for tests). Each store owns exactly one
//! key; no other component writes it.

pub mod config;
pub mod history_store;
pub mod layout_store;
pub mod mock_recommender;
pub mod paths;
pub mod remote;
pub mod storage;

pub use config::AppConfig;
pub use history_store::LocalHistoryRepository;
pub use layout_store::LayoutStateStore;
pub use mock_recommender::MockGiftRecommender;
pub use remote::UnimplementedRemoteSink;
pub use storage::{FileKeyValueStorage, KeyValueStorage, MemoryKeyValueStorage};
