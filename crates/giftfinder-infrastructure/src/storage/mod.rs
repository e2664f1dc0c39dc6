//! Durable key-value storage.
//!
//! The per-browser storage analogue: string values under string keys,
//! JSON-encoded by the stores that own them.
//!
//! Responsibilities end at get/set/remove. Storage does not know about
//! specific records (layout state, history) and does not parse anything;
//! that is the store layer's job.

mod file;
mod memory;

pub use file::FileKeyValueStorage;
pub use memory::MemoryKeyValueStorage;

use giftfinder_core::error::Result;

/// Synchronous string key-value storage.
///
/// Operations are synchronous by contract: a store's mutation completes,
/// including its durable write, before the next event is processed.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
