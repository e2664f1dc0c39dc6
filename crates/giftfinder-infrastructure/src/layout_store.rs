//! Persisted layout state store.
//!
//! Owns the `layout-state` storage key. Both operations are infallible
//! from the caller's point of view: a layout that fails to load falls back
//! to defaults, a layout that fails to save stays in memory, and either
//! case is worth a warning and nothing more.

use std::sync::Arc;

use tracing::warn;

use giftfinder_core::layout::{LayoutState, StoredLayoutState};

use crate::storage::KeyValueStorage;

/// Storage key owned by this store. No other component writes it.
pub const LAYOUT_STATE_KEY: &str = "layout-state";

/// Store for the panel-layout record.
pub struct LayoutStateStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl LayoutStateStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Reads the stored record, merged over defaults.
    ///
    /// Absence, parse failure and I/O failure all degrade to the default
    /// state; failures are logged as warnings only.
    pub fn load(&self) -> LayoutState {
        let raw = match self.storage.get(LAYOUT_STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LayoutState::default(),
            Err(err) => {
                warn!("failed to load layout state: {}", err);
                return LayoutState::default();
            }
        };

        match serde_json::from_str::<StoredLayoutState>(&raw) {
            Ok(stored) => LayoutState::from_stored(stored),
            Err(err) => {
                warn!("failed to parse stored layout state: {}", err);
                LayoutState::default()
            }
        }
    }

    /// Serializes and writes the record; failures are logged as warnings.
    pub fn save(&self, state: &LayoutState) {
        let raw = match serde_json::to_string(state) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize layout state: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.set(LAYOUT_STATE_KEY, &raw) {
            warn!("failed to save layout state: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStorage;
    use giftfinder_core::layout::{GlobalNavState, PanelState};

    fn store_with_storage() -> (LayoutStateStore, Arc<MemoryKeyValueStorage>) {
        let storage = Arc::new(MemoryKeyValueStorage::new());
        (LayoutStateStore::new(storage.clone()), storage)
    }

    #[test]
    fn test_load_without_stored_record_yields_defaults() {
        let (store, _storage) = store_with_storage();
        assert_eq!(store.load(), LayoutState::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (store, _storage) = store_with_storage();
        let state = LayoutState {
            global_nav: GlobalNavState { is_open: false },
            alt_menu: PanelState {
                is_open: true,
                width: 180.0,
                is_pinned: true,
            },
            right_sidebar: PanelState {
                is_open: true,
                width: 420.0,
                is_pinned: false,
            },
        };

        store.save(&state);
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_partial_stored_record_is_merged() {
        let (store, storage) = store_with_storage();
        storage
            .set(LAYOUT_STATE_KEY, r#"{"altMenu": {"isOpen": true}}"#)
            .unwrap();

        let state = store.load();
        assert!(state.alt_menu.is_open);
        assert_eq!(state.alt_menu.width, 280.0);
        assert!(!state.alt_menu.is_pinned);
    }

    #[test]
    fn test_corrupt_record_falls_back_to_defaults() {
        let (store, storage) = store_with_storage();
        storage.set(LAYOUT_STATE_KEY, "not json at all").unwrap();
        assert_eq!(store.load(), LayoutState::default());
    }

    #[test]
    fn test_storage_read_failure_falls_back_to_defaults() {
        let (store, storage) = store_with_storage();
        storage.set_fail_reads(true);
        assert_eq!(store.load(), LayoutState::default());
    }

    #[test]
    fn test_storage_write_failure_does_not_panic() {
        let (store, storage) = store_with_storage();
        storage.set_fail_writes(true);
        store.save(&LayoutState::default());
    }
}
