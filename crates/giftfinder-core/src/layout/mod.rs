//! Persisted layout state domain module.

pub mod model;

pub use model::{GlobalNavState, LayoutState, PanelState, StoredLayoutState};
