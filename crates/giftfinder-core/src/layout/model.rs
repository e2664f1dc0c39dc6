//! Layout state model and the merge-with-defaults load policy.
//!
//! The stored record may be partial (written by an older build, or with
//! fields stripped by hand); loading back-fills it from defaults. The merge
//! is intentionally asymmetric: `altMenu` and `rightSidebar` are re-merged
//! field by field, while a present `globalNav` is taken verbatim and its
//! missing sub-fields fall to `false` rather than the default. Downstream
//! behavior may depend on this, so it is preserved; see DESIGN.md.

use serde::{Deserialize, Serialize};

/// Visibility of the global navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalNavState {
    pub is_open: bool,
}

/// Visibility, width and pinning of one resizable side panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub is_open: bool,
    /// Width in pixels; positive. `f64` because the original app persists
    /// whatever number a resize drag produced.
    pub width: f64,
    pub is_pinned: bool,
}

/// The persisted panel-layout record.
///
/// Constructed once at process start from storage or defaults, written back
/// on every change, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub global_nav: GlobalNavState,
    pub alt_menu: PanelState,
    pub right_sidebar: PanelState,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            // Always visible by default
            global_nav: GlobalNavState { is_open: true },
            alt_menu: PanelState {
                is_open: false,
                width: 280.0,
                is_pinned: false,
            },
            right_sidebar: PanelState {
                is_open: false,
                width: 360.0,
                is_pinned: false,
            },
        }
    }
}

/// A possibly-partial stored layout record, as read back from storage.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredLayoutState {
    pub global_nav: Option<StoredGlobalNav>,
    pub alt_menu: Option<StoredPanelState>,
    pub right_sidebar: Option<StoredPanelState>,
}

/// Stored `globalNav` value. A missing `isOpen` deserializes to `false`,
/// not to the default `true` (the shipped behavior).
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredGlobalNav {
    pub is_open: bool,
}

/// Stored panel value with every sub-field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredPanelState {
    pub is_open: Option<bool>,
    pub width: Option<f64>,
    pub is_pinned: Option<bool>,
}

impl LayoutState {
    /// Merges a stored record over the defaults.
    ///
    /// Top-level keys present in the record win; `altMenu` and
    /// `rightSidebar` are then re-merged with their defaults field by
    /// field, `globalNav` is not.
    pub fn from_stored(stored: StoredLayoutState) -> Self {
        let defaults = Self::default();
        Self {
            global_nav: stored
                .global_nav
                .map(|nav| GlobalNavState { is_open: nav.is_open })
                .unwrap_or(defaults.global_nav),
            alt_menu: merge_panel(defaults.alt_menu, stored.alt_menu),
            right_sidebar: merge_panel(defaults.right_sidebar, stored.right_sidebar),
        }
    }
}

fn merge_panel(defaults: PanelState, stored: Option<StoredPanelState>) -> PanelState {
    match stored {
        Some(panel) => PanelState {
            is_open: panel.is_open.unwrap_or(defaults.is_open),
            width: panel.width.unwrap_or(defaults.width),
            is_pinned: panel.is_pinned.unwrap_or(defaults.is_pinned),
        },
        None => defaults,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(raw: &str) -> LayoutState {
        LayoutState::from_stored(serde_json::from_str(raw).unwrap())
    }

    #[test]
    fn test_empty_record_yields_defaults() {
        assert_eq!(from_json("{}"), LayoutState::default());
    }

    #[test]
    fn test_partial_panel_is_backfilled_from_defaults() {
        let state = from_json(r#"{"altMenu": {"isOpen": true}}"#);
        assert!(state.alt_menu.is_open);
        assert_eq!(state.alt_menu.width, 280.0);
        assert!(!state.alt_menu.is_pinned);
        assert_eq!(state.right_sidebar, LayoutState::default().right_sidebar);
    }

    #[test]
    fn test_right_sidebar_partial_merge() {
        let state = from_json(r#"{"rightSidebar": {"width": 420.5, "isPinned": true}}"#);
        assert!(!state.right_sidebar.is_open);
        assert_eq!(state.right_sidebar.width, 420.5);
        assert!(state.right_sidebar.is_pinned);
    }

    #[test]
    fn test_global_nav_is_not_backfilled() {
        // Present-but-empty globalNav loses isOpen: it becomes false, not
        // the default true.
        let state = from_json(r#"{"globalNav": {}}"#);
        assert!(!state.global_nav.is_open);
    }

    #[test]
    fn test_missing_global_nav_gets_default() {
        let state = from_json(r#"{"altMenu": {"isOpen": true}}"#);
        assert!(state.global_nav.is_open);
    }

    #[test]
    fn test_fully_specified_record_round_trips() {
        let original = LayoutState {
            global_nav: GlobalNavState { is_open: false },
            alt_menu: PanelState {
                is_open: true,
                width: 180.0,
                is_pinned: true,
            },
            right_sidebar: PanelState {
                is_open: true,
                width: 360.0,
                is_pinned: false,
            },
        };
        let raw = serde_json::to_string(&original).unwrap();
        assert_eq!(from_json(&raw), original);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let state = from_json(r#"{"theme": "dark", "altMenu": {"width": 300}}"#);
        assert_eq!(state.alt_menu.width, 300.0);
    }
}
