//! Classified identity collaborator errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the identity collaborator.
///
/// The session wrapper propagates these unchanged; only `PopupBlocked` gets
/// special treatment (it triggers the popup fallback inside the google
/// sign-in flow).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityError {
    /// The browser blocked the sign-in popup.
    #[error("sign-in popup was blocked")]
    PopupBlocked,

    /// The identity backend is not configured for authentication.
    #[error("identity backend configuration is missing")]
    ConfigurationMissing,

    /// Any other collaborator failure, with the backend's message.
    #[error("identity error: {0}")]
    Other(String),
}
