//! Identity provider trait.

use std::sync::Arc;

use async_trait::async_trait;

use super::error::IdentityError;
use super::model::IdentityUser;
use super::subject::AuthSubscription;

/// Callback invoked on every auth-state change. `None` means signed out.
pub type AuthObserver = Arc<dyn Fn(Option<IdentityUser>) + Send + Sync>;

/// The external identity collaborator.
///
/// Providers are expected to notify the observer with the current auth
/// state once it is known (immediately on subscribe when already known),
/// then on every subsequent change. All sign-in/sign-out operations raise
/// classified [`IdentityError`]s on failure.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Registers the single auth-state observer. The returned subscription
    /// must be torn down explicitly via [`AuthSubscription::unsubscribe`].
    fn subscribe(&self, observer: AuthObserver) -> AuthSubscription;

    async fn sign_in_with_email(&self, email: &str, password: &str)
    -> Result<(), IdentityError>;

    async fn sign_in_with_google_redirect(&self) -> Result<(), IdentityError>;

    async fn sign_in_with_google_popup(&self) -> Result<(), IdentityError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;
}
