//! Session state wrapper over the identity collaborator.
//!
//! Subscribes to exactly one auth-state stream at construction and exposes
//! a simplified `current_user` value plus a `loading` flag covering the
//! interval before the collaborator reports its initial state. Auth
//! operations are thin pass-throughs; collaborator errors propagate
//! unchanged (presentation is the view layer's problem).

use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use giftfinder_core::identity::{
    AuthObserver, AuthSubscription, CurrentUserSource, IdentityError, IdentityProvider,
    IdentityUser, User,
};

struct SessionState {
    /// True only until the first identity notification arrives
    /// (UNINITIALIZED). The transition to READY is terminal for the life
    /// of the process.
    loading: bool,
    current_user: Option<User>,
}

struct SharedState {
    inner: RwLock<SessionState>,
}

impl SharedState {
    fn apply(&self, user: Option<IdentityUser>) {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.current_user = user.map(User::from);
        state.loading = false;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Wrapper owning the single identity subscription.
pub struct SessionService {
    provider: Arc<dyn IdentityProvider>,
    state: Arc<SharedState>,
    subscription: Mutex<Option<AuthSubscription>>,
}

impl SessionService {
    /// Creates the service and subscribes to the identity collaborator.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let state = Arc::new(SharedState {
            inner: RwLock::new(SessionState {
                loading: true,
                current_user: None,
            }),
        });

        let observer: AuthObserver = {
            let state = Arc::clone(&state);
            Arc::new(move |user| state.apply(user))
        };
        let subscription = provider.subscribe(observer);
        debug!("session service subscribed to identity provider");

        Self {
            provider,
            state,
            subscription: Mutex::new(Some(subscription)),
        }
    }

    /// The signed-in user, or `None` when signed out or not yet known.
    pub fn current_user(&self) -> Option<User> {
        self.state.read().current_user.clone()
    }

    /// True until the first identity notification has arrived.
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        self.provider.sign_in_with_email(email, password).await
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        self.provider.sign_up(email, password).await
    }

    pub async fn logout(&self) -> Result<(), IdentityError> {
        self.provider.sign_out().await
    }

    /// Google sign-in with a two-tier strategy: redirect first, and on a
    /// popup-blocked condition exactly one popup attempt whose outcome is
    /// returned as-is. Every other condition propagates immediately.
    pub async fn login_with_google(&self) -> Result<(), IdentityError> {
        match self.provider.sign_in_with_google_redirect().await {
            Ok(()) => Ok(()),
            Err(IdentityError::PopupBlocked) => {
                warn!("google sign-in redirect was blocked, retrying with a popup");
                self.provider.sign_in_with_google_popup().await
            }
            Err(err) => Err(err),
        }
    }

    /// Tears the identity subscription down. Safe to call more than once;
    /// after the first call no further notifications are observed.
    pub fn shutdown(&self) {
        let subscription = self
            .subscription
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
            debug!("session service unsubscribed from identity provider");
        }
    }
}

impl CurrentUserSource for SessionService {
    fn current_user(&self) -> Option<User> {
        SessionService::current_user(self)
    }
}
