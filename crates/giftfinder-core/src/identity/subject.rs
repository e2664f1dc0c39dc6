//! Auth-state subject.
//!
//! An explicit observable for identity notifications, replacing the
//! implicit register-a-callback model: the subject is owned by whoever
//! bridges the identity backend, subscribers get an explicit teardown
//! handle, and the single-subscriber contract is documented instead of
//! assumed.

use std::sync::{Arc, Mutex, MutexGuard};

use super::model::IdentityUser;
use super::provider::AuthObserver;

struct SubjectInner {
    /// The current observer, tagged so a stale subscription cannot tear
    /// down its successor.
    observer: Option<(u64, AuthObserver)>,
    /// Last emitted value, replayed to a new subscriber.
    last: Option<Option<IdentityUser>>,
    next_token: u64,
}

/// A single-subscriber-at-a-time subject for auth-state changes.
///
/// Subscribing replaces any previous observer. The last emitted value (if
/// any) is replayed synchronously to a new subscriber, so late subscribers
/// still learn the current auth state. Cloning shares the same subject.
#[derive(Clone)]
pub struct AuthStateSubject {
    inner: Arc<Mutex<SubjectInner>>,
}

impl AuthStateSubject {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SubjectInner {
                observer: None,
                last: None,
                next_token: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SubjectInner> {
        // Observers are invoked outside the lock, so a panicking observer
        // cannot poison state mid-update; recover the guard either way.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers `observer`, replacing any previous one, and replays the
    /// last emitted value to it.
    pub fn subscribe(&self, observer: AuthObserver) -> AuthSubscription {
        let (token, replay) = {
            let mut inner = self.lock();
            let token = inner.next_token;
            inner.next_token += 1;
            inner.observer = Some((token, Arc::clone(&observer)));
            (token, inner.last.clone())
        };

        if let Some(user) = replay {
            observer(user);
        }

        AuthSubscription {
            inner: Arc::clone(&self.inner),
            token,
        }
    }

    /// Publishes a new auth state to the current observer, if any.
    pub fn emit(&self, user: Option<IdentityUser>) {
        let observer = {
            let mut inner = self.lock();
            inner.last = Some(user.clone());
            inner.observer.as_ref().map(|(_, o)| Arc::clone(o))
        };

        if let Some(observer) = observer {
            observer(user);
        }
    }

    /// True while an observer is registered.
    pub fn has_subscriber(&self) -> bool {
        self.lock().observer.is_some()
    }
}

impl Default for AuthStateSubject {
    fn default() -> Self {
        Self::new()
    }
}

/// Teardown handle for an auth-state subscription.
///
/// Dropping the handle does NOT unsubscribe; teardown is explicit.
pub struct AuthSubscription {
    inner: Arc<Mutex<SubjectInner>>,
    token: u64,
}

impl AuthSubscription {
    /// Removes the observer this handle registered. No-op when a later
    /// subscriber has already replaced it.
    pub fn unsubscribe(self) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if matches!(inner.observer, Some((token, _)) if token == self.token) {
            inner.observer = None;
        }
    }
}
