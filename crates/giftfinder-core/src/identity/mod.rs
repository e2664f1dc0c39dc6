//! Identity domain module.
//!
//! The identity backend itself is an external collaborator; this module
//! defines the provider trait the session wrapper consumes, the simplified
//! user shape it exposes, the classified error type, and the auth-state
//! subject that replaces the implicit callback model.
//!
//! # Module Structure
//!
//! - `model`: Provider-side and internal user shapes
//! - `error`: Classified identity errors
//! - `provider`: Identity provider trait
//! - `subject`: Single-subscriber auth-state subject

pub mod error;
pub mod model;
pub mod provider;
pub mod subject;

pub use error::IdentityError;
pub use model::{CurrentUserSource, IdentityUser, User};
pub use provider::{AuthObserver, IdentityProvider};
pub use subject::{AuthStateSubject, AuthSubscription};
