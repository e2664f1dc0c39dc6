//! User shapes on both sides of the identity seam.

use serde::{Deserialize, Serialize};

/// The user representation reported by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

/// The simplified current-user value the rest of the application reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Empty when the provider reports no email address.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(
        default,
        rename = "photoURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,
}

impl From<IdentityUser> for User {
    fn from(user: IdentityUser) -> Self {
        Self {
            id: user.uid,
            email: user.email.unwrap_or_default(),
            display_name: user.display_name,
            photo_url: user.photo_url,
        }
    }
}

/// Read-only view of the signed-in user, implemented by the session wrapper.
///
/// Components that only need to know "who, if anyone, is signed in right
/// now" (the history store's remote sync, for one) depend on this rather
/// than on the full session service.
pub trait CurrentUserSource: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_defaults_missing_email_to_empty() {
        let user = User::from(IdentityUser {
            uid: "u-1".to_string(),
            email: None,
            display_name: None,
            photo_url: None,
        });
        assert_eq!(user.id, "u-1");
        assert_eq!(user.email, "");
        assert!(user.display_name.is_none());
    }

    #[test]
    fn test_mapping_keeps_optional_fields() {
        let user = User::from(IdentityUser {
            uid: "u-2".to_string(),
            email: Some("a@example.com".to_string()),
            display_name: Some("A".to_string()),
            photo_url: Some("https://example.com/a.png".to_string()),
        });
        assert_eq!(user.email, "a@example.com");
        assert_eq!(user.photo_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_photo_url_wire_name() {
        let user = User {
            id: "u-3".to_string(),
            email: String::new(),
            display_name: None,
            photo_url: Some("https://example.com/p.png".to_string()),
        };
        let json = serde_json::to_value(user).unwrap();
        assert!(json.get("photoURL").is_some());
    }
}
