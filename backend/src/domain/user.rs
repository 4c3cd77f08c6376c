//! Signed-in user's profile as reported by the upstream API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{RecordValidationError, is_valid_email};

/// Profile returned by `GET /app/Users/profile`.
///
/// Fetched fresh on every request and never cached.
///
/// ## Invariants
/// - `email` is a syntactically valid address.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use tripfront::domain::UserProfile;
/// use uuid::Uuid;
///
/// let profile = UserProfile::new(Uuid::nil(), "Ana", "ana@example.com", None, Utc::now())
///     .expect("valid profile");
/// assert_eq!(profile.name(), "Ana");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    id: Uuid,
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Validate and build a profile.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        image: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, RecordValidationError> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(RecordValidationError::InvalidEmail { field: "email" });
        }
        Ok(Self {
            id,
            name: name.into(),
            email,
            image,
            created_at,
        })
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Profile picture URL, when the user uploaded one.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
