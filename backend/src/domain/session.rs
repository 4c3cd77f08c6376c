//! Session credential: the bearer token kept in the `accessToken` cookie.
//!
//! There is no server-side session store. The token is read from the cookie on
//! every request and its validity is decided by the upstream API.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Name of the cookie holding the bearer token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Opaque bearer token proving session identity to the upstream API.
///
/// # Examples
/// ```
/// use tripfront::domain::BearerToken;
///
/// assert!(BearerToken::new("").is_none());
/// let token = BearerToken::new("abc").expect("non-empty");
/// assert_eq!(token.authorization(), "Bearer abc");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token; blank input counts as no token at all.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Schema-validated body of a successful `POST /app/Users/login`.
///
/// `access_token` may still be empty here; [`AccessTokenGrant::into_credential`]
/// decides whether the grant authenticates the user.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessTokenGrant {
    pub access_token: String,
    pub expire_at: DateTime<Utc>,
}

impl fmt::Debug for AccessTokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenGrant")
            .field("access_token", &"***")
            .field("expire_at", &self.expire_at)
            .finish()
    }
}

/// Why a structurally valid grant still fails to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInRejection {
    /// Upstream answered 2xx but with an empty `accessToken`.
    #[error("access token missing from sign-in response")]
    MissingToken,
    /// The grant expired before it could be stored.
    #[error("access token expired at {expire_at}")]
    Expired { expire_at: DateTime<Utc> },
}

impl AccessTokenGrant {
    /// Turn the grant into a credential to persist, judged at `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use tripfront::domain::{AccessTokenGrant, SignInRejection};
    ///
    /// let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    /// let grant = AccessTokenGrant { access_token: "abc".into(), expire_at: now + Duration::hours(1) };
    /// let credential = grant.into_credential(now).expect("authenticated");
    /// assert_eq!(credential.max_age(now), Duration::hours(1));
    ///
    /// let empty = AccessTokenGrant { access_token: String::new(), expire_at: now + Duration::hours(1) };
    /// assert_eq!(empty.into_credential(now), Err(SignInRejection::MissingToken));
    /// ```
    pub fn into_credential(self, now: DateTime<Utc>) -> Result<SessionCredential, SignInRejection> {
        let token = BearerToken::new(self.access_token).ok_or(SignInRejection::MissingToken)?;
        if self.expire_at <= now {
            return Err(SignInRejection::Expired {
                expire_at: self.expire_at,
            });
        }
        Ok(SessionCredential {
            token,
            expires_at: self.expire_at,
        })
    }
}

/// Token plus expiry, ready to be written to the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredential {
    token: BearerToken,
    expires_at: DateTime<Utc>,
}

impl SessionCredential {
    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Cookie lifetime: `expireAt − now`.
    pub fn max_age(&self, now: DateTime<Utc>) -> Duration {
        self.expires_at - now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 30, 0)
            .single()
            .expect("valid fixture time")
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_tokens_are_absent(#[case] raw: &str) {
        assert!(BearerToken::new(raw).is_none());
    }

    #[rstest]
    fn debug_never_prints_the_token() {
        let token = BearerToken::new("secret-token").expect("token");
        assert_eq!(format!("{token:?}"), "BearerToken(***)");
    }

    #[rstest]
    fn expired_grant_is_rejected() {
        let grant = AccessTokenGrant {
            access_token: "abc".to_owned(),
            expire_at: now() - Duration::seconds(1),
        };
        assert!(matches!(
            grant.into_credential(now()),
            Err(SignInRejection::Expired { .. })
        ));
    }

    #[rstest]
    fn max_age_tracks_remaining_lifetime() {
        let grant = AccessTokenGrant {
            access_token: "abc".to_owned(),
            expire_at: now() + Duration::minutes(90),
        };
        let credential = grant.into_credential(now()).expect("authenticated");
        assert_eq!(credential.max_age(now()), Duration::minutes(90));
        assert_eq!(
            credential.max_age(now() + Duration::minutes(30)),
            Duration::minutes(60)
        );
    }
}
