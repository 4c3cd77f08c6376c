//! Session lifecycle: sign-in and per-request revalidation.
//!
//! Sign-in moves a visitor from anonymous to authenticated only when upstream
//! issues a non-empty, unexpired token. Revalidation never fails: anything
//! other than a valid profile leaves the request anonymous.

use std::sync::Arc;

use chrono::Duration;
use mockable::Clock;
use tracing::{info, warn};

use super::messages::{self, ActionMessages};
use super::outcome::{ActionOutcome, FailureKind};
use super::ports::{AccountGateway, GatewayError};
use super::{BearerToken, FormState, SessionCredential, SignInCredentials, SignInRejection, UserProfile};

/// Credential produced by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub credential: SessionCredential,
    /// Remaining lifetime when the credential was issued.
    pub max_age: Duration,
}

/// Why a sign-in attempt ended in the rejected state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Rejected(#[from] SignInRejection),
}

impl SignInError {
    /// Fold the failure into an action outcome for the sign-in form.
    pub fn into_outcome(self, texts: ActionMessages, form: FormState) -> ActionOutcome<()> {
        match self {
            Self::Gateway(err) => ActionOutcome::from_gateway_error(&err, texts, Some(form)),
            Self::Rejected(SignInRejection::MissingToken) => ActionOutcome::failed(
                FailureKind::InvalidRecord,
                messages::TOKEN_MISSING,
                Some(form),
            ),
            Self::Rejected(SignInRejection::Expired { .. }) => ActionOutcome::failed(
                FailureKind::InvalidRecord,
                messages::TOKEN_EXPIRED,
                Some(form),
            ),
        }
    }
}

/// Signs users in and resolves the current user of a request.
#[derive(Clone)]
pub struct SessionService {
    accounts: Arc<dyn AccountGateway>,
    clock: Arc<dyn Clock>,
}

impl SessionService {
    pub fn new(accounts: Arc<dyn AccountGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { accounts, clock }
    }

    /// Exchange credentials for a session credential.
    pub async fn sign_in(&self, credentials: &SignInCredentials) -> Result<SignedIn, SignInError> {
        let grant = self.accounts.sign_in(credentials).await?;
        let now = self.clock.utc();
        let credential = grant.into_credential(now).inspect_err(|rejection| {
            warn!(%rejection, "sign-in response rejected");
        })?;
        let max_age = credential.max_age(now);
        info!(expires_at = %credential.expires_at(), "user signed in");
        Ok(SignedIn {
            credential,
            max_age,
        })
    }

    /// Resolve the profile behind `token`.
    ///
    /// Without a token upstream is not contacted. Every failure is logged and
    /// treated as anonymous.
    pub async fn current_user(&self, token: Option<&BearerToken>) -> Option<UserProfile> {
        let Some(token) = token else {
            return None;
        };
        match self.accounts.profile(token).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(error = %err, "session revalidation failed; continuing anonymously");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "session_service_tests.rs"]
mod tests;
