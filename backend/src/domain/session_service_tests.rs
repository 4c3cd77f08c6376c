//! Tests for the session service.

use std::sync::Arc;

use chrono::Duration;
use rstest::rstest;

use super::*;
use crate::domain::ports::MockAccountGateway;
use crate::domain::{AccessTokenGrant, UpstreamErrorBody};
use crate::test_support::{fixture_clock, fixture_now, sample_profile};

fn make_service(accounts: MockAccountGateway) -> SessionService {
    SessionService::new(Arc::new(accounts), fixture_clock())
}

fn credentials() -> SignInCredentials {
    SignInCredentials::new("ada@example.com", "hunter22")
}

#[rstest]
#[tokio::test]
async fn sign_in_reports_remaining_lifetime() {
    let mut accounts = MockAccountGateway::new();
    accounts.expect_sign_in().times(1).return_once(|_| {
        Ok(AccessTokenGrant {
            access_token: "abc".to_owned(),
            expire_at: fixture_now() + Duration::hours(2),
        })
    });

    let signed_in = make_service(accounts)
        .sign_in(&credentials())
        .await
        .expect("authenticated");

    assert_eq!(signed_in.max_age, Duration::hours(2));
    assert_eq!(signed_in.credential.token().as_str(), "abc");
}

#[rstest]
#[tokio::test]
async fn empty_access_token_is_rejected() {
    let mut accounts = MockAccountGateway::new();
    accounts.expect_sign_in().times(1).return_once(|_| {
        Ok(AccessTokenGrant {
            access_token: String::new(),
            expire_at: fixture_now() + Duration::hours(2),
        })
    });

    let err = make_service(accounts)
        .sign_in(&credentials())
        .await
        .expect_err("rejected");

    assert_eq!(err, SignInError::Rejected(SignInRejection::MissingToken));
    let outcome = err.into_outcome(
        messages::SIGN_IN,
        FormState::initial("signIn", &serde_json::json!({})),
    );
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some(messages::TOKEN_MISSING));
}

#[rstest]
#[tokio::test]
async fn upstream_rejection_is_propagated() {
    let mut accounts = MockAccountGateway::new();
    accounts.expect_sign_in().times(1).return_once(|_| {
        Err(GatewayError::rejected(
            401_u16,
            UpstreamErrorBody::Message("bad credentials".to_owned()),
        ))
    });

    let err = make_service(accounts)
        .sign_in(&credentials())
        .await
        .expect_err("rejected");

    assert!(matches!(
        err,
        SignInError::Gateway(GatewayError::Rejected { status: 401, .. })
    ));
}

#[rstest]
#[tokio::test]
async fn missing_token_skips_upstream() {
    let mut accounts = MockAccountGateway::new();
    accounts.expect_profile().times(0);

    let user = make_service(accounts).current_user(None).await;

    assert!(user.is_none());
}

#[rstest]
#[tokio::test]
async fn failed_revalidation_is_anonymous() {
    let mut accounts = MockAccountGateway::new();
    accounts
        .expect_profile()
        .times(1)
        .return_once(|_| Err(GatewayError::validation_failed("user profile", "bad email")));
    let token = BearerToken::new("abc");

    let user = make_service(accounts).current_user(token.as_ref()).await;

    assert!(user.is_none());
}

#[rstest]
#[tokio::test]
async fn valid_token_resolves_profile() {
    let mut accounts = MockAccountGateway::new();
    accounts
        .expect_profile()
        .withf(|token| token.as_str() == "abc")
        .times(1)
        .return_once(|_| Ok(sample_profile()));
    let token = BearerToken::new("abc");

    let user = make_service(accounts).current_user(token.as_ref()).await;

    assert_eq!(user, Some(sample_profile()));
}
