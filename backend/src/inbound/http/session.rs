//! Session helpers to keep HTTP handlers free of cookie handling.
//!
//! The session is a single client-held `accessToken` cookie. There is no
//! server-side store; validity is delegated to the upstream API.

use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::domain::{ACCESS_TOKEN_COOKIE, BearerToken, SessionCredential};

/// Bearer token carried by the request, if any.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Option<BearerToken>,
}

impl SessionContext {
    /// Read the session cookie; a missing or blank cookie is anonymous.
    pub fn from_cookies(req: &HttpRequest) -> Self {
        let token = req
            .cookie(ACCESS_TOKEN_COOKIE)
            .and_then(|cookie| BearerToken::new(cookie.value()));
        Self { token }
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_cookies(req)))
    }
}

/// Cookie persisting `credential` for `max_age`.
pub fn session_cookie(
    credential: &SessionCredential,
    max_age: chrono::Duration,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE, credential.token().as_str().to_owned())
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age.num_seconds()))
        .finish()
}

/// Cookie instructing the browser to discard the session.
pub fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build(ACCESS_TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use chrono::Duration;
    use rstest::rstest;

    use crate::domain::AccessTokenGrant;
    use crate::test_support::fixture_now;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("abc"), Some("abc"))]
    fn reads_token_from_cookie(#[case] cookie: Option<&str>, #[case] expected: Option<&str>) {
        let mut req = TestRequest::default();
        if let Some(value) = cookie {
            req = req.cookie(Cookie::new(ACCESS_TOKEN_COOKIE, value.to_owned()));
        }
        let context = SessionContext::from_cookies(&req.to_http_request());
        assert_eq!(context.token().map(BearerToken::as_str), expected);
    }

    #[rstest]
    fn session_cookie_is_http_only_with_max_age() {
        let credential = AccessTokenGrant {
            access_token: "abc".to_owned(),
            expire_at: fixture_now() + Duration::minutes(30),
        }
        .into_credential(fixture_now())
        .expect("credential");

        let cookie = session_cookie(&credential, Duration::minutes(30), false);

        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(1800)));
    }

    #[rstest]
    fn cleared_cookie_expires_immediately() {
        let cookie = cleared_session_cookie(true);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
