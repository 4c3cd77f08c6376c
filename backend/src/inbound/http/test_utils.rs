//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::web;

use crate::domain::ACCESS_TOKEN_COOKIE;
use crate::domain::ports::{
    MockAccountGateway, MockActivityGateway, MockMemberGateway, MockTripGateway,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::test_support::{fixture_clock, sample_profile};

/// Mocked ports for one handler test; unset expectations fail on use.
#[derive(Default)]
pub struct MockPorts {
    pub accounts: MockAccountGateway,
    pub trips: MockTripGateway,
    pub members: MockMemberGateway,
    pub activities: MockActivityGateway,
}

impl MockPorts {
    /// Ports whose profile check accepts any token as [`sample_profile`].
    pub fn signed_in() -> Self {
        let mut ports = Self::default();
        ports
            .accounts
            .expect_profile()
            .returning(|_| Ok(sample_profile()));
        ports
    }

    /// Wrap the mocks as handler state with a frozen clock.
    ///
    /// The session cookie is not marked `Secure` so tests can read it back.
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            HttpStatePorts {
                accounts: Arc::new(self.accounts),
                trips: Arc::new(self.trips),
                members: Arc::new(self.members),
                activities: Arc::new(self.activities),
            },
            fixture_clock(),
            false,
        ))
    }
}

/// Session cookie carrying `token`.
pub fn session(token: &str) -> Cookie<'static> {
    Cookie::new(ACCESS_TOKEN_COOKIE, token.to_owned())
}
