//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and services and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{AccountGateway, ActivityGateway, MemberGateway, TripGateway};
use crate::domain::{SessionService, TripQueryService};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub accounts: Arc<dyn AccountGateway>,
    pub trips: Arc<dyn TripGateway>,
    pub members: Arc<dyn MemberGateway>,
    pub activities: Arc<dyn ActivityGateway>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountGateway>,
    pub trips: Arc<dyn TripGateway>,
    pub members: Arc<dyn MemberGateway>,
    pub activities: Arc<dyn ActivityGateway>,
    pub sessions: SessionService,
    pub trip_queries: TripQueryService,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use mockable::DefaultClock;
    /// use tripfront::inbound::http::state::{HttpState, HttpStatePorts};
    /// use tripfront::outbound::upstream::{HttpTravelApi, UpstreamClient};
    ///
    /// let base = url::Url::parse("https://api.example.com").expect("url");
    /// let client = UpstreamClient::new(base, Duration::from_secs(10), 1).expect("client");
    /// let api = Arc::new(HttpTravelApi::new(client));
    /// let state = HttpState::new(
    ///     HttpStatePorts {
    ///         accounts: api.clone(),
    ///         trips: api.clone(),
    ///         members: api.clone(),
    ///         activities: api,
    ///     },
    ///     Arc::new(DefaultClock),
    ///     true,
    /// );
    /// let _trips = state.trips.clone();
    /// ```
    pub fn new(ports: HttpStatePorts, clock: Arc<dyn Clock>, cookie_secure: bool) -> Self {
        let HttpStatePorts {
            accounts,
            trips,
            members,
            activities,
        } = ports;
        Self {
            sessions: SessionService::new(accounts.clone(), clock),
            trip_queries: TripQueryService::new(trips.clone(), members.clone(), activities.clone()),
            accounts,
            trips,
            members,
            activities,
            cookie_secure,
        }
    }
}
