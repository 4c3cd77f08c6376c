//! Read side of the trip pages.
//!
//! The home page tolerates a failed trip fetch and renders an empty list. The
//! detail page fetches the trip list, members and activities concurrently;
//! only the trip itself is mandatory.

use std::sync::Arc;

use futures_util::future::join3;
use tracing::warn;

use super::ports::{ActivityGateway, GatewayError, MemberGateway, TripGateway};
use super::{BearerToken, Error, Trip, TripDetail, messages};

#[derive(Clone)]
pub struct TripQueryService {
    trips: Arc<dyn TripGateway>,
    members: Arc<dyn MemberGateway>,
    activities: Arc<dyn ActivityGateway>,
}

impl TripQueryService {
    pub fn new(
        trips: Arc<dyn TripGateway>,
        members: Arc<dyn MemberGateway>,
        activities: Arc<dyn ActivityGateway>,
    ) -> Self {
        Self {
            trips,
            members,
            activities,
        }
    }

    /// Trips visible to the session, or an empty list when the fetch fails.
    pub async fn trips_or_empty(&self, token: &BearerToken) -> Vec<Trip> {
        self.trips.list_trips(token).await.unwrap_or_else(|err| {
            warn!(error = %err, "trip list unavailable; rendering empty list");
            Vec::new()
        })
    }

    /// Trip with its members and activities.
    ///
    /// A trip absent from the list yields a `not_found` error. Members and
    /// activities degrade to empty lists.
    pub async fn detail(&self, token: &BearerToken, trip_id: &str) -> Result<TripDetail, Error> {
        let (trips, members, activities) = join3(
            self.trips.list_trips(token),
            self.members.list_members(token, trip_id),
            self.activities.list_activities(token, trip_id),
        )
        .await;

        let trip = trips
            .map_err(|err| map_trip_list_error(&err))?
            .into_iter()
            .find(|trip| trip.has_id(trip_id))
            .ok_or_else(|| {
                Error::not_found(messages::TRIP_NOT_FOUND)
                    .with_details(serde_json::json!({ "tripId": trip_id }))
            })?;

        Ok(TripDetail {
            trip,
            members: members.unwrap_or_else(|err| {
                warn!(trip_id, error = %err, "member list unavailable");
                Vec::new()
            }),
            activities: activities.unwrap_or_else(|err| {
                warn!(trip_id, error = %err, "activity list unavailable");
                Vec::new()
            }),
        })
    }
}

fn map_trip_list_error(err: &GatewayError) -> Error {
    match err {
        GatewayError::Unauthenticated => Error::unauthorized(messages::NOT_SIGNED_IN),
        GatewayError::Rejected { status: 401, .. } => Error::unauthorized(messages::NOT_SIGNED_IN),
        GatewayError::Rejected { status: 403, .. } => Error::forbidden(messages::TRIPS_UNAVAILABLE),
        GatewayError::Rejected { .. } | GatewayError::ValidationFailed { .. } => {
            Error::bad_gateway(messages::TRIPS_UNAVAILABLE)
        }
        GatewayError::Unreachable { .. } | GatewayError::Timeout { .. } => {
            Error::service_unavailable(messages::TRIPS_UNAVAILABLE)
        }
        GatewayError::NotFound { .. } => Error::not_found(messages::TRIP_NOT_FOUND),
    }
}

#[cfg(test)]
#[path = "trip_query_service_tests.rs"]
mod tests;
