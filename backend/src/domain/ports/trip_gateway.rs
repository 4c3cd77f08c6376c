//! Driven port for the upstream `Trips` endpoints.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::{BearerToken, NewTrip, Trip};

/// Trip operations delegated to the upstream API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripGateway: Send + Sync {
    /// `GET /app/Trips/listTrips`; invalid elements are dropped.
    async fn list_trips(&self, token: &BearerToken) -> Result<Vec<Trip>, GatewayError>;

    /// `POST /app/Trips/create`; the echoed trip is validated with the list schema.
    async fn create_trip(&self, token: &BearerToken, trip: &NewTrip)
    -> Result<Trip, GatewayError>;

    /// `DELETE /app/Trips/delete?id=`.
    async fn delete_trip(&self, token: &BearerToken, trip_id: &str) -> Result<(), GatewayError>;
}
