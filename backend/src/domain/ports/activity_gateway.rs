//! Driven port for the upstream `Activities` endpoints.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::{Activity, BearerToken, NewActivity};

/// Activity operations delegated to the upstream API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityGateway: Send + Sync {
    /// `GET /app/Activities/listActivities?tripId=`; invalid elements are dropped.
    async fn list_activities(
        &self,
        token: &BearerToken,
        trip_id: &str,
    ) -> Result<Vec<Activity>, GatewayError>;

    /// `POST /app/Activities/create`.
    async fn create_activity(
        &self,
        token: &BearerToken,
        activity: &NewActivity,
    ) -> Result<(), GatewayError>;
}
