//! Trips owned by the upstream API.

use serde::Serialize;
use utoipa::ToSchema;

/// Trip as listed by `GET /app/Trips/listTrips` and echoed by
/// `POST /app/Trips/create`.
///
/// Dates stay as the strings the API sends; the rendering layer formats them.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_owner_id: String,
    pub title: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

impl Trip {
    /// Whether this trip carries the given upstream identifier.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Validated payload for `POST /app/Trips/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub user_owner_id: String,
    pub title: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Trip together with its members and activities, as shown on the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripDetail {
    pub trip: Trip,
    pub members: Vec<super::Member>,
    pub activities: Vec<super::Activity>,
}
