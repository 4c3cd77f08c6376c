//! Trip members (invitees).

use serde::Serialize;
use utoipa::ToSchema;

/// Member row from `GET /app/Members/listMembers`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub email: String,
    pub invite_status: i64,
    pub access_token: String,
    pub token_life_time: String,
    pub trip_balance: f64,
}

/// Validated payload for `POST /app/Members/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub trip_id: String,
    pub name: String,
    pub email: String,
}
