//! Wire DTOs for the upstream travel API.
//!
//! Responses decode into these DTOs first and are then mapped into validated
//! domain records; requests serialise from borrowed views of domain values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use uuid::Uuid;

use crate::domain::{
    AccessTokenGrant, Activity, Member, ProfilePictureUpdate, RecordValidationError, Trip,
    UserProfile,
};

#[derive(Debug, Serialize)]
pub(super) struct CredentialsBody<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct RegistrationBody<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
    pub(super) name: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct ProfilePictureBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) image: Option<&'a str>,
}

impl<'a> From<&'a ProfilePictureUpdate> for ProfilePictureBody<'a> {
    fn from(update: &'a ProfilePictureUpdate) -> Self {
        Self {
            image: update.image.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AccessTokenDto {
    access_token: String,
    expire_at: Value,
}

impl TryFrom<AccessTokenDto> for AccessTokenGrant {
    type Error = RecordValidationError;

    fn try_from(dto: AccessTokenDto) -> Result<Self, Self::Error> {
        Ok(Self {
            access_token: dto.access_token,
            expire_at: coerce_timestamp(&dto.expire_at, "expireAt")?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserProfileDto {
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    image: Option<String>,
    created_at: Value,
}

impl TryFrom<UserProfileDto> for UserProfile {
    type Error = RecordValidationError;

    fn try_from(dto: UserProfileDto) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&dto.id)
            .map_err(|_| RecordValidationError::InvalidUuid { field: "id" })?;
        let created_at = coerce_timestamp(&dto.created_at, "createdAt")?;
        Self::new(id, dto.name, dto.email, dto.image, created_at)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TripDto {
    #[serde(default)]
    id: Option<String>,
    user_owner_id: String,
    title: String,
    destination: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    budget: Option<f64>,
}

impl From<TripDto> for Trip {
    fn from(dto: TripDto) -> Self {
        Self {
            id: dto.id,
            user_owner_id: dto.user_owner_id,
            title: dto.title,
            destination: dto.destination,
            start_date: dto.start_date,
            end_date: dto.end_date,
            description: dto.description,
            budget: dto.budget,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MemberDto {
    id: String,
    trip_id: String,
    name: String,
    email: String,
    invite_status: Number,
    access_token: String,
    token_life_time: String,
    trip_balance: f64,
}

impl TryFrom<MemberDto> for Member {
    type Error = RecordValidationError;

    fn try_from(dto: MemberDto) -> Result<Self, Self::Error> {
        let invite_status = dto
            .invite_status
            .as_i64()
            .ok_or(RecordValidationError::NotInteger {
                field: "inviteStatus",
            })?;
        Ok(Self {
            id: dto.id,
            trip_id: dto.trip_id,
            name: dto.name,
            email: dto.email,
            invite_status,
            access_token: dto.access_token,
            token_life_time: dto.token_life_time,
            trip_balance: dto.trip_balance,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ActivityDto {
    #[serde(default)]
    id: Option<String>,
    trip_id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    cost: f64,
}

impl TryFrom<ActivityDto> for Activity {
    type Error = RecordValidationError;

    fn try_from(dto: ActivityDto) -> Result<Self, Self::Error> {
        Self::new(dto.id, dto.trip_id, dto.name, dto.description, dto.cost)
    }
}

/// Accept RFC 3339 strings, zone-less date-times (read as UTC), plain dates
/// and epoch milliseconds.
fn coerce_timestamp(
    value: &Value,
    field: &'static str,
) -> Result<DateTime<Utc>, RecordValidationError> {
    let invalid = RecordValidationError::InvalidTimestamp { field };
    match value {
        Value::String(text) => parse_timestamp_text(text.trim()).ok_or(invalid),
        Value::Number(number) => number
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .ok_or(invalid),
        _ => Err(invalid),
    }
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
