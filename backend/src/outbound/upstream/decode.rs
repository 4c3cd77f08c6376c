//! Response validation for upstream payloads.
//!
//! Single records are all-or-nothing. Lists are filtered per element: an
//! element that fails to decode or validate is logged and dropped while the
//! remaining elements keep their order.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::GatewayError;

/// Decode one record of `entity`, fetched from `target`.
pub(super) fn decode_one<D, T>(entity: &str, target: &str, body: &[u8]) -> Result<T, GatewayError>
where
    D: DeserializeOwned,
    T: TryFrom<D>,
    T::Error: Display,
{
    let value = parse_json(entity, body)?;
    if value.is_null() {
        return Err(GatewayError::not_found(entity, target));
    }
    let dto: D = serde_json::from_value(value)
        .map_err(|err| GatewayError::validation_failed(entity, err.to_string()))?;
    T::try_from(dto).map_err(|err| GatewayError::validation_failed(entity, err.to_string()))
}

/// Decode a list of `entity`, keeping only the elements that validate.
pub(super) fn decode_list<D, T>(entity: &str, body: &[u8]) -> Result<Vec<T>, GatewayError>
where
    D: DeserializeOwned,
    T: TryFrom<D>,
    T::Error: Display,
{
    let Value::Array(items) = parse_json(entity, body)? else {
        return Err(GatewayError::validation_failed(
            entity,
            "expected a JSON array",
        ));
    };
    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match decode_element::<D, T>(item) {
            Ok(record) => Some(record),
            Err(cause) => {
                warn!(entity, index, %cause, "dropping invalid upstream record");
                None
            }
        })
        .collect();
    if records.len() < total {
        warn!(
            entity,
            kept = records.len(),
            dropped = total - records.len(),
            "upstream list partially invalid"
        );
    }
    Ok(records)
}

fn decode_element<D, T>(item: Value) -> Result<T, String>
where
    D: DeserializeOwned,
    T: TryFrom<D>,
    T::Error: Display,
{
    let dto: D = serde_json::from_value(item).map_err(|err| err.to_string())?;
    T::try_from(dto).map_err(|err| err.to_string())
}

fn parse_json(entity: &str, body: &[u8]) -> Result<Value, GatewayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|err| GatewayError::validation_failed(entity, format!("invalid JSON: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activity, Trip};
    use crate::outbound::upstream::dto::{ActivityDto, TripDto};
    use rstest::rstest;

    fn trip_json(id: &str) -> String {
        format!(
            r#"{{"id":"{id}","userOwnerId":"u1","title":"T{id}","destination":"Porto","startDate":"2025-05-01","endDate":"2025-05-03"}}"#
        )
    }

    #[rstest]
    fn list_drops_invalid_elements_in_order() {
        let body = format!(
            "[{},{{\"id\":\"bad\"}},{},42,{}]",
            trip_json("1"),
            trip_json("2"),
            trip_json("3")
        );
        let trips: Vec<Trip> =
            decode_list::<TripDto, Trip>("trip", body.as_bytes()).expect("list");
        let ids: Vec<_> = trips.iter().filter_map(|trip| trip.id.as_deref()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[rstest]
    fn list_applies_domain_rules() {
        let body = br#"[
            {"tripId":"t1","name":"Museu","cost":10},
            {"tripId":"t1","name":"Barco","cost":-5}
        ]"#;
        let activities = decode_list::<ActivityDto, Activity>("activity", body).expect("list");
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name(), "Museu");
    }

    #[rstest]
    #[case(br#"{"items":[]}"#.as_slice())]
    #[case(b"not json".as_slice())]
    fn non_array_list_is_a_validation_failure(#[case] body: &[u8]) {
        let err = decode_list::<TripDto, Trip>("trip", body).expect_err("failure");
        assert!(matches!(err, GatewayError::ValidationFailed { .. }));
    }

    #[rstest]
    fn single_record_is_all_or_nothing() {
        let err = decode_one::<TripDto, Trip>("trip", "/app/Trips/create", br#"{"id":"1"}"#)
            .expect_err("invalid");
        assert!(matches!(err, GatewayError::ValidationFailed { .. }));
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"null".as_slice())]
    fn empty_single_record_is_not_found(#[case] body: &[u8]) {
        let err = decode_one::<TripDto, Trip>("trip", "/app/Trips/create", body)
            .expect_err("missing");
        assert_eq!(err, GatewayError::not_found("trip", "/app/Trips/create"));
    }
}
