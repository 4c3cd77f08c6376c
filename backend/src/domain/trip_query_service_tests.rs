//! Tests for the trip query service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockActivityGateway, MockMemberGateway, MockTripGateway};
use crate::test_support::{sample_activity, sample_member, sample_trip};

#[fixture]
fn token() -> BearerToken {
    BearerToken::new("abc").expect("token")
}

fn make_service(
    trips: MockTripGateway,
    members: MockMemberGateway,
    activities: MockActivityGateway,
) -> TripQueryService {
    TripQueryService::new(Arc::new(trips), Arc::new(members), Arc::new(activities))
}

#[rstest]
#[tokio::test]
async fn detail_joins_all_three_fetches(token: BearerToken) {
    let mut trips = MockTripGateway::new();
    trips
        .expect_list_trips()
        .times(1)
        .return_once(|_| Ok(vec![sample_trip("1"), sample_trip("2")]));
    let mut members = MockMemberGateway::new();
    members
        .expect_list_members()
        .withf(|_, trip_id| trip_id == "2")
        .times(1)
        .return_once(|_, _| Ok(vec![sample_member("m1", "2")]));
    let mut activities = MockActivityGateway::new();
    activities
        .expect_list_activities()
        .times(1)
        .return_once(|_, _| Ok(vec![sample_activity("2")]));

    let detail = make_service(trips, members, activities)
        .detail(&token, "2")
        .await
        .expect("detail");

    assert_eq!(detail.trip, sample_trip("2"));
    assert_eq!(detail.members.len(), 1);
    assert_eq!(detail.activities.len(), 1);
}

#[rstest]
#[tokio::test]
async fn absent_trip_is_not_found(token: BearerToken) {
    let mut trips = MockTripGateway::new();
    trips
        .expect_list_trips()
        .return_once(|_| Ok(vec![sample_trip("1")]));
    let mut members = MockMemberGateway::new();
    members.expect_list_members().return_once(|_, _| Ok(Vec::new()));
    let mut activities = MockActivityGateway::new();
    activities
        .expect_list_activities()
        .return_once(|_, _| Ok(Vec::new()));

    let err = make_service(trips, members, activities)
        .detail(&token, "404")
        .await
        .expect_err("missing trip");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(
        err.details(),
        Some(&serde_json::json!({ "tripId": "404" }))
    );
}

#[rstest]
#[tokio::test]
async fn secondary_failures_degrade_to_empty_lists(token: BearerToken) {
    let mut trips = MockTripGateway::new();
    trips
        .expect_list_trips()
        .return_once(|_| Ok(vec![sample_trip("1")]));
    let mut members = MockMemberGateway::new();
    members
        .expect_list_members()
        .return_once(|_, _| Err(GatewayError::timeout("deadline elapsed")));
    let mut activities = MockActivityGateway::new();
    activities
        .expect_list_activities()
        .return_once(|_, _| Err(GatewayError::validation_failed("activities", "not an array")));

    let detail = make_service(trips, members, activities)
        .detail(&token, "1")
        .await
        .expect("detail");

    assert!(detail.members.is_empty());
    assert!(detail.activities.is_empty());
}

#[rstest]
#[case(GatewayError::unreachable("refused"), ErrorCode::ServiceUnavailable)]
#[case(GatewayError::rejected(401_u16, crate::domain::UpstreamErrorBody::Unrecognized), ErrorCode::Unauthorized)]
#[case(GatewayError::rejected(500_u16, crate::domain::UpstreamErrorBody::Unrecognized), ErrorCode::BadGateway)]
#[tokio::test]
async fn trip_list_failure_is_structured(
    token: BearerToken,
    #[case] failure: GatewayError,
    #[case] expected: ErrorCode,
) {
    let mut trips = MockTripGateway::new();
    trips.expect_list_trips().return_once(move |_| Err(failure));
    let mut members = MockMemberGateway::new();
    members.expect_list_members().return_once(|_, _| Ok(Vec::new()));
    let mut activities = MockActivityGateway::new();
    activities
        .expect_list_activities()
        .return_once(|_, _| Ok(Vec::new()));

    let err = make_service(trips, members, activities)
        .detail(&token, "1")
        .await
        .expect_err("failure");

    assert_eq!(err.code(), expected);
}

#[rstest]
#[tokio::test]
async fn home_list_degrades_to_empty(token: BearerToken) {
    let mut trips = MockTripGateway::new();
    trips
        .expect_list_trips()
        .return_once(|_| Err(GatewayError::unreachable("refused")));

    let listed = make_service(trips, MockMemberGateway::new(), MockActivityGateway::new())
        .trips_or_empty(&token)
        .await;

    assert!(listed.is_empty());
}
