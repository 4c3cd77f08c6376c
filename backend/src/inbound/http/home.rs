//! Signed-in home page: the user's trips and the trip list actions.
//!
//! ```text
//! GET  /home
//! POST /home/trips          title=..&destination=..&startDate=..&endDate=..
//! POST /home/trips/remove   id=..
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::messages::{CREATE_TRIP, NOT_SIGNED_IN, REMOVE_TRIP};
use crate::domain::{ActionOutcome, FailureKind, FormState, Trip, UserProfile};
use crate::inbound::http::action::{action_response, unauthenticated};
use crate::inbound::http::forms::{CreateTripForm, RemoveTripForm, initial_form, validate_form};
use crate::inbound::http::pages::{SIGN_IN_PATH, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::middleware::CurrentUser;

/// Page data for `GET /home`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub user: UserProfile,
    /// Trips that passed validation; empty when upstream failed.
    pub trips: Vec<Trip>,
    pub create_trip: FormState,
    pub delete_trip: FormState,
}

#[utoipa::path(
    get,
    path = "/home",
    responses(
        (status = 200, description = "User and trip list", body = HomePage),
        (status = 302, description = "Anonymous; redirect to sign-in")
    ),
    tags = ["home"],
    operation_id = "homePage"
)]
#[get("/home")]
pub async fn home_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    user: CurrentUser,
) -> HttpResponse {
    let (Some(profile), Some(token)) = (user.profile(), session.token()) else {
        return redirect(SIGN_IN_PATH);
    };
    let trips = state.trip_queries.trips_or_empty(token).await;
    HttpResponse::Ok().json(HomePage {
        user: profile.clone(),
        trips,
        create_trip: initial_form::<CreateTripForm>(),
        delete_trip: initial_form::<RemoveTripForm>(),
    })
}

/// Create a trip owned by the signed-in user.
///
/// The trip echoed by upstream must pass the same checks as list entries.
#[utoipa::path(
    post,
    path = "/home/trips",
    request_body(content = CreateTripForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Trip created", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 400, description = "Invalid form", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Not signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 502, description = "Upstream echoed an invalid trip", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 503, description = "Upstream unreachable", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["home"],
    operation_id = "createTrip"
)]
#[post("/home/trips")]
pub async fn create_trip(
    state: web::Data<HttpState>,
    session: SessionContext,
    user: CurrentUser,
    form: web::Form<CreateTripForm>,
) -> HttpResponse {
    let (draft, form) = match validate_form(&form.into_inner()) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<Trip>::invalid_form(form)),
    };
    let Some(token) = session.token() else {
        return action_response(unauthenticated::<Trip>(Some(form)));
    };
    let Some(owner) = user.profile() else {
        return action_response(ActionOutcome::<Trip>::failed(
            FailureKind::Unauthenticated,
            NOT_SIGNED_IN,
            Some(form),
        ));
    };
    let outcome = match state.trips.create_trip(token, &draft.owned_by(owner)).await {
        Ok(trip) => {
            info!(trip_id = trip.id.as_deref().unwrap_or_default(), "trip created");
            ActionOutcome::succeeded(Some(trip), CREATE_TRIP.success, Some(form))
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, CREATE_TRIP, Some(form)),
    };
    action_response(outcome)
}

#[utoipa::path(
    post,
    path = "/home/trips/remove",
    request_body(content = RemoveTripForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Trip removed", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 400, description = "Invalid form", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Not signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 404, description = "Trip not found upstream", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["home"],
    operation_id = "removeTrip"
)]
#[post("/home/trips/remove")]
pub async fn remove_trip(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<RemoveTripForm>,
) -> HttpResponse {
    let (trip_id, form) = match validate_form(&form.into_inner()) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<()>::invalid_form(form)),
    };
    let Some(token) = session.token() else {
        return action_response(unauthenticated::<()>(Some(form)));
    };
    let outcome = match state.trips.delete_trip(token, &trip_id).await {
        Ok(()) => {
            info!(trip_id = %trip_id, "trip removed");
            ActionOutcome::succeeded(None, REMOVE_TRIP.success, Some(form))
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, REMOVE_TRIP, Some(form)),
    };
    action_response::<()>(outcome)
}
