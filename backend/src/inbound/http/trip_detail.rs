//! Trip detail page with member and activity actions.
//!
//! ```text
//! GET  /home/trips/{id}
//! POST /home/trips/{id}/members          name=..&email=..
//! POST /home/trips/{id}/members/invite
//! POST /home/trips/{id}/members/remove   memberId=..
//! POST /home/trips/{id}/activities       name=..&cost=..[&tripId=..&description=..]
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::messages::{ADD_MEMBER, CREATE_ACTIVITY, INVITE_MEMBERS, REMOVE_MEMBER};
use crate::domain::{ActionOutcome, ApiResult, FormState, TripDetail, UserProfile};
use crate::inbound::http::action::{action_response, unauthenticated};
use crate::inbound::http::forms::{
    AddMemberForm, CreateActivityForm, RemoveMemberForm, initial_form, prefilled_form,
    validate_form,
};
use crate::inbound::http::pages::{request_target, sign_in_then};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::middleware::CurrentUser;

/// Page data for `GET /home/trips/{id}`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPage {
    pub user: UserProfile,
    #[serde(flatten)]
    pub detail: TripDetail,
    pub add_member: FormState,
    pub remove_member: FormState,
    pub create_activity: FormState,
}

/// Trip with its members and activities, fetched concurrently.
#[utoipa::path(
    get,
    path = "/home/trips/{id}",
    params(("id" = String, Path, description = "Upstream trip identifier")),
    responses(
        (status = 200, description = "Trip detail", body = TripPage),
        (status = 302, description = "Anonymous; redirect to sign-in"),
        (status = 404, description = "Trip not found", body = crate::domain::Error),
        (status = 502, description = "Upstream failed", body = crate::domain::Error),
        (status = 503, description = "Upstream unreachable", body = crate::domain::Error)
    ),
    tags = ["trips"],
    operation_id = "tripDetail"
)]
#[get("/home/trips/{id}")]
pub async fn trip_page(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    user: CurrentUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let (Some(profile), Some(token)) = (user.profile(), session.token()) else {
        return Ok(sign_in_then(&request_target(&req)));
    };
    let trip_id = path.into_inner();
    let detail = state.trip_queries.detail(token, &trip_id).await?;
    let activity_form = CreateActivityForm::default().with_default_trip(&trip_id);
    Ok(HttpResponse::Ok().json(TripPage {
        user: profile.clone(),
        detail,
        add_member: initial_form::<AddMemberForm>(),
        remove_member: initial_form::<RemoveMemberForm>(),
        create_activity: prefilled_form(&activity_form),
    }))
}

#[utoipa::path(
    post,
    path = "/home/trips/{id}/members",
    params(("id" = String, Path, description = "Upstream trip identifier")),
    request_body(content = AddMemberForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Member added", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 400, description = "Invalid form", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Not signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 503, description = "Upstream unreachable", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["trips"],
    operation_id = "addMember"
)]
#[post("/home/trips/{id}/members")]
pub async fn add_member(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<AddMemberForm>,
) -> HttpResponse {
    let (draft, form) = match validate_form(&form.into_inner()) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<()>::invalid_form(form)),
    };
    let Some(token) = session.token() else {
        return action_response(unauthenticated::<()>(Some(form)));
    };
    let trip_id = path.into_inner();
    let outcome = match state.members.add_member(token, &draft.for_trip(&trip_id)).await {
        Ok(()) => {
            info!(trip_id = %trip_id, "member added");
            ActionOutcome::succeeded(None, ADD_MEMBER.success, Some(form))
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, ADD_MEMBER, Some(form)),
    };
    action_response::<()>(outcome)
}

/// Ask upstream to email invitations to every pending member.
#[utoipa::path(
    post,
    path = "/home/trips/{id}/members/invite",
    params(("id" = String, Path, description = "Upstream trip identifier")),
    responses(
        (status = 200, description = "Invitations sent", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Not signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 503, description = "Upstream unreachable", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["trips"],
    operation_id = "inviteMembers"
)]
#[post("/home/trips/{id}/members/invite")]
pub async fn invite_members(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResponse {
    let Some(token) = session.token() else {
        return action_response(unauthenticated::<()>(None));
    };
    let trip_id = path.into_inner();
    let outcome = match state.members.invite_members(token, &trip_id).await {
        Ok(()) => {
            info!(trip_id = %trip_id, "invitations sent");
            ActionOutcome::succeeded(None, INVITE_MEMBERS.success, None)
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, INVITE_MEMBERS, None),
    };
    action_response::<()>(outcome)
}

#[utoipa::path(
    post,
    path = "/home/trips/{id}/members/remove",
    params(("id" = String, Path, description = "Upstream trip identifier")),
    request_body(content = RemoveMemberForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Member removed", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 400, description = "Invalid form", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Not signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 404, description = "Member not found upstream", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["trips"],
    operation_id = "removeMember"
)]
#[post("/home/trips/{id}/members/remove")]
pub async fn remove_member(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<RemoveMemberForm>,
) -> HttpResponse {
    let (member_id, form) = match validate_form(&form.into_inner()) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<()>::invalid_form(form)),
    };
    let Some(token) = session.token() else {
        return action_response(unauthenticated::<()>(Some(form)));
    };
    let outcome = match state.members.remove_member(token, &member_id).await {
        Ok(()) => {
            info!(trip_id = %path.as_str(), member_id = %member_id, "member removed");
            ActionOutcome::succeeded(None, REMOVE_MEMBER.success, Some(form))
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, REMOVE_MEMBER, Some(form)),
    };
    action_response::<()>(outcome)
}

/// Create an activity; a blank `tripId` defaults to the trip in the path.
#[utoipa::path(
    post,
    path = "/home/trips/{id}/activities",
    params(("id" = String, Path, description = "Upstream trip identifier")),
    request_body(content = CreateActivityForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Activity created", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 400, description = "Invalid form", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Not signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 503, description = "Upstream unreachable", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["trips"],
    operation_id = "createActivity"
)]
#[post("/home/trips/{id}/activities")]
pub async fn create_activity(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    form: web::Form<CreateActivityForm>,
) -> HttpResponse {
    let input = form.into_inner().with_default_trip(path.as_str());
    let (activity, form) = match validate_form(&input) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<()>::invalid_form(form)),
    };
    let Some(token) = session.token() else {
        return action_response(unauthenticated::<()>(Some(form)));
    };
    let outcome = match state.activities.create_activity(token, &activity).await {
        Ok(()) => {
            info!(trip_id = %activity.trip_id, "activity created");
            ActionOutcome::succeeded(None, CREATE_ACTIVITY.success, Some(form))
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, CREATE_ACTIVITY, Some(form)),
    };
    action_response::<()>(outcome)
}
