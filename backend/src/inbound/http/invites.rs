//! Invitation links sent to trip members.
//!
//! ```text
//! GET  /home/trips/accept?memberId=..&tripId=..
//! POST /home/trips/accept   memberId=..&tripId=..
//! ```
//!
//! Both routes must be registered before `/home/trips/{id}`.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};

use crate::domain::messages::ACCEPT_INVITE;
use crate::domain::{ActionOutcome, FormState};
use crate::inbound::http::action::{action_response, unauthenticated};
use crate::inbound::http::forms::{AcceptInviteForm, prefilled_form, validate_form};
use crate::inbound::http::pages::{HOME_PATH, redirect, request_target, sign_in_then};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::middleware::CurrentUser;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct InviteQuery {
    pub member_id: Option<String>,
    pub trip_id: Option<String>,
}

/// Page data for `GET /home/trips/accept`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvitePage {
    /// Accept form prefilled from the invitation link.
    pub accept_trip: FormState,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[utoipa::path(
    get,
    path = "/home/trips/accept",
    params(InviteQuery),
    responses(
        (status = 200, description = "Prefilled accept form", body = InvitePage),
        (status = 302, description = "Anonymous (redirect to sign-in) or link incomplete (redirect to /home)")
    ),
    tags = ["invites"],
    operation_id = "invitePage"
)]
#[get("/home/trips/accept")]
pub async fn invite_page(
    req: HttpRequest,
    user: CurrentUser,
    query: web::Query<InviteQuery>,
) -> HttpResponse {
    if !user.is_signed_in() {
        return sign_in_then(&request_target(&req));
    }
    let InviteQuery { member_id, trip_id } = query.into_inner();
    let (Some(member_id), Some(trip_id)) = (non_blank(member_id), non_blank(trip_id)) else {
        debug!("invitation link without member or trip; sending home");
        return redirect(HOME_PATH);
    };
    HttpResponse::Ok().json(InvitePage {
        accept_trip: prefilled_form(&AcceptInviteForm { member_id, trip_id }),
    })
}

#[utoipa::path(
    post,
    path = "/home/trips/accept",
    request_body(content = AcceptInviteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Invitation accepted", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 400, description = "Invalid form", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Not signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 503, description = "Upstream unreachable", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["invites"],
    operation_id = "acceptInvite"
)]
#[post("/home/trips/accept")]
pub async fn accept_invite(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<AcceptInviteForm>,
) -> HttpResponse {
    let (invite, form) = match validate_form(&form.into_inner()) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<()>::invalid_form(form)),
    };
    let Some(token) = session.token() else {
        return action_response(unauthenticated::<()>(Some(form)));
    };
    let outcome = match state.members.accept_invite(token, &invite).await {
        Ok(()) => {
            info!(trip_id = %invite.trip_id, member_id = %invite.member_id, "invite accepted");
            ActionOutcome::succeeded(None, ACCEPT_INVITE.success, Some(form))
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, ACCEPT_INVITE, Some(form)),
    };
    action_response::<()>(outcome)
}
