//! Profile page and picture update.
//!
//! ```text
//! GET  /home/{name}/me
//! POST /home/{name}/me   image=..
//! ```
//!
//! `{name}` only shapes the URL; the profile shown is always the session's.

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::messages::UPDATE_PROFILE;
use crate::domain::{ActionOutcome, FormState, UserProfile};
use crate::inbound::http::action::{action_response, unauthenticated};
use crate::inbound::http::forms::{UpdateProfileForm, prefilled_form, validate_form};
use crate::inbound::http::pages::{SIGN_IN_PATH, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::middleware::CurrentUser;

/// Page data for `GET /home/{name}/me`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePage {
    pub user: UserProfile,
    pub update_profile: FormState,
}

#[utoipa::path(
    get,
    path = "/home/{name}/me",
    params(("name" = String, Path, description = "Display name used in the URL")),
    responses(
        (status = 200, description = "Signed-in profile", body = ProfilePage),
        (status = 302, description = "Anonymous; redirect to sign-in")
    ),
    tags = ["profile"],
    operation_id = "profilePage"
)]
#[get("/home/{name}/me")]
pub async fn profile_page(user: CurrentUser) -> HttpResponse {
    let Some(profile) = user.profile() else {
        return redirect(SIGN_IN_PATH);
    };
    let form = UpdateProfileForm {
        image: profile.image().unwrap_or_default().to_owned(),
    };
    HttpResponse::Ok().json(ProfilePage {
        user: profile.clone(),
        update_profile: prefilled_form(&form),
    })
}

/// Replace the profile picture; a blank `image` clears it.
#[utoipa::path(
    post,
    path = "/home/{name}/me",
    params(("name" = String, Path, description = "Display name used in the URL")),
    request_body(content = UpdateProfileForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Profile updated", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Not signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 503, description = "Upstream unreachable", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["profile"],
    operation_id = "updateProfile"
)]
#[post("/home/{name}/me")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<UpdateProfileForm>,
) -> HttpResponse {
    let (update, form) = match validate_form(&form.into_inner()) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<()>::invalid_form(form)),
    };
    let Some(token) = session.token() else {
        return action_response(unauthenticated::<()>(Some(form)));
    };
    let outcome = match state.accounts.update_profile_picture(token, &update).await {
        Ok(()) => {
            info!(cleared = update.image.is_none(), "profile picture updated");
            ActionOutcome::succeeded(None, UPDATE_PROFILE.success, Some(form))
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, UPDATE_PROFILE, Some(form)),
    };
    action_response::<()>(outcome)
}
