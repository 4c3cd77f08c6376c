//! Authentication page and its actions.
//!
//! ```text
//! GET  /auth?method=sign-in|sign-up
//! POST /auth/sign-in   email=..&password=..
//! POST /auth/sign-up   name=..&email=..&password=..&confirmPassword=..
//! POST /auth/sign-out
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::domain::messages::{self, SIGN_IN, SIGN_UP};
use crate::domain::{ActionOutcome, FormState, SignedIn};
use crate::inbound::http::action::{action_response, outcome_builder};
use crate::inbound::http::forms::{SignInForm, SignUpForm, initial_form, validate_form};
use crate::inbound::http::pages::{HOME_PATH, redirect};
use crate::inbound::http::session::{cleared_session_cookie, session_cookie};
use crate::inbound::http::state::HttpState;
use crate::middleware::CurrentUser;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthQuery {
    /// Which form the page opens on (`sign-in` or `sign-up`).
    pub method: Option<String>,
    /// Path to return to after signing in.
    pub next: Option<String>,
}

/// Page data for `GET /auth`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthPage {
    #[schema(example = "sign-in")]
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub sign_in: FormState,
    pub sign_up: FormState,
}

#[utoipa::path(
    get,
    path = "/auth",
    params(AuthQuery),
    responses(
        (status = 200, description = "Blank sign-in and sign-up forms", body = AuthPage),
        (status = 302, description = "Already signed in; redirect to /home")
    ),
    tags = ["auth"],
    operation_id = "authPage",
    security([])
)]
#[get("/auth")]
pub async fn auth_page(user: CurrentUser, query: web::Query<AuthQuery>) -> HttpResponse {
    if user.is_signed_in() {
        return redirect(HOME_PATH);
    }
    let AuthQuery { method, next } = query.into_inner();
    let method = match method.as_deref() {
        Some("sign-up") => "sign-up",
        _ => "sign-in",
    };
    HttpResponse::Ok().json(AuthPage {
        method: method.to_owned(),
        next,
        sign_in: initial_form::<SignInForm>(),
        sign_up: initial_form::<SignUpForm>(),
    })
}

/// Exchange credentials for a session cookie.
///
/// The cookie is only set when upstream issued a non-empty, unexpired token;
/// its max-age runs until the token's expiry.
#[utoipa::path(
    post,
    path = "/auth/sign-in",
    request_body(content = SignInForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Signed in", body = crate::inbound::http::schemas::ActionOutcomeSchema,
            headers(("Set-Cookie" = String, description = "accessToken session cookie"))),
        (status = 400, description = "Invalid form", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 401, description = "Credentials rejected", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 502, description = "Upstream answered with an unusable token", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 503, description = "Upstream unreachable", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["auth"],
    operation_id = "signIn",
    security([])
)]
#[post("/auth/sign-in")]
pub async fn sign_in(state: web::Data<HttpState>, form: web::Form<SignInForm>) -> HttpResponse {
    let (credentials, form) = match validate_form(&form.into_inner()) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<()>::invalid_form(form)),
    };
    match state.sessions.sign_in(&credentials).await {
        Ok(SignedIn {
            credential,
            max_age,
        }) => {
            info!(max_age_secs = max_age.num_seconds(), "user signed in");
            let outcome = ActionOutcome::<()>::succeeded(None, SIGN_IN.success, Some(form));
            outcome_builder(&outcome)
                .cookie(session_cookie(&credential, max_age, state.cookie_secure))
                .json(outcome)
        }
        Err(err) => action_response(err.into_outcome(SIGN_IN, form)),
    }
}

#[utoipa::path(
    post,
    path = "/auth/sign-up",
    request_body(content = SignUpForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Account created", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 400, description = "Invalid form or rejected by upstream", body = crate::inbound::http::schemas::ActionOutcomeSchema),
        (status = 503, description = "Upstream unreachable", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["auth"],
    operation_id = "signUp",
    security([])
)]
#[post("/auth/sign-up")]
pub async fn sign_up(state: web::Data<HttpState>, form: web::Form<SignUpForm>) -> HttpResponse {
    let (registration, form) = match validate_form(&form.into_inner()) {
        Ok(valid) => valid,
        Err(form) => return action_response(ActionOutcome::<()>::invalid_form(form)),
    };
    let outcome = match state.accounts.register(&registration).await {
        Ok(()) => {
            info!("account registered");
            ActionOutcome::succeeded(None, SIGN_UP.success, Some(form))
        }
        Err(err) => ActionOutcome::from_gateway_error(&err, SIGN_UP, Some(form)),
    };
    action_response::<()>(outcome)
}

/// Discard the session cookie.
#[utoipa::path(
    post,
    path = "/auth/sign-out",
    responses(
        (status = 200, description = "Session cookie cleared", body = crate::inbound::http::schemas::ActionOutcomeSchema)
    ),
    tags = ["auth"],
    operation_id = "signOut"
)]
#[post("/auth/sign-out")]
pub async fn sign_out(state: web::Data<HttpState>) -> HttpResponse {
    let outcome = ActionOutcome::<()>::succeeded(None, messages::SIGN_OUT_SUCCESS, None);
    outcome_builder(&outcome)
        .cookie(cleared_session_cookie(state.cookie_secure))
        .json(outcome)
}
