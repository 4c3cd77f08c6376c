//! HTTP mapping for form action outcomes.
//!
//! Every `POST` page action answers with an [`ActionOutcome`] body. The status
//! code mirrors the failure kind so non-browser clients can branch on it.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder, web};
use serde::Serialize;
use tracing::debug;

use crate::domain::{ActionOutcome, Error, FailureKind, FormState, messages};

/// Status code reported for an outcome.
///
/// Upstream client errors are passed through; any other upstream status is a
/// bad gateway.
pub fn status_for<T>(outcome: &ActionOutcome<T>) -> StatusCode {
    match outcome.failure() {
        None => StatusCode::OK,
        Some(FailureKind::InvalidForm) => StatusCode::BAD_REQUEST,
        Some(FailureKind::Unauthenticated) => StatusCode::UNAUTHORIZED,
        Some(FailureKind::Rejected { status }) => StatusCode::from_u16(status)
            .ok()
            .filter(StatusCode::is_client_error)
            .unwrap_or(StatusCode::BAD_GATEWAY),
        Some(FailureKind::Unreachable) => StatusCode::SERVICE_UNAVAILABLE,
        Some(FailureKind::InvalidRecord) => StatusCode::BAD_GATEWAY,
        Some(FailureKind::NotFound) => StatusCode::NOT_FOUND,
    }
}

/// Response builder with the outcome's status, for callers adding cookies.
pub fn outcome_builder<T>(outcome: &ActionOutcome<T>) -> HttpResponseBuilder {
    HttpResponse::build(status_for(outcome))
}

/// JSON response for an outcome.
pub fn action_response<T: Serialize>(outcome: ActionOutcome<T>) -> HttpResponse {
    outcome_builder(&outcome).json(outcome)
}

/// Outcome for an action attempted without a session credential.
pub fn unauthenticated<T>(form: Option<FormState>) -> ActionOutcome<T> {
    debug!(
        form = form.as_ref().map_or("none", |state| state.id.as_str()),
        "action attempted without session"
    );
    ActionOutcome::failed(FailureKind::Unauthenticated, messages::TOKEN_MISSING, form)
}

/// Form extractor settings shared by every action.
///
/// Undecodable bodies become a structured `400` instead of actix's plain text.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "form body rejected");
        Error::invalid_request(messages::INVALID_FORM).into()
    })
}
