//! Uniform result of a form action.
//!
//! Every action answers `{success, data?, message?, form?}`. Upstream failures
//! are folded into it here, so handlers never inspect gateway errors directly.

use serde::Serialize;
use tracing::{error, warn};

use super::FormState;
use super::messages::{self, ActionMessages};
use super::ports::GatewayError;

/// Why an action did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Submitted data broke a form rule; upstream was not called.
    InvalidForm,
    /// No session credential was present.
    Unauthenticated,
    /// Upstream answered with this non-2xx status.
    Rejected { status: u16 },
    /// Upstream could not be reached in time.
    Unreachable,
    /// Upstream answered with a record that failed validation.
    InvalidRecord,
    /// The target entity does not exist upstream.
    NotFound,
}

/// Result handed to the rendering layer after a form action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormState>,
    #[serde(skip)]
    failure: Option<FailureKind>,
}

impl<T> ActionOutcome<T> {
    /// Successful action carrying `data`.
    pub fn succeeded(data: Option<T>, message: &str, form: Option<FormState>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.to_owned()),
            form,
            failure: None,
        }
    }

    /// Form failed validation; upstream was never called.
    pub fn invalid_form(form: FormState) -> Self {
        Self::failed(FailureKind::InvalidForm, messages::INVALID_FORM, Some(form))
    }

    /// Action failed for `kind` with a user-facing `message`.
    pub fn failed(kind: FailureKind, message: impl Into<String>, form: Option<FormState>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            form,
            failure: Some(kind),
        }
    }

    /// Fold a gateway failure into an outcome.
    ///
    /// Rejections use the upstream payload message when it has one (field
    /// errors, then `message`, then `title`) and `texts.rejected` otherwise.
    pub fn from_gateway_error(
        err: &GatewayError,
        texts: ActionMessages,
        form: Option<FormState>,
    ) -> Self {
        let (kind, message) = match err {
            GatewayError::Unauthenticated => {
                (FailureKind::Unauthenticated, messages::TOKEN_MISSING.to_owned())
            }
            GatewayError::Unreachable { .. } | GatewayError::Timeout { .. } => {
                error!(error = %err, "upstream call failed");
                (FailureKind::Unreachable, texts.failed.to_owned())
            }
            GatewayError::Rejected { status, body } => {
                warn!(status, "upstream rejected action");
                (
                    FailureKind::Rejected { status: *status },
                    body.message_or(texts.rejected),
                )
            }
            GatewayError::ValidationFailed { .. } => {
                warn!(error = %err, "upstream answered with an invalid record");
                (FailureKind::InvalidRecord, texts.failed.to_owned())
            }
            GatewayError::NotFound { .. } => (FailureKind::NotFound, texts.rejected.to_owned()),
        };
        Self::failed(kind, message, form)
    }

    /// Failure kind, or `None` for a successful action.
    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UpstreamErrorBody;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn field_errors_take_priority() {
        let body = UpstreamErrorBody::from_value(&json!({
            "errors": { "email": ["invalid"], "password": ["too short"] },
            "message": "ignored",
        }));
        let outcome: ActionOutcome<()> =
            ActionOutcome::from_gateway_error(&GatewayError::rejected(400_u16, body), messages::SIGN_IN, None);
        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("invalid, too short"));
        assert_eq!(outcome.failure(), Some(FailureKind::Rejected { status: 400 }));
    }

    #[rstest]
    fn unrecognised_rejection_uses_fallback() {
        let outcome: ActionOutcome<()> = ActionOutcome::from_gateway_error(
            &GatewayError::rejected(500_u16, UpstreamErrorBody::Unrecognized),
            messages::CREATE_TRIP,
            None,
        );
        assert_eq!(outcome.message.as_deref(), Some(messages::CREATE_TRIP.rejected));
    }

    #[rstest]
    #[case(GatewayError::unreachable("refused"), FailureKind::Unreachable)]
    #[case(GatewayError::timeout("elapsed"), FailureKind::Unreachable)]
    #[case(GatewayError::validation_failed("trip", "bad"), FailureKind::InvalidRecord)]
    fn transport_and_record_failures_use_failed_text(
        #[case] err: GatewayError,
        #[case] kind: FailureKind,
    ) {
        let outcome: ActionOutcome<()> =
            ActionOutcome::from_gateway_error(&err, messages::REMOVE_TRIP, None);
        assert_eq!(outcome.failure(), Some(kind));
        assert_eq!(outcome.message.as_deref(), Some(messages::REMOVE_TRIP.failed));
    }

    #[rstest]
    fn unauthenticated_reports_missing_token() {
        let outcome: ActionOutcome<()> = ActionOutcome::from_gateway_error(
            &GatewayError::unauthenticated(),
            messages::CREATE_ACTIVITY,
            None,
        );
        assert_eq!(outcome.message.as_deref(), Some(messages::TOKEN_MISSING));
        assert_eq!(outcome.failure(), Some(FailureKind::Unauthenticated));
    }

    #[rstest]
    fn serialises_without_failure_kind() {
        let outcome = ActionOutcome::succeeded(Some(7), messages::SIGN_IN.success, None);
        let value = serde_json::to_value(&outcome).expect("serialise");
        assert_eq!(
            value,
            json!({ "success": true, "data": 7, "message": "Login realizado com sucesso!" })
        );
    }
}
