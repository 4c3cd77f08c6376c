//! OpenAPI schema definitions for generic response envelopes.
//!
//! [`crate::domain::ActionOutcome`] is generic over its payload, so its
//! document shape is registered here with an untyped `data` member.

use utoipa::ToSchema;

use crate::domain::FormState;

/// OpenAPI schema for [`crate::domain::ActionOutcome`].
///
/// Result of a form action. `form` echoes the submitted values (never
/// passwords) with per-field messages.
#[derive(ToSchema)]
#[schema(as = ActionOutcome)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ActionOutcomeSchema {
    /// Whether upstream accepted the action.
    success: bool,
    /// Action payload, such as the created trip.
    data: Option<serde_json::Value>,
    /// User-facing message.
    #[schema(example = "Viagem criada com sucesso!")]
    message: Option<String>,
    form: Option<FormState>,
}
