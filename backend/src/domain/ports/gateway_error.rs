//! Failure taxonomy shared by every upstream gateway port.

use super::define_port_error;
use crate::domain::UpstreamErrorBody;

define_port_error! {
    /// Errors surfaced by the session pipeline before a result reaches a handler.
    pub enum GatewayError {
        /// No session credential was available, so upstream was not called.
        Unauthenticated => "no session credential present",
        /// The request failed at the transport level.
        Unreachable { message: String } =>
            "upstream unreachable: {message}",
        /// The request exceeded its deadline.
        Timeout { message: String } =>
            "upstream timed out: {message}",
        /// Upstream answered with a non-2xx status.
        Rejected { status: u16, body: UpstreamErrorBody } =>
            "upstream rejected request with status {status}",
        /// A payload did not match the declared schema.
        ValidationFailed { entity: String, cause: String } =>
            "{entity} failed validation: {cause}",
        /// The entity is absent from the upstream collection.
        NotFound { entity: String, id: String } =>
            "{entity} {id} not found",
    }
}

impl GatewayError {
    /// Transport-level failures are the only ones worth another attempt.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Unreachable { .. } | Self::Timeout { .. })
    }

    /// Upstream status for rejected calls.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GatewayError::unreachable("connection refused"), true)]
    #[case(GatewayError::timeout("10s elapsed"), true)]
    #[case(GatewayError::rejected(500_u16, UpstreamErrorBody::Unrecognized), false)]
    #[case(GatewayError::validation_failed("trip", "missing title"), false)]
    #[case(GatewayError::unauthenticated(), false)]
    fn classifies_transport_failures(#[case] error: GatewayError, #[case] expected: bool) {
        assert_eq!(error.is_transport(), expected);
    }

    #[rstest]
    fn rejected_exposes_status() {
        let error = GatewayError::rejected(404_u16, UpstreamErrorBody::Message("not found".into()));
        assert_eq!(error.status(), Some(404));
        assert_eq!(
            error.to_string(),
            "upstream rejected request with status 404"
        );
    }
}
