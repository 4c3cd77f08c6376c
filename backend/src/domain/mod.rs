//! Domain primitives, ports and services.
//!
//! Purpose: define the validated records exchanged with the upstream API, the
//! ports used to reach it, and the services that turn upstream results into
//! page data and action outcomes. Nothing here depends on actix or reqwest.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - UserProfile, Trip, Member, Activity: upstream records.
//! - BearerToken, SessionCredential: session credentials.
//! - ActionOutcome, FormState: results handed to the rendering layer.

pub mod activity;
pub mod auth;
pub mod error;
pub mod form;
pub mod member;
pub mod messages;
pub mod outcome;
pub mod ports;
pub mod session;
pub mod session_service;
pub mod trace_id;
pub mod trip;
pub mod trip_query_service;
pub mod upstream_error;
pub mod user;
pub mod validation;

pub use self::activity::{Activity, NewActivity};
pub use self::auth::{InviteAcceptance, ProfilePictureUpdate, Registration, SignInCredentials};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::form::{FieldErrors, FormState};
pub use self::member::{Member, NewMember};
pub use self::outcome::{ActionOutcome, FailureKind};
pub use self::session::{
    ACCESS_TOKEN_COOKIE, AccessTokenGrant, BearerToken, SessionCredential, SignInRejection,
};
pub use self::session_service::{SessionService, SignInError, SignedIn};
pub use self::trace_id::TraceId;
pub use self::trip::{NewTrip, Trip, TripDetail};
pub use self::trip_query_service::TripQueryService;
pub use self::upstream_error::{FieldMessages, UpstreamErrorBody};
pub use self::user::UserProfile;
pub use self::validation::{RecordValidationError, is_valid_email};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use tripfront::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such trip"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
