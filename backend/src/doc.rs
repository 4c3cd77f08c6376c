//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the front-end HTTP surface. It registers:
//!
//! - **Paths**: page data and form action endpoints plus health probes
//! - **Schemas**: the generic action outcome envelope ([`ActionOutcomeSchema`])
//!   alongside the page and record types
//! - **Security**: the `accessToken` session cookie
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::domain::{
    Activity, Error, ErrorCode, FieldErrors, FormState, Member, Trip, TripDetail, UserProfile,
};
use crate::inbound::http::auth::AuthPage;
use crate::inbound::http::forms::{
    AcceptInviteForm, AddMemberForm, CreateActivityForm, CreateTripForm, RemoveMemberForm,
    RemoveTripForm, SignInForm, SignUpForm, UpdateProfileForm,
};
use crate::inbound::http::home::HomePage;
use crate::inbound::http::invites::InvitePage;
use crate::inbound::http::landing::LandingPage;
use crate::inbound::http::profile::ProfilePage;
use crate::inbound::http::schemas::ActionOutcomeSchema;
use crate::inbound::http::trip_detail::TripPage;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "accessToken",
                "Upstream bearer token issued by POST /auth/sign-in.",
            ))),
        );
    }
}

/// OpenAPI document for the front-end HTTP surface.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Trip planner front end",
        description = "Page data and form actions proxied to the upstream travel API.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::landing::landing,
        crate::inbound::http::auth::auth_page,
        crate::inbound::http::auth::sign_in,
        crate::inbound::http::auth::sign_up,
        crate::inbound::http::auth::sign_out,
        crate::inbound::http::home::home_page,
        crate::inbound::http::home::create_trip,
        crate::inbound::http::home::remove_trip,
        crate::inbound::http::invites::invite_page,
        crate::inbound::http::invites::accept_invite,
        crate::inbound::http::trip_detail::trip_page,
        crate::inbound::http::trip_detail::add_member,
        crate::inbound::http::trip_detail::invite_members,
        crate::inbound::http::trip_detail::remove_member,
        crate::inbound::http::trip_detail::create_activity,
        crate::inbound::http::profile::profile_page,
        crate::inbound::http::profile::update_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ActionOutcomeSchema,
        Error,
        ErrorCode,
        FieldErrors,
        FormState,
        UserProfile,
        Trip,
        Member,
        Activity,
        TripDetail,
        LandingPage,
        AuthPage,
        HomePage,
        InvitePage,
        TripPage,
        ProfilePage,
        SignInForm,
        SignUpForm,
        CreateTripForm,
        RemoveTripForm,
        AddMemberForm,
        RemoveMemberForm,
        CreateActivityForm,
        AcceptInviteForm,
        UpdateProfileForm,
    )),
    tags(
        (name = "pages", description = "Public pages"),
        (name = "auth", description = "Sign-in, sign-up and sign-out"),
        (name = "home", description = "Trip list and trip actions"),
        (name = "invites", description = "Invitation links"),
        (name = "trips", description = "Trip detail, members and activities"),
        (name = "profile", description = "Profile page and picture"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn action_outcome_schema_has_envelope_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let outcome = schemas.get("ActionOutcome").expect("ActionOutcome schema");

        for field in ["success", "data", "message", "form"] {
            assert_object_schema_has_field(outcome, field);
        }
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "message");
    }

    #[test]
    fn page_routes_are_documented() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/auth/sign-in"));
        assert!(doc.paths.paths.contains_key("/home/trips/{id}"));
        assert!(doc.paths.paths.contains_key("/home/trips/accept"));
    }
}
