//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::action::form_config;
use crate::inbound::http::auth::{auth_page, sign_in, sign_out, sign_up};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::home::{create_trip, home_page, remove_trip};
use crate::inbound::http::invites::{accept_invite, invite_page};
use crate::inbound::http::landing::landing;
use crate::inbound::http::profile::{profile_page, update_profile};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::trip_detail::{
    add_member, create_activity, invite_members, remove_member, trip_page,
};
use crate::middleware::{CurrentUserHook, Trace};
use crate::outbound::upstream::{HttpTravelApi, UpstreamClient};

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Assemble the application: middleware, page routes, probes and docs.
///
/// Invitation routes are registered ahead of `/home/trips/{id}` so `accept`
/// is never captured as a trip identifier.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(form_config())
        .wrap(CurrentUserHook)
        .wrap(Trace)
        .service(landing)
        .service(auth_page)
        .service(sign_in)
        .service(sign_up)
        .service(sign_out)
        .service(home_page)
        .service(create_trip)
        .service(remove_trip)
        .service(invite_page)
        .service(accept_invite)
        .service(trip_page)
        .service(add_member)
        .service(invite_members)
        .service(remove_member)
        .service(create_activity)
        .service(profile_page)
        .service(update_profile)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Build handler state backed by the upstream travel API.
///
/// # Errors
/// Returns [`std::io::Error`] when the HTTP client cannot be constructed.
pub fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let client = UpstreamClient::new(
        config.api_url.clone(),
        config.upstream_timeout,
        config.upstream_retries,
    )
    .map_err(|e| std::io::Error::other(format!("upstream client construction failed: {e}")))?;
    let api = Arc::new(HttpTravelApi::new(client));
    Ok(web::Data::new(HttpState::new(
        HttpStatePorts {
            accounts: api.clone(),
            trips: api.clone(),
            members: api.clone(),
            activities: api,
        },
        Arc::new(DefaultClock),
        config.cookie_secure,
    )))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] with binding, upstream and cookie settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when building the upstream client, binding the
/// socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config)?;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    info!(
        bind_addr = %config.bind_addr,
        upstream = %config.api_url,
        "server listening"
    );
    health_state.mark_ready();
    Ok(server)
}
