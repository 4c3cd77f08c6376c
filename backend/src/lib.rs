//! Trip-planning front end.
//!
//! Validates the browser session against the upstream travel API, runs form
//! actions on the user's behalf and returns page data and action outcomes as
//! JSON for the rendering layer.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
