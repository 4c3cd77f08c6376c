//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! tracing and authentication.

pub mod current_user;
pub mod trace;

pub use current_user::{CurrentUser, CurrentUserHook};
pub use trace::Trace;
