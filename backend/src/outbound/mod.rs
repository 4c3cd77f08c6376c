//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **upstream**: the remote travel API, which is the system of record for
//!   users, trips, members and activities.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod upstream;
