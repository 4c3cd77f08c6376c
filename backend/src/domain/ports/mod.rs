//! Domain ports for the hexagonal boundary.
//!
//! Every port here is *driven*: the domain calls out through it to the
//! upstream API, which is the system of record for users, trips, members and
//! activities.

mod macros;
pub(crate) use macros::define_port_error;

mod account_gateway;
mod activity_gateway;
mod gateway_error;
mod member_gateway;
mod trip_gateway;

pub use account_gateway::AccountGateway;
#[cfg(test)]
pub use account_gateway::MockAccountGateway;
pub use activity_gateway::ActivityGateway;
#[cfg(test)]
pub use activity_gateway::MockActivityGateway;
pub use gateway_error::GatewayError;
pub use member_gateway::MemberGateway;
#[cfg(test)]
pub use member_gateway::MockMemberGateway;
#[cfg(test)]
pub use trip_gateway::MockTripGateway;
pub use trip_gateway::TripGateway;
