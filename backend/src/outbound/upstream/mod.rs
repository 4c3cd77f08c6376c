//! Upstream travel API adapters.
//!
//! A thin reqwest implementation of every gateway port. Responses are
//! validated against the record schemas before they reach the domain.

mod client;
mod decode;
mod dto;
mod gateways;

pub use client::{MAX_RETRIES, UpstreamClient};
pub use gateways::HttpTravelApi;
