//! HTTP inbound adapter: page data on `GET`, form actions on `POST`.

pub mod action;
pub mod auth;
pub mod error;
pub mod forms;
pub mod health;
pub mod home;
pub mod invites;
pub mod landing;
pub mod pages;
pub mod profile;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod trip_detail;
