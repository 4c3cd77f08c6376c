//! Driven port for the upstream `Users` endpoints.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::{
    AccessTokenGrant, BearerToken, ProfilePictureUpdate, Registration, SignInCredentials,
    UserProfile,
};

/// Account operations delegated to the upstream API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// `POST /app/Users/login`; the grant is schema-validated but its token
    /// may still be empty.
    async fn sign_in(&self, credentials: &SignInCredentials)
    -> Result<AccessTokenGrant, GatewayError>;

    /// `POST /app/Users/register`.
    async fn register(&self, registration: &Registration) -> Result<(), GatewayError>;

    /// `GET /app/Users/profile`; an invalid payload is a validation failure.
    async fn profile(&self, token: &BearerToken) -> Result<UserProfile, GatewayError>;

    /// `PUT /app/Users/updateProfilePicture`.
    async fn update_profile_picture(
        &self,
        token: &BearerToken,
        update: &ProfilePictureUpdate,
    ) -> Result<(), GatewayError>;
}
