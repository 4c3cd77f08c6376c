//! Driven port for the upstream `Members` endpoints.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::{BearerToken, InviteAcceptance, Member, NewMember};

/// Membership operations delegated to the upstream API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberGateway: Send + Sync {
    /// `GET /app/Members/listMembers?tripId=`; invalid elements are dropped.
    async fn list_members(
        &self,
        token: &BearerToken,
        trip_id: &str,
    ) -> Result<Vec<Member>, GatewayError>;

    /// `POST /app/Members/create`.
    async fn add_member(&self, token: &BearerToken, member: &NewMember)
    -> Result<(), GatewayError>;

    /// `PATCH /app/Members/inviteMembers?tripId=`.
    async fn invite_members(&self, token: &BearerToken, trip_id: &str)
    -> Result<(), GatewayError>;

    /// `DELETE /app/Members/removeMember?memberId=`.
    async fn remove_member(&self, token: &BearerToken, member_id: &str)
    -> Result<(), GatewayError>;

    /// `GET /app/Members/acceptInvite?memberIdMagic=&tripIdMagic=`.
    async fn accept_invite(
        &self,
        token: &BearerToken,
        invite: &InviteAcceptance,
    ) -> Result<(), GatewayError>;
}
