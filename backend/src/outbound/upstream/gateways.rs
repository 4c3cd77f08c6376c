//! Port implementations backed by the upstream travel API.

use async_trait::async_trait;
use reqwest::Method;

use super::client::{UpstreamCall, UpstreamClient};
use super::decode::{decode_list, decode_one};
use super::dto::{
    AccessTokenDto, ActivityDto, CredentialsBody, MemberDto, ProfilePictureBody,
    RegistrationBody, TripDto, UserProfileDto,
};
use crate::domain::ports::{
    AccountGateway, ActivityGateway, GatewayError, MemberGateway, TripGateway,
};
use crate::domain::{
    AccessTokenGrant, Activity, BearerToken, InviteAcceptance, Member, NewActivity, NewMember,
    NewTrip, ProfilePictureUpdate, Registration, SignInCredentials, Trip, UserProfile,
};

const LOGIN: &str = "/app/Users/login";
const REGISTER: &str = "/app/Users/register";
const PROFILE: &str = "/app/Users/profile";
const UPDATE_PROFILE_PICTURE: &str = "/app/Users/updateProfilePicture";
const LIST_TRIPS: &str = "/app/Trips/listTrips";
const CREATE_TRIP: &str = "/app/Trips/create";
const DELETE_TRIP: &str = "/app/Trips/delete";
const LIST_MEMBERS: &str = "/app/Members/listMembers";
const CREATE_MEMBER: &str = "/app/Members/create";
const INVITE_MEMBERS: &str = "/app/Members/inviteMembers";
const REMOVE_MEMBER: &str = "/app/Members/removeMember";
const ACCEPT_INVITE: &str = "/app/Members/acceptInvite";
const LIST_ACTIVITIES: &str = "/app/Activities/listActivities";
const CREATE_ACTIVITY: &str = "/app/Activities/create";

/// Upstream travel API adapter implementing every gateway port.
#[derive(Debug, Clone)]
pub struct HttpTravelApi {
    client: UpstreamClient,
}

impl HttpTravelApi {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountGateway for HttpTravelApi {
    async fn sign_in(
        &self,
        credentials: &SignInCredentials,
    ) -> Result<AccessTokenGrant, GatewayError> {
        let call = UpstreamCall::new(Method::POST, LOGIN).json(&CredentialsBody {
            email: credentials.email(),
            password: credentials.password(),
        })?;
        let body = self.client.send(call).await?;
        decode_one::<AccessTokenDto, AccessTokenGrant>("access token", LOGIN, &body)
    }

    async fn register(&self, registration: &Registration) -> Result<(), GatewayError> {
        let call = UpstreamCall::new(Method::POST, REGISTER).json(&RegistrationBody {
            email: registration.email(),
            password: registration.password(),
            name: registration.name(),
        })?;
        self.client.send(call).await.map(drop)
    }

    async fn profile(&self, token: &BearerToken) -> Result<UserProfile, GatewayError> {
        let call = UpstreamCall::new(Method::GET, PROFILE).bearer(token);
        let body = self.client.send(call).await?;
        decode_one::<UserProfileDto, UserProfile>("user profile", PROFILE, &body)
    }

    async fn update_profile_picture(
        &self,
        token: &BearerToken,
        update: &ProfilePictureUpdate,
    ) -> Result<(), GatewayError> {
        let call = UpstreamCall::new(Method::PUT, UPDATE_PROFILE_PICTURE)
            .bearer(token)
            .json(&ProfilePictureBody::from(update))?;
        self.client.send(call).await.map(drop)
    }
}

#[async_trait]
impl TripGateway for HttpTravelApi {
    async fn list_trips(&self, token: &BearerToken) -> Result<Vec<Trip>, GatewayError> {
        let call = UpstreamCall::new(Method::GET, LIST_TRIPS).bearer(token);
        let body = self.client.send(call).await?;
        decode_list::<TripDto, Trip>("trip", &body)
    }

    async fn create_trip(&self, token: &BearerToken, trip: &NewTrip) -> Result<Trip, GatewayError> {
        let call = UpstreamCall::new(Method::POST, CREATE_TRIP)
            .bearer(token)
            .json(trip)?;
        let body = self.client.send(call).await?;
        decode_one::<TripDto, Trip>("trip", CREATE_TRIP, &body)
    }

    async fn delete_trip(&self, token: &BearerToken, trip_id: &str) -> Result<(), GatewayError> {
        let query = [("id", trip_id)];
        let call = UpstreamCall::new(Method::DELETE, DELETE_TRIP)
            .bearer(token)
            .query(&query);
        self.client.send(call).await.map(drop)
    }
}

#[async_trait]
impl MemberGateway for HttpTravelApi {
    async fn list_members(
        &self,
        token: &BearerToken,
        trip_id: &str,
    ) -> Result<Vec<Member>, GatewayError> {
        let query = [("tripId", trip_id)];
        let call = UpstreamCall::new(Method::GET, LIST_MEMBERS)
            .bearer(token)
            .query(&query);
        let body = self.client.send(call).await?;
        decode_list::<MemberDto, Member>("member", &body)
    }

    async fn add_member(&self, token: &BearerToken, member: &NewMember) -> Result<(), GatewayError> {
        let call = UpstreamCall::new(Method::POST, CREATE_MEMBER)
            .bearer(token)
            .json(member)?;
        self.client.send(call).await.map(drop)
    }

    async fn invite_members(&self, token: &BearerToken, trip_id: &str) -> Result<(), GatewayError> {
        let query = [("tripId", trip_id)];
        let call = UpstreamCall::new(Method::PATCH, INVITE_MEMBERS)
            .bearer(token)
            .query(&query);
        self.client.send(call).await.map(drop)
    }

    async fn remove_member(&self, token: &BearerToken, member_id: &str) -> Result<(), GatewayError> {
        let query = [("memberId", member_id)];
        let call = UpstreamCall::new(Method::DELETE, REMOVE_MEMBER)
            .bearer(token)
            .query(&query);
        self.client.send(call).await.map(drop)
    }

    async fn accept_invite(
        &self,
        token: &BearerToken,
        invite: &InviteAcceptance,
    ) -> Result<(), GatewayError> {
        let query = [
            ("memberIdMagic", invite.member_id.as_str()),
            ("tripIdMagic", invite.trip_id.as_str()),
        ];
        let call = UpstreamCall::new(Method::GET, ACCEPT_INVITE)
            .bearer(token)
            .query(&query);
        self.client.send(call).await.map(drop)
    }
}

#[async_trait]
impl ActivityGateway for HttpTravelApi {
    async fn list_activities(
        &self,
        token: &BearerToken,
        trip_id: &str,
    ) -> Result<Vec<Activity>, GatewayError> {
        let query = [("tripId", trip_id)];
        let call = UpstreamCall::new(Method::GET, LIST_ACTIVITIES)
            .bearer(token)
            .query(&query);
        let body = self.client.send(call).await?;
        decode_list::<ActivityDto, Activity>("activity", &body)
    }

    async fn create_activity(
        &self,
        token: &BearerToken,
        activity: &NewActivity,
    ) -> Result<(), GatewayError> {
        let call = UpstreamCall::new(Method::POST, CREATE_ACTIVITY)
            .bearer(token)
            .json(activity)?;
        self.client.send(call).await.map(drop)
    }
}
