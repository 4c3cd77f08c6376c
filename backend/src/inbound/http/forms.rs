//! Form bodies accepted by the page actions and their field rules.
//!
//! Bodies arrive as `application/x-www-form-urlencoded`. Missing fields decode
//! as empty strings so every rule reports against the field, never as a
//! decode failure. Secret fields are never echoed back.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::messages::{DEFAULT_TRIP_DESCRIPTION, field};
use crate::domain::{
    FieldErrors, FormState, InviteAcceptance, NewActivity, NewMember, NewTrip,
    ProfilePictureUpdate, Registration, SignInCredentials, UserProfile, is_valid_email,
};

const MIN_PASSWORD_CHARS: usize = 6;

/// A form body with a stable identifier and a validated representation.
pub trait FormInput: Serialize {
    /// Identifier reported in [`FormState::id`].
    const ID: &'static str;
    type Valid;

    /// Apply the field rules.
    fn validate(&self) -> Result<Self::Valid, FieldErrors>;
}

/// Validate `input`, pairing the result with the form state to echo.
pub fn validate_form<F: FormInput>(input: &F) -> Result<(F::Valid, FormState), FormState> {
    match input.validate() {
        Ok(valid) => Ok((valid, FormState::accepted(F::ID, input))),
        Err(errors) => Err(FormState::rejected(F::ID, input, errors)),
    }
}

/// Blank state for a page load.
pub fn initial_form<F: FormInput + Default>() -> FormState {
    prefilled_form(&F::default())
}

/// Unvalidated state for a page load with values already filled in.
pub fn prefilled_form<F: FormInput>(input: &F) -> FormState {
    FormState::initial(F::ID, input)
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn optional(value: &str) -> Option<String> {
    present(value).then(|| value.trim().to_owned())
}

fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}

#[derive(Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SignInForm {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Debug for SignInForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInForm")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl FormInput for SignInForm {
    const ID: &'static str = "signIn";
    type Valid = SignInCredentials;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(is_valid_email(&self.email), "email", field::EMAIL_INVALID);
        errors.check(long_enough(&self.password), "password", field::PASSWORD_TOO_SHORT);
        errors.into_result()?;
        Ok(SignInCredentials::new(self.email.as_str(), self.password.as_str()))
    }
}

#[derive(Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .finish()
    }
}

impl FormInput for SignUpForm {
    const ID: &'static str = "signUp";
    type Valid = Registration;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(present(&self.name), "name", field::NAME_REQUIRED);
        errors.check(is_valid_email(&self.email), "email", field::EMAIL_INVALID);
        errors.check(long_enough(&self.password), "password", field::PASSWORD_TOO_SHORT);
        errors.check(
            long_enough(&self.confirm_password),
            "confirmPassword",
            field::PASSWORD_TOO_SHORT,
        );
        // Cross-field rule only runs once every field passes on its own.
        if errors.is_empty() {
            errors.check(
                self.password == self.confirm_password,
                "confirmPassword",
                field::PASSWORDS_DIFFER,
            );
        }
        errors.into_result()?;
        Ok(Registration::new(
            self.name.trim(),
            SignInCredentials::new(self.email.as_str(), self.password.as_str()),
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTripForm {
    pub title: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Trip fields that passed validation; the owner is attached later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDraft {
    title: String,
    destination: String,
    start_date: String,
    end_date: String,
    description: Option<String>,
}

impl TripDraft {
    /// Upstream body for a trip owned by `owner`.
    pub fn owned_by(self, owner: &UserProfile) -> NewTrip {
        NewTrip {
            user_owner_id: owner.id().to_string(),
            title: self.title,
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_TRIP_DESCRIPTION.to_owned()),
        }
    }
}

impl FormInput for CreateTripForm {
    const ID: &'static str = "createTrip";
    type Valid = TripDraft;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(present(&self.title), "title", field::TRIP_TITLE_REQUIRED);
        errors.check(present(&self.destination), "destination", field::DESTINATION_REQUIRED);
        errors.check(present(&self.start_date), "startDate", field::START_DATE_REQUIRED);
        errors.check(present(&self.end_date), "endDate", field::END_DATE_REQUIRED);
        errors.into_result()?;
        Ok(TripDraft {
            title: self.title.trim().to_owned(),
            destination: self.destination.trim().to_owned(),
            start_date: self.start_date.trim().to_owned(),
            end_date: self.end_date.trim().to_owned(),
            description: optional(&self.description),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoveTripForm {
    pub id: String,
}

impl FormInput for RemoveTripForm {
    const ID: &'static str = "deleteTrip";
    type Valid = String;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(present(&self.id), "id", field::TRIP_ID_REQUIRED);
        errors.into_result()?;
        Ok(self.id.trim().to_owned())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AddMemberForm {
    pub name: String,
    pub email: String,
}

/// Member fields that passed validation; the trip is attached later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    name: String,
    email: String,
}

impl MemberDraft {
    pub fn for_trip(self, trip_id: &str) -> NewMember {
        NewMember {
            trip_id: trip_id.to_owned(),
            name: self.name,
            email: self.email,
        }
    }
}

impl FormInput for AddMemberForm {
    const ID: &'static str = "addMember";
    type Valid = MemberDraft;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(present(&self.name), "name", field::NAME_REQUIRED);
        errors.check(is_valid_email(&self.email), "email", field::MEMBER_EMAIL_INVALID);
        errors.check(!self.email.is_empty(), "email", field::EMAIL_REQUIRED);
        errors.into_result()?;
        Ok(MemberDraft {
            name: self.name.trim().to_owned(),
            email: self.email.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoveMemberForm {
    pub member_id: String,
}

impl FormInput for RemoveMemberForm {
    const ID: &'static str = "removeMember";
    type Valid = String;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(present(&self.member_id), "memberId", field::MEMBER_ID_REQUIRED);
        errors.into_result()?;
        Ok(self.member_id.trim().to_owned())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateActivityForm {
    pub name: String,
    pub trip_id: String,
    pub description: String,
    /// Decimal cost; must parse as a non-negative number.
    pub cost: String,
}

impl CreateActivityForm {
    /// Fill a blank `tripId` from the trip page the form was posted to.
    #[must_use]
    pub fn with_default_trip(mut self, trip_id: &str) -> Self {
        if !present(&self.trip_id) {
            trip_id.clone_into(&mut self.trip_id);
        }
        self
    }
}

impl FormInput for CreateActivityForm {
    const ID: &'static str = "createActivity";
    type Valid = NewActivity;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(present(&self.name), "name", field::ACTIVITY_NAME_REQUIRED);
        errors.check(present(&self.trip_id), "tripId", field::TRIP_ID_REQUIRED);
        let cost = match self.cost.trim().parse::<f64>() {
            Ok(cost) if cost.is_finite() => {
                errors.check(cost >= 0.0, "cost", field::COST_NOT_POSITIVE);
                cost
            }
            _ => {
                errors.add("cost", field::COST_NOT_NUMBER);
                0.0
            }
        };
        errors.into_result()?;
        Ok(NewActivity {
            trip_id: self.trip_id.trim().to_owned(),
            name: self.name.trim().to_owned(),
            description: optional(&self.description),
            cost,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AcceptInviteForm {
    pub member_id: String,
    pub trip_id: String,
}

impl FormInput for AcceptInviteForm {
    const ID: &'static str = "acceptTrip";
    type Valid = InviteAcceptance;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(present(&self.member_id), "memberId", field::REQUIRED);
        errors.check(present(&self.trip_id), "tripId", field::REQUIRED);
        errors.into_result()?;
        Ok(InviteAcceptance {
            member_id: self.member_id.trim().to_owned(),
            trip_id: self.trip_id.trim().to_owned(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProfileForm {
    pub image: String,
}

impl FormInput for UpdateProfileForm {
    const ID: &'static str = "updateProfile";
    type Valid = ProfilePictureUpdate;

    fn validate(&self) -> Result<Self::Valid, FieldErrors> {
        Ok(ProfilePictureUpdate {
            image: optional(&self.image),
        })
    }
}
