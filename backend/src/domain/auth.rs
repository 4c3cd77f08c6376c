//! Credentials submitted by the sign-in and sign-up forms.
//!
//! Values reach these types only after form validation; passwords are zeroed
//! on drop.

use std::fmt;

use zeroize::Zeroizing;

/// Email/password pair forwarded to `POST /app/Users/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct SignInCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl SignInCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for SignInCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Account details forwarded to `POST /app/Users/register`.
///
/// The confirmation field is checked by the form and not sent upstream.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    credentials: SignInCredentials,
}

impl Registration {
    pub fn new(name: impl Into<String>, credentials: SignInCredentials) -> Self {
        Self {
            name: name.into(),
            credentials,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.credentials.email()
    }

    pub fn password(&self) -> &str {
        self.credentials.password()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Body of `PUT /app/Users/updateProfilePicture`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfilePictureUpdate {
    pub image: Option<String>,
}

/// Magic identifiers carried by an invitation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteAcceptance {
    pub member_id: String,
    pub trip_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let registration = Registration::new(
            "Ana",
            SignInCredentials::new("ana@example.com", "hunter22"),
        );
        let rendered = format!("{registration:?}");
        assert!(rendered.contains("ana@example.com"));
        assert!(!rendered.contains("hunter22"));
    }
}
