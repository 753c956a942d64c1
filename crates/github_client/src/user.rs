//! User domain types.
//!
//! This module contains the public profile fields shown in the maintainers
//! table.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;

/// Public profile details of a GitHub user.
///
/// Fields GitHub does not expose (or that the user left unset) are empty
/// strings, so a profile can always be rendered.
///
/// # Examples
///
/// ```rust
/// use github_client::UserProfile;
///
/// let profile = UserProfile::blank("octocat");
/// assert_eq!(profile.login, "octocat");
/// assert!(profile.name.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    /// The login name of the user
    pub login: String,
    /// Display name
    pub name: String,
    /// Public email address
    pub email: String,
    /// Company affiliation
    pub company: String,
}

impl UserProfile {
    /// A profile with only the login filled in.
    pub fn blank(login: &str) -> Self {
        Self {
            login: login.to_string(),
            ..Default::default()
        }
    }
}

/// The subset of the `GET /users/{login}` response the generator uses.
#[derive(Debug, Deserialize)]
pub(crate) struct UserProfileResponse {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl From<UserProfileResponse> for UserProfile {
    fn from(value: UserProfileResponse) -> Self {
        Self {
            login: value.login,
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            company: value.company.unwrap_or_default(),
        }
    }
}
