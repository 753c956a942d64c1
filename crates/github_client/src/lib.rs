//! Crate for interacting with the GitHub REST API.
//!
//! This crate looks up public user profiles (`GET /users/{login}`) so the
//! maintainers table can show each member's name, email and company.
//! Requests are anonymous unless a personal access token is supplied.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{debug, error, instrument, warn};

pub mod errors;
pub use errors::Error;

pub mod user;
pub use user::UserProfile;
use user::UserProfileResponse;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Source of user profile details.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetches the public profile of `login`.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the user does not exist
    /// - `Error::InvalidResponse` for any other API or transport failure
    async fn fetch_profile(&self, login: &str) -> Result<UserProfile, Error>;
}

/// A client for looking up GitHub user profiles.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from a configured `Octocrab` instance.
    ///
    /// Use [`create_profile_client`] to build one with an optional token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileProvider for GitHubClient {
    /// Fetches a user profile using the REST API directly.
    ///
    /// # Arguments
    ///
    /// * `login` - The GitHub login of the user.
    ///
    /// # Errors
    /// Returns `Error::NotFound` for unknown users and `Error::InvalidResponse`
    /// for every other failure.
    #[instrument(skip(self), fields(login = %login))]
    async fn fetch_profile(&self, login: &str) -> Result<UserProfile, Error> {
        let path = format!("/users/{}", login);

        debug!("Making API call to: {}", path);
        let response: OctocrabResult<UserProfileResponse> =
            self.client.get(path, None::<&()>).await;

        match response {
            Ok(profile) => Ok(UserProfile::from(profile)),
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code.as_u16() == 404 =>
            {
                warn!(login = login, "User not found on GitHub");
                Err(Error::NotFound)
            }
            Err(e) => {
                log_octocrab_error("Failed to get user profile", e);
                Err(Error::InvalidResponse)
            }
        }
    }
}

/// Builds an `Octocrab` instance for profile lookups.
///
/// # Arguments
///
/// * `token` - Optional personal access token, sent as a bearer credential.
///   Anonymous requests work but are subject to a much lower rate limit.
/// * `base_uri` - Optional API root, for GitHub Enterprise or tests. Defaults
///   to `https://api.github.com`.
///
/// # Errors
/// Returns an `Error::AuthError` if the base URI is invalid or the client
/// cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_profile_client, GitHubClient, ProfileProvider};
///
/// # async fn example() -> Result<(), github_client::Error> {
/// let octocrab = create_profile_client(std::env::var("GITHUB_TOKEN").ok().as_deref(), None)?;
/// let client = GitHubClient::new(octocrab);
///
/// let profile = client.fetch_profile("octocat").await?;
/// println!("{} <{}>", profile.name, profile.email);
/// # Ok(())
/// # }
/// ```
pub fn create_profile_client(token: Option<&str>, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();

    if let Some(uri) = base_uri {
        builder = builder
            .base_uri(uri)
            .map_err(|e| Error::AuthError(format!("invalid base URI '{}': {}", uri, e)))?;
    }

    let result = match token {
        Some(token) if !token.is_empty() => builder.personal_token(token.to_string()).build(),
        _ => builder.build(),
    };

    result.map_err(|e| Error::AuthError(e.to_string()))
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                status_code = err.status_code.as_u16(),
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
