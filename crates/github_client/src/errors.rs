//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when looking up user
//! profiles through the GitHub REST API.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// Profile lookups are best-effort: callers typically log these errors and
/// continue with a blank profile rather than aborting.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::{Error, ProfileProvider};
///
/// match client.fetch_profile("octocat").await {
///     Ok(profile) => println!("{} works at {}", profile.login, profile.company),
///     Err(Error::NotFound) => eprintln!("No such user"),
///     Err(err) => eprintln!("Lookup failed: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub client initialization failure.
    ///
    /// This error occurs when the underlying HTTP client cannot be built, for
    /// example because the configured base URI is not a valid URI.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The GitHub API returned an error or a response in an unexpected format.
    ///
    /// Details are logged when the error is produced.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested user does not exist.
    ///
    /// This error occurs when the GitHub API answers with a 404 status code.
    #[error("Resource not found")]
    NotFound,
}
