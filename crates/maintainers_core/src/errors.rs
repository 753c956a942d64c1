use config_manager::ConfigurationError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that abort maintainers document generation.
///
/// Every variant is fatal. Recoverable conditions, such as a profile lookup
/// failing for one user, are logged and never surface as an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Loading, resolving or interpreting a configuration document failed.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The governance document is valid YAML but does not have the expected
    /// `teams` / `repositories` shape.
    #[error("Failed to parse governance document {location}: {reason}")]
    GovernanceParse { location: String, reason: String },

    /// The target repository has no entry in the governance document.
    #[error("Repository '{repo}' not found in {governance}.")]
    RepositoryNotFound {
        /// The repository that was looked up
        repo: String,
        /// Description of the governance source that was searched
        governance: String,
    },

    /// The template renderer could not be initialised.
    #[error(transparent)]
    Template(#[from] template_engine::Error),
}
