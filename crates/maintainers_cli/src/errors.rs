use std::{io, path::PathBuf};

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the maintainers generator CLI.
///
/// Every variant ends the run with exit code 1.
#[derive(Error, Debug)]
pub enum Error {
    /// Generating the document failed.
    ///
    /// Wraps configuration, governance and membership errors from the core
    /// crate; the message is passed through unchanged.
    #[error(transparent)]
    Generation(#[from] maintainers_core::Error),

    /// The GitHub client used for profile lookups could not be created.
    #[error("Failed to create GitHub client: {0}")]
    GitHubClient(#[from] github_client::Error),

    /// The generated document could not be written to the output file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
