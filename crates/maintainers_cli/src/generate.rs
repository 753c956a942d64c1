//! The `generate-maintainers` command.
//!
//! Parses the command-line options, builds a [`MaintainersGenerator`] with a
//! GitHub profile client (unless `--no-fetch` is given) and writes the
//! generated document to stdout or to the `--output` file.

use clap::Parser;
use github_client::{create_profile_client, GitHubClient};
use maintainers_core::{GenerateRequest, MaintainersGenerator};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::errors::Error;

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;

/// Generate a MAINTAINERS.md document from governance data
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "generate-maintainers")]
#[command(about = "Generate a MAINTAINERS.md document from governance data", long_about = None)]
pub struct GenerateArgs {
    /// Repository name to list maintainers for
    #[arg(long)]
    pub repo: String,

    /// Project label; detected from the configuration's project_map when omitted or empty
    #[arg(long)]
    pub project: Option<String>,

    /// Maintainers configuration file (local path or URL)
    #[arg(long)]
    pub config: String,

    /// Write the document to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// GitHub token used for profile lookups
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL used for profile lookups
    #[arg(long, env = "GITHUB_API_URL")]
    pub github_api_url: Option<String>,

    /// Do not look up GitHub profiles; name, email and company stay blank
    #[arg(long)]
    pub no_fetch: bool,

    /// Print only the maintainers table
    #[arg(long)]
    pub list_only: bool,
}

impl GenerateArgs {
    /// The generation request described by these arguments.
    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            repo: self.repo.clone(),
            project: self.project.clone(),
            config: self.config.clone(),
            no_fetch: self.no_fetch,
            list_only: self.list_only,
        }
    }
}

/// Generates the document and writes it to its destination.
///
/// # Errors
///
/// - [`Error::GitHubClient`] when the profile client cannot be created
/// - [`Error::Generation`] when generation fails; nothing is written
/// - [`Error::WriteOutput`] when the output file cannot be written
pub async fn execute(args: &GenerateArgs) -> Result<(), Error> {
    let mut generator = MaintainersGenerator::new()?;

    if args.no_fetch {
        debug!("Profile lookups disabled");
    } else {
        let octocrab = create_profile_client(args.token.as_deref(), args.github_api_url.as_deref())?;
        generator = generator.with_profile_provider(GitHubClient::new(octocrab));
    }

    let document = generator.generate(&args.to_request()).await?;

    match &args.output {
        Some(path) => {
            write_output(path, &document)?;
            info!(path = %path.display(), "Wrote maintainers document");
        }
        None => println!("{document}"),
    }

    Ok(())
}

/// Writes `document` to `path` exactly as given.
pub fn write_output(path: &Path, document: &str) -> Result<(), Error> {
    fs::write(path, document).map_err(|e| Error::WriteOutput {
        path: path.to_path_buf(),
        source: e,
    })
}
