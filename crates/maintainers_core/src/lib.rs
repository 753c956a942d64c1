//! # Maintainers Core
//!
//! This crate generates the maintainers listing document (`MAINTAINERS.md`)
//! for a repository.
//!
//! ## Overview
//!
//! A generation run:
//! 1. Resolves the generator configuration, following its `extends` chain
//! 2. Loads the governance document the configuration points at
//! 3. Collects the users with a role on the target repository
//! 4. Looks up their GitHub profiles (optional)
//! 5. Renders the maintainers table
//! 6. Renders `before_text` / `after_text` and assembles the document
//!
//! The entry point is [`MaintainersGenerator::generate`], driven by a
//! [`GenerateRequest`].
//!
//! ## Examples
//!
//! ```no_run
//! use maintainers_core::{GenerateRequest, MaintainersGenerator};
//!
//! # async fn example() -> Result<(), maintainers_core::Error> {
//! let generator = MaintainersGenerator::new()?;
//! let request = GenerateRequest {
//!     repo: "acapy-storage".to_string(),
//!     project: None,
//!     config: "maintainers/config.yaml".to_string(),
//!     no_fetch: true,
//!     list_only: false,
//! };
//!
//! let document = generator.generate(&request).await?;
//! println!("{document}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Document fetching goes through [`ConfigLoader`] and profile lookups
//! through the [`ProfileProvider`] trait, so both can be replaced in tests.

use config_manager::{detect_project, ConfigLoader, GeneratorConfig};
use github_client::ProfileProvider;
use template_engine::TemplateRenderer;
use tracing::{debug, info, instrument};

pub mod document;
pub mod errors;
pub mod governance;
pub mod membership;
pub mod profiles;
pub mod table;
pub mod variables;

pub use document::assemble_document;
pub use errors::Error;
pub use governance::{load_governance, GovernanceDocument, RepositoryBinding, Team};
pub use membership::{collect_members, Membership};
pub use profiles::fetch_profiles;
pub use table::build_table;
pub use variables::build_variables;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Parameters of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Target repository name.
    pub repo: String,

    /// Project label. `None` or an empty string means detect it from the
    /// configuration's `project_map`.
    pub project: Option<String>,

    /// Configuration reference, a local path or a URL.
    pub config: String,

    /// Skip profile lookups and leave name, email and company blank.
    pub no_fetch: bool,

    /// Return only the maintainers table.
    pub list_only: bool,
}

impl GenerateRequest {
    /// The explicitly requested project, if any.
    fn explicit_project(&self) -> Option<&str> {
        self.project.as_deref().filter(|project| !project.is_empty())
    }
}

/// Generates maintainers documents.
pub struct MaintainersGenerator {
    loader: ConfigLoader,
    renderer: TemplateRenderer,
    profiles: Option<Box<dyn ProfileProvider>>,
}

impl MaintainersGenerator {
    /// Creates a generator that reads documents from disk or over HTTP and
    /// performs no profile lookups.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the template renderer cannot be built.
    pub fn new() -> Result<Self, Error> {
        Self::with_loader(ConfigLoader::new())
    }

    /// Creates a generator that reads documents through `loader`.
    pub fn with_loader(loader: ConfigLoader) -> Result<Self, Error> {
        Ok(Self {
            loader,
            renderer: TemplateRenderer::new()?,
            profiles: None,
        })
    }

    /// Sets the provider used to look up GitHub profiles.
    pub fn with_profile_provider<P>(mut self, provider: P) -> Self
    where
        P: ProfileProvider + 'static,
    {
        self.profiles = Some(Box::new(provider));
        self
    }

    /// Runs one generation and returns the document text.
    ///
    /// In list-only mode only the maintainers table is returned. Profile
    /// lookups are skipped when the request asks for it or no provider is
    /// set; failed lookups leave the user's details blank.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] when the configuration or governance
    ///   document cannot be loaded, or no governance source is configured
    /// - [`Error::GovernanceParse`] when the governance document has the
    ///   wrong shape
    /// - [`Error::RepositoryNotFound`] when the repository has no governance
    ///   entry
    #[instrument(skip(self, request), fields(repo = %request.repo, config = %request.config))]
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, Error> {
        let resolved = self.loader.resolve_extends(&request.config).await?;
        info!(config = %request.config, "Loaded maintainer config");

        let config = GeneratorConfig::from_configuration(&resolved)?;
        let governance_reference = config.governance_reference()?;
        let governance = load_governance(&self.loader, &governance_reference).await?;

        let members = collect_members(&request.repo, &governance)?;

        let provider = if request.no_fetch {
            None
        } else {
            self.profiles.as_deref()
        };
        let profiles = fetch_profiles(&members, provider).await;

        let table = build_table(&members, &profiles);
        if request.list_only {
            return Ok(table);
        }

        let project = match request.explicit_project() {
            Some(project) => project.to_string(),
            None => detect_project(&request.repo, &config.project_map),
        };
        debug!(project = %project, "Using project label");

        let variables = build_variables(
            &request.repo,
            &project,
            &request.config,
            &config,
            &governance_reference,
        );

        let before = self.renderer.render(config.before_text(), &variables);
        let after = self.renderer.render(config.after_text(), &variables);

        Ok(assemble_document(&before, &table, &after))
    }
}
