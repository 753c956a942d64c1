//! Configuration management for the maintainers generator
//!
//! This crate turns a configuration reference (local path or URL) into the
//! settings the generator runs with:
//!
//! - [`ConfigLoader`] fetches YAML documents and resolves `extends` chains
//!   into a single merged [`Configuration`].
//! - [`merge_configs`] implements the right-biased deep merge used for
//!   inheritance.
//! - [`GeneratorConfig`] is the typed view over a resolved configuration.
//! - [`detect_project`] picks a project label from the ordered `project_map`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use config_manager::{detect_project, ConfigLoader, GeneratorConfig};
//!
//! # async fn example() -> Result<(), config_manager::ConfigurationError> {
//! let loader = ConfigLoader::new();
//! let resolved = loader.resolve_extends("maintainers/repo.yaml").await?;
//! let config = GeneratorConfig::from_configuration(&resolved)?;
//!
//! let project = detect_project("acapy-storage", &config.project_map);
//! println!("{} / {}", config.organization(), project);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod generator_config;
pub mod loader;
pub mod merger;
pub mod project_detector;
pub mod source;

// Re-export for convenient access
pub use errors::{ConfigurationError, ConfigurationResult};
pub use generator_config::{
    GeneratorConfig, GovernanceKind, GovernanceReference, ProjectMapping,
    DEFAULT_GOVERNANCE_LABEL, DEFAULT_ORGANIZATION,
};
pub use loader::{ConfigLoader, Configuration};
pub use merger::{merge_configs, EXTENDS_KEY};
pub use project_detector::detect_project;
pub use source::{is_remote, resolve_reference, to_raw_url, DefaultDocumentSource, DocumentSource};
