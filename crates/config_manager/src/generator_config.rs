//! Typed view over a resolved generator configuration.
//!
//! The resolved configuration is an untyped YAML mapping; this module reads
//! the keys the maintainers generator understands:
//!
//! ```yaml
//! extends: ../org/maintainers.yaml      # consumed during resolution
//! organization: Example Foundation
//! gov_org: Example Governance          # alias: governance_repo
//! yaml_link: https://github.com/example/governance/blob/main/governance.yaml
//! # or: clowarden_file: https://github.com/example/.clowarden/blob/main/config.yaml
//! before_text: |
//!   # {repo} Maintainers
//! after_text: |
//!   Maintainership is managed in {gov_org}.
//! project_map:
//!   - name: Storage
//!     repos: ['^acapy-storage', '-storage$']
//! ```
//!
//! Unknown keys are ignored.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::{source::to_raw_url, Configuration, ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "generator_config_tests.rs"]
mod tests;

/// Organization label used when the configuration does not set one.
pub const DEFAULT_ORGANIZATION: &str = "Organization";

/// Governance repository label used when the configuration does not set one.
pub const DEFAULT_GOVERNANCE_LABEL: &str = "Governance Repository";

/// One entry of the ordered `project_map`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectMapping {
    /// Project label assigned when one of the patterns matches.
    #[serde(default)]
    pub name: Option<String>,

    /// Regular expressions searched for in the repository name.
    #[serde(default)]
    pub repos: Vec<String>,
}

/// The flavour of governance document a configuration points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernanceKind {
    /// A CLOWarden configuration file (`clowarden_file`).
    Clowarden,
    /// A plain governance YAML document (`yaml_link`).
    Yaml,
}

impl GovernanceKind {
    /// Configuration key that selects this flavour.
    pub fn config_key(&self) -> &'static str {
        match self {
            GovernanceKind::Clowarden => "clowarden_file",
            GovernanceKind::Yaml => "yaml_link",
        }
    }

    /// Human-readable name of the governance source, used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            GovernanceKind::Clowarden => "CLOWarden configuration",
            GovernanceKind::Yaml => "governance YAML",
        }
    }

    /// Prefix of the flavour-specific template variables
    /// (`<prefix>_link`, `<prefix>_raw_link`).
    pub fn variable_prefix(&self) -> &'static str {
        match self {
            GovernanceKind::Clowarden => "clowarden",
            GovernanceKind::Yaml => "yaml",
        }
    }
}

/// Where the governance document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernanceReference {
    pub kind: GovernanceKind,
    /// The link exactly as configured (usually a GitHub UI link).
    pub link: String,
}

impl GovernanceReference {
    /// The link rewritten to serve raw file content.
    pub fn raw_link(&self) -> String {
        to_raw_url(&self.link)
    }
}

/// Generator settings read from a resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub before_text: Option<String>,

    #[serde(default)]
    pub after_text: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,

    #[serde(default)]
    pub gov_org: Option<String>,

    #[serde(default)]
    pub governance_repo: Option<String>,

    #[serde(default)]
    pub clowarden_file: Option<String>,

    #[serde(default)]
    pub yaml_link: Option<String>,

    #[serde(default)]
    pub project_map: Vec<ProjectMapping>,
}

impl GeneratorConfig {
    /// Reads the generator settings out of a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidConfiguration`] when a recognised
    /// key holds a value of the wrong shape (for example a list where a string
    /// is expected).
    pub fn from_configuration(config: &Configuration) -> ConfigurationResult<Self> {
        serde_yaml::from_value(Value::Mapping(config.clone())).map_err(|e| {
            ConfigurationError::InvalidConfiguration {
                field: "generator configuration".to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Template text rendered above the maintainers table.
    pub fn before_text(&self) -> &str {
        self.before_text.as_deref().unwrap_or_default()
    }

    /// Template text rendered below the maintainers table.
    pub fn after_text(&self) -> &str {
        self.after_text.as_deref().unwrap_or_default()
    }

    /// Organization display name.
    pub fn organization(&self) -> &str {
        self.organization.as_deref().unwrap_or(DEFAULT_ORGANIZATION)
    }

    /// Governance repository display label (`gov_org`, then `governance_repo`).
    pub fn governance_label(&self) -> &str {
        self.gov_org
            .as_deref()
            .or(self.governance_repo.as_deref())
            .unwrap_or(DEFAULT_GOVERNANCE_LABEL)
    }

    /// The configured governance document.
    ///
    /// `clowarden_file` takes precedence over `yaml_link` when both are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::RequiredConfigMissing`] when neither key
    /// holds a non-empty value.
    pub fn governance_reference(&self) -> ConfigurationResult<GovernanceReference> {
        let candidates = [
            (GovernanceKind::Clowarden, &self.clowarden_file),
            (GovernanceKind::Yaml, &self.yaml_link),
        ];

        candidates
            .into_iter()
            .find_map(|(kind, link)| match link.as_deref() {
                Some(link) if !link.is_empty() => Some(GovernanceReference {
                    kind,
                    link: link.to_string(),
                }),
                _ => None,
            })
            .ok_or_else(|| ConfigurationError::RequiredConfigMissing {
                key: format!(
                    "{} or {}",
                    GovernanceKind::Clowarden.config_key(),
                    GovernanceKind::Yaml.config_key()
                ),
            })
    }
}
