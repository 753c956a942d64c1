//! Governance documents.
//!
//! Both supported governance sources, a CLOWarden configuration file and a
//! plain governance YAML document, share one shape:
//!
//! ```yaml
//! teams:
//!   - name: core
//!     maintainers: [alice]
//!     members: [bob]
//! repositories:
//!   - name: r1
//!     teams:
//!       core: maintainer
//! ```
//!
//! Other keys (visibility, collaborators, ...) are ignored. Which source is
//! used is decided by the configuration key that references it
//! (`clowarden_file` or `yaml_link`), and both load through
//! [`load_governance`].

use config_manager::{ConfigLoader, GovernanceReference};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use tracing::{info, instrument};

use crate::Error;

#[cfg(test)]
#[path = "governance_tests.rs"]
mod tests;

/// A team and the GitHub users in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub maintainers: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<String>,
}

impl Team {
    /// Every user in the team, maintainers first, duplicates included.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.maintainers
            .iter()
            .chain(self.members.iter())
            .map(String::as_str)
    }
}

/// The teams granted a role on one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryBinding {
    pub name: String,

    /// Team name to role label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: BTreeMap<String, String>,
}

/// Team definitions plus per-repository role bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GovernanceDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<Team>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub repositories: Vec<RepositoryBinding>,

    /// Where the document came from, for diagnostics.
    #[serde(skip)]
    pub origin: Option<String>,
}

impl GovernanceDocument {
    /// Looks up a team by name.
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name == name)
    }

    /// Looks up a repository binding by name.
    pub fn repository(&self, name: &str) -> Option<&RepositoryBinding> {
        self.repositories.iter().find(|repo| repo.name == name)
    }

    /// Describes the document's origin for error messages.
    pub fn describe(&self) -> String {
        self.origin
            .clone()
            .unwrap_or_else(|| "governance document".to_string())
    }
}

/// Loads the governance document referenced by the configuration.
///
/// The raw form of the configured link is fetched, so GitHub UI links work.
///
/// # Errors
///
/// - [`Error::Configuration`] when the document cannot be fetched or is not YAML
/// - [`Error::GovernanceParse`] when it does not have the governance shape
#[instrument(skip(loader), fields(link = %reference.link))]
pub async fn load_governance(
    loader: &ConfigLoader,
    reference: &GovernanceReference,
) -> Result<GovernanceDocument, Error> {
    let raw_link = reference.raw_link();
    info!(kind = reference.kind.label(), url = %raw_link, "Loading governance document");

    let mapping = loader.load(&raw_link).await?;
    let mut document: GovernanceDocument = serde_yaml::from_value(Value::Mapping(mapping))
        .map_err(|e| Error::GovernanceParse {
            location: raw_link.clone(),
            reason: e.to_string(),
        })?;

    document.origin = Some(format!("{} ({})", reference.kind.label(), reference.link));
    info!(
        teams = document.teams.len(),
        repositories = document.repositories.len(),
        "Loaded governance document"
    );

    Ok(document)
}

/// Deserializes an explicit YAML `null` (an empty key) as the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
