//! Configuration loading and `extends` resolution.
//!
//! A generator configuration may name a parent document through a top-level
//! `extends` key. Resolution walks the chain from the leaf document towards
//! the root ancestor, then folds it back down with [`merge_configs`] so that
//! every child overrides its parent.
//!
//! ```text
//! repo.yaml ──extends──▶ project.yaml ──extends──▶ org.yaml
//!
//! resolved = merge(merge(org, project), repo)
//! ```
//!
//! A reference that reappears in its own chain is reported as
//! [`ConfigurationError::ExtendsCycle`].

use serde_yaml::{Mapping, Value};
use tracing::{debug, info, instrument};

use crate::{
    merger::{merge_configs, EXTENDS_KEY},
    source::{resolve_reference, DefaultDocumentSource, DocumentSource},
    ConfigurationError, ConfigurationResult,
};

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// An untyped configuration document.
pub type Configuration = Mapping;

/// Loads YAML documents and resolves `extends` chains.
pub struct ConfigLoader {
    source: Box<dyn DocumentSource>,
}

impl ConfigLoader {
    /// Creates a loader reading local files and HTTP(S) URLs.
    pub fn new() -> Self {
        Self::with_source(DefaultDocumentSource::new())
    }

    /// Creates a loader that retrieves documents through `source`.
    pub fn with_source<S>(source: S) -> Self
    where
        S: DocumentSource + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }

    /// Loads the YAML document at `reference` without resolving `extends`.
    ///
    /// An empty document loads as an empty mapping.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::Fetch`] / [`ConfigurationError::FileAccessError`]
    ///   when the document cannot be retrieved
    /// - [`ConfigurationError::ParseError`] when the content is not YAML or its
    ///   top level is not a mapping
    #[instrument(skip(self))]
    pub async fn load(&self, reference: &str) -> ConfigurationResult<Configuration> {
        let text = self.source.fetch_text(reference).await?;
        parse_document(reference, &text)
    }

    /// Loads the document at `reference` and merges its `extends` ancestors
    /// underneath it.
    ///
    /// Local `extends` paths are used as given (relative to the working
    /// directory); relative references inside a remote document are joined
    /// onto its URL. See [`resolve_reference`](crate::resolve_reference).
    ///
    /// # Errors
    ///
    /// Any error from [`ConfigLoader::load`] for a document in the chain, plus:
    /// - [`ConfigurationError::InvalidConfiguration`] when `extends` is not a string
    /// - [`ConfigurationError::ExtendsCycle`] when the chain loops
    #[instrument(skip(self))]
    pub async fn resolve_extends(&self, reference: &str) -> ConfigurationResult<Configuration> {
        let mut visited: Vec<String> = Vec::new();
        let mut chain: Vec<Configuration> = Vec::new();
        let mut next = Some(reference.to_string());

        while let Some(current) = next.take() {
            if visited.contains(&current) {
                visited.push(current);
                return Err(ConfigurationError::ExtendsCycle {
                    chain: visited.join(" -> "),
                });
            }

            let document = self.load(&current).await?;
            next = parent_reference(&current, &document)?;
            if let Some(parent) = &next {
                debug!(child = %current, parent = %parent, "Configuration extends parent");
            }

            visited.push(current);
            chain.push(document);
        }

        let depth = chain.len();
        let resolved = chain
            .into_iter()
            .rev()
            .fold(Configuration::new(), |base, document| {
                merge_configs(&base, &document)
            });

        info!(config = reference, depth, "Resolved configuration");
        Ok(resolved)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses YAML text into a configuration mapping.
fn parse_document(location: &str, text: &str) -> ConfigurationResult<Configuration> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| ConfigurationError::ParseError {
        location: location.to_string(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Configuration::new()),
        _ => Err(ConfigurationError::ParseError {
            location: location.to_string(),
            reason: "top level must be a mapping".to_string(),
        }),
    }
}

/// Returns the resolved parent reference declared by `document`, if any.
fn parent_reference(
    current: &str,
    document: &Configuration,
) -> ConfigurationResult<Option<String>> {
    match document.get(EXTENDS_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(parent)) if parent.is_empty() => Ok(None),
        Some(Value::String(parent)) => Ok(Some(resolve_reference(current, parent))),
        Some(_) => Err(ConfigurationError::InvalidConfiguration {
            field: EXTENDS_KEY.to_string(),
            reason: format!("expected a path or URL string in {current}"),
        }),
    }
}
