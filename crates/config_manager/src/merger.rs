//! Configuration merging.
//!
//! Configuration documents are untyped YAML mappings. A child document that
//! `extends` a parent is merged onto it with a right-biased deep merge:
//!
//! - keys only present in the base survive unchanged
//! - when both sides hold a mapping for a key, the mappings merge recursively
//! - any other override value replaces the base value entirely (sequences are
//!   replaced, not concatenated)
//! - `extends` keys are consumed by resolution and never copied into the
//!   result, at any depth
//!
//! # Examples
//!
//! ```rust
//! use config_manager::merge_configs;
//! use serde_yaml::Mapping;
//!
//! let base: Mapping = serde_yaml::from_str("organization: OWF\nlinks: {docs: a, chat: b}").unwrap();
//! let child: Mapping = serde_yaml::from_str("extends: base.yaml\nlinks: {chat: c}").unwrap();
//!
//! let merged = merge_configs(&base, &child);
//! let expected: Mapping = serde_yaml::from_str("organization: OWF\nlinks: {docs: a, chat: c}").unwrap();
//! assert_eq!(merged, expected);
//! ```

use serde_yaml::{Mapping, Value};

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;

/// The key naming a parent configuration.
pub const EXTENDS_KEY: &str = "extends";

/// Merges `overlay` onto `base`, dropping `extends` keys.
pub fn merge_configs(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut merged = merge_mappings(base, overlay);
    merged.remove(EXTENDS_KEY);
    merged
}

/// Recursive right-biased merge of two mappings.
fn merge_mappings(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut result = base.clone();

    for (key, value) in overlay {
        if key.as_str() == Some(EXTENDS_KEY) {
            continue;
        }

        let merged = match (result.get(key), value) {
            (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                Value::Mapping(merge_mappings(existing, incoming))
            }
            (_, Value::Mapping(incoming)) => Value::Mapping(merge_mappings(&Mapping::new(), incoming)),
            _ => value.clone(),
        };
        result.insert(key.clone(), merged);
    }

    result
}
