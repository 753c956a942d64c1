//! Template variables for the text around the maintainers table.

use config_manager::{to_raw_url, GeneratorConfig, GovernanceReference};
use template_engine::TemplateVariables;

#[cfg(test)]
#[path = "variables_tests.rs"]
mod tests;

/// Builds the variables available to `before_text` and `after_text`.
///
/// | Variable | Value |
/// |----------|-------|
/// | `repo` | target repository name |
/// | `project` | explicit or detected project label |
/// | `organization` | organization display name |
/// | `gov_org`, `governance_repo` | governance repository label |
/// | `governance_link`, `governance_raw_link` | governance document links |
/// | `clowarden_link`, `clowarden_raw_link` | same, when the source is a CLOWarden file |
/// | `yaml_link`, `yaml_raw_link` | same, when the source is a governance YAML link |
/// | `maintainers_config_link`, `maintainers_config_raw_link` | configuration reference as given |
pub fn build_variables(
    repo: &str,
    project: &str,
    config_reference: &str,
    config: &GeneratorConfig,
    governance: &GovernanceReference,
) -> TemplateVariables {
    let governance_raw_link = governance.raw_link();
    let prefix = governance.kind.variable_prefix();

    [
        ("repo".to_string(), repo.to_string()),
        ("project".to_string(), project.to_string()),
        ("organization".to_string(), config.organization().to_string()),
        ("gov_org".to_string(), config.governance_label().to_string()),
        (
            "governance_repo".to_string(),
            config.governance_label().to_string(),
        ),
        ("governance_link".to_string(), governance.link.clone()),
        (
            "governance_raw_link".to_string(),
            governance_raw_link.clone(),
        ),
        (format!("{prefix}_link"), governance.link.clone()),
        (format!("{prefix}_raw_link"), governance_raw_link),
        (
            "maintainers_config_link".to_string(),
            config_reference.to_string(),
        ),
        (
            "maintainers_config_raw_link".to_string(),
            to_raw_url(config_reference),
        ),
    ]
    .into_iter()
    .collect()
}
