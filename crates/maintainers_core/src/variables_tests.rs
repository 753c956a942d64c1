use super::*;
use config_manager::GovernanceKind;

const GOVERNANCE_LINK: &str = "https://github.com/org/gov/blob/main/clowarden.yaml";

fn clowarden_reference() -> GovernanceReference {
    GovernanceReference {
        kind: GovernanceKind::Clowarden,
        link: GOVERNANCE_LINK.to_string(),
    }
}

#[test]
fn test_defaults_apply_for_unset_labels() {
    let variables = build_variables(
        "repo-basic",
        "",
        "config/maintainers.yaml",
        &GeneratorConfig::default(),
        &clowarden_reference(),
    );

    assert_eq!(variables["repo"], "repo-basic");
    assert_eq!(variables["project"], "");
    assert_eq!(variables["organization"], "Organization");
    assert_eq!(variables["gov_org"], "Governance Repository");
    assert_eq!(variables["governance_repo"], "Governance Repository");
}

#[test]
fn test_governance_links_include_flavour_specific_pair() {
    let variables = build_variables(
        "r1",
        "ProjectA",
        "config.yaml",
        &GeneratorConfig::default(),
        &clowarden_reference(),
    );

    let raw = format!("{GOVERNANCE_LINK}?raw=true");
    assert_eq!(variables["governance_link"], GOVERNANCE_LINK);
    assert_eq!(variables["governance_raw_link"], raw);
    assert_eq!(variables["clowarden_link"], GOVERNANCE_LINK);
    assert_eq!(variables["clowarden_raw_link"], raw);
    assert!(!variables.contains_key("yaml_link"));
}

#[test]
fn test_yaml_source_uses_yaml_prefix() {
    let reference = GovernanceReference {
        kind: GovernanceKind::Yaml,
        link: "governance.yaml".to_string(),
    };

    let variables = build_variables(
        "r1",
        "",
        "config.yaml",
        &GeneratorConfig::default(),
        &reference,
    );

    assert_eq!(variables["yaml_link"], "governance.yaml");
    assert_eq!(variables["yaml_raw_link"], "governance.yaml");
    assert!(!variables.contains_key("clowarden_link"));
}

#[test]
fn test_config_links_and_configured_labels() {
    let config = GeneratorConfig {
        organization: Some("Hyperledger".to_string()),
        governance_repo: Some("Gov Repo".to_string()),
        ..Default::default()
    };
    let config_link = "https://github.com/org/repo/blob/main/maintainers.yaml";

    let variables = build_variables("r1", "", config_link, &config, &clowarden_reference());

    assert_eq!(variables["organization"], "Hyperledger");
    assert_eq!(variables["gov_org"], "Gov Repo");
    assert_eq!(variables["maintainers_config_link"], config_link);
    assert_eq!(
        variables["maintainers_config_raw_link"],
        format!("{config_link}?raw=true")
    );
}
