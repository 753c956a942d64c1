use super::*;

fn config_from(yaml: &str) -> ConfigurationResult<GeneratorConfig> {
    let mapping: Configuration = serde_yaml::from_str(yaml).expect("test YAML must parse");
    GeneratorConfig::from_configuration(&mapping)
}

#[test]
fn test_defaults_for_empty_configuration() {
    let config = GeneratorConfig::from_configuration(&Configuration::new())
        .expect("empty configuration is valid");

    assert_eq!(config.before_text(), "");
    assert_eq!(config.after_text(), "");
    assert_eq!(config.organization(), DEFAULT_ORGANIZATION);
    assert_eq!(config.governance_label(), DEFAULT_GOVERNANCE_LABEL);
    assert!(config.project_map.is_empty());
}

#[test]
fn test_reads_recognised_keys_and_ignores_others() {
    let config = config_from(
        r##"
organization: Example Foundation
gov_org: Example Governance
yaml_link: https://github.com/example/governance/blob/main/governance.yaml
before_text: "# {repo}"
after_text: footer
unrelated_key: ignored
project_map:
  - name: Storage
    repos: ['^acapy-storage']
  - repos: ['^misc-']
"##,
    )
    .expect("configuration should parse");

    assert_eq!(config.organization(), "Example Foundation");
    assert_eq!(config.governance_label(), "Example Governance");
    assert_eq!(config.before_text(), "# {repo}");
    assert_eq!(config.after_text(), "footer");
    assert_eq!(
        config.project_map,
        vec![
            ProjectMapping {
                name: Some("Storage".to_string()),
                repos: vec!["^acapy-storage".to_string()],
            },
            ProjectMapping {
                name: None,
                repos: vec!["^misc-".to_string()],
            },
        ]
    );
}

#[test]
fn test_explicit_empty_organization_is_kept() {
    let config = config_from("organization: ''").expect("configuration should parse");
    assert_eq!(config.organization(), "");
}

#[test]
fn test_governance_label_falls_back_to_governance_repo() {
    let config = config_from("governance_repo: gov-repo").expect("configuration should parse");
    assert_eq!(config.governance_label(), "gov-repo");

    let both = config_from("governance_repo: gov-repo\ngov_org: gov-org")
        .expect("configuration should parse");
    assert_eq!(both.governance_label(), "gov-org");
}

#[test]
fn test_null_texts_are_empty() {
    let config = config_from("before_text:\nafter_text: ~").expect("configuration should parse");
    assert_eq!(config.before_text(), "");
    assert_eq!(config.after_text(), "");
}

#[test]
fn test_wrong_shape_is_invalid_configuration() {
    let result = config_from("organization: [a, b]");
    assert!(matches!(
        result,
        Err(ConfigurationError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_governance_reference_from_yaml_link() {
    let config = config_from("yaml_link: https://github.com/org/gov/blob/main/governance.yaml")
        .expect("configuration should parse");

    let reference = config
        .governance_reference()
        .expect("reference should be present");

    assert_eq!(reference.kind, GovernanceKind::Yaml);
    assert_eq!(
        reference.raw_link(),
        "https://github.com/org/gov/blob/main/governance.yaml?raw=true"
    );
}

#[test]
fn test_governance_reference_prefers_clowarden_file() {
    let config = config_from("clowarden_file: clowarden.yaml\nyaml_link: governance.yaml")
        .expect("configuration should parse");

    let reference = config
        .governance_reference()
        .expect("reference should be present");

    assert_eq!(
        reference,
        GovernanceReference {
            kind: GovernanceKind::Clowarden,
            link: "clowarden.yaml".to_string(),
        }
    );
    assert_eq!(reference.raw_link(), "clowarden.yaml");
}

#[test]
fn test_empty_clowarden_file_falls_through_to_yaml_link() {
    let config = config_from("clowarden_file: ''\nyaml_link: governance.yaml")
        .expect("configuration should parse");

    let reference = config
        .governance_reference()
        .expect("reference should be present");

    assert_eq!(reference.kind, GovernanceKind::Yaml);
}

#[test]
fn test_missing_governance_reference() {
    let config = config_from("organization: OWF").expect("configuration should parse");

    assert_eq!(
        config.governance_reference(),
        Err(ConfigurationError::RequiredConfigMissing {
            key: "clowarden_file or yaml_link".to_string(),
        })
    );
}

#[test]
fn test_governance_kind_metadata() {
    assert_eq!(GovernanceKind::Clowarden.config_key(), "clowarden_file");
    assert_eq!(GovernanceKind::Clowarden.label(), "CLOWarden configuration");
    assert_eq!(GovernanceKind::Clowarden.variable_prefix(), "clowarden");
    assert_eq!(GovernanceKind::Yaml.config_key(), "yaml_link");
    assert_eq!(GovernanceKind::Yaml.label(), "governance YAML");
    assert_eq!(GovernanceKind::Yaml.variable_prefix(), "yaml");
}
