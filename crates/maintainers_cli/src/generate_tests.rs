use super::*;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Result<GenerateArgs, clap::Error> {
    GenerateArgs::try_parse_from(std::iter::once("generate-maintainers").chain(args.iter().copied()))
}

#[test]
fn test_parse_minimal_arguments() {
    let args = parse(&["--repo", "r1", "--config", "maintainers.yaml"]).expect("should parse");

    assert_eq!(args.repo, "r1");
    assert_eq!(args.config, "maintainers.yaml");
    assert_eq!(args.project, None);
    assert_eq!(args.output, None);
    assert!(!args.no_fetch);
    assert!(!args.list_only);
}

#[test]
fn test_parse_all_flags() {
    let args = parse(&[
        "--repo",
        "r1",
        "--project",
        "ProjectA",
        "--config",
        "https://github.com/org/repo/blob/main/maintainers.yaml",
        "--output",
        "MAINTAINERS.md",
        "--token",
        "ghp_test",
        "--no-fetch",
        "--list-only",
    ])
    .expect("should parse");

    assert_eq!(args.project.as_deref(), Some("ProjectA"));
    assert_eq!(args.output, Some(PathBuf::from("MAINTAINERS.md")));
    assert_eq!(args.token.as_deref(), Some("ghp_test"));
    assert!(args.no_fetch);
    assert!(args.list_only);
}

#[test]
fn test_repo_and_config_are_required() {
    assert!(parse(&["--config", "maintainers.yaml"]).is_err());
    assert!(parse(&["--repo", "r1"]).is_err());
}

#[test]
fn test_to_request_copies_arguments() {
    let args = parse(&[
        "--repo",
        "r1",
        "--project",
        "",
        "--config",
        "maintainers.yaml",
        "--list-only",
    ])
    .expect("should parse");

    let request = args.to_request();

    assert_eq!(
        request,
        GenerateRequest {
            repo: "r1".to_string(),
            project: Some(String::new()),
            config: "maintainers.yaml".to_string(),
            no_fetch: false,
            list_only: true,
        }
    );
}

#[test]
fn test_write_output_writes_exact_content() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("MAINTAINERS.md");

    write_output(&path, "# Maintainers\n\n| table |").expect("write should succeed");

    assert_eq!(
        fs::read_to_string(&path).expect("file should exist"),
        "# Maintainers\n\n| table |"
    );
}

#[test]
fn test_write_output_into_missing_directory_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("missing").join("MAINTAINERS.md");

    let result = write_output(&path, "content");

    assert!(matches!(result, Err(Error::WriteOutput { .. })));
}
