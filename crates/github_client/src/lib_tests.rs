//! Unit tests for the github_client crate.

use super::*; // Import items from lib.rs
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate}; // For constructing mock bodies

fn client_for(mock_server: &MockServer, token: Option<&str>) -> GitHubClient {
    let octocrab = create_profile_client(token, Some(&mock_server.uri()))
        .expect("Failed to build test client");
    GitHubClient::new(octocrab)
}

#[tokio::test]
async fn test_fetch_profile_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 583231,
            "node_id": "MDQ6VXNlcjU4MzIzMQ==",
            "type": "User",
            "name": "The Octocat",
            "company": "@github",
            "email": "octocat@github.com"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.fetch_profile("octocat").await;

    if let Err(e) = &result {
        eprintln!("fetch_profile error: {e:?}");
    }
    assert_eq!(
        result.unwrap(),
        UserProfile {
            login: "octocat".to_string(),
            name: "The Octocat".to_string(),
            email: "octocat@github.com".to_string(),
            company: "@github".to_string(),
        }
    );
}

#[tokio::test]
async fn test_fetch_profile_with_null_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/quiet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "quiet",
            "id": 42,
            "name": null,
            "company": null,
            "email": null
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let profile = client
        .fetch_profile("quiet")
        .await
        .expect("profile lookup should succeed");

    assert_eq!(profile, UserProfile::blank("quiet"));
}

#[tokio::test]
async fn test_fetch_profile_sends_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "alice",
            "id": 1,
            "name": "Alice"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Some("secret-token"));
    let profile = client
        .fetch_profile("alice")
        .await
        .expect("profile lookup should succeed");

    assert_eq!(profile.name, "Alice");
}

#[tokio::test]
async fn test_fetch_profile_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/users/users#get-a-user"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.fetch_profile("nobody").await;

    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_fetch_profile_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Internal Server Error"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.fetch_profile("alice").await;

    assert!(matches!(result, Err(Error::InvalidResponse)));
}

#[tokio::test]
async fn test_create_profile_client_rejects_invalid_base_uri() {
    let result = create_profile_client(None, Some("not a uri"));

    assert!(matches!(result, Err(Error::AuthError(_))));
}

#[tokio::test]
async fn test_create_profile_client_ignores_empty_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "bob",
            "id": 2
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Some(""));
    let received = client.fetch_profile("bob").await;
    assert!(received.is_ok());

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert!(requests
        .iter()
        .all(|r| !r.headers.contains_key("authorization")));
}
