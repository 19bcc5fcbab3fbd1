//! Integration tests for the Instagram client.
//!
//! These tests verify client construction, access token handling, resource
//! resolution and transport configuration through the public API.

use std::sync::Arc;
use std::time::Duration;

use instagram_api::rest::resources::{Media, User};
use instagram_api::{
    ConfigError, InstagramClient, Resource, ResourceError, ResourceKind, TransportConfig,
};
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at a mock server.
fn create_test_client(server: &MockServer, token: &str) -> InstagramClient {
    let config = TransportConfig::builder()
        .api_base_url(server.uri())
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    InstagramClient::with_access_token(token, config).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InstagramClient>();
}

#[test]
fn test_new_client_has_empty_token_and_default_transport() {
    let client = InstagramClient::new(TransportConfig::default()).unwrap();

    assert_eq!(client.access_token(), "");
    let config = client.transport_config();
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(
        config.api_base_url().as_ref(),
        "https://api.instagram.com/v1"
    );
}

// ============================================================================
// Access Token Tests
// ============================================================================

#[test]
fn test_set_access_token_trims_whitespace() {
    let client = InstagramClient::new(TransportConfig::default()).unwrap();

    for (input, expected) in [
        ("abc", "abc"),
        ("  abc  ", "abc"),
        ("\tabc\n", "abc"),
        ("   ", ""),
    ] {
        client.set_access_token(input);
        assert_eq!(client.access_token(), expected, "{input:?}");
    }
}

#[tokio::test]
async fn test_token_change_reaches_existing_resources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/self/feed"))
        .and(query_param("access_token", "SECOND"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "FIRST");
    let users = client.users().unwrap();
    client.set_access_token("SECOND");

    users.self_feed(None).await.unwrap();
}

// ============================================================================
// Resource Resolution Tests
// ============================================================================

#[test]
fn test_resource_lookup_returns_cached_instance() {
    let client = InstagramClient::new(TransportConfig::default()).unwrap();

    let by_name = client.resource("u_s_e_r").unwrap();
    let by_kind = client.resource_of(ResourceKind::User);
    let typed = client.users().unwrap();

    assert!(by_name.ptr_eq(&by_kind));
    assert!(Arc::ptr_eq(typed.core(), by_name.core()));
    assert!(Arc::ptr_eq(&client.users().unwrap(), &typed));
}

#[test]
fn test_resources_are_scoped_to_their_client() {
    let first = InstagramClient::new(TransportConfig::default()).unwrap();
    let second = InstagramClient::new(TransportConfig::default()).unwrap();

    let a = first.resource_of(ResourceKind::Media);
    let b = second.resource_of(ResourceKind::Media);
    assert!(!a.ptr_eq(&b));
}

#[test]
fn test_unknown_resource_name() {
    let client = InstagramClient::new(TransportConfig::default()).unwrap();

    match client.resource("Location") {
        Err(ResourceError::Config(ConfigError::UnknownResource { name, known })) => {
            assert_eq!(name, "Location");
            assert!(known.contains("User"));
            assert!(known.contains("Media"));
        }
        other => panic!("Expected UnknownResource, got {other:?}"),
    }
}

#[test]
fn test_typed_resource_access() {
    let client = InstagramClient::new(TransportConfig::default()).unwrap();

    let media = client.resource_as::<Media>().unwrap();
    assert_eq!(media.name(), "Media");
    assert_eq!(client.resource_as::<User>().unwrap().name(), "User");

    let error = client.resource("media").unwrap().into_user().unwrap_err();
    assert!(matches!(
        error,
        ResourceError::Type {
            name: "Media",
            expected: "User"
        }
    ));
}

// ============================================================================
// Transport Configuration Tests
// ============================================================================

#[test]
fn test_body_is_always_returned() {
    let client = InstagramClient::new(TransportConfig::default()).unwrap();
    assert!(client.transport_config().returns_body());

    let config = TransportConfig::builder()
        .timeout(Duration::from_millis(250))
        .connect_timeout(Duration::from_millis(100))
        .user_agent_prefix("Tests")
        .build()
        .unwrap();
    client.set_transport_config(config).unwrap();

    let current = client.transport_config();
    assert!(current.returns_body());
    assert!(!current.includes_headers_in_body());
    assert_eq!(current.timeout(), Duration::from_millis(250));
}

#[tokio::test]
async fn test_transport_change_reaches_existing_resources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/media/popular"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "1"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = InstagramClient::with_access_token("T", TransportConfig::default()).unwrap();
    let media = client.media().unwrap();

    let config = TransportConfig::builder()
        .api_base_url(server.uri())
        .build()
        .unwrap();
    client.set_transport_config(config).unwrap();

    assert_eq!(media.popular(None).await.unwrap().count(), 1);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = TransportConfig::builder()
        .api_base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = InstagramClient::with_access_token("T", config).unwrap();

    let error = client.media().unwrap().popular(None).await.unwrap_err();
    match error {
        ResourceError::Http(http) => assert!(http.is_transport()),
        other => panic!("Expected Http error, got {other:?}"),
    }
}

// ============================================================================
// User ID Resolution Tests
// ============================================================================

#[tokio::test]
async fn test_user_id_resolves_username_with_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/search"))
        .and(query_param("q", "snoopdogg"))
        .and(query_param("access_token", "T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1_574_083, "username": "snoopdogg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "T");
    assert_eq!(client.user_id("snoopdogg").await, 1_574_083);
}

#[tokio::test]
async fn test_user_id_numeric_input_skips_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "T");
    assert_eq!(client.user_id(12345_u64).await, 12345);
    assert_eq!(client.user_id(" 12345 ").await, 12345);
}

#[test]
fn test_user_id_numeric_input_needs_no_io() {
    let client = InstagramClient::new(TransportConfig::default()).unwrap();

    assert_eq!(tokio_test::block_on(client.user_id(987_654_u64)), 987_654);
    assert_eq!(tokio_test::block_on(client.user_id("987654")), 987_654);
}

#[tokio::test]
async fn test_user_id_is_zero_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "T");
    assert_eq!(client.user_id("jack").await, 0);
}
