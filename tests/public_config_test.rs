//! Integration tests for loading the public config over HTTP.
//!
//! A wiremock server stands in for the backend; the real reqwest transport
//! and loader are used end to end.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use client_config::config::Config;
use client_config::domain::{FileConstraints, Registry};
use client_config::errors::AppError;
use client_config::infra::{HttpConfigSource, PublicConfigSource};
use client_config::services::{ConfigLoader, LoadOutcome, Services};

// =============================================================================
// Helpers
// =============================================================================

fn config_for(server: &MockServer) -> Config {
    let base = server.uri();
    Config::from_lookup(move |k| (k == "CLIENT_API_BASE_URL").then(|| base.clone())).unwrap()
}

fn loader_with_timeout(server: &MockServer, timeout: Duration) -> ConfigLoader {
    let config = config_for(server);
    let source = HttpConfigSource::new(&config).unwrap();
    ConfigLoader::new(Arc::new(source), timeout)
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn valid_document_updates_registry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public-config"))
        .and(header("cache-control", "no-store"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "maxSizeMb": 25,
            "supportedExtensions": ["PDF", "png", " pdf "],
            "supportedMimeTypes": ["application/pdf", "image/png"],
            "featureFlags": { "ignored": true }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let services = Services::from_config(&config_for(&server)).unwrap();
    let outcome = services.load_constraints(None).await;

    assert!(outcome.is_applied());
    let registry = services.registry();
    assert_eq!(registry.max_size_mb(), 25.0);
    assert_eq!(registry.max_size_bytes(), 26_214_400);
    assert_eq!(registry.supported_extensions(), ["pdf", "png"]);
    assert_eq!(
        registry.supported_mime_types(),
        ["application/pdf", "image/png"]
    );
}

#[tokio::test]
async fn partial_document_only_touches_present_fields() {
    let server = MockServer::start().await;
    Mock::given(path("/public-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "maxSizeMb": 1.5 })))
        .mount(&server)
        .await;

    let registry = Registry::new();
    loader_with_timeout(&server, Duration::from_secs(5))
        .load_backend_constraints(&registry, None)
        .await;

    let defaults = FileConstraints::default();
    assert_eq!(registry.max_size_bytes(), 1_572_864);
    assert_eq!(registry.supported_extensions(), defaults.supported_extensions());
}

// =============================================================================
// Fail-open
// =============================================================================

#[tokio::test]
async fn server_error_keeps_defaults() {
    let server = MockServer::start().await;
    Mock::given(path("/public-config"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let registry = Registry::new();
    let outcome = loader_with_timeout(&server, Duration::from_secs(5))
        .load_backend_constraints(&registry, None)
        .await;

    assert!(matches!(outcome, LoadOutcome::KeptDefaults(AppError::Status(500))));
    assert_eq!(registry.constraints(), FileConstraints::default());
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(path("/public-config"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "maxSizeMb": 99 }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let registry = Registry::new();
    let outcome = loader_with_timeout(&server, Duration::from_millis(50))
        .load_backend_constraints(&registry, None)
        .await;

    assert!(matches!(outcome, LoadOutcome::KeptDefaults(AppError::Timeout)));
    assert_eq!(registry.max_size_mb(), 10.0);
}

#[tokio::test]
async fn malformed_json_keeps_defaults() {
    let server = MockServer::start().await;
    Mock::given(path("/public-config"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let registry = Registry::new();
    let outcome = loader_with_timeout(&server, Duration::from_secs(5))
        .load_backend_constraints(&registry, None)
        .await;

    assert!(matches!(outcome, LoadOutcome::KeptDefaults(AppError::Decode(_))));
    assert_eq!(registry.constraints(), FileConstraints::default());
}

#[tokio::test]
async fn schema_mismatch_rejects_whole_document() {
    let server = MockServer::start().await;
    Mock::given(path("/public-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "maxSizeMb": 50,
            "supportedExtensions": ["pdf", 7]
        })))
        .mount(&server)
        .await;

    let registry = Registry::new();
    let outcome = loader_with_timeout(&server, Duration::from_secs(5))
        .load_backend_constraints(&registry, None)
        .await;

    match outcome {
        LoadOutcome::KeptDefaults(AppError::InvalidConfig(violations)) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations.iter().next().unwrap().field, "supportedExtensions[1]");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    // The valid size was not applied either.
    assert_eq!(registry.max_size_mb(), 10.0);
}

#[tokio::test]
async fn source_reports_status_without_validation() {
    let server = MockServer::start().await;
    Mock::given(path("/public-config"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = HttpConfigSource::new(&config_for(&server)).unwrap();
    assert!(source.url().ends_with("/public-config"));

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, AppError::Status(404)));
    assert!(err.is_recoverable());
}

// =============================================================================
// Startup ordering
// =============================================================================

#[tokio::test]
async fn missing_base_url_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(path("/public-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = Config::from_lookup(|_| None).unwrap_err();

    assert!(matches!(err, AppError::MissingEnv { .. }));
    assert!(err.to_string().contains("CLIENT_API_BASE_URL=http://localhost:8081"));
    server.verify().await;
}
