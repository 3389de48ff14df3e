//! Tests for the Kubernetes proxy client against a mock proxy

mod common;

use kubedash_api::config::ProxyConfig;
use kubedash_api::kubernetes::{K8sError, ProxyClient};
use kubedash_common::{LogOptions, ResourceKind};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_each_kind_hits_one_path() {
    let proxy = MockServer::start().await;
    for upstream in [
        "/api/v1/nodes",
        "/api/v1/namespaces/ci/pods",
        "/apis/apps/v1/namespaces/ci/deployments",
        "/api/v1/namespaces/ci/services",
        "/api/v1/namespaces",
    ] {
        Mock::given(method("GET"))
            .and(path(upstream))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"path": upstream})))
            .expect(1)
            .mount(&proxy)
            .await;
    }

    let client = ProxyClient::new(&proxy.uri());

    for kind in ResourceKind::ALL {
        let list = client.list(kind, Some("ci")).await.unwrap();
        assert!(list.contains_key("path"), "kind {}", kind);
    }

    assert_eq!(common::upstream_requests(&proxy).await.len(), 5);
}

#[tokio::test]
async fn test_named_operations() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apis/apps/v1/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": "DeploymentList"})))
        .mount(&proxy)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": "ServiceList"})))
        .mount(&proxy)
        .await;

    let client = ProxyClient::new(&proxy.uri());

    let deployments = client.list_deployments(None).await.unwrap();
    assert_eq!(deployments["kind"], "DeploymentList");

    let services = client.list_services(Some("default")).await.unwrap();
    assert_eq!(services["kind"], "ServiceList");
}

#[tokio::test]
async fn test_pod_logs_with_options() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces/default/pods/api-7d9f/log"))
        .and(query_param("container", "app"))
        .and(query_param("tailLines", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a\nb\nc\n"))
        .expect(1)
        .mount(&proxy)
        .await;

    let client = ProxyClient::new(&proxy.uri());
    let opts = LogOptions::new("default", "api-7d9f")
        .with_container("app")
        .with_tail_lines(3);

    assert_eq!(client.pod_logs(&opts).await.unwrap(), "a\nb\nc\n");
}

#[tokio::test]
async fn test_status_error_carries_body() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/nodes"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream connect error"))
        .mount(&proxy)
        .await;

    let client = ProxyClient::new(&proxy.uri());
    let err = client.list_nodes().await.unwrap_err();

    match err {
        K8sError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream connect error");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_configured_timeout_applies() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/namespaces"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&proxy)
        .await;

    let client = ProxyClient::from_config(&ProxyConfig {
        url: proxy.uri(),
        request_timeout_secs: Some(1),
    })
    .unwrap();

    let err = client.list_namespaces().await.unwrap_err();
    assert!(matches!(err, K8sError::Request { .. }));
}

#[tokio::test]
async fn test_version_probe() {
    let proxy = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gitVersion": "v1.30.2"})))
        .mount(&proxy)
        .await;

    let client = ProxyClient::new(&format!("{}/", proxy.uri()));
    let version = client.version().await.unwrap();
    assert_eq!(version["gitVersion"], "v1.30.2");
}
