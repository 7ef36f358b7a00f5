//! End-to-end dispatch tests: registry -> tool -> mock cPanel server.
//!
//! Uses [`wiremock`] to emulate UAPI envelopes and drives the tools the
//! way an agent would, by name through the [`ToolRegistry`].

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cpmail_tools::register_all;
use cpmail_tools::registry::{ToolError, ToolRegistry};
use cpmail_uapi::{CpanelConfig, EmailApi, UapiClient};

fn mock_registry(server: &MockServer) -> ToolRegistry {
    let addr = server.address();
    let mut config = CpanelConfig::new("cpuser", addr.ip().to_string(), "tok123");
    config.port = addr.port();
    config.ssl = false;

    let api = Arc::new(EmailApi::new(UapiClient::new(config).unwrap()));
    let mut registry = ToolRegistry::new();
    register_all(&mut registry, api);
    registry
}

fn success_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({
        "status": 1,
        "errors": null,
        "warnings": null,
        "messages": null,
        "data": data
    })
}

#[tokio::test]
async fn add_email_account_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/execute/Email/add_pop"))
        .and(query_param("domain", "example.com"))
        .and(query_param("email", "user"))
        .and(query_param("password", "pw"))
        .and(query_param("quota", "0"))
        .and(header("Authorization", "cpanel cpuser:tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let registry = mock_registry(&server);
    let result = registry
        .execute(
            "add_email_account",
            json!({"email": "user@example.com", "password": "pw"}),
        )
        .await
        .unwrap();

    assert_eq!(result["status"], "ok");
    assert_eq!(result["email"], "user@example.com");
}

#[tokio::test]
async fn add_email_account_remote_failure_carries_text() {
    let server = MockServer::start().await;

    let body = json!({
        "status": 0,
        "errors": ["User already exists"],
        "data": null
    });

    Mock::given(method("GET"))
        .and(path("/execute/Email/add_pop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let registry = mock_registry(&server);
    let err = registry
        .execute(
            "add_email_account",
            json!({"email": "user@example.com", "password": "pw"}),
        )
        .await
        .unwrap_err();

    match err {
        ToolError::ExecutionFailed(msg) => {
            assert!(msg.contains("User already exists"), "got: {msg}");
        }
        other => panic!("expected ExecutionFailed, got: {other}"),
    }
}

#[tokio::test]
async fn list_email_accounts_returns_records_in_order() {
    let server = MockServer::start().await;

    let data = json!([
        {"email": "c@example.com"},
        {"email": "a@example.com"},
        {"email": "b@example.com"}
    ]);

    Mock::given(method("GET"))
        .and(path("/execute/Email/list_pops"))
        .and(query_param("domain", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(data)))
        .expect(1)
        .mount(&server)
        .await;

    let registry = mock_registry(&server);
    let result = registry
        .execute("list_email_accounts", json!({"domain": "example.com"}))
        .await
        .unwrap();

    let accounts = result["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 3);
    assert_eq!(accounts[0]["email"], "c@example.com");
    assert_eq!(accounts[1]["email"], "a@example.com");
    assert_eq!(accounts[2]["email"], "b@example.com");
}

#[tokio::test]
async fn list_email_forwarders_success() {
    let server = MockServer::start().await;

    let data = json!([
        {"dest": "info@example.com", "forward": "inbox@other.net"}
    ]);

    Mock::given(method("GET"))
        .and(path("/execute/Email/list_forwarders"))
        .and(query_param("domain", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(data)))
        .expect(1)
        .mount(&server)
        .await;

    let registry = mock_registry(&server);
    let result = registry
        .execute("list_email_forwarders", json!({"domain": "example.com"}))
        .await
        .unwrap();

    let forwarders = result["forwarders"].as_array().unwrap();
    assert_eq!(forwarders.len(), 1);
    assert_eq!(forwarders[0]["dest"], "info@example.com");
    assert_eq!(forwarders[0]["forward"], "inbox@other.net");
}

#[tokio::test]
async fn get_email_settings_passes_map_through() {
    let server = MockServer::start().await;

    let data = json!({"smtp_host": "mail.example.com", "smtp_port": 465});

    Mock::given(method("GET"))
        .and(path("/execute/Email/get_client_settings"))
        .and(query_param("email", "user@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(data.clone())))
        .expect(1)
        .mount(&server)
        .await;

    let registry = mock_registry(&server);
    let result = registry
        .execute("get_email_settings", json!({"email": "user@example.com"}))
        .await
        .unwrap();

    assert_eq!(result["settings"], data);
}

#[tokio::test]
async fn mutation_tools_confirm_success() {
    let server = MockServer::start().await;

    for function in [
        "delete_pop",
        "passwd_pop",
        "edit_pop_quota",
        "add_forwarder",
        "delete_forwarder",
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/execute/Email/{function}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!(null))))
            .expect(1)
            .mount(&server)
            .await;
    }

    let registry = mock_registry(&server);

    let calls = [
        ("delete_email_account", json!({"email": "user@example.com"})),
        (
            "change_password",
            json!({"email": "user@example.com", "new_password": "pw2"}),
        ),
        (
            "update_quota",
            json!({"email": "user@example.com", "quota": 250}),
        ),
        (
            "create_email_forwarder",
            json!({"email": "info@example.com", "destination": "inbox@other.net"}),
        ),
        (
            "delete_email_forwarder",
            json!({"email": "info@example.com", "destination": "inbox@other.net"}),
        ),
    ];

    for (tool, args) in calls {
        let result = registry.execute(tool, args).await.unwrap();
        assert_eq!(result["status"], "ok", "tool {tool} did not confirm");
    }
}

#[tokio::test]
async fn invalid_arguments_issue_zero_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!(null))))
        .expect(0)
        .mount(&server)
        .await;

    let registry = mock_registry(&server);

    // Malformed email.
    let err = registry
        .execute(
            "add_email_account",
            json!({"email": "no-at-sign", "password": "pw"}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArgs(_)));

    // Negative quota.
    let err = registry
        .execute(
            "update_quota",
            json!({"email": "user@example.com", "quota": -1}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArgs(_)));

    // Missing required field.
    let err = registry
        .execute("list_email_accounts", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArgs(_)));

    // Unknown tool never reaches the wire either.
    let err = registry
        .execute("drop_all_mailboxes", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

#[tokio::test]
async fn transport_failure_surfaces_as_execution_failed() {
    // Reserve a port, then drop the server so the connection is refused.
    let registry = {
        let server = MockServer::start().await;
        mock_registry(&server)
    };

    let err = registry
        .execute("list_email_accounts", json!({"domain": "example.com"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::ExecutionFailed(_)));
}
