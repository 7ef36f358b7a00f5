//! UAPI response envelope and Email-module record types.
//!
//! Every UAPI response is wrapped in the same envelope: a numeric
//! `status` (1 = success, 0 = failure), optional `errors`, `warnings`
//! and `messages` arrays, and a `data` payload whose shape depends on
//! the function that was called.

use serde::{Deserialize, Serialize};

/// The outer envelope of every UAPI response.
///
/// Unknown envelope fields are ignored; cPanel adds metadata fields
/// between releases.
#[derive(Debug, Clone, Deserialize)]
pub struct UapiResponse {
    /// 1 on success, 0 on failure.
    #[serde(default)]
    pub status: i64,

    /// Error strings when `status` is 0. May be null or absent.
    #[serde(default)]
    pub errors: Option<Vec<String>>,

    /// Non-fatal warnings. May be null or absent.
    #[serde(default)]
    pub warnings: Option<Vec<String>>,

    /// Informational messages. May be null or absent.
    #[serde(default)]
    pub messages: Option<Vec<String>>,

    /// The function-specific result payload. Null for most mutations.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl UapiResponse {
    /// Whether the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.status == 1
    }

    /// The remote error text, joined with `"; "` when cPanel returned
    /// several strings. Falls back to a fixed message when the envelope
    /// reported failure without any error text.
    pub fn error_text(&self) -> String {
        match self.errors.as_deref() {
            Some(errors) if !errors.is_empty() => errors.join("; "),
            _ => "unknown cPanel API error".into(),
        }
    }
}

/// One mailbox record from `Email::list_pops`.
///
/// Only the address is typed; every other field cPanel provides
/// (disk usage, suspension flags, ...) is passed through untouched in
/// `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAccount {
    /// The full address, `user@domain`.
    pub email: String,

    /// All remaining remote-provided fields, unmodified.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One forwarding rule from `Email::list_forwarders`.
///
/// cPanel's field naming is inverted from what one might expect:
/// `dest` is the address mail arrives at, `forward` is where it is
/// sent on to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forwarder {
    /// The source address the rule matches.
    pub dest: String,

    /// The destination address mail is forwarded to.
    pub forward: String,

    /// All remaining remote-provided fields, unmodified.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success() {
        let json = r#"{
            "status": 1,
            "errors": null,
            "warnings": null,
            "messages": null,
            "data": {"key": "value"}
        }"#;
        let envelope: UapiResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data["key"], "value");
    }

    #[test]
    fn envelope_failure_with_errors() {
        let json = r#"{
            "status": 0,
            "errors": ["User already exists", "Quota out of range"],
            "data": null
        }"#;
        let envelope: UapiResponse = serde_json::from_str(json).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(
            envelope.error_text(),
            "User already exists; Quota out of range"
        );
    }

    #[test]
    fn envelope_failure_without_errors() {
        let json = r#"{"status": 0}"#;
        let envelope: UapiResponse = serde_json::from_str(json).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.error_text(), "unknown cPanel API error");
    }

    #[test]
    fn envelope_ignores_unknown_fields() {
        let json = r#"{
            "status": 1,
            "data": [],
            "metadata": {"transformed": 1},
            "apiversion": 3
        }"#;
        let envelope: UapiResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
    }

    #[test]
    fn email_account_preserves_extra_fields() {
        let json = r#"{
            "email": "user@example.com",
            "login": "user@example.com",
            "diskquota": "250",
            "diskused": "12"
        }"#;
        let account: EmailAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.email, "user@example.com");
        assert_eq!(account.extra["diskquota"], "250");
        assert_eq!(account.extra["diskused"], "12");
    }

    #[test]
    fn forwarder_source_and_destination() {
        let json = r#"{
            "dest": "info@example.com",
            "forward": "inbox@other.net",
            "html_dest": "info@example.com"
        }"#;
        let forwarder: Forwarder = serde_json::from_str(json).unwrap();
        assert_eq!(forwarder.dest, "info@example.com");
        assert_eq!(forwarder.forward, "inbox@other.net");
        assert!(forwarder.extra.contains_key("html_dest"));
    }

    #[test]
    fn email_account_serializes_flat() {
        let account = EmailAccount {
            email: "a@b.com".into(),
            extra: serde_json::Map::new(),
        };
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value, serde_json::json!({"email": "a@b.com"}));
    }
}
