//! Email forwarder tools.
//!
//! `create_email_forwarder`, `delete_email_forwarder`, and
//! `list_email_forwarders`. A forwarder redirects mail addressed to one
//! mailbox to another address without creating a mailbox for the
//! source.

use std::sync::Arc;

use async_trait::async_trait;
use cpmail_uapi::EmailApi;
use serde_json::json;

use crate::params::{require_str, uapi_error};
use crate::registry::{Tool, ToolError};

/// Create a forwarding rule.
pub struct CreateEmailForwarderTool {
    api: Arc<EmailApi>,
}

impl CreateEmailForwarderTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for CreateEmailForwarderTool {
    fn name(&self) -> &str {
        "create_email_forwarder"
    }

    fn description(&self) -> &str {
        "Create an email forwarder that redirects mail from one address to another."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "email": {
                    "type": "string",
                    "description": "The source address to forward from (e.g. \"info@example.com\")"
                },
                "destination": {
                    "type": "string",
                    "description": "The address to forward mail to"
                }
            },
            "required": ["email", "destination"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let email = require_str(&args, "email")?;
        let destination = require_str(&args, "destination")?;

        self.api
            .create_email_forwarder(email, destination)
            .await
            .map_err(uapi_error)?;
        Ok(json!({
            "status": "ok",
            "email": email,
            "destination": destination
        }))
    }
}

/// Delete a forwarding rule.
pub struct DeleteEmailForwarderTool {
    api: Arc<EmailApi>,
}

impl DeleteEmailForwarderTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for DeleteEmailForwarderTool {
    fn name(&self) -> &str {
        "delete_email_forwarder"
    }

    fn description(&self) -> &str {
        "Delete an email forwarder. Both the source address and its forwarding destination must be given."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "email": {
                    "type": "string",
                    "description": "The source address of the forwarder"
                },
                "destination": {
                    "type": "string",
                    "description": "The destination address of the forwarder"
                }
            },
            "required": ["email", "destination"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let email = require_str(&args, "email")?;
        let destination = require_str(&args, "destination")?;

        self.api
            .delete_email_forwarder(email, destination)
            .await
            .map_err(uapi_error)?;
        Ok(json!({
            "status": "ok",
            "email": email,
            "destination": destination
        }))
    }
}

/// List the forwarding rules on a domain.
pub struct ListEmailForwardersTool {
    api: Arc<EmailApi>,
}

impl ListEmailForwardersTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for ListEmailForwardersTool {
    fn name(&self) -> &str {
        "list_email_forwarders"
    }

    fn description(&self) -> &str {
        "List all email forwarders for a domain, in the order the server returns them."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "domain": {
                    "type": "string",
                    "description": "The domain to list forwarders for (e.g. \"example.com\")"
                }
            },
            "required": ["domain"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let domain = require_str(&args, "domain")?;

        let forwarders = self
            .api
            .list_email_forwarders(domain)
            .await
            .map_err(uapi_error)?;
        Ok(json!({ "domain": domain, "forwarders": forwarders }))
    }
}
