//! Email account tools.
//!
//! `add_email_account`, `delete_email_account`, `list_email_accounts`,
//! `change_password`, `update_quota`, and `get_email_settings`. Each
//! tool validates its JSON arguments, delegates to the typed
//! [`EmailApi`] operation, and wraps the result as JSON.

use std::sync::Arc;

use async_trait::async_trait;
use cpmail_uapi::EmailApi;
use serde_json::json;

use crate::params::{optional_quota, require_quota, require_str, uapi_error};
use crate::registry::{Tool, ToolError};

/// Create a new mailbox.
pub struct AddEmailAccountTool {
    api: Arc<EmailApi>,
}

impl AddEmailAccountTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for AddEmailAccountTool {
    fn name(&self) -> &str {
        "add_email_account"
    }

    fn description(&self) -> &str {
        "Create a new email account on the cPanel server. Quota is in megabytes; 0 (the default) means unlimited."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "email": {
                    "type": "string",
                    "description": "The full email address to create (e.g. \"user@example.com\")"
                },
                "password": {
                    "type": "string",
                    "description": "The password for the new account"
                },
                "quota": {
                    "type": "integer",
                    "description": "Mailbox size limit in megabytes; 0 for unlimited (default: 0)"
                }
            },
            "required": ["email", "password"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let email = require_str(&args, "email")?;
        let password = require_str(&args, "password")?;
        let quota = optional_quota(&args)?;

        self.api
            .add_email_account(email, password, quota)
            .await
            .map_err(uapi_error)?;
        Ok(json!({ "status": "ok", "email": email }))
    }
}

/// Delete a mailbox.
pub struct DeleteEmailAccountTool {
    api: Arc<EmailApi>,
}

impl DeleteEmailAccountTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for DeleteEmailAccountTool {
    fn name(&self) -> &str {
        "delete_email_account"
    }

    fn description(&self) -> &str {
        "Delete an email account from the cPanel server."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "email": {
                    "type": "string",
                    "description": "The full email address to delete"
                }
            },
            "required": ["email"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let email = require_str(&args, "email")?;

        self.api
            .delete_email_account(email)
            .await
            .map_err(uapi_error)?;
        Ok(json!({ "status": "ok", "email": email }))
    }
}

/// List the mailboxes on a domain.
pub struct ListEmailAccountsTool {
    api: Arc<EmailApi>,
}

impl ListEmailAccountsTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for ListEmailAccountsTool {
    fn name(&self) -> &str {
        "list_email_accounts"
    }

    fn description(&self) -> &str {
        "List all email accounts for a domain, in the order the server returns them."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "domain": {
                    "type": "string",
                    "description": "The domain to list accounts for (e.g. \"example.com\")"
                }
            },
            "required": ["domain"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let domain = require_str(&args, "domain")?;

        let accounts = self
            .api
            .list_email_accounts(domain)
            .await
            .map_err(uapi_error)?;
        Ok(json!({ "domain": domain, "accounts": accounts }))
    }
}

/// Change a mailbox's password.
pub struct ChangePasswordTool {
    api: Arc<EmailApi>,
}

impl ChangePasswordTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for ChangePasswordTool {
    fn name(&self) -> &str {
        "change_password"
    }

    fn description(&self) -> &str {
        "Change the password of an existing email account."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "email": {
                    "type": "string",
                    "description": "The full email address"
                },
                "new_password": {
                    "type": "string",
                    "description": "The new password"
                }
            },
            "required": ["email", "new_password"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let email = require_str(&args, "email")?;
        let new_password = require_str(&args, "new_password")?;

        self.api
            .change_password(email, new_password)
            .await
            .map_err(uapi_error)?;
        Ok(json!({ "status": "ok", "email": email }))
    }
}

/// Change a mailbox's storage quota.
pub struct UpdateQuotaTool {
    api: Arc<EmailApi>,
}

impl UpdateQuotaTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for UpdateQuotaTool {
    fn name(&self) -> &str {
        "update_quota"
    }

    fn description(&self) -> &str {
        "Change the storage quota of an email account. Quota is in megabytes; 0 means unlimited."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "email": {
                    "type": "string",
                    "description": "The full email address"
                },
                "quota": {
                    "type": "integer",
                    "description": "The new mailbox size limit in megabytes; 0 for unlimited"
                }
            },
            "required": ["email", "quota"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let email = require_str(&args, "email")?;
        let quota = require_quota(&args)?;

        self.api
            .update_quota(email, quota)
            .await
            .map_err(uapi_error)?;
        Ok(json!({ "status": "ok", "email": email, "quota": quota }))
    }
}

/// Retrieve the mail-client settings for an account.
pub struct GetEmailSettingsTool {
    api: Arc<EmailApi>,
}

impl GetEmailSettingsTool {
    pub fn new(api: Arc<EmailApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetEmailSettingsTool {
    fn name(&self) -> &str {
        "get_email_settings"
    }

    fn description(&self) -> &str {
        "Retrieve the mail client settings (POP3/IMAP/SMTP hosts and ports) for an email account."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "email": {
                    "type": "string",
                    "description": "The full email address"
                }
            },
            "required": ["email"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let email = require_str(&args, "email")?;

        let settings = self
            .api
            .get_email_settings(email)
            .await
            .map_err(uapi_error)?;
        Ok(json!({ "email": email, "settings": settings }))
    }
}
