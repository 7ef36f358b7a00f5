//! Typed operations on the UAPI `Email` module.
//!
//! [`EmailApi`] wraps a [`UapiClient`] and exposes the nine supported
//! email-administration operations. Every method validates its
//! arguments locally before anything goes on the wire: a validation
//! failure returns [`UapiError::InvalidArgument`] and issues zero
//! requests.
//!
//! Mutations return `Ok(())` (the envelope carries no payload worth
//! surfacing); list operations return records in the order cPanel sent
//! them; settings retrieval passes the payload through unmodified.

use tracing::debug;

use crate::client::UapiClient;
use crate::error::{Result, UapiError};
use crate::types::{EmailAccount, Forwarder};

const MODULE: &str = "Email";

/// Split a full address into local part and domain.
///
/// Accepts exactly one `@` with non-empty parts on both sides;
/// anything else is [`UapiError::InvalidArgument`].
pub fn split_email(email: &str) -> Result<(&str, &str)> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(user), Some(domain), None) if !user.is_empty() && !domain.is_empty() => {
            Ok((user, domain))
        }
        _ => Err(UapiError::InvalidArgument(format!(
            "'{email}' is not a valid email address"
        ))),
    }
}

fn ensure_nonempty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UapiError::InvalidArgument(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

/// The nine email-administration operations, typed.
///
/// Safe for concurrent use; each call is an independent, stateless
/// request/response cycle and the remote server owns all account state.
#[derive(Debug)]
pub struct EmailApi {
    client: UapiClient,
}

impl EmailApi {
    /// Wrap an existing client.
    pub fn new(client: UapiClient) -> Self {
        Self { client }
    }

    /// Build config from the environment and wrap a fresh client.
    pub fn from_env() -> Result<Self> {
        let config = crate::config::CpanelConfig::from_env()?;
        Ok(Self::new(UapiClient::new(config)?))
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &UapiClient {
        &self.client
    }

    /// Create a mailbox. `quota` is in megabytes; 0 means unlimited,
    /// per the remote convention.
    pub async fn add_email_account(&self, email: &str, password: &str, quota: u32) -> Result<()> {
        let (user, domain) = split_email(email)?;
        ensure_nonempty("password", password)?;

        debug!(email, quota, "adding email account");
        self.client
            .call(
                MODULE,
                "add_pop",
                &[
                    ("domain", domain.to_string()),
                    ("email", user.to_string()),
                    ("password", password.to_string()),
                    ("quota", quota.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    /// Delete a mailbox.
    pub async fn delete_email_account(&self, email: &str) -> Result<()> {
        let (user, domain) = split_email(email)?;

        debug!(email, "deleting email account");
        self.client
            .call(
                MODULE,
                "delete_pop",
                &[("domain", domain.to_string()), ("email", user.to_string())],
            )
            .await?;
        Ok(())
    }

    /// List the mailboxes on a domain, in the order cPanel returns them.
    pub async fn list_email_accounts(&self, domain: &str) -> Result<Vec<EmailAccount>> {
        ensure_nonempty("domain", domain)?;

        let data = self
            .client
            .call(MODULE, "list_pops", &[("domain", domain.to_string())])
            .await?;
        serde_json::from_value(data)
            .map_err(|e| UapiError::InvalidResponse(format!("unexpected list_pops payload: {e}")))
    }

    /// Retrieve the mail-client settings for an account, passed through
    /// unmodified.
    pub async fn get_email_settings(&self, email: &str) -> Result<serde_json::Value> {
        // Validate the shape; the full address is sent as-is.
        split_email(email)?;

        self.client
            .call(
                MODULE,
                "get_client_settings",
                &[("email", email.to_string())],
            )
            .await
    }

    /// Change a mailbox's storage quota. `quota` is in megabytes; 0
    /// means unlimited.
    pub async fn update_quota(&self, email: &str, quota: u32) -> Result<()> {
        let (user, domain) = split_email(email)?;

        debug!(email, quota, "updating quota");
        self.client
            .call(
                MODULE,
                "edit_pop_quota",
                &[
                    ("email", user.to_string()),
                    ("domain", domain.to_string()),
                    ("quota", quota.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    /// Change a mailbox's password.
    pub async fn change_password(&self, email: &str, new_password: &str) -> Result<()> {
        let (user, domain) = split_email(email)?;
        ensure_nonempty("password", new_password)?;

        debug!(email, "changing password");
        self.client
            .call(
                MODULE,
                "passwd_pop",
                &[
                    ("email", user.to_string()),
                    ("domain", domain.to_string()),
                    ("password", new_password.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    /// Create a forwarding rule from `email` to `destination`. The
    /// source address needs no mailbox of its own.
    pub async fn create_email_forwarder(&self, email: &str, destination: &str) -> Result<()> {
        let (user, domain) = split_email(email)?;
        ensure_nonempty("destination", destination)?;

        debug!(email, destination, "creating forwarder");
        self.client
            .call(
                MODULE,
                "add_forwarder",
                &[
                    ("domain", domain.to_string()),
                    ("email", user.to_string()),
                    ("fwdopt", "fwd".to_string()),
                    ("fwdemail", destination.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    /// Delete the forwarding rule from `email` to `destination`.
    ///
    /// Unlike the other functions, `delete_forwarder` takes the full
    /// source address as `address` rather than a split local part.
    pub async fn delete_email_forwarder(&self, email: &str, destination: &str) -> Result<()> {
        split_email(email)?;
        ensure_nonempty("destination", destination)?;

        debug!(email, destination, "deleting forwarder");
        self.client
            .call(
                MODULE,
                "delete_forwarder",
                &[
                    ("address", email.to_string()),
                    ("forwarder", destination.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    /// List the forwarding rules on a domain, in the order cPanel
    /// returns them.
    pub async fn list_email_forwarders(&self, domain: &str) -> Result<Vec<Forwarder>> {
        ensure_nonempty("domain", domain)?;

        let data = self
            .client
            .call(MODULE, "list_forwarders", &[("domain", domain.to_string())])
            .await?;
        serde_json::from_value(data).map_err(|e| {
            UapiError::InvalidResponse(format!("unexpected list_forwarders payload: {e}"))
        })
    }
}
