//! Agent-callable email administration tools for cpmail.
//!
//! Exposes the nine cPanel email operations as implementations of the
//! [`Tool`](registry::Tool) trait, dispatched by name through a
//! [`ToolRegistry`](registry::ToolRegistry).
//!
//! # Tools
//!
//! - **Account tools** ([`account_tools`]): `add_email_account`,
//!   `delete_email_account`, `list_email_accounts`, `change_password`,
//!   `update_quota`, `get_email_settings`
//! - **Forwarder tools** ([`forwarder_tools`]): `create_email_forwarder`,
//!   `delete_email_forwarder`, `list_email_forwarders`
//!
//! Every tool validates its arguments locally before anything goes on
//! the wire, and each invocation is exactly one round trip against the
//! remote UAPI.

pub mod account_tools;
pub mod forwarder_tools;
mod params;
pub mod registry;

use std::sync::Arc;

use cpmail_uapi::EmailApi;

use crate::registry::ToolRegistry;

/// Register all nine email tools with the given registry.
///
/// All tools share the same [`EmailApi`] handle (and with it one pooled
/// HTTP client and one immutable configuration).
pub fn register_all(registry: &mut ToolRegistry, api: Arc<EmailApi>) {
    registry.register(Arc::new(account_tools::AddEmailAccountTool::new(
        api.clone(),
    )));
    registry.register(Arc::new(account_tools::DeleteEmailAccountTool::new(
        api.clone(),
    )));
    registry.register(Arc::new(account_tools::ListEmailAccountsTool::new(
        api.clone(),
    )));
    registry.register(Arc::new(account_tools::ChangePasswordTool::new(
        api.clone(),
    )));
    registry.register(Arc::new(account_tools::UpdateQuotaTool::new(api.clone())));
    registry.register(Arc::new(account_tools::GetEmailSettingsTool::new(
        api.clone(),
    )));
    registry.register(Arc::new(forwarder_tools::CreateEmailForwarderTool::new(
        api.clone(),
    )));
    registry.register(Arc::new(forwarder_tools::DeleteEmailForwarderTool::new(
        api.clone(),
    )));
    registry.register(Arc::new(forwarder_tools::ListEmailForwardersTool::new(
        api,
    )));
}
