//! Shared argument extraction for tool implementations.
//!
//! Tool arguments arrive as a JSON object. These helpers pull out the
//! fields a tool needs, producing [`ToolError::InvalidArgs`] before any
//! request goes out when a field is missing or has the wrong type.

use cpmail_uapi::UapiError;
use serde_json::Value;

use crate::registry::ToolError;

/// Extract a required string field.
pub(crate) fn require_str<'a>(args: &'a Value, field: &str) -> Result<&'a str, ToolError> {
    args.get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidArgs(format!("missing required field: {field}")))
}

/// Extract a required quota field: a non-negative integer in megabytes
/// (0 means unlimited).
pub(crate) fn require_quota(args: &Value) -> Result<u32, ToolError> {
    let value = args
        .get("quota")
        .ok_or_else(|| ToolError::InvalidArgs("missing required field: quota".into()))?;
    quota_from(value)
}

/// Extract an optional quota field, defaulting to 0 (unlimited).
pub(crate) fn optional_quota(args: &Value) -> Result<u32, ToolError> {
    match args.get("quota") {
        None | Some(Value::Null) => Ok(0),
        Some(value) => quota_from(value),
    }
}

fn quota_from(value: &Value) -> Result<u32, ToolError> {
    value
        .as_i64()
        .filter(|q| *q >= 0)
        .and_then(|q| u32::try_from(q).ok())
        .ok_or_else(|| ToolError::InvalidArgs("quota must be a non-negative integer".into()))
}

/// Map a client error onto the tool error taxonomy.
///
/// Validation failures stay [`ToolError::InvalidArgs`]; everything else
/// (transport, HTTP, remote API, parse) becomes `ExecutionFailed`
/// carrying the display text, so remote messages like "User already
/// exists" reach the agent verbatim.
pub(crate) fn uapi_error(err: UapiError) -> ToolError {
    match err {
        UapiError::InvalidArgument(msg) => ToolError::InvalidArgs(msg),
        other => ToolError::ExecutionFailed(other.to_string()),
    }
}
