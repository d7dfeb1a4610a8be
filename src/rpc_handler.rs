//! RPC method handler for the Bonzi Browser JSON protocol.
//!
//! Shared by the `bonzi-rpc` stdin/stdout server and the WebView IPC channel.
//! Every mutating method maps onto one [`ShellAction`] and answers with the
//! resulting [`ShellView`](crate::types::view::ShellView).

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::{BrowserShell, ShellAction};
use crate::types::errors::ShellError;
use crate::types::tab::TabId;

/// Dispatch a method call to the shell.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// A failed storage write still answers with the view, since the in-memory
/// change has already been applied.
pub fn handle_method(shell: &Mutex<BrowserShell>, method: &str, params: &Value) -> Result<Value, String> {
    if method == "ping" {
        return Ok(json!({"pong": true}));
    }

    let action = match method {
        "state.get" => None,
        "tab.add" => Some(ShellAction::AddTab),
        "tab.close" => Some(ShellAction::CloseTab(tab_id_param(params)?)),
        "tab.select" => Some(ShellAction::SelectTab(tab_id_param(params)?)),
        "address.set" => Some(ShellAction::EditAddress(str_param(params, "text")?)),
        "address.go" => Some(ShellAction::Go),
        "navigate" => Some(ShellAction::Navigate(str_param(params, "url")?)),
        "bookmark.toggle" => Some(ShellAction::ToggleBookmark),
        _ => return Err(format!("unknown method: {}", method)),
    };

    let mut s = shell.lock().map_err(|e| e.to_string())?;
    if let Some(action) = action {
        match s.dispatch(action) {
            Ok(()) => {}
            Err(ShellError::Storage(e)) => {
                tracing::warn!(method, error = %e, "Change not persisted");
            }
            Err(e) => return Err(e.to_string()),
        }
    }
    serde_json::to_value(s.view()).map_err(|e| e.to_string())
}

fn tab_id_param(params: &Value) -> Result<TabId, String> {
    params
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| "missing id".to_string())
}

fn str_param(params: &Value, key: &str) -> Result<String, String> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("missing {}", key))
}
