//! Bonzi Browser RPC Server: line-delimited JSON over stdin/stdout.
//!
//! Request:  {"id":1, "method":"navigate", "params":{"url":"https://a.com"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use bonzi_browser::app::BrowserShell;
use bonzi_browser::rpc_handler::handle_method;
use bonzi_browser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use bonzi_browser::telemetry;

use serde_json::{json, Value};

fn emit(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> ExitCode {
    let mut engine = SettingsEngine::new(None);
    let config = match engine.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bonzi-rpc: {}", e);
            return ExitCode::FAILURE;
        }
    };
    telemetry::init_tracing(&config.log_level);

    let shell = match BrowserShell::open(&engine) {
        Ok(shell) => Mutex::new(shell),
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize browser shell");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if emit(&mut out, &ready).is_err() {
        return ExitCode::FAILURE;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));
                match handle_method(&shell, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => json!({"id": id, "error": err}),
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if emit(&mut out, &response).is_err() {
            break;
        }
    }

    tracing::info!("Input closed, shutting down");
    ExitCode::SUCCESS
}
