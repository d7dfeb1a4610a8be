//! WebView-based shell window using `wry` + `tao`.
//!
//! - The shell page is served over the `bonzi://` custom protocol.
//! - JS → Rust: `window.ipc.postMessage({"method", "params"})`, handled by
//!   [`handle_method`], the same dispatcher the RPC server uses.
//! - Rust → JS: `evaluate_script("__bonzi_render(<ShellView>)")`.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::app::BrowserShell;
use crate::rpc_handler::handle_method;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::telemetry;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

const SHELL_HTML: &str = include_str!("../../resources/ui/shell.html");
const SHELL_CSS: &str = include_str!("../../resources/ui/shell.css");
const SHELL_JS: &str = include_str!("../../resources/ui/shell.js");

fn shell_page(title: &str) -> String {
    let mut html = String::with_capacity(SHELL_HTML.len() + SHELL_CSS.len() + SHELL_JS.len() + 256);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>");
    html.push_str(title);
    html.push_str("</title><style>");
    html.push_str(SHELL_CSS);
    html.push_str("</style></head><body>");
    html.push_str(SHELL_HTML);
    html.push_str("<script>");
    html.push_str(SHELL_JS);
    html.push_str("</script></body></html>");
    html
}

/// Turns one IPC message into the script that redraws the page.
fn handle_ipc(shell: &Mutex<BrowserShell>, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Dropping malformed IPC message");
            return None;
        }
    };
    let method = msg.get("method")?.as_str()?;
    let params = msg.get("params").cloned().unwrap_or(serde_json::json!({}));

    match handle_method(shell, method, &params) {
        Ok(view) => Some(UserEvent::EvalScript(format!(
            "if(window.__bonzi_render)__bonzi_render({})",
            view
        ))),
        Err(err) => {
            warn!(method, error = %err, "IPC call failed");
            None
        }
    }
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = SettingsEngine::new(None);
    let config = engine.load()?;
    telemetry::init_tracing(&config.log_level);

    let shell = Arc::new(Mutex::new(BrowserShell::open(&engine)?));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            f64::from(config.window_width),
            f64::from(config.window_height),
        ))
        .build(&event_loop)?;

    let page = shell_page(&config.window_title);
    let ipc_shell = shell.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("bonzi".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(page.clone().into_bytes().into())
                .unwrap_or_else(|_| wry::http::Response::new(Vec::new().into()))
        })
        .with_url("bonzi://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let preview: String = body.chars().take(200).collect();
            debug!(%preview, "IPC");
            if let Some(event) = handle_ipc(&ipc_shell, body) {
                let _ = proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("Failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    info!("Window open");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Window closed, exiting");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    warn!(error = %e, "evaluate_script failed");
                }
            }

            _ => {}
        }
    });
}
