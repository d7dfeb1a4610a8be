//! Bonzi Browser UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering. The shell page (tab strip,
//! address bar, bookmark and history lists) is plain HTML/CSS/JS; the page
//! content is an `<iframe>` pointed at the active tab's URL. The page talks to
//! Rust through wry IPC and is redrawn from `ShellView` JSON.

pub mod webview_app;
