//! Render-ready snapshot of the browser shell.
//!
//! The view layer (WebView page or RPC client) only ever sees a [`ShellView`];
//! it never reaches into the managers directly.

use serde::{Deserialize, Serialize};

use super::tab::TabId;

/// One button in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub id: TabId,
    pub label: String,
    pub url: String,
    pub active: bool,
}

/// Complete state needed to draw the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellView {
    pub tabs: Vec<TabView>,
    pub active_id: TabId,
    pub address: String,
    /// Whether the current address text is in the bookmark set.
    pub bookmarked: bool,
    pub bookmarks: Vec<String>,
    pub history: Vec<String>,
    /// URL handed to the content frame, i.e. the active tab's URL.
    pub frame_url: Option<String>,
}
