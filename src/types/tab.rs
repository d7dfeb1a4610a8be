use serde::{Deserialize, Serialize};

/// Identifier of an open tab. Allocated from a per-session counter.
pub type TabId = u64;

/// Represents a browser tab: an independent browsing context with its own URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
}

impl Tab {
    /// Label shown on the tab button.
    pub fn label(&self) -> String {
        format!("Tab {}", self.id)
    }
}
