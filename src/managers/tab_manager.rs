use crate::types::errors::TabError;
use crate::types::settings::DEFAULT_URL;
use crate::types::tab::{Tab, TabId};

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn add_tab(&mut self) -> TabId;
    fn close_tab(&mut self, tab_id: TabId) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError>;
    fn update_active_url(&mut self, url: &str) -> Result<TabId, TabError>;
    fn get_tab(&self, tab_id: TabId) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> Option<&Tab>;
    fn active_tab_id(&self) -> TabId;
    fn tab_count(&self) -> usize;
}

/// In-memory tab manager for the browser.
///
/// The tab list is never empty: it starts with one default tab and closing
/// the last tab replaces it with a fresh one.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: TabId,
    next_id: TabId,
    default_url: String,
}

impl TabManager {
    /// Creates a manager holding a single active tab at `default_url`.
    pub fn new(default_url: &str) -> Self {
        let mut mgr = Self {
            tabs: Vec::new(),
            active_tab_id: 0,
            next_id: 1,
            default_url: default_url.to_string(),
        };
        mgr.add_tab();
        mgr
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    fn allocate_id(&mut self) -> TabId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn find_tab_index(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl TabManagerTrait for TabManager {
    /// Append a tab at the default URL and make it active. Returns its ID.
    fn add_tab(&mut self) -> TabId {
        let id = self.allocate_id();
        self.tabs.push(Tab {
            id,
            url: self.default_url.clone(),
        });
        self.active_tab_id = id;
        id
    }

    /// Close a tab. If it was active, the first remaining tab becomes active.
    /// If it was the last tab, a new default tab takes its place.
    fn close_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or(TabError::NotFound(tab_id))?;
        self.tabs.remove(idx);

        if self.tabs.is_empty() {
            self.add_tab();
            return Ok(());
        }

        if self.active_tab_id == tab_id {
            self.active_tab_id = self.tabs[0].id;
        }
        Ok(())
    }

    fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id));
        }
        self.active_tab_id = tab_id;
        Ok(())
    }

    /// Replace the active tab's URL in place. Returns the active tab's ID.
    fn update_active_url(&mut self, url: &str) -> Result<TabId, TabError> {
        let active = self.active_tab_id;
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == active)
            .ok_or(TabError::NotFound(active))?;
        tab.url = url.to_string();
        Ok(active)
    }

    fn get_tab(&self, tab_id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.get_tab(self.active_tab_id)
    }

    fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
