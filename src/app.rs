//! App Core for Bonzi Browser.
//!
//! [`BrowserShell`] is the single owner of shell state: the tab set, the
//! active tab, the bookmark set, the history log and the address field. UI
//! events arrive as [`ShellAction`]s through [`BrowserShell::dispatch`]; the
//! view layer reads a [`ShellView`] snapshot back.

use tracing::{debug, error, info};

use crate::database::{KeyValueStore, SqliteStore};
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::persistence::PersistenceGateway;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::{ShellError, StorageError};
use crate::types::settings::ShellConfig;
use crate::types::tab::{Tab, TabId};
use crate::types::view::{ShellView, TabView};

/// A discrete UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// "+" button.
    AddTab,
    /// "×" on a tab button.
    CloseTab(TabId),
    /// Clicking a tab button.
    SelectTab(TabId),
    /// Typing in the address input.
    EditAddress(String),
    /// "Go" button: navigate to the current address text.
    Go,
    /// Navigate to a given URL, e.g. clicking a bookmark.
    Navigate(String),
    /// Star button: toggle the current address text in the bookmark set.
    ToggleBookmark,
}

/// Central application struct holding all shell state.
pub struct BrowserShell {
    tabs: TabManager,
    bookmarks: BookmarkManager,
    history: HistoryManager,
    address: String,
    persistence: PersistenceGateway,
}

impl BrowserShell {
    /// Creates a shell with one default tab, loading bookmarks and history from `store`.
    pub fn new(config: &ShellConfig, store: Box<dyn KeyValueStore + Send>) -> Self {
        let persistence = PersistenceGateway::new(store);
        let bookmarks = BookmarkManager::from_urls(persistence.load_bookmarks());
        let history = HistoryManager::from_entries(persistence.load_history());
        let tabs = TabManager::new(&config.default_url);

        info!(
            bookmarks = bookmarks.bookmark_count(),
            history = history.history_count(),
            "Browser shell ready"
        );

        Self {
            tabs,
            bookmarks,
            history,
            address: config.default_url.clone(),
            persistence,
        }
    }

    /// Opens the SQLite store named by an already loaded `engine`.
    pub fn open(engine: &SettingsEngine) -> Result<Self, ShellError> {
        let db_path = engine.resolve_db_path();
        let store = SqliteStore::open(&db_path)?;
        Ok(Self::new(engine.get_settings(), Box::new(store)))
    }

    /// Applies one UI event.
    ///
    /// When a storage write fails the in-memory change is kept and the error
    /// is returned.
    pub fn dispatch(&mut self, action: ShellAction) -> Result<(), ShellError> {
        debug!(?action, "Dispatching action");
        match action {
            ShellAction::AddTab => {
                self.add_tab();
            }
            ShellAction::CloseTab(id) => self.close_tab(id)?,
            ShellAction::SelectTab(id) => self.select_tab(id)?,
            ShellAction::EditAddress(text) => self.set_address(&text),
            ShellAction::Go => {
                let url = self.address.clone();
                self.navigate(&url)?;
            }
            ShellAction::Navigate(url) => self.navigate(&url)?,
            ShellAction::ToggleBookmark => {
                let url = self.address.clone();
                self.toggle_bookmark(&url)?;
            }
        }
        Ok(())
    }

    /// Opens a default tab, makes it active and resets the address field.
    pub fn add_tab(&mut self) -> TabId {
        let id = self.tabs.add_tab();
        self.address = self.tabs.default_url().to_string();
        id
    }

    /// Closes a tab, syncing the address field if the active tab changed.
    pub fn close_tab(&mut self, id: TabId) -> Result<(), ShellError> {
        let was_active = self.tabs.active_tab_id() == id;
        self.tabs.close_tab(id)?;
        if was_active {
            self.sync_address_to_active();
        }
        Ok(())
    }

    /// Focuses a tab and shows its URL in the address field. History is untouched.
    pub fn select_tab(&mut self, id: TabId) -> Result<(), ShellError> {
        self.tabs.switch_tab(id)?;
        self.sync_address_to_active();
        Ok(())
    }

    pub fn set_address(&mut self, text: &str) {
        self.address = text.to_string();
    }

    /// Points the active tab at `url`, records the visit and updates the address field.
    ///
    /// The URL is taken verbatim.
    pub fn navigate(&mut self, url: &str) -> Result<(), ShellError> {
        self.tabs.update_active_url(url)?;
        self.history.record_visit(url);
        self.address = url.to_string();
        let result = self.persistence.save_history(self.history.list_history());
        Self::log_write_failure("history", &result);
        Ok(result?)
    }

    /// Adds or removes `url` from the bookmark set. Returns whether it is now bookmarked.
    pub fn toggle_bookmark(&mut self, url: &str) -> Result<bool, ShellError> {
        let bookmarked = self.bookmarks.toggle_bookmark(url);
        let result = self.persistence.save_bookmarks(self.bookmarks.list_bookmarks());
        Self::log_write_failure("bookmarks", &result);
        result?;
        Ok(bookmarked)
    }

    fn sync_address_to_active(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab() {
            self.address = tab.url.clone();
        }
    }

    fn log_write_failure(what: &str, result: &Result<(), StorageError>) {
        if let Err(e) = result {
            error!(what, error = %e, "Failed to persist");
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        self.tabs.get_all_tabs()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get_active_tab()
    }

    pub fn active_tab_id(&self) -> TabId {
        self.tabs.active_tab_id()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn bookmarks(&self) -> &[String] {
        self.bookmarks.list_bookmarks()
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.is_bookmarked(url)
    }

    pub fn history(&self) -> &[String] {
        self.history.list_history()
    }

    /// Snapshot of everything the view layer draws.
    pub fn view(&self) -> ShellView {
        let active_id = self.tabs.active_tab_id();
        ShellView {
            tabs: self
                .tabs
                .get_all_tabs()
                .iter()
                .map(|t| TabView {
                    id: t.id,
                    label: t.label(),
                    url: t.url.clone(),
                    active: t.id == active_id,
                })
                .collect(),
            active_id,
            address: self.address.clone(),
            bookmarked: self.bookmarks.is_bookmarked(&self.address),
            bookmarks: self.bookmarks.list_bookmarks().to_vec(),
            history: self.history.list_history().to_vec(),
            frame_url: self.tabs.get_active_tab().map(|t| t.url.clone()),
        }
    }
}
