//! Tests for the BrowserShell reducer: every UI action, the address field,
//! and persistence after each mutation.

use bonzi_browser::app::{BrowserShell, ShellAction};
use bonzi_browser::database::{KeyValueStore, MemoryStore};
use bonzi_browser::managers::persistence::{BOOKMARKS_KEY, HISTORY_KEY};
use bonzi_browser::types::errors::{ShellError, StorageError, TabError};
use bonzi_browser::types::settings::ShellConfig;

fn setup() -> (BrowserShell, MemoryStore) {
    let store = MemoryStore::new();
    let shell = BrowserShell::new(&ShellConfig::default(), Box::new(store.clone()));
    (shell, store)
}

/// Store whose writes always fail.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("read-only".to_string()))
    }
}

#[test]
fn test_initial_state() {
    let (shell, _) = setup();
    assert_eq!(shell.tabs().len(), 1);
    assert_eq!(shell.active_tab().unwrap().url, "https://example.com");
    assert_eq!(shell.address(), "https://example.com");
    assert!(shell.bookmarks().is_empty());
    assert!(shell.history().is_empty());
}

#[test]
fn test_navigate_scenario() {
    let (mut shell, _) = setup();
    shell.navigate("https://a.com").unwrap();
    assert_eq!(shell.active_tab().unwrap().url, "https://a.com");
    assert_eq!(shell.history(), ["https://a.com"]);
    assert_eq!(shell.address(), "https://a.com");
}

#[test]
fn test_add_tab_twice_scenario() {
    let (mut shell, _) = setup();
    let a = shell.add_tab();
    let b = shell.add_tab();
    assert_eq!(shell.tabs().len(), 3);
    assert_ne!(a, b);
    assert_eq!(shell.active_tab_id(), b);
}

#[test]
fn test_add_tab_resets_address() {
    let (mut shell, _) = setup();
    shell.dispatch(ShellAction::EditAddress("typing...".into())).unwrap();
    shell.dispatch(ShellAction::AddTab).unwrap();
    assert_eq!(shell.address(), "https://example.com");
}

#[test]
fn test_select_tab_syncs_address_without_history() {
    let (mut shell, _) = setup();
    shell.navigate("https://a.com").unwrap();
    shell.add_tab();
    shell.dispatch(ShellAction::SelectTab(1)).unwrap();

    assert_eq!(shell.active_tab_id(), 1);
    assert_eq!(shell.address(), "https://a.com");
    assert_eq!(shell.history().len(), 1);
}

#[test]
fn test_close_active_tab_syncs_address_to_first_remaining() {
    let (mut shell, _) = setup();
    shell.navigate("https://a.com").unwrap();
    let b = shell.add_tab();
    shell.dispatch(ShellAction::CloseTab(b)).unwrap();

    assert_eq!(shell.active_tab_id(), 1);
    assert_eq!(shell.address(), "https://a.com");
}

#[test]
fn test_close_inactive_tab_leaves_address() {
    let (mut shell, _) = setup();
    let b = shell.add_tab();
    shell.dispatch(ShellAction::EditAddress("draft".into())).unwrap();
    shell.dispatch(ShellAction::CloseTab(1)).unwrap();

    assert_eq!(shell.active_tab_id(), b);
    assert_eq!(shell.address(), "draft");
}

#[test]
fn test_close_last_tab_opens_default_tab() {
    let (mut shell, _) = setup();
    shell.navigate("https://a.com").unwrap();
    shell.dispatch(ShellAction::CloseTab(1)).unwrap();

    assert_eq!(shell.tabs().len(), 1);
    let active = shell.active_tab().unwrap();
    assert_ne!(active.id, 1);
    assert_eq!(active.url, "https://example.com");
    assert_eq!(shell.address(), "https://example.com");
}

#[test]
fn test_unknown_tab_is_reported() {
    let (mut shell, _) = setup();
    let err = shell.dispatch(ShellAction::SelectTab(9)).unwrap_err();
    assert!(matches!(err, ShellError::Tab(TabError::NotFound(9))));
}

#[test]
fn test_go_navigates_to_address_text() {
    let (mut shell, _) = setup();
    shell.dispatch(ShellAction::EditAddress("https://b.com".into())).unwrap();
    shell.dispatch(ShellAction::Go).unwrap();
    assert_eq!(shell.active_tab().unwrap().url, "https://b.com");
    assert_eq!(shell.history(), ["https://b.com"]);
}

#[test]
fn test_go_accepts_any_text() {
    let (mut shell, _) = setup();
    shell.dispatch(ShellAction::EditAddress(String::new())).unwrap();
    shell.dispatch(ShellAction::Go).unwrap();
    assert_eq!(shell.active_tab().unwrap().url, "");
    assert_eq!(shell.history(), [""]);
}

#[test]
fn test_toggle_bookmark_uses_address_text() {
    let (mut shell, _) = setup();
    shell.dispatch(ShellAction::ToggleBookmark).unwrap();
    assert_eq!(shell.bookmarks(), ["https://example.com"]);
    assert!(shell.view().bookmarked);

    shell.dispatch(ShellAction::ToggleBookmark).unwrap();
    assert!(shell.bookmarks().is_empty());
    assert!(!shell.view().bookmarked);
}

#[test]
fn test_clicking_bookmark_navigates() {
    let (mut shell, _) = setup();
    shell.toggle_bookmark("https://saved.com").unwrap();
    shell.dispatch(ShellAction::Navigate("https://saved.com".into())).unwrap();
    assert_eq!(shell.active_tab().unwrap().url, "https://saved.com");
    assert_eq!(shell.history().last().map(String::as_str), Some("https://saved.com"));
}

#[test]
fn test_mutations_are_persisted() {
    let (mut shell, store) = setup();
    shell.navigate("https://a.com").unwrap();
    shell.navigate("https://a.com").unwrap();
    shell.toggle_bookmark("https://a.com").unwrap();

    assert_eq!(
        store.get(HISTORY_KEY).unwrap().as_deref(),
        Some(r#"["https://a.com","https://a.com"]"#)
    );
    assert_eq!(store.get(BOOKMARKS_KEY).unwrap().as_deref(), Some(r#"["https://a.com"]"#));
}

#[test]
fn test_tab_actions_do_not_touch_storage() {
    let (mut shell, store) = setup();
    shell.add_tab();
    shell.dispatch(ShellAction::SelectTab(1)).unwrap();
    shell.dispatch(ShellAction::EditAddress("x".into())).unwrap();
    assert!(store.get(HISTORY_KEY).unwrap().is_none());
    assert!(store.get(BOOKMARKS_KEY).unwrap().is_none());
}

#[test]
fn test_restart_reloads_bookmarks_and_history() {
    let (mut shell, store) = setup();
    shell.navigate("https://a.com").unwrap();
    shell.navigate("https://b.com").unwrap();
    shell.toggle_bookmark("https://b.com").unwrap();

    let reloaded = BrowserShell::new(&ShellConfig::default(), Box::new(store));
    assert_eq!(reloaded.history(), ["https://a.com", "https://b.com"]);
    assert_eq!(reloaded.bookmarks(), ["https://b.com"]);
    // Tabs are not persisted.
    assert_eq!(reloaded.tabs().len(), 1);
    assert_eq!(reloaded.active_tab().unwrap().url, "https://example.com");
}

#[test]
fn test_failed_write_keeps_state_and_reports() {
    let mut shell = BrowserShell::new(&ShellConfig::default(), Box::new(ReadOnlyStore));
    let err = shell.navigate("https://a.com").unwrap_err();
    assert!(matches!(err, ShellError::Storage(_)));
    assert_eq!(shell.history(), ["https://a.com"]);
    assert_eq!(shell.active_tab().unwrap().url, "https://a.com");

    assert!(shell.toggle_bookmark("https://a.com").is_err());
    assert_eq!(shell.bookmarks(), ["https://a.com"]);
}

#[test]
fn test_configured_default_url() {
    let config = ShellConfig {
        default_url: "about:blank".into(),
        ..ShellConfig::default()
    };
    let mut shell = BrowserShell::new(&config, Box::new(MemoryStore::new()));
    assert_eq!(shell.address(), "about:blank");
    shell.add_tab();
    assert_eq!(shell.active_tab().unwrap().url, "about:blank");
}

#[test]
fn test_view_snapshot() {
    let (mut shell, _) = setup();
    shell.navigate("https://a.com").unwrap();
    let b = shell.add_tab();

    let view = shell.view();
    assert_eq!(view.active_id, b);
    assert_eq!(view.tabs.len(), 2);
    assert_eq!(view.tabs[0].label, "Tab 1");
    assert!(!view.tabs[0].active);
    assert!(view.tabs[1].active);
    assert_eq!(view.frame_url.as_deref(), Some("https://example.com"));
    assert_eq!(view.history, vec!["https://a.com".to_string()]);
}
