//! Property-based tests for the storage round-trip: whatever the shell
//! persisted is reloaded verbatim by the next shell on the same storage.

use bonzi_browser::app::BrowserShell;
use bonzi_browser::database::{MemoryStore, SqliteStore};
use bonzi_browser::managers::persistence::PersistenceGateway;
use bonzi_browser::types::settings::ShellConfig;
use proptest::prelude::*;

fn arb_urls() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,40}", 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn gateway_roundtrip_memory(bookmarks in arb_urls(), history in arb_urls()) {
        let store = MemoryStore::new();
        let mut gw = PersistenceGateway::new(Box::new(store.clone()));
        gw.save_bookmarks(&bookmarks).unwrap();
        gw.save_history(&history).unwrap();

        let reloaded = PersistenceGateway::new(Box::new(store));
        prop_assert_eq!(reloaded.load_bookmarks(), bookmarks);
        prop_assert_eq!(reloaded.load_history(), history);
    }

    #[test]
    fn gateway_roundtrip_sqlite(history in arb_urls()) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bonzi.db");
        {
            let mut gw = PersistenceGateway::new(Box::new(SqliteStore::open(&path).unwrap()));
            gw.save_history(&history).unwrap();
        }
        let gw = PersistenceGateway::new(Box::new(SqliteStore::open(&path).unwrap()));
        prop_assert_eq!(gw.load_history(), history);
    }

    #[test]
    fn shell_restart_restores_collections(
        visits in prop::collection::vec("https://[a-z]{1,6}\\.com", 0..15),
        starred in prop::collection::vec("https://[a-z]{1,6}\\.com", 0..15),
    ) {
        let store = MemoryStore::new();
        let mut shell = BrowserShell::new(&ShellConfig::default(), Box::new(store.clone()));
        for url in &visits {
            shell.navigate(url).unwrap();
        }
        for url in &starred {
            shell.toggle_bookmark(url).unwrap();
        }

        let reloaded = BrowserShell::new(&ShellConfig::default(), Box::new(store));
        prop_assert_eq!(reloaded.history(), shell.history());
        prop_assert_eq!(reloaded.bookmarks(), shell.bookmarks());
    }
}
