//! Bonzi Browser — a minimal tabbed browser shell.
//!
//! Entry point: opens the WebView shell window.
//! When built without the `gui` feature, runs a console demo of the shell.

#[cfg(feature = "gui")]
fn main() -> std::process::ExitCode {
    match bonzi_browser::ui::webview_app::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bonzi-browser: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use bonzi_browser::app::{BrowserShell, ShellAction};
    use bonzi_browser::database::MemoryStore;
    use bonzi_browser::telemetry;
    use bonzi_browser::types::settings::ShellConfig;

    let config = ShellConfig::default();
    telemetry::init_tracing(&config.log_level);

    println!();
    println!("  Bonzi Browser v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    let store = MemoryStore::new();
    let mut shell = BrowserShell::new(&config, Box::new(store.clone()));
    print_state("Startup", &shell);

    let script = [
        ShellAction::Navigate("https://a.com".to_string()),
        ShellAction::ToggleBookmark,
        ShellAction::AddTab,
        ShellAction::EditAddress("https://rust-lang.org".to_string()),
        ShellAction::Go,
        ShellAction::AddTab,
    ];
    for action in script {
        let label = format!("{:?}", action);
        shell.dispatch(action).expect("demo action failed");
        print_state(&label, &shell);
    }

    if let Some(first) = shell.tabs().first().map(|t| t.id) {
        shell.dispatch(ShellAction::SelectTab(first)).expect("select failed");
        print_state("Select first tab", &shell);
    }

    let active = shell.active_tab_id();
    shell.dispatch(ShellAction::CloseTab(active)).expect("close failed");
    print_state("Close active tab", &shell);

    let reloaded = BrowserShell::new(&config, Box::new(store));
    println!("  Reloaded from storage:");
    println!("    bookmarks = {:?}", reloaded.bookmarks());
    println!("    history   = {:?}", reloaded.history());
    println!();
}

#[cfg(not(feature = "gui"))]
fn print_state(step: &str, shell: &bonzi_browser::app::BrowserShell) {
    println!("───────────────────────────────────────────────");
    println!("  {}", step);
    for tab in shell.tabs() {
        let marker = if tab.id == shell.active_tab_id() { "*" } else { " " };
        println!("   {} {} {}", marker, tab.label(), tab.url);
    }
    println!("    address   = {}", shell.address());
    println!("    bookmarks = {:?}", shell.bookmarks());
    println!("    history   = {:?}", shell.history());
}
