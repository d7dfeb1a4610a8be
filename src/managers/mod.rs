// Bonzi Browser state managers
// Managers own one slice of shell state each: tabs, bookmarks, history, and
// the gateway that mirrors bookmarks and history to storage.

pub mod bookmark_manager;
pub mod history_manager;
pub mod persistence;
pub mod tab_manager;
