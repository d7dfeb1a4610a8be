//! History Manager for Bonzi Browser.
//!
//! An append-only log of visited URLs. Repeat visits are recorded again.

/// Trait defining browsing history operations.
pub trait HistoryManagerTrait {
    fn record_visit(&mut self, url: &str);
    fn list_history(&self) -> &[String];
    fn last_visit(&self) -> Option<&str>;
    fn history_count(&self) -> usize;
}

/// In-memory history log, oldest entry first.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    entries: Vec<String>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl HistoryManagerTrait for HistoryManager {
    fn record_visit(&mut self, url: &str) {
        self.entries.push(url.to_string());
    }

    fn list_history(&self) -> &[String] {
        &self.entries
    }

    fn last_visit(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    fn history_count(&self) -> usize {
        self.entries.len()
    }
}
