//! Bookmark Manager for Bonzi Browser.
//!
//! Bookmarks are plain URLs with set semantics, kept in the order they were
//! added so the bookmark bar stays stable.

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    /// Adds `url` if absent, removes it if present. Returns whether it is bookmarked afterwards.
    fn toggle_bookmark(&mut self, url: &str) -> bool;
    fn is_bookmarked(&self, url: &str) -> bool;
    fn list_bookmarks(&self) -> &[String];
    fn bookmark_count(&self) -> usize;
}

/// In-memory bookmark set.
#[derive(Debug, Clone, Default)]
pub struct BookmarkManager {
    bookmarks: Vec<String>,
}

impl BookmarkManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from stored URLs, keeping the first occurrence of any duplicate.
    pub fn from_urls(urls: Vec<String>) -> Self {
        let mut bookmarks: Vec<String> = Vec::with_capacity(urls.len());
        for url in urls {
            if !bookmarks.contains(&url) {
                bookmarks.push(url);
            }
        }
        Self { bookmarks }
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn toggle_bookmark(&mut self, url: &str) -> bool {
        if let Some(pos) = self.bookmarks.iter().position(|b| b == url) {
            self.bookmarks.remove(pos);
            false
        } else {
            self.bookmarks.push(url.to_string());
            true
        }
    }

    fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b == url)
    }

    fn list_bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }
}
