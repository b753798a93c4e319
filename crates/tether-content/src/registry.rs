//! VirtualContentRegistry: synthetic identifier → text, concurrent via DashMap.
//!
//! Entries never expire on their own. The owner must call
//! [`VirtualContentRegistry::clear_all`] at session boundaries.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct ContentEntry {
    content: String,
    seq: u64,
}

/// Thread-safe store of virtual document bodies.
#[derive(Debug, Default)]
pub struct VirtualContentRegistry {
    entries: DashMap<String, ContentEntry>,
    next_seq: AtomicU64,
}

impl VirtualContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the body for `id`.
    pub fn store(&self, id: impl Into<String>, content: impl Into<String>) {
        let id = id.into();
        let content = content.into();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        debug!(id = %id, bytes = content.len(), "storing virtual content");
        self.entries.insert(id, ContentEntry { content, seq });
    }

    /// The stored body, or `None` if it was never created or has been cleared.
    pub fn get(&self, id: &str) -> Option<String> {
        self.entries.get(id).map(|entry| entry.content.clone())
    }

    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Remove one entry. Returns whether anything was removed.
    pub fn clear(&self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Remove every entry. Returns how many were removed.
    pub fn clear_all(&self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        if removed > 0 {
            debug!(removed, "cleared virtual content registry");
        }
        removed
    }

    /// Identifiers ordered by when their current body was stored.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<(u64, String)> = self
            .entries
            .iter()
            .map(|r| (r.value().seq, r.key().clone()))
            .collect();
        ids.sort_unstable_by_key(|(seq, _)| *seq);
        ids.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_get() {
        let registry = VirtualContentRegistry::new();
        registry.store("diff://a", "- x\n+ y");
        assert_eq!(registry.get("diff://a").as_deref(), Some("- x\n+ y"));
        assert!(registry.has("diff://a"));
    }

    #[test]
    fn empty_content_is_stored() {
        let registry = VirtualContentRegistry::new();
        registry.store("diff://empty", "");
        assert_eq!(registry.get("diff://empty").as_deref(), Some(""));
    }

    #[test]
    fn overwrite_replaces_and_reorders() {
        let registry = VirtualContentRegistry::new();
        registry.store("a", "1");
        registry.store("b", "2");
        registry.store("a", "3");
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.get("a").as_deref(), Some("3"));
        assert_eq!(registry.ids(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn clear_is_noop_when_absent() {
        let registry = VirtualContentRegistry::new();
        assert!(!registry.clear("missing"));
        registry.store("present", "x");
        assert!(registry.clear("present"));
        assert!(!registry.has("present"));
    }

    #[test]
    fn clear_all_reports_removed() {
        let registry = VirtualContentRegistry::new();
        registry.store("a", "1");
        registry.store("b", "2");
        assert_eq!(registry.clear_all(), 2);
        assert_eq!(registry.count(), 0);
        assert_eq!(registry.clear_all(), 0);
    }
}
