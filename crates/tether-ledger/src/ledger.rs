//! OptimisticLedger: presence-only markers for in-flight UI actions.
//!
//! The ledger is a set, not a queue: it keeps neither order nor counts. Marking
//! an already-pending action again collapses into the existing marker, and
//! consuming an absent marker returns `false` without side effects.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

/// Markers removed by [`OptimisticLedger::expire_older_than`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiredMarkers {
    pub user_input: bool,
    pub permissions: Vec<String>,
}

impl ExpiredMarkers {
    pub fn is_empty(&self) -> bool {
        !self.user_input && self.permissions.is_empty()
    }

    pub fn len(&self) -> usize {
        usize::from(self.user_input) + self.permissions.len()
    }
}

/// Pending optimistic markers, each stamped with the instant it was set.
#[derive(Debug, Default)]
pub struct OptimisticLedger {
    user_input: Option<Instant>,
    permissions: HashMap<String, Instant>,
}

impl OptimisticLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a user input as in flight. Idempotent; re-marking refreshes the stamp.
    pub fn mark_user_input_pending(&mut self) {
        self.user_input = Some(Instant::now());
    }

    /// Clear the user-input flag. Returns true iff it was set.
    pub fn consume_user_input_if_pending(&mut self) -> bool {
        self.user_input.take().is_some()
    }

    pub fn is_user_input_pending(&self) -> bool {
        self.user_input.is_some()
    }

    /// Record a permission decision awaiting its echo. Duplicates collapse.
    pub fn mark_permission_pending(&mut self, id: impl Into<String>) {
        self.permissions.insert(id.into(), Instant::now());
    }

    /// Remove a permission marker. Returns whether it was present.
    pub fn consume_permission_if_pending(&mut self, id: &str) -> bool {
        self.permissions.remove(id).is_some()
    }

    pub fn is_permission_pending(&self, id: &str) -> bool {
        self.permissions.contains_key(id)
    }

    pub fn pending_permission_count(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.user_input.is_none() && self.permissions.is_empty()
    }

    /// Drop every marker (session reset).
    pub fn clear(&mut self) {
        self.user_input = None;
        self.permissions.clear();
    }

    /// Remove markers that have been pending for longer than `ttl`.
    pub fn expire_older_than(&mut self, ttl: Duration) -> ExpiredMarkers {
        self.expire_older_than_at(Instant::now(), ttl)
    }

    /// [`Self::expire_older_than`] against an explicit clock reading.
    pub fn expire_older_than_at(&mut self, now: Instant, ttl: Duration) -> ExpiredMarkers {
        let is_stale = |marked: &Instant| now.saturating_duration_since(*marked) > ttl;

        let mut expired = ExpiredMarkers::default();
        if self.user_input.as_ref().is_some_and(is_stale) {
            self.user_input = None;
            expired.user_input = true;
        }

        self.permissions.retain(|id, marked| {
            if is_stale(marked) {
                expired.permissions.push(id.clone());
                false
            } else {
                true
            }
        });
        expired.permissions.sort();

        if !expired.is_empty() {
            debug!(
                user_input = expired.user_input,
                permissions = expired.permissions.len(),
                "expired stale optimistic markers"
            );
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_without_mark_is_noop() {
        let mut ledger = OptimisticLedger::new();
        assert!(!ledger.consume_user_input_if_pending());
        assert!(!ledger.consume_permission_if_pending("nope"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn duplicate_permission_marks_collapse() {
        let mut ledger = OptimisticLedger::new();
        ledger.mark_permission_pending("p1");
        ledger.mark_permission_pending("p1");
        assert_eq!(ledger.pending_permission_count(), 1);
        assert!(ledger.consume_permission_if_pending("p1"));
        assert!(!ledger.consume_permission_if_pending("p1"));
    }

    #[test]
    fn expiry_only_removes_old_markers() {
        let mut ledger = OptimisticLedger::new();
        ledger.mark_user_input_pending();
        ledger.mark_permission_pending("old");

        let later = Instant::now() + Duration::from_secs(10);
        let expired = ledger.expire_older_than_at(later, Duration::from_secs(5));
        assert!(expired.user_input);
        assert_eq!(expired.permissions, vec!["old".to_string()]);
        assert_eq!(expired.len(), 2);
        assert!(ledger.is_empty());
    }

    #[test]
    fn fresh_markers_survive_expiry() {
        let mut ledger = OptimisticLedger::new();
        ledger.mark_user_input_pending();
        ledger.mark_permission_pending("fresh");

        let expired = ledger.expire_older_than(Duration::from_secs(3600));
        assert!(expired.is_empty());
        assert!(ledger.is_user_input_pending());
        assert!(ledger.is_permission_pending("fresh"));
    }

    #[test]
    fn clear_drops_everything() {
        let mut ledger = OptimisticLedger::new();
        ledger.mark_user_input_pending();
        ledger.mark_permission_pending("a");
        ledger.mark_permission_pending("b");
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(!ledger.consume_user_input_if_pending());
    }
}
