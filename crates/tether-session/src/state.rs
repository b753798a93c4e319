//! SessionState: the authoritative, replayable view of the conversation.

use tether_core::models::{
    EntryKind, PermissionStatus, RateLimitSnapshot, SessionSnapshot, TranscriptEntry,
    UsageSummary,
};

/// Conversation state owned by the controller. Mutated only through the
/// controller; containers only ever see snapshots and deltas.
#[derive(Debug, Default)]
pub struct SessionState {
    entries: Vec<TranscriptEntry>,
    processing: bool,
    usage: UsageSummary,
    rate_limits: Option<RateLimitSnapshot>,
    last_error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full copy for replay into a newly bound container.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            entries: self.entries.clone(),
            processing: self.processing,
            usage: self.usage.clone(),
            rate_limits: self.rate_limits.clone(),
            last_error: self.last_error.clone(),
        }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn processing(&self) -> bool {
        self.processing
    }

    pub fn usage(&self) -> &UsageSummary {
        &self.usage
    }

    pub fn rate_limits(&self) -> Option<&RateLimitSnapshot> {
        self.rate_limits.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Append an entry and return a copy for pushing.
    pub fn append(&mut self, entry: TranscriptEntry) -> TranscriptEntry {
        self.entries.push(entry.clone());
        entry
    }

    /// Record user input the UI has already rendered. Returns the entry id.
    pub fn push_optimistic_user(&mut self, text: impl Into<String>) -> String {
        let entry = TranscriptEntry::optimistic_user(text);
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// Confirm the unconfirmed user entry echoed as `text`, adopting the
    /// backend's id when one is given.
    ///
    /// The oldest entry with equal text wins. With `fallback_to_oldest` and no
    /// text match, the oldest unconfirmed user entry is confirmed instead.
    /// Returns false if nothing was confirmed.
    pub fn confirm_optimistic_user(
        &mut self,
        text: &str,
        backend_id: Option<String>,
        fallback_to_oldest: bool,
    ) -> bool {
        let index = self
            .entries
            .iter()
            .position(|e| e.optimistic && e.is_user() && e.text == text)
            .or_else(|| {
                fallback_to_oldest
                    .then(|| self.entries.iter().position(|e| e.optimistic && e.is_user()))
                    .flatten()
            });
        let Some(entry) = index.map(|i| &mut self.entries[i]) else {
            return false;
        };
        entry.optimistic = false;
        if let Some(id) = backend_id {
            entry.id = id;
        }
        true
    }

    /// Remove the most recent unconfirmed user entry. Returns its id.
    pub fn retract_optimistic_user(&mut self) -> Option<String> {
        let index = self
            .entries
            .iter()
            .rposition(|e| e.optimistic && e.is_user())?;
        Some(self.entries.remove(index).id)
    }

    /// Set the status of the permission entry for `request_id`. Returns the
    /// updated entry, or `None` if no such request is in the transcript.
    pub fn set_permission_status(
        &mut self,
        request_id: &str,
        new_status: PermissionStatus,
    ) -> Option<TranscriptEntry> {
        let entry = self
            .entries
            .iter_mut()
            .rev()
            .find(|e| e.permission_request_id() == Some(request_id))?;
        if let EntryKind::Permission { status, .. } = &mut entry.kind {
            *status = new_status;
        }
        Some(entry.clone())
    }

    pub fn set_usage(&mut self, usage: UsageSummary) {
        self.usage = usage;
    }

    pub fn set_processing(&mut self, processing: bool) {
        self.processing = processing;
    }

    pub fn set_rate_limits(&mut self, snapshot: RateLimitSnapshot) {
        self.rate_limits = Some(snapshot);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Discard the conversation. Rate limits are account-wide and survive.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.processing = false;
        self.usage = UsageSummary::default();
        self.last_error = None;
    }
}
