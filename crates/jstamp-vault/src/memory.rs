//! In-memory daily-note store for hosts that keep documents in memory.

use std::collections::BTreeMap;

use jstamp_core::error::Result;
use jstamp_core::DailyNoteStore;

/// Documents keyed by vault-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document without counting it as a write.
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.documents.get(path).map(String::as_str)
    }

    /// Number of successful [`DailyNoteStore::overwrite_text`] calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DailyNoteStore for MemoryStore {
    type Handle = String;

    fn get_document_by_path(&self, path: &str) -> Option<String> {
        self.documents.contains_key(path).then(|| path.to_string())
    }

    fn read_text(&self, handle: &String) -> Result<String> {
        Ok(self.documents.get(handle).cloned().unwrap_or_default())
    }

    fn overwrite_text(&mut self, handle: &String, text: &str) -> Result<()> {
        self.documents.insert(handle.clone(), text.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use jstamp_core::{insert_timestamp_with, AppendOutcome, InsertOutcome};

    struct Cursor(String);

    impl jstamp_core::ActiveEditor for Cursor {
        fn replace_selection(&mut self, text: &str) -> Result<()> {
            self.0.push_str(text);
            Ok(())
        }
    }

    #[test]
    fn idempotent_across_repeated_insertions_at_the_same_instant() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 7).unwrap();
        let now = now + Duration::milliseconds(5);
        let mut store = MemoryStore::new();
        store.insert("Journal/Daily/2024-03-05.md", "# Today\n");
        let mut editor = Cursor(String::new());

        insert_timestamp_with(now, "Inbox", &mut editor, &mut store).unwrap();
        let first = store.get("Journal/Daily/2024-03-05.md").unwrap().to_string();
        let outcome = insert_timestamp_with(now, "Inbox", &mut editor, &mut store).unwrap();

        assert_eq!(store.get("Journal/Daily/2024-03-05.md").unwrap(), first);
        assert_eq!(store.writes(), 1);
        assert!(matches!(
            outcome,
            InsertOutcome::Inserted {
                daily_note: Some(AppendOutcome::AlreadyPresent),
                ..
            }
        ));
    }

    #[test]
    fn insert_does_not_count_as_write() {
        let mut store = MemoryStore::new();
        store.insert("a.md", "x");
        assert_eq!(store.writes(), 0);
        assert_eq!(store.get("a.md"), Some("x"));
        assert!(store.get_document_by_path("b.md").is_none());
    }
}
