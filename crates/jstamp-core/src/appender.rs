//! Daily-note appender: adds a cross-reference line to today's daily note.
//!
//! The update is a plain read, substring check, write sequence with no
//! locking. Two invocations racing on the same daily note can both pass the
//! check and both write; the last write wins.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::host::DailyNoteStore;
use crate::link::{cross_reference_line, daily_note_file_path};
use crate::stamp::Stamp;

/// What happened to the daily note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppendOutcome {
    /// The line was appended.
    Appended,
    /// The exact line was already present; nothing was written.
    AlreadyPresent,
    /// No daily note exists for the date; the reference was dropped.
    DailyNoteMissing,
}

/// Append the cross-reference line for `stamp` and `originating_name` to the
/// daily note of `stamp.date`.
///
/// A missing daily note is not created. It is logged and reported as
/// [`AppendOutcome::DailyNoteMissing`], never as an error.
///
/// # Errors
///
/// Propagates read and write failures of the store.
pub fn append_cross_reference<S>(
    stamp: &Stamp,
    originating_name: &str,
    store: &mut S,
) -> Result<AppendOutcome>
where
    S: DailyNoteStore + ?Sized,
{
    let path = daily_note_file_path(&stamp.date);

    let Some(note) = store.get_document_by_path(&path) else {
        warn!(path = %path, "daily note does not exist, cross-reference dropped");
        return Ok(AppendOutcome::DailyNoteMissing);
    };

    let existing = store.read_text(&note)?;
    let line = cross_reference_line(stamp, originating_name);

    if existing.contains(&line) {
        debug!(path = %path, "cross-reference already present");
        return Ok(AppendOutcome::AlreadyPresent);
    }

    let updated = format!("{existing}\n{line}");
    store.overwrite_text(&note, &updated)?;
    info!(path = %path, from = originating_name, "appended cross-reference");

    Ok(AppendOutcome::Appended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MapStore;

    fn stamp() -> Stamp {
        Stamp {
            date: "2024-03-05".to_string(),
            time: "14:30:07".to_string(),
            epoch_millis: 1_709_655_007_123,
        }
    }

    #[test]
    fn appends_line_after_a_blank_separator() {
        let mut store = MapStore::with_note("Journal/Daily/2024-03-05.md", "old");

        let outcome = append_cross_reference(&stamp(), "MeetingNotes", &mut store).unwrap();

        assert_eq!(outcome, AppendOutcome::Appended);
        assert_eq!(
            store.text("Journal/Daily/2024-03-05.md"),
            "old\n![[MeetingNotes#⏲ * Journal/Daily/2024-03-05 2024-03-051709655007 2024 03 05 *]]\n"
        );
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn second_identical_append_is_a_no_op() {
        let mut store = MapStore::with_note("Journal/Daily/2024-03-05.md", "old");

        append_cross_reference(&stamp(), "MeetingNotes", &mut store).unwrap();
        let after_first = store.text("Journal/Daily/2024-03-05.md");
        let outcome = append_cross_reference(&stamp(), "MeetingNotes", &mut store).unwrap();

        assert_eq!(outcome, AppendOutcome::AlreadyPresent);
        assert_eq!(store.text("Journal/Daily/2024-03-05.md"), after_first);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn dedupe_is_by_exact_text_not_by_key() {
        let mut store = MapStore::with_note("Journal/Daily/2024-03-05.md", "old");
        append_cross_reference(&stamp(), "MeetingNotes", &mut store).unwrap();

        // Same note and epoch, different name: the literal line differs.
        let outcome = append_cross_reference(&stamp(), "Meeting Notes", &mut store).unwrap();
        assert_eq!(outcome, AppendOutcome::Appended);
        assert_eq!(store.writes, 2);
    }

    #[test]
    fn existing_content_is_kept_as_prefix() {
        let original = "# 2024-03-05\n\n- standup\n";
        let mut store = MapStore::with_note("Journal/Daily/2024-03-05.md", original);

        append_cross_reference(&stamp(), "MeetingNotes", &mut store).unwrap();

        assert!(store.text("Journal/Daily/2024-03-05.md").starts_with(original));
    }

    #[test]
    fn missing_daily_note_writes_nothing() {
        let mut store = MapStore::default();

        let outcome = append_cross_reference(&stamp(), "MeetingNotes", &mut store).unwrap();

        assert_eq!(outcome, AppendOutcome::DailyNoteMissing);
        assert_eq!(store.writes, 0);
        assert!(store.notes.is_empty());
    }

    #[test]
    fn other_days_are_not_touched() {
        let mut store = MapStore::with_note("Journal/Daily/2024-03-04.md", "yesterday");

        let outcome = append_cross_reference(&stamp(), "MeetingNotes", &mut store).unwrap();

        assert_eq!(outcome, AppendOutcome::DailyNoteMissing);
        assert_eq!(store.text("Journal/Daily/2024-03-04.md"), "yesterday");
    }

    #[test]
    fn write_failure_propagates() {
        let mut store = MapStore::with_note("Journal/Daily/2024-03-05.md", "old");
        store.fail_writes = true;

        let result = append_cross_reference(&stamp(), "MeetingNotes", &mut store);

        assert!(result.is_err());
        assert_eq!(store.text("Journal/Daily/2024-03-05.md"), "old");
    }
}
