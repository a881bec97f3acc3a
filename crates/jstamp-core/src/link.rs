//! Wikilink, embed, and fragment builders.
//!
//! The output follows the host renderer's markdown conventions. Nothing in
//! this crate parses or validates it.

use crate::stamp::Stamp;

/// Vault-relative folder holding one note per calendar date.
pub const DAILY_NOTE_DIR: &str = "Journal/Daily";

/// Heading prefix shared by both fragment shapes.
const FRAGMENT_HEADING: &str = "###### ⏲";

/// Logical, extensionless link target of the daily note for `date`.
#[must_use]
pub fn daily_note_link_path(date: &str) -> String {
    format!("{DAILY_NOTE_DIR}/{date}")
}

/// Physical, vault-relative file path of the daily note for `date`.
#[must_use]
pub fn daily_note_file_path(date: &str) -> String {
    format!("{DAILY_NOTE_DIR}/{date}.md")
}

/// Link to the `^<epoch_millis>` block of today's daily note, labelled
/// with the stamp's date and time.
#[must_use]
pub fn block_link(stamp: &Stamp) -> String {
    format!(
        "[[{}#^{}|{}]]",
        daily_note_link_path(&stamp.date),
        stamp.epoch_millis,
        stamp.display()
    )
}

/// Fragment inserted when the active note is today's daily note.
#[must_use]
pub fn self_fragment(stamp: &Stamp) -> String {
    format!("{FRAGMENT_HEADING} *{}*", stamp.display())
}

/// Fragment inserted into any other note: the stamp as a link into
/// today's daily note.
#[must_use]
pub fn cross_reference_fragment(stamp: &Stamp) -> String {
    format!("{FRAGMENT_HEADING} *{}*", block_link(stamp))
}

/// The embed line appended to the daily note, pointing back at the
/// originating note. Always ends with `\n`.
#[must_use]
pub fn cross_reference_line(stamp: &Stamp, originating_name: &str) -> String {
    format!(
        "![[{originating_name}#⏲ * {} {} {} *]]\n",
        daily_note_link_path(&stamp.date),
        stamp.header_reference(),
        stamp.spaced_date()
    )
}
