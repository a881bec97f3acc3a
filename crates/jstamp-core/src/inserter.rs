//! Timestamp inserter.
//!
//! Writes exactly one fragment at the cursor of the active note. Which
//! fragment depends only on whether the note's base name equals today's UTC
//! date:
//!
//! - today's daily note gets a plain `###### ⏲ *<date> <time>*` heading;
//! - any other note gets the stamp as a link into today's daily note, and
//!   the daily note gets a cross-reference line pointing back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::appender::{append_cross_reference, AppendOutcome};
use crate::error::Result;
use crate::host::{ActiveEditor, DailyNoteStore, Workspace};
use crate::link::{cross_reference_fragment, self_fragment};
use crate::stamp::Stamp;

/// Why an insertion did nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    NoActiveDocument,
    NoActiveEditor,
}

/// Result of one [`insert_timestamp`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsertOutcome {
    /// Nothing was inserted and nothing was written.
    Aborted { reason: AbortReason },

    /// `fragment` was inserted at the cursor.
    ///
    /// `daily_note` is `None` when the active note is today's daily note,
    /// in which case the store was never consulted.
    Inserted {
        stamp: Stamp,
        fragment: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        daily_note: Option<AppendOutcome>,
    },
}

impl InsertOutcome {
    /// The inserted fragment, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::Inserted { fragment, .. } => Some(fragment),
            Self::Aborted { .. } => None,
        }
    }
}

/// Insert a timestamp into the active note of `workspace`.
///
/// A workspace without an active document, or whose active document has no
/// editor, aborts silently with [`InsertOutcome::Aborted`].
///
/// # Errors
///
/// Editor failures propagate before the store is touched. Store failures
/// propagate after the fragment has been inserted; nothing is rolled back.
pub fn insert_timestamp<W, S>(
    now: DateTime<Utc>,
    workspace: &mut W,
    store: &mut S,
) -> Result<InsertOutcome>
where
    W: Workspace + ?Sized,
    S: DailyNoteStore + ?Sized,
{
    let Some(name) = workspace.active_document_name() else {
        debug!("no active document, nothing to stamp");
        return Ok(InsertOutcome::Aborted {
            reason: AbortReason::NoActiveDocument,
        });
    };

    let Some(editor) = workspace.active_editor() else {
        debug!(document = %name, "active document has no editor, nothing to stamp");
        return Ok(InsertOutcome::Aborted {
            reason: AbortReason::NoActiveEditor,
        });
    };

    insert_timestamp_with(now, &name, editor, store)
}

/// Insert a timestamp through an already-resolved editor.
///
/// `active_document_name` is the base name of the note `editor` shows.
///
/// # Errors
///
/// Same as [`insert_timestamp`].
pub fn insert_timestamp_with<E, S>(
    now: DateTime<Utc>,
    active_document_name: &str,
    editor: &mut E,
    store: &mut S,
) -> Result<InsertOutcome>
where
    E: ActiveEditor + ?Sized,
    S: DailyNoteStore + ?Sized,
{
    let stamp = Stamp::from_instant(now);

    if active_document_name == stamp.date {
        let fragment = self_fragment(&stamp);
        editor.replace_selection(&fragment)?;
        return Ok(InsertOutcome::Inserted {
            stamp,
            fragment,
            daily_note: None,
        });
    }

    let fragment = cross_reference_fragment(&stamp);
    editor.replace_selection(&fragment)?;
    let appended = append_cross_reference(&stamp, active_document_name, store)?;

    Ok(InsertOutcome::Inserted {
        stamp,
        fragment,
        daily_note: Some(appended),
    })
}
