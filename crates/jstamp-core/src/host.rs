//! Capabilities consumed from the host that owns the documents.
//!
//! The inserter never touches the file system directly. A host provides a
//! [`Workspace`] (what is open, and where the cursor is) and a
//! [`DailyNoteStore`] (where daily notes are read and written).

use crate::error::Result;

/// Read/write access to daily notes by vault-relative path.
pub trait DailyNoteStore {
    /// Opaque reference to a resolved document.
    type Handle;

    /// Resolve `path` to a document.
    ///
    /// Returns `None` when nothing exists at `path`, or when it names
    /// something that is not a document (a folder, for instance).
    fn get_document_by_path(&self, path: &str) -> Option<Self::Handle>;

    /// Read the full text of a document.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying storage.
    fn read_text(&self, handle: &Self::Handle) -> Result<String>;

    /// Replace the full text of a document.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying storage.
    fn overwrite_text(&mut self, handle: &Self::Handle, text: &str) -> Result<()>;
}

/// An editable surface with a cursor.
pub trait ActiveEditor {
    /// Replace the current selection with `text`, or insert at the caret
    /// if the selection is empty.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the editor.
    fn replace_selection(&mut self, text: &str) -> Result<()>;
}

/// The host's view of the currently open document.
pub trait Workspace {
    type Editor: ActiveEditor;

    /// Base name of the active document: no folder, no extension.
    fn active_document_name(&self) -> Option<String>;

    /// The editor showing the active document, if it can be edited.
    fn active_editor(&mut self) -> Option<&mut Self::Editor>;
}
