//! File-backed editor: a markdown note on disk with a selection.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::debug;

use jstamp_core::error::{JstampError, Result};
use jstamp_core::{ActiveEditor, Workspace};

/// A note loaded into memory with a byte-range selection.
///
/// Every edit is written straight back to the file.
#[derive(Debug)]
pub struct NoteEditor {
    path: PathBuf,
    buffer: String,
    selection: Range<usize>,
}

impl NoteEditor {
    /// Load `path` with the caret at the end of the text.
    ///
    /// # Errors
    ///
    /// Returns [`JstampError::Io`] if the file cannot be read.
    pub fn open(path: &Path) -> Result<Self> {
        let buffer = fs::read_to_string(path)?;
        let end = buffer.len();
        Ok(Self {
            path: path.to_path_buf(),
            buffer,
            selection: end..end,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Select the byte range `start..end`.
    ///
    /// # Errors
    ///
    /// Returns [`JstampError::Selection`] if the range is reversed, runs past
    /// the end of the text, or splits a UTF-8 character.
    pub fn select(&mut self, start: usize, end: usize) -> Result<()> {
        let len = self.buffer.len();
        let valid = start <= end
            && end <= len
            && self.buffer.is_char_boundary(start)
            && self.buffer.is_char_boundary(end);
        if !valid {
            return Err(JstampError::Selection { start, end, len });
        }
        self.selection = start..end;
        Ok(())
    }

    /// Collapse the selection to a caret at byte `offset`.
    ///
    /// # Errors
    ///
    /// Same as [`NoteEditor::select`].
    pub fn place_caret(&mut self, offset: usize) -> Result<()> {
        self.select(offset, offset)
    }
}

impl ActiveEditor for NoteEditor {
    fn replace_selection(&mut self, text: &str) -> Result<()> {
        let Range { start, end } = self.selection.clone();
        let mut updated = String::with_capacity(self.buffer.len() - (end - start) + text.len());
        updated.push_str(&self.buffer[..start]);
        updated.push_str(text);
        updated.push_str(&self.buffer[end..]);

        fs::write(&self.path, &updated)?;
        self.buffer = updated;
        let caret = start + text.len();
        self.selection = caret..caret;
        debug!(path = %self.path.display(), at = start, "replaced selection");
        Ok(())
    }
}

/// What the command-line host has open: at most one note.
#[derive(Debug, Default)]
pub struct NoteWorkspace {
    name: Option<String>,
    editor: Option<NoteEditor>,
}

impl NoteWorkspace {
    /// A workspace with nothing open.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Open `path` as the active note.
    ///
    /// - not an existing file: no active document;
    /// - an existing file without the `.md` extension: an active document
    ///   that cannot be edited;
    /// - a markdown file: an active document with an editor.
    ///
    /// # Errors
    ///
    /// Returns [`JstampError::Io`] if a markdown file exists but cannot be read.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::empty());
        }
        let name = base_name(path);
        let editor = if path.extension().and_then(|e| e.to_str()) == Some("md") {
            Some(NoteEditor::open(path)?)
        } else {
            None
        };
        Ok(Self { name, editor })
    }

    /// Mutable access to the editor, for positioning the selection.
    pub fn editor_mut(&mut self) -> Option<&mut NoteEditor> {
        self.editor.as_mut()
    }
}

impl Workspace for NoteWorkspace {
    type Editor = NoteEditor;

    fn active_document_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn active_editor(&mut self) -> Option<&mut NoteEditor> {
        self.editor.as_mut()
    }
}

/// File name without folder or extension.
fn base_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}
