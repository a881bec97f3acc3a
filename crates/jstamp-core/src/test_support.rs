//! In-crate fakes for the host capabilities.

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::error::{JstampError, Result};
use crate::host::{ActiveEditor, DailyNoteStore, Workspace};

#[derive(Debug, Default)]
pub struct MapStore {
    pub notes: BTreeMap<String, String>,
    pub lookups: Cell<usize>,
    pub writes: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MapStore {
    pub fn with_note(path: &str, text: &str) -> Self {
        let mut store = Self::default();
        store.notes.insert(path.to_string(), text.to_string());
        store
    }

    pub fn text(&self, path: &str) -> String {
        self.notes.get(path).cloned().unwrap_or_default()
    }
}

impl DailyNoteStore for MapStore {
    type Handle = String;

    fn get_document_by_path(&self, path: &str) -> Option<String> {
        self.lookups.set(self.lookups.get() + 1);
        self.notes.contains_key(path).then(|| path.to_string())
    }

    fn read_text(&self, handle: &String) -> Result<String> {
        if self.fail_reads {
            return Err(JstampError::Io(std::io::Error::other("unreadable")));
        }
        Ok(self.notes.get(handle).cloned().unwrap_or_default())
    }

    fn overwrite_text(&mut self, handle: &String, text: &str) -> Result<()> {
        if self.fail_writes {
            return Err(JstampError::Io(std::io::Error::other("read-only")));
        }
        self.writes += 1;
        self.notes.insert(handle.clone(), text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub inserted: Vec<String>,
    pub fail: bool,
}

impl ActiveEditor for RecordingEditor {
    fn replace_selection(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(JstampError::Io(std::io::Error::other("editor closed")));
        }
        self.inserted.push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeWorkspace {
    pub name: Option<String>,
    pub editor: Option<RecordingEditor>,
}

impl FakeWorkspace {
    pub fn editing(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            editor: Some(RecordingEditor::default()),
        }
    }

    pub fn inserted(&self) -> Vec<String> {
        self.editor
            .as_ref()
            .map(|e| e.inserted.clone())
            .unwrap_or_default()
    }
}

impl Workspace for FakeWorkspace {
    type Editor = RecordingEditor;

    fn active_document_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn active_editor(&mut self) -> Option<&mut RecordingEditor> {
        self.editor.as_mut()
    }
}
