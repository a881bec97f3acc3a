//! # jstamp-vault
//!
//! Host-side implementations of the jstamp capability traits.
//!
//! - [`Vault`] — daily notes as markdown files under a vault directory
//! - [`MemoryStore`] — daily notes held in memory
//! - [`NoteEditor`] / [`NoteWorkspace`] — a note on disk with a selection

pub mod editor;
pub mod memory;
pub mod store;

pub use editor::{NoteEditor, NoteWorkspace};
pub use memory::MemoryStore;
pub use store::{Vault, STATE_DIR};
