//! Storage layer.
//!
//! [`StashStore`] abstracts how stashes and notes are persisted:
//!
//! - [`fs::FileStore`] — production backend: one directory per stash and
//!   one `.txt` file per note under a configured root.
//! - [`memory::InMemoryStore`] — map-backed store for testing UI and
//!   navigation logic without filesystem I/O.
//!
//! Every operation is synchronous and re-reads state on each call; there is
//! no cache between the store and the filesystem. Callers are expected to
//! re-list after each mutation.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for stash and note storage.
pub trait StashStore {
    /// List stash names, sorted case-insensitively.
    fn list_stashes(&self) -> Result<Vec<String>>;

    /// Create a stash from a raw title and return the sanitized name.
    /// Creating a stash whose name already exists silently reuses it.
    fn create_stash(&self, title: &str) -> Result<String>;

    /// Recursively delete a stash and every note in it. Best-effort: a
    /// failed delete leaves the stash in place without surfacing an error.
    fn delete_stash(&self, name: &str) -> Result<()>;

    /// List note stems in a stash, sorted case-insensitively. A missing
    /// stash directory is created rather than treated as an error.
    fn list_notes(&self, stash: &str) -> Result<Vec<String>>;

    /// Full text of a note, or the empty string if the file is gone.
    fn read_note(&self, stash: &str, stem: &str) -> Result<String>;

    /// Overwrite a note's content, creating the stash if missing.
    fn write_note(&self, stash: &str, stem: &str, content: &str) -> Result<()>;

    /// Create an empty note from a raw title and return the stem actually
    /// used, suffixed with ` (N)` when the sanitized name was taken.
    fn create_note(&self, stash: &str, title: &str) -> Result<String>;

    /// Delete a note. A missing file is a silent no-op.
    fn delete_note(&self, stash: &str, stem: &str) -> Result<()>;

    /// Rename a note to a new title and return the stem actually used.
    /// Renaming to the current title is a no-op. If the old file vanished
    /// externally, an empty note is created under the new name instead.
    fn rename_note(&self, stash: &str, old_stem: &str, new_title: &str) -> Result<String>;
}
