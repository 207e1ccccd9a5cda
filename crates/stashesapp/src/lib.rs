//! # stashesapp
//!
//! Storage library for the stashes note app. Notes are plain `.txt` files
//! grouped into "stashes" (one directory per stash) under a single root
//! directory. There is no database and no metadata file: the directory tree
//! *is* the data model, and every operation re-reads it.
//!
//! The [`store::StashStore`] trait is the seam between storage and any UI:
//! the production backend is [`store::fs::FileStore`], and
//! [`store::memory::InMemoryStore`] lets callers test navigation and
//! editing logic without touching the filesystem.
//!
//! ## Naming rules
//!
//! User-entered titles become filename stems via [`names::sanitize_title`]
//! (trim, `/` → `-`, no leading dots, `"Untitled"` fallback). Note-name
//! collisions are resolved with a ` (N)` suffix; stash names are not
//! deduplicated, so creating a stash that already exists reuses it.

pub mod config;
pub mod error;
pub mod names;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Result, StashError};
