use super::StashStore;
use crate::config::Config;
use crate::error::Result;
use crate::names::{sanitize_title, sort_case_insensitive, unique_stem};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const NOTE_EXT: &str = "txt";

/// Filesystem-backed store: one directory per stash, one `.txt` file per
/// note, all directly under the configured root.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.root.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn stash_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn note_path(&self, stash: &str, stem: &str) -> PathBuf {
        self.stash_path(stash).join(format!("{}.{}", stem, NOTE_EXT))
    }

    fn ensure_dir(path: &Path) -> Result<()> {
        if !path.is_dir() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }
}

impl StashStore for FileStore {
    fn list_stashes(&self) -> Result<Vec<String>> {
        Self::ensure_dir(&self.root)?;

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Ok(name) = entry.file_name().into_string() {
                    names.push(name);
                }
            }
        }
        sort_case_insensitive(&mut names);
        debug!("list_stashes -> {:?}", names);
        Ok(names)
    }

    fn create_stash(&self, title: &str) -> Result<String> {
        let name = sanitize_title(title);
        let path = self.stash_path(&name);
        debug!("create_stash -> {}", path.display());
        fs::create_dir_all(&path)?;
        Ok(name)
    }

    fn delete_stash(&self, name: &str) -> Result<()> {
        let path = self.stash_path(name);
        debug!("delete_stash -> {}", path.display());
        if path.is_dir() {
            if let Err(err) = fs::remove_dir_all(&path) {
                warn!("delete_stash failed for {}: {}", path.display(), err);
            }
        }
        Ok(())
    }

    fn list_notes(&self, stash: &str) -> Result<Vec<String>> {
        let dir = self.stash_path(stash);
        Self::ensure_dir(&dir)?;

        let mut stems = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_note = entry.file_type()?.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(NOTE_EXT));
            if is_note {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    stems.push(stem.to_string());
                }
            }
        }
        sort_case_insensitive(&mut stems);
        debug!("list_notes {:?} -> {:?}", stash, stems);
        Ok(stems)
    }

    fn read_note(&self, stash: &str, stem: &str) -> Result<String> {
        let path = self.note_path(stash, stem);
        debug!("read_note -> {}", path.display());
        if !path.is_file() {
            // Deleted outside the app: show an empty note rather than fail.
            return Ok(String::new());
        }
        Ok(fs::read_to_string(path)?)
    }

    fn write_note(&self, stash: &str, stem: &str, content: &str) -> Result<()> {
        let path = self.note_path(stash, stem);
        debug!("write_note -> {} ({} bytes)", path.display(), content.len());
        Self::ensure_dir(&self.stash_path(stash))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn create_note(&self, stash: &str, title: &str) -> Result<String> {
        let base = sanitize_title(title);
        let stem = unique_stem(&base, |s| self.note_path(stash, s).exists());
        debug!("create_note -> {}", self.note_path(stash, &stem).display());
        self.write_note(stash, &stem, "")?;
        Ok(stem)
    }

    fn delete_note(&self, stash: &str, stem: &str) -> Result<()> {
        let path = self.note_path(stash, stem);
        debug!("delete_note -> {}", path.display());
        if path.is_file() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn rename_note(&self, stash: &str, old_stem: &str, new_title: &str) -> Result<String> {
        if old_stem == new_title {
            return Ok(old_stem.to_string());
        }

        let base = sanitize_title(new_title);
        let stem = unique_stem(&base, |s| self.note_path(stash, s).exists());
        let old_path = self.note_path(stash, old_stem);
        let new_path = self.note_path(stash, &stem);
        debug!(
            "rename_note {} -> {}",
            old_path.display(),
            new_path.display()
        );

        if old_path.is_file() {
            fs::rename(old_path, new_path)?;
        } else {
            // Original vanished externally; start fresh under the new name.
            self.write_note(stash, &stem, "")?;
        }
        Ok(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn create_stash_sanitizes_the_title() {
        let env = TestEnv::new();
        let name = env.store.create_stash("  work/projects  ").unwrap();
        assert_eq!(name, "work-projects");
        assert!(env.root.join("work-projects").is_dir());
    }

    #[test]
    fn create_stash_twice_reuses_the_directory() {
        let env = TestEnv::new();
        env.store.create_stash("Ideas").unwrap();
        env.store.create_note("Ideas", "Keep me").unwrap();

        let name = env.store.create_stash("Ideas").unwrap();
        assert_eq!(name, "Ideas");
        assert_eq!(env.store.list_notes("Ideas").unwrap(), vec!["Keep me"]);
    }

    #[test]
    fn listing_notes_creates_a_missing_stash() {
        let env = TestEnv::new();
        assert!(env.store.list_notes("Fresh").unwrap().is_empty());
        assert!(env.root.join("Fresh").is_dir());
    }

    #[test]
    fn note_listing_matches_extension_case_insensitively() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        fs::write(env.root.join("S").join("loud.TXT"), "x").unwrap();
        assert_eq!(env.store.list_notes("S").unwrap(), vec!["loud"]);
    }

    #[test]
    fn note_listing_ignores_other_files_and_directories() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        env.store.create_note("S", "real").unwrap();
        fs::write(env.root.join("S").join("readme.md"), "x").unwrap();
        fs::create_dir(env.root.join("S").join("nested")).unwrap();

        assert_eq!(env.store.list_notes("S").unwrap(), vec!["real"]);
    }

    #[test]
    fn create_note_resolves_collisions_with_numeric_suffixes() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        assert_eq!(env.store.create_note("S", "X").unwrap(), "X");
        assert_eq!(env.store.create_note("S", "X").unwrap(), "X (1)");
        assert_eq!(env.store.create_note("S", "X").unwrap(), "X (2)");
    }

    #[test]
    fn reading_a_missing_note_returns_empty() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        env.store.create_note("S", "gone").unwrap();
        fs::remove_file(env.root.join("S").join("gone.txt")).unwrap();

        assert_eq!(env.store.read_note("S", "gone").unwrap(), "");
    }

    #[test]
    fn rename_to_the_same_title_is_a_noop() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        env.store.create_note("S", "Todo").unwrap();
        env.store.write_note("S", "Todo", "body").unwrap();

        let stem = env.store.rename_note("S", "Todo", "Todo").unwrap();
        assert_eq!(stem, "Todo");
        assert_eq!(env.store.read_note("S", "Todo").unwrap(), "body");
    }

    #[test]
    fn rename_moves_the_file_and_keeps_content() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        env.store.create_note("S", "Old").unwrap();
        env.store.write_note("S", "Old", "kept").unwrap();

        let stem = env.store.rename_note("S", "Old", "New").unwrap();
        assert_eq!(stem, "New");
        assert!(!env.root.join("S").join("Old.txt").exists());
        assert_eq!(env.store.read_note("S", "New").unwrap(), "kept");
    }

    #[test]
    fn rename_onto_a_taken_name_picks_a_suffix() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        env.store.create_note("S", "A").unwrap();
        env.store.create_note("S", "B").unwrap();

        let stem = env.store.rename_note("S", "A", "B").unwrap();
        assert_eq!(stem, "B (1)");
    }

    #[test]
    fn rename_recreates_an_externally_deleted_note() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        env.store.create_note("S", "lost").unwrap();
        fs::remove_file(env.root.join("S").join("lost.txt")).unwrap();

        let stem = env.store.rename_note("S", "lost", "found").unwrap();
        assert_eq!(stem, "found");
        assert_eq!(env.store.read_note("S", "found").unwrap(), "");
    }

    #[test]
    fn delete_note_is_silent_when_already_gone() {
        let env = TestEnv::new();
        env.store.create_stash("S").unwrap();
        env.store.delete_note("S", "never existed").unwrap();
    }
}
