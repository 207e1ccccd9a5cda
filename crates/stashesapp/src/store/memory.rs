use super::StashStore;
use crate::error::Result;
use crate::names::{sanitize_title, sort_case_insensitive, unique_stem};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory store for testing logic without filesystem I/O.
///
/// Uses `RefCell` for interior mutability since the app is single-threaded;
/// the trait can then take `&self` everywhere, like the file backend.
#[derive(Default)]
pub struct InMemoryStore {
    // stash name -> (note stem -> content)
    stashes: RefCell<HashMap<String, HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StashStore for InMemoryStore {
    fn list_stashes(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.stashes.borrow().keys().cloned().collect();
        sort_case_insensitive(&mut names);
        Ok(names)
    }

    fn create_stash(&self, title: &str) -> Result<String> {
        let name = sanitize_title(title);
        self.stashes.borrow_mut().entry(name.clone()).or_default();
        Ok(name)
    }

    fn delete_stash(&self, name: &str) -> Result<()> {
        self.stashes.borrow_mut().remove(name);
        Ok(())
    }

    fn list_notes(&self, stash: &str) -> Result<Vec<String>> {
        let mut stashes = self.stashes.borrow_mut();
        let notes = stashes.entry(stash.to_string()).or_default();
        let mut stems: Vec<String> = notes.keys().cloned().collect();
        sort_case_insensitive(&mut stems);
        Ok(stems)
    }

    fn read_note(&self, stash: &str, stem: &str) -> Result<String> {
        let stashes = self.stashes.borrow();
        Ok(stashes
            .get(stash)
            .and_then(|notes| notes.get(stem))
            .cloned()
            .unwrap_or_default())
    }

    fn write_note(&self, stash: &str, stem: &str, content: &str) -> Result<()> {
        self.stashes
            .borrow_mut()
            .entry(stash.to_string())
            .or_default()
            .insert(stem.to_string(), content.to_string());
        Ok(())
    }

    fn create_note(&self, stash: &str, title: &str) -> Result<String> {
        let base = sanitize_title(title);
        let mut stashes = self.stashes.borrow_mut();
        let notes = stashes.entry(stash.to_string()).or_default();
        let stem = unique_stem(&base, |s| notes.contains_key(s));
        notes.insert(stem.clone(), String::new());
        Ok(stem)
    }

    fn delete_note(&self, stash: &str, stem: &str) -> Result<()> {
        if let Some(notes) = self.stashes.borrow_mut().get_mut(stash) {
            notes.remove(stem);
        }
        Ok(())
    }

    fn rename_note(&self, stash: &str, old_stem: &str, new_title: &str) -> Result<String> {
        if old_stem == new_title {
            return Ok(old_stem.to_string());
        }

        let base = sanitize_title(new_title);
        let mut stashes = self.stashes.borrow_mut();
        let notes = stashes.entry(stash.to_string()).or_default();
        let stem = unique_stem(&base, |s| notes.contains_key(s));
        // A note that vanished is replaced by an empty one, like the file
        // backend does.
        let content = notes.remove(old_stem).unwrap_or_default();
        notes.insert(stem.clone(), content);
        Ok(stem)
    }
}
