//! Screen state and key handling, independent of the terminal.
//!
//! `App` is generic over [`StashStore`] so every transition in here can be
//! exercised in tests against the in-memory backend. Nothing is cached
//! across actions: after each mutation the visible list is re-read from the
//! store and the whole screen is redrawn from this state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stashesapp::store::StashStore;
use stashesapp::Result;

use super::field::FieldValue;

/// Which full screen is showing.
pub enum Screen {
    Home,
    Stash { name: String },
    Editor(EditorState),
}

pub struct EditorState {
    pub stash: String,
    pub stem: String,
    pub title: FieldValue,
    pub body: FieldValue,
    pub focus: EditorField,
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Body,
}

impl EditorState {
    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EditorField::Title => EditorField::Body,
            EditorField::Body => EditorField::Title,
        };
    }

    fn active_field_mut(&mut self) -> &mut FieldValue {
        match self.focus {
            EditorField::Title => &mut self.title,
            EditorField::Body => &mut self.body,
        }
    }
}

/// Modal overlay capturing all input while open.
pub enum Mode {
    Normal,
    NewStash(FieldValue),
    NewNote(FieldValue),
    ConfirmDeleteStash(String),
    ConfirmDeleteNote(String),
}

pub struct App<S: StashStore> {
    store: S,
    pub screen: Screen,
    pub mode: Mode,
    /// Stash names on the home screen, note stems on a stash screen.
    pub items: Vec<String>,
    pub selected: usize,
    pub status: String,
}

impl<S: StashStore> App<S> {
    pub fn new(store: S) -> Result<Self> {
        let mut app = App {
            store,
            screen: Screen::Home,
            mode: Mode::Normal,
            items: Vec::new(),
            selected: 0,
            status: String::new(),
        };
        app.refresh()?;
        Ok(app)
    }

    /// Re-read the current screen's list from the store and clamp the
    /// selection. Called after every mutating action.
    fn refresh(&mut self) -> Result<()> {
        self.items = match &self.screen {
            Screen::Home => self.store.list_stashes()?,
            Screen::Stash { name } => self.store.list_notes(name)?,
            Screen::Editor(_) => Vec::new(),
        };
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.mode {
            Mode::Normal => self.handle_screen_key(key),
            Mode::NewStash(_) | Mode::NewNote(_) => self.handle_prompt_key(key),
            Mode::ConfirmDeleteStash(_) | Mode::ConfirmDeleteNote(_) => {
                self.handle_confirm_key(key)
            }
        }
    }

    fn handle_screen_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Stash { .. } => self.handle_stash_key(key),
            Screen::Editor(_) => self.handle_editor_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => {
                if let Some(name) = self.items.get(self.selected).cloned() {
                    self.open_stash(name)?;
                }
            }
            KeyCode::Char('n') => {
                self.mode = Mode::NewStash(FieldValue::default());
                self.status = "New stash: type a title, Enter to create".into();
            }
            KeyCode::Char('d') => {
                if let Some(name) = self.items.get(self.selected).cloned() {
                    self.status = format!("Delete stash '{}'?", name);
                    self.mode = Mode::ConfirmDeleteStash(name);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_stash_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Esc => self.go_home()?,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => {
                let Screen::Stash { name } = &self.screen else {
                    return Ok(false);
                };
                if let Some(stem) = self.items.get(self.selected).cloned() {
                    let stash = name.clone();
                    self.open_note(stash, stem)?;
                }
            }
            KeyCode::Char('n') => {
                self.mode = Mode::NewNote(FieldValue::default());
                self.status = "New note: type a title, Enter to create".into();
            }
            KeyCode::Char('d') => {
                if let Some(stem) = self.items.get(self.selected).cloned() {
                    self.status = format!("Delete note '{}'?", stem);
                    self.mode = Mode::ConfirmDeleteNote(stem);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.save_and_close()?;
            }
            return Ok(false);
        }
        if key.code == KeyCode::Esc {
            // Leaving without saving discards edits, no warning.
            if let Screen::Editor(editor) = &self.screen {
                let stash = editor.stash.clone();
                self.open_stash(stash)?;
            }
            return Ok(false);
        }

        let Screen::Editor(editor) = &mut self.screen else {
            return Ok(false);
        };
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => editor.toggle_focus(),
            KeyCode::Enter => match editor.focus {
                // Enter in the title drops into the body, like a form.
                EditorField::Title => editor.focus = EditorField::Body,
                EditorField::Body => editor.body.insert_newline(),
            },
            KeyCode::Backspace => editor.active_field_mut().backspace(),
            KeyCode::Left => editor.active_field_mut().move_left(),
            KeyCode::Right => editor.active_field_mut().move_right(),
            KeyCode::Up => editor.active_field_mut().move_up(),
            KeyCode::Down => editor.active_field_mut().move_down(),
            KeyCode::Char(c) => editor.active_field_mut().insert_char(c),
            _ => {}
        }
        Ok(false)
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.status.clear();
            }
            KeyCode::Enter => self.submit_prompt()?,
            _ => {
                let (Mode::NewStash(field) | Mode::NewNote(field)) = &mut self.mode else {
                    return Ok(false);
                };
                match key.code {
                    KeyCode::Backspace => field.backspace(),
                    KeyCode::Left => field.move_left(),
                    KeyCode::Right => field.move_right(),
                    KeyCode::Char(c) => field.insert_char(c),
                    _ => {}
                }
            }
        }
        Ok(false)
    }

    fn submit_prompt(&mut self) -> Result<()> {
        let mode = std::mem::replace(&mut self.mode, Mode::Normal);
        match mode {
            Mode::NewStash(field) => {
                // An empty prompt cancels, like dismissing the dialog.
                if field.value.is_empty() {
                    self.status.clear();
                    return Ok(());
                }
                let name = self.store.create_stash(&field.value)?;
                self.status = format!("Created stash '{}'", name);
                self.refresh()?;
            }
            Mode::NewNote(field) => {
                if field.value.is_empty() {
                    self.status.clear();
                    return Ok(());
                }
                let Screen::Stash { name } = &self.screen else {
                    return Ok(());
                };
                let stash = name.clone();
                let stem = self.store.create_note(&stash, &field.value)?;
                self.status = format!("Created note '{}'", stem);
                self.refresh()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Result<bool> {
        let confirmed = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
        let cancelled = matches!(
            key.code,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc
        );
        if !confirmed && !cancelled {
            return Ok(false);
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Normal);
        if cancelled {
            self.status.clear();
            return Ok(false);
        }
        match mode {
            Mode::ConfirmDeleteStash(name) => {
                self.store.delete_stash(&name)?;
                self.status = format!("Deleted stash '{}'", name);
                self.refresh()?;
            }
            Mode::ConfirmDeleteNote(stem) => {
                let Screen::Stash { name } = &self.screen else {
                    return Ok(false);
                };
                let stash = name.clone();
                self.store.delete_note(&stash, &stem)?;
                self.status = format!("Deleted note '{}'", stem);
                self.refresh()?;
            }
            _ => {}
        }
        Ok(false)
    }

    fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    fn go_home(&mut self) -> Result<()> {
        self.screen = Screen::Home;
        self.selected = 0;
        self.refresh()
    }

    fn open_stash(&mut self, name: String) -> Result<()> {
        self.screen = Screen::Stash { name };
        self.selected = 0;
        self.refresh()
    }

    fn open_note(&mut self, stash: String, stem: String) -> Result<()> {
        let content = self.store.read_note(&stash, &stem)?;
        self.screen = Screen::Editor(EditorState {
            stash,
            title: FieldValue::new(&stem),
            body: FieldValue::new(&content),
            stem,
            focus: EditorField::Title,
        });
        Ok(())
    }

    fn save_and_close(&mut self) -> Result<()> {
        let Screen::Editor(editor) = &self.screen else {
            return Ok(());
        };
        let stash = editor.stash.clone();
        // A blanked-out title falls back the same way new notes do.
        let new_title = editor.title.value.trim();
        let new_title = if new_title.is_empty() {
            "Untitled"
        } else {
            new_title
        };
        let final_stem = self.store.rename_note(&stash, &editor.stem, new_title)?;
        self.store.write_note(&stash, &final_stem, &editor.body.value)?;
        self.status = format!("Saved '{}'", final_stem);
        self.open_stash(stash)
    }
}
