//! # Stashes
//!
//! A single-window terminal app for plain-text notes filed into "stashes"
//! (one directory per stash, one `.txt` file per note, all under
//! `~/Stashes`). The binary is intentionally thin: storage lives in the
//! `stashesapp` library behind the `StashStore` trait, and everything here
//! is presentation.
//!
//! ## Layering
//!
//! - `stashesapp::store` — filesystem operations, naming rules, collision
//!   handling. UI-agnostic, tested against a temp directory.
//! - `src/ui/` — a ratatui event loop over three screens (home, stash,
//!   editor). `ui::App` is generic over the store, so navigation logic is
//!   tested in-process against the in-memory backend.
//!
//! The UI never caches: after every mutating action it re-reads the
//! directory state and redraws the whole screen.

mod logging;
mod ui;

use stashesapp::config::Config;
use stashesapp::store::fs::FileStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let _logger = logging::init()?;
    let config = Config::resolve()?;
    let store = FileStore::new(&config);
    ui::run(store)
}
