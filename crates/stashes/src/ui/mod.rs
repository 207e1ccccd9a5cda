//! Terminal UI: three screens (home, stash, editor), each redrawn in full
//! from store state; prompts and confirmations are modal overlays.

mod app;
mod field;
mod render;

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use stashesapp::store::StashStore;

use app::App;

pub fn run<S: StashStore>(store: S) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(store, &mut terminal);
    teardown_terminal(&mut terminal)?;
    result
}

fn event_loop<S: StashStore>(
    store: S,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<()> {
    let mut app = App::new(store)?;
    loop {
        terminal.draw(|f| render::draw(f, &app))?;
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
