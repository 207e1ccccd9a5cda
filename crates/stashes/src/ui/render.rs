//! Drawing. Every frame renders the full screen from `App` state; overlays
//! (prompts, confirmations) are painted last over a cleared box.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use stashesapp::store::StashStore;

use super::app::{App, EditorField, EditorState, Mode, Screen};

pub fn draw<S: StashStore>(f: &mut Frame<'_>, app: &App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    draw_header(f, rows[0], app);
    match &app.screen {
        Screen::Home => draw_list(f, rows[1], app, "Stashes", "No stashes yet (press n)"),
        Screen::Stash { name } => {
            let title = format!("Notes in {}", name);
            draw_list(f, rows[1], app, &title, "No notes yet (press n)");
        }
        Screen::Editor(editor) => draw_editor(f, rows[1], editor),
    }
    draw_footer(f, rows[2], app);

    match &app.mode {
        Mode::Normal => {}
        Mode::NewStash(field) => draw_prompt(f, "New Stash", field.with_caret()),
        Mode::NewNote(field) => draw_prompt(f, "New Note", field.with_caret()),
        Mode::ConfirmDeleteStash(name) => draw_confirm(
            f,
            format!(
                "Delete stash '{}'? Every note inside will be removed.",
                name
            ),
        ),
        Mode::ConfirmDeleteNote(stem) => {
            draw_confirm(f, format!("Delete note '{}'?", stem));
        }
    }
}

fn draw_header<S: StashStore>(f: &mut Frame<'_>, area: Rect, app: &App<S>) {
    let crumb = match &app.screen {
        Screen::Home => "My Stashes".to_string(),
        Screen::Stash { name } => format!("Stash: {}", name),
        Screen::Editor(editor) => format!("{} → {}", editor.stash, editor.stem),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " stashes ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(crumb, Style::default().add_modifier(Modifier::BOLD)),
    ]));
    f.render_widget(header, area);
}

fn draw_list<S: StashStore>(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App<S>,
    title: &str,
    empty_hint: &str,
) {
    let items: Vec<ListItem> = if app.items.is_empty() {
        vec![ListItem::new(empty_hint).style(Style::default().fg(Color::DarkGray))]
    } else {
        app.items
            .iter()
            .map(|name| ListItem::new(name.clone()))
            .collect()
    };

    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if !app.items.is_empty() {
        state.select(Some(app.selected.min(app.items.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_editor(f: &mut Frame<'_>, area: Rect, editor: &EditorState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let title_text = if editor.focus == EditorField::Title {
        editor.title.with_caret()
    } else {
        editor.title.value.clone()
    };
    let title = Paragraph::new(title_text).block(field_block("Title", editor.focus == EditorField::Title));
    f.render_widget(title, rows[0]);

    let body_text = if editor.focus == EditorField::Body {
        editor.body.with_caret()
    } else {
        editor.body.value.clone()
    };
    let viewport = rows[1].height.saturating_sub(2) as usize;
    let cursor_line = editor.body.cursor_line();
    let scroll = if viewport > 0 && cursor_line + 1 > viewport {
        (cursor_line + 1 - viewport) as u16
    } else {
        0
    };
    let body = Paragraph::new(body_text)
        .block(field_block("Note", editor.focus == EditorField::Body))
        .scroll((scroll, 0));
    f.render_widget(body, rows[1]);
}

fn field_block(title: &str, active: bool) -> Block<'static> {
    let color = if active { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn draw_footer<S: StashStore>(f: &mut Frame<'_>, area: Rect, app: &App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let help = Paragraph::new(help_line(app)).alignment(Alignment::Left);
    f.render_widget(help, rows[0]);

    let status = Paragraph::new(Span::styled(
        app.status.clone(),
        Style::default().fg(Color::Gray),
    ))
    .wrap(Wrap { trim: true });
    f.render_widget(status, rows[1]);
}

fn help_line<S: StashStore>(app: &App<S>) -> Line<'static> {
    let keys: &[(&str, &str)] = match app.mode {
        Mode::NewStash(_) | Mode::NewNote(_) => &[("Enter", "create"), ("Esc", "cancel")],
        Mode::ConfirmDeleteStash(_) | Mode::ConfirmDeleteNote(_) => {
            &[("y", "delete"), ("n", "keep")]
        }
        Mode::Normal => match app.screen {
            Screen::Home => &[
                ("↑↓", "move"),
                ("Enter", "open"),
                ("n", "new stash"),
                ("d", "delete"),
                ("q", "quit"),
            ],
            Screen::Stash { .. } => &[
                ("↑↓", "move"),
                ("Enter", "open"),
                ("n", "new note"),
                ("d", "delete"),
                ("Esc", "back"),
                ("q", "quit"),
            ],
            Screen::Editor(_) => &[
                ("Tab", "switch field"),
                ("Ctrl+S", "save and exit"),
                ("Esc", "back without saving"),
            ],
        },
    };

    let mut spans = Vec::new();
    for (key, action) in keys {
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(" {}  ", action)));
    }
    Line::from(spans)
}

fn draw_prompt(f: &mut Frame<'_>, title: &str, text: String) {
    let area = centered_rect(50, 3, f.area());
    f.render_widget(Clear, area);
    let prompt = Paragraph::new(text).block(
        Block::default()
            .title(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(prompt, area);
}

fn draw_confirm(f: &mut Frame<'_>, message: String) {
    let area = centered_rect(60, 4, f.area());
    f.render_widget(Clear, area);
    let confirm = Paragraph::new(message).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(
                "Confirm",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightRed)),
    );
    f.render_widget(confirm, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
