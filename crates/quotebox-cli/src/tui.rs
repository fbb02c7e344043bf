//! Interactive terminal frontend
//!
//! The controller runs on its own thread and renders into a
//! `SnapshotDisplay`; this loop polls a clone of it, draws the snapshot, and
//! turns key presses into `AppCommand`s.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossbeam_channel::{bounded, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::*;

use quotebox::app::{AppCommand, AppController, DisplaySnapshot, SnapshotDisplay, SystemClipboard};
use quotebox::data::{KeyValueStore, Settings};
use quotebox::providers::QuotableSource;
use quotebox::session::QuoteSession;

const TICK: Duration = Duration::from_millis(100);

const HELP: &str = "n new  f favorite  c copy  l list  x hide  C clear  q quit";

/// Run the TUI until the user quits or the controller stops
pub fn run<S: KeyValueStore + 'static>(
    session: QuoteSession<S>,
    source: QuotableSource,
    settings: &Settings,
) -> Result<()> {
    let display = SnapshotDisplay::new();
    let frontend = display.clone();
    let (cmd_tx, cmd_rx) = bounded(64);

    if settings.show_favorites_on_start {
        let _ = cmd_tx.send(AppCommand::ShowFavorites);
    }

    let ctrl_tx = cmd_tx.clone();
    let controller = std::thread::Builder::new()
        .name("controller".into())
        .spawn(move || {
            let mut ctrl = AppController::new(
                cmd_rx,
                ctrl_tx,
                session,
                Arc::new(source),
                Box::new(display),
                Box::new(SystemClipboard),
            );
            ctrl.run()
        })?;

    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let ui_result = event_loop(&frontend, &cmd_tx, || controller.is_finished());
    let _ = io::stdout().execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    // UI closed, tell controller to shut down
    let _ = cmd_tx.send(AppCommand::Shutdown);
    let ctrl_result = controller
        .join()
        .map_err(|_| anyhow!("controller thread panicked"))?;

    ui_result?;
    ctrl_result?;
    Ok(())
}

/// What a key press does in the current UI state
#[derive(Debug)]
enum KeyAction {
    Quit,
    Send(AppCommand),
    Ignore,
}

/// Map a key to an action, checking for a pending notice at the time of the key
///
/// A pending notice swallows keys until Enter, Esc or Space dismisses it.
fn key_action(display: &SnapshotDisplay, code: KeyCode) -> KeyAction {
    if display.has_notice() {
        if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            display.dismiss_notice();
        }
        return KeyAction::Ignore;
    }

    match code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('n') => KeyAction::Send(AppCommand::Refresh),
        KeyCode::Char('f') => KeyAction::Send(AppCommand::ToggleFavorite),
        KeyCode::Char('c') => KeyAction::Send(AppCommand::CopyQuote),
        KeyCode::Char('l') => KeyAction::Send(AppCommand::ShowFavorites),
        KeyCode::Char('x') | KeyCode::Esc => KeyAction::Send(AppCommand::HideFavorites),
        KeyCode::Char('C') => KeyAction::Send(AppCommand::ClearFavorites),
        _ => KeyAction::Ignore,
    }
}

fn event_loop(
    display: &SnapshotDisplay,
    cmd_tx: &Sender<AppCommand>,
    controller_done: impl Fn() -> bool,
) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        if controller_done() {
            return Ok(());
        }

        let snap = display.snapshot();
        terminal.draw(|f| draw_ui(f, &snap))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_action(display, key.code) {
            KeyAction::Quit => return Ok(()),
            KeyAction::Ignore => {}
            KeyAction::Send(cmd) => {
                if cmd_tx.send(cmd).is_err() {
                    return Ok(());
                }
            }
        }
    }
}

fn draw_ui(f: &mut Frame, snap: &DisplaySnapshot) {
    let [body, help] = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).areas(f.area());

    let quote_area = if snap.panel_visible {
        let [quote_area, list_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);
        draw_favorites(f, list_area, &snap.favorites);
        quote_area
    } else {
        body
    };

    draw_quote(f, quote_area, snap);

    f.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        help,
    );

    if let Some(notice) = &snap.notice {
        draw_notice(f, notice);
    }
}

fn draw_quote(f: &mut Frame, area: Rect, snap: &DisplaySnapshot) {
    let heart = if snap.favorited {
        Span::styled(" ♥ ", Style::default().fg(Color::Red))
    } else {
        Span::raw(" ♡ ")
    };

    let mut lines = Vec::new();
    if snap.is_blank() {
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )));
    } else if snap.is_error {
        lines.push(Line::from(Span::styled(
            snap.quote_text.as_str(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(snap.quote_text.as_str()));
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                format!("— {}", snap.author),
                Style::default().add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Right),
        );
    }

    let block = Block::bordered()
        .title(" Quotebox ")
        .title(Line::from(heart).alignment(Alignment::Right));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_favorites(f: &mut Frame, area: Rect, favorites: &[String]) {
    let block = Block::bordered().title(format!(" Favorites ({}) ", favorites.len()));
    if favorites.is_empty() {
        f.render_widget(
            Paragraph::new("No favorites yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }
    let items: Vec<ListItem> = favorites.iter().map(|l| ListItem::new(l.as_str())).collect();
    f.render_widget(List::new(items).block(block), area);
}

fn draw_notice(f: &mut Frame, message: &str) {
    let area = f.area();
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let height = 5.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(vec![Line::from(message), Line::from(Span::styled(
            "[Enter]",
            Style::default().fg(Color::DarkGray),
        ))])
        .alignment(Alignment::Center)
        .block(Block::bordered()),
        popup,
    );
}
