use crate::app::{DashboardApp, FormField};
use crate::keys::key_to_action;
use crate::snapshot::UiSnapshot;
use crate::widgets;
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::io;
use std::time::Duration;
use tracing::debug;

/// Single synchronous event loop: rebuild the snapshot, draw, then poll for
/// one key event. Every operation runs to completion before the next event
/// is read.
pub fn run_tui(mut app: DashboardApp) -> anyhow::Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        return Err(anyhow::anyhow!("TUI requires an interactive terminal"));
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend).context("Failed to create terminal")?;

    debug!("dashboard started");
    let mut should_quit = false;

    loop {
        let snapshot = UiSnapshot::from_store(&app.store);
        app.clamp_selection();

        terminal.draw(|f| render_ui(f, &app, &snapshot))?;

        app.expire_notification();

        if event::poll(Duration::from_millis(150))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.form.is_some() {
                        handle_form_key(&mut app, key);
                    } else if let Some(action) = key_to_action(key.code) {
                        if app.handle_action(action) {
                            should_quit = true;
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    debug!("dashboard stopped");
    Ok(())
}

/// Form mode owns the keyboard: text entry, Tab focus cycling, the severity
/// radio on ←/→, Enter to submit, Esc to cancel.
fn handle_form_key(app: &mut DashboardApp, key: KeyEvent) {
    let Some(form) = app.form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab => form.focus = form.focus.next(),
        KeyCode::BackTab => form.focus = form.focus.prev(),
        KeyCode::Left => {
            if form.focus == FormField::Severity {
                form.step_severity(-1);
            }
        }
        KeyCode::Right => {
            if form.focus == FormField::Severity {
                form.step_severity(1);
            }
        }
        KeyCode::Backspace => {
            if let Some(text) = form.focused_text() {
                text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(text) = form.focused_text() {
                text.push(c);
            }
        }
        _ => {}
    }
}

fn render_ui(f: &mut Frame, app: &DashboardApp, snapshot: &UiSnapshot) {
    let size = f.size();

    // Layout: Header | Stat cards | Main | Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(f, chunks[0], snapshot);
    widgets::render_stat_cards(f, chunks[1], snapshot);

    // Main: controls sidebar | incident list
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[2]);

    widgets::render_controls(f, main_chunks[0], snapshot);
    widgets::render_incident_list(f, main_chunks[1], snapshot, app.selected);

    render_footer(f, chunks[3]);

    if let Some(form) = &app.form {
        let form_area = centered_rect(70, 60, size);
        widgets::render_form(f, form_area, form);
    }

    if app.show_help {
        let help_area = centered_rect(60, 70, size);
        widgets::render_help_panel(f, help_area);
    }

    if let Some((message, shown_at)) = &app.notification {
        if shown_at.elapsed().as_secs() < 3 {
            let notification_area = centered_rect(50, 5, size);
            let is_success = message.starts_with('✓');
            widgets::render_notification(f, notification_area, message, is_success);
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_header(f: &mut Frame, area: Rect, snapshot: &UiSnapshot) {
    let line = Line::from(vec![
        Span::styled(
            "AI Safety Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::raw(format!("Incidents: {}", snapshot.total)),
        Span::raw(" │ Filter: "),
        Span::styled(snapshot.filter_label, Style::default().fg(Color::Cyan)),
        Span::raw(" │ Sort: "),
        Span::styled(snapshot.sort_label, Style::default().fg(Color::Cyan)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));

    let paragraph = Paragraph::new(vec![line])
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![Span::raw(
        "[N]ew report [F]ilter [S]ort [↑↓]Select [Enter]Details [?]Help [Q]uit",
    )]);

    let block = Block::default().borders(Borders::ALL);
    let paragraph = Paragraph::new(vec![line])
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}
