use crate::app::{FormField, FormState};
use crate::snapshot::UiSnapshot;
use dashboard_core::{DraftError, Severity};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

/// Per-severity count cards across the top, high to low.
pub fn render_stat_cards(f: &mut Frame, area: Rect, snapshot: &UiSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let cards = [
        (Severity::High, snapshot.high),
        (Severity::Medium, snapshot.medium),
        (Severity::Low, snapshot.low),
    ];

    for (chunk, (severity, count)) in chunks.iter().zip(cards) {
        let color = severity_color(severity);
        let lines = vec![Line::from(vec![Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )])];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(severity.label())
            .border_style(Style::default().fg(color));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        f.render_widget(paragraph, *chunk);
    }
}

/// The incident list. The selected row carries a marker and the expanded
/// row shows its description inline.
pub fn render_incident_list(f: &mut Frame, area: Rect, snapshot: &UiSnapshot, selected: usize) {
    let mut lines: Vec<Line> = Vec::new();

    for (idx, row) in snapshot.rows.iter().enumerate() {
        let is_selected = idx == selected;
        let prefix = if is_selected { "▶ " } else { "  " };
        let title_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, title_style),
            Span::styled(format!("#{} ", row.id), Style::default().fg(Color::DarkGray)),
            Span::styled(row.title.clone(), title_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", row.severity),
                Style::default().fg(severity_color(row.severity)),
            ),
            Span::raw("  "),
            Span::styled(
                row.reported_at.format("%b %d, %Y").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        if row.expanded {
            for text_line in row.description.lines() {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(text_line.to_string(), Style::default().fg(Color::Gray)),
                ]));
            }
            lines.push(Line::from(""));
        }
    }

    if snapshot.rows.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  No incidents match the current filter",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(
        "Incident Reports ({} {})",
        snapshot.total,
        if snapshot.total == 1 { "incident" } else { "incidents" },
    );

    let block = Block::default().borders(Borders::ALL).title(title);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Sidebar: active filter and sort order plus the three most recent
/// visible incidents.
pub fn render_controls(f: &mut Frame, area: Rect, snapshot: &UiSnapshot) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Filter: "),
            Span::styled(snapshot.filter_label, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Sort:   "),
            Span::styled(snapshot.sort_label, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Recent Activity",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
    ];

    if snapshot.recent.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (severity, title) in &snapshot.recent {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(severity_color(*severity))),
            Span::raw(title.clone()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Incident Controls");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<13}", label), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ])
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
    ])
}

/// The "Report New Incident" form overlay with inline validation errors.
pub fn render_form(f: &mut Frame, area: Rect, form: &FormState) {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Report New Incident",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        field_line("Title*", &form.draft.title, form.focus == FormField::Title),
    ];

    if form.errors.contains(&DraftError::EmptyTitle) {
        lines.push(error_line(&DraftError::EmptyTitle.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(field_line(
        "Description*",
        &form.draft.description,
        form.focus == FormField::Description,
    ));

    if form.errors.contains(&DraftError::EmptyDescription) {
        lines.push(error_line(&DraftError::EmptyDescription.to_string()));
    }

    lines.push(Line::from(""));

    // Severity radio row, ←/→ to change when focused.
    let mut severity_spans = vec![
        Span::styled(
            if form.focus == FormField::Severity { "▶ " } else { "  " }.to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(format!("{:<13}", "Severity"), Style::default().fg(Color::Yellow)),
    ];
    for severity in Severity::ALL {
        let selected = form.draft.severity == severity;
        let dot = if selected { "◉" } else { "○" };
        let style = if selected {
            Style::default()
                .fg(severity_color(severity))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        severity_spans.push(Span::styled(format!("{} {}  ", dot, severity.label()), style));
    }
    lines.push(Line::from(severity_spans));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Tab] next field  [←→] severity  [Enter] submit  [Esc] cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("New Report")
        .border_style(Style::default().fg(Color::Magenta))
        .style(Style::default().bg(Color::Black));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

pub fn render_help_panel(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑↓        Select incident"),
        Line::from("  Enter/Spc Expand or collapse details"),
        Line::from("  ?/H       Toggle this help"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Actions:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  N     New incident report"),
        Line::from("  F     Cycle severity filter (All/Low/Medium/High)"),
        Line::from("  S     Toggle sort order (newest/oldest first)"),
        Line::from("  Q/Esc Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press ? or H to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

pub fn render_notification(f: &mut Frame, area: Rect, message: &str, is_success: bool) {
    let color = if is_success { Color::Green } else { Color::Red };

    let lines = vec![Line::from(vec![Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )])];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
