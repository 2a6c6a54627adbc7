//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `modals`: Picker and help overlays
//!
//! The form itself is drawn here: selector rows, the text (or voice) panel,
//! the submit button and the status bar.

pub mod colors;
pub mod modals;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Field, Mode, StatusMessage};
use crate::form::InputMode;

const LABEL_WIDTH: usize = 10;

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_selectors(frame, app, chunks[0]);
    render_input_panel(frame, app, chunks[1]);
    render_submit(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    match app.mode {
        Mode::Normal => {}
        Mode::Picker(kind) => modals::render_picker_overlay(frame, app, kind),
        Mode::Help => modals::render_help_overlay(frame, app),
    }
}

fn field_line<'a>(app: &App, field: Field, label: &'a str, value: &str) -> Line<'a> {
    let focused = app.focus == field && app.mode == Mode::Normal;
    let marker = if focused { "▶ " } else { "  " };
    let value_style = if focused {
        Style::default()
            .fg(colors::SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY)
    };
    let suffix = if field.picker().is_some() { " ▾" } else { "" };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(colors::SELECTED)),
        Span::styled(
            format!("{label:<LABEL_WIDTH$}"),
            Style::default().fg(colors::TEXT_DIM),
        ),
        Span::styled(format!("{value}{suffix}"), value_style),
    ])
}

fn language_display(app: &App, code: &str) -> String {
    app.form
        .catalog()
        .languages()
        .label(code)
        .map_or_else(|| code.to_string(), |label| format!("{label} ({code})"))
}

fn render_selectors(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.form.state();

    let mut to_line = field_line(
        app,
        Field::ToLanguage,
        "To",
        &language_display(app, state.output_language()),
    );
    if app.languages_match() {
        to_line.push_span(Span::styled(
            "  same language",
            Style::default().fg(colors::ACCENT_WARNING),
        ));
    }

    let mode = state.input_mode();
    let radio = |candidate: InputMode| {
        let dot = if mode == candidate { "(•)" } else { "( )" };
        format!("{dot} {}", candidate.label())
    };

    let lines = vec![
        field_line(
            app,
            Field::Provider,
            "Provider",
            state.selected_provider(),
        ),
        field_line(app, Field::Model, "Model", state.selected_model()),
        field_line(
            app,
            Field::FromLanguage,
            "From",
            &language_display(app, state.input_language()),
        ),
        field_line(app, Field::Swap, "", "[⇄ Swap]"),
        to_line,
        field_line(
            app,
            Field::InputMode,
            "Input",
            &format!("{}  {}", radio(InputMode::Text), radio(InputMode::Voice)),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Translate ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    frame.render_widget(paragraph, area);
}

fn render_input_panel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == Field::Text && app.mode == Mode::Normal;
    let border = if focused {
        colors::BORDER_FOCUSED
    } else {
        colors::BORDER
    };

    let (title, lines) = match app.form.state().input_mode() {
        InputMode::Voice => (
            " Voice ",
            vec![Line::from(Span::styled(
                "Voice input selected. Translate sends a voice request.",
                Style::default().fg(colors::TEXT_DIM),
            ))],
        ),
        InputMode::Text => (" Text ", text_lines(app, focused)),
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if app.form.state().input_mode() == InputMode::Text && app.form.can_clear_input_text() {
        block = block.title_bottom(
            Line::from(Span::styled(
                " Ctrl+u clear ",
                Style::default().fg(colors::TEXT_MUTED),
            ))
            .alignment(Alignment::Right),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(colors::INPUT_BG))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn text_lines<'a>(app: &'a App, focused: bool) -> Vec<Line<'a>> {
    if app.input.buffer.is_empty() && !focused {
        return vec![Line::from(Span::styled(
            "Type text to translate",
            Style::default().fg(colors::TEXT_MUTED),
        ))];
    }

    let text_style = Style::default().fg(colors::TEXT_PRIMARY);
    if !focused {
        return vec![Line::from(Span::styled(app.input.buffer.as_str(), text_style))];
    }

    let (before, after) = app.input.split_at_cursor();
    let mut rest = after.chars();
    let at_cursor = rest.next().map_or_else(|| " ".to_string(), String::from);

    vec![Line::from(vec![
        Span::styled(before, text_style),
        Span::styled(at_cursor, text_style.add_modifier(Modifier::REVERSED)),
        Span::styled(rest.as_str(), text_style),
    ])]
}

fn render_submit(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == Field::Submit && app.mode == Mode::Normal;
    let enabled = app.form.can_submit();

    let mut button_style = if enabled {
        Style::default()
            .fg(colors::ACCENT_POSITIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_MUTED)
    };
    if focused && enabled {
        button_style = button_style.add_modifier(Modifier::REVERSED);
    }

    let mut spans = vec![Span::styled("[ Translate ]", button_style)];
    if !enabled {
        spans.push(Span::styled(
            "  nothing to translate",
            Style::default().fg(colors::TEXT_MUTED),
        ));
    }

    let border = if focused {
        colors::BORDER_FOCUSED
    } else {
        colors::BORDER
    };
    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let span = match &app.status {
        Some(StatusMessage::Error(msg)) => Span::styled(
            format!(" Error: {msg} "),
            Style::default()
                .fg(colors::ACCENT_NEGATIVE)
                .add_modifier(Modifier::BOLD),
        ),
        Some(StatusMessage::Info(msg)) => Span::styled(
            format!(" {msg} "),
            Style::default().fg(colors::ACCENT_POSITIVE),
        ),
        None => Span::styled(
            format!(" {} ", app.config.keys.status_hints()),
            Style::default().fg(colors::TEXT_DIM),
        ),
    };

    frame.render_widget(Paragraph::new(Line::from(span)), area);
}

#[cfg(test)]
mod tests;
