//! Modal/overlay rendering (pickers, help)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::colors;
use crate::app::{App, PickerKind};
use crate::config::{Action, ActionGroup};

/// Helper function to create a centered rect with fixed height
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the picker overlay for `kind`
pub fn render_picker_overlay(frame: &mut Frame<'_>, app: &App, kind: PickerKind) {
    let filtered = app.picker.filtered();
    // current + filter + list + hint, with blank separators and borders
    let list_rows = u16::try_from(filtered.len().max(1)).unwrap_or(u16::MAX);
    let height = list_rows.saturating_add(8);
    let area = centered_rect_absolute(55, height, frame.area());

    let current_label = app
        .picker
        .options
        .iter()
        .find(|o| o.value == app.picker.current)
        .map_or(app.picker.current.as_str(), |o| o.label.as_str());

    let mut lines: Vec<Line<'_>> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Current: ", Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            current_label,
            Style::default()
                .fg(colors::ACCENT_POSITIVE)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            format!("{}_", &app.picker.filter),
            Style::default().fg(colors::TEXT_PRIMARY),
        ),
    ]));
    lines.push(Line::from(""));

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "No matches",
            Style::default().fg(colors::TEXT_MUTED),
        )));
    } else {
        for (idx, option) in filtered.iter().enumerate() {
            let is_cursor = idx == app.picker.selected;
            let is_current = option.value == app.picker.current;

            let row_style = if is_cursor {
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .bg(colors::SURFACE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT_PRIMARY)
            };

            let cursor = if is_cursor { "▶ " } else { "  " };
            let check = if is_current { "✓ " } else { "  " };

            lines.push(Line::from(Span::styled(
                format!("{cursor}{check}{}", option.label),
                row_style,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ select • Enter confirm • Esc cancel • Type to filter",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(kind.title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Render the help overlay from the active key bindings
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let mut lines: Vec<Line<'_>> = Vec::new();
    let mut group: Option<ActionGroup> = None;

    for &action in Action::ALL_FOR_HELP {
        if group != Some(action.group()) {
            if group.is_some() {
                lines.push(Line::from(""));
            }
            group = Some(action.group());
            lines.push(Line::from(Span::styled(
                action.group().title(),
                Style::default()
                    .fg(colors::SELECTED)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(Span::styled(
            app.config.keys.help_line(action),
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let area = centered_rect_absolute(60, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
